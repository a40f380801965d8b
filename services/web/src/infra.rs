use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use async_trait::async_trait;
use credit_risk::risk::{
    ApplicantSnapshot, CreditRiskResult, EngineError, Explanation, ExpertCredit, ExpertFinancial,
    ExpertProfile, ExpertSystemResult, MlProbabilities, RiskEvaluator, SlikHistory, SubmissionGate,
};
use credit_risk::seo::SiteConfig;
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) site: Arc<SiteConfig>,
    pub(crate) engine: Arc<dyn RiskEvaluator>,
    pub(crate) gate: Arc<SubmissionGate>,
}

/// Offline stand-in for the evaluation engine. Scores the snapshot with a
/// coarse rule ladder so the demo subcommand produces a full verdict without
/// a running backend.
#[derive(Debug, Default, Clone)]
pub(crate) struct CannedEvaluator;

#[async_trait]
impl RiskEvaluator for CannedEvaluator {
    async fn evaluate(
        &self,
        snapshot: &ApplicantSnapshot,
        _access_token: Option<&str>,
    ) -> Result<CreditRiskResult, EngineError> {
        Ok(canned_verdict(snapshot))
    }
}

pub(crate) fn canned_verdict(snapshot: &ApplicantSnapshot) -> CreditRiskResult {
    let mut explanations = Vec::new();

    let (mut score, slik_rule) = match snapshot.slik_loan_history {
        SlikHistory::Kol1 => (0.10, 1),
        SlikHistory::Kol2 => (0.25, 2),
        SlikHistory::Kol3 => (0.45, 4),
        SlikHistory::Kol4 => (0.65, 6),
        SlikHistory::Kol5 => (0.80, 7),
    };
    explanations.push(Explanation {
        rule: format!("R{slik_rule}"),
        reason: format!(
            "SLIK history is {}.",
            snapshot.slik_loan_history.label()
        ),
    });

    if snapshot.late_payments_last_years > 0 {
        score += f64::from(snapshot.late_payments_last_years.min(3)) * 0.05;
        explanations.push(Explanation {
            rule: "R3".to_string(),
            reason: format!(
                "{} late payment(s) recorded across existing loans.",
                snapshot.late_payments_last_years
            ),
        });
    }

    let income = snapshot.monthly_income_idr as f64;
    if snapshot.total_outstanding_debt_idr as f64 > income * 24.0 {
        score += 0.10;
        explanations.push(Explanation {
            rule: "R5".to_string(),
            reason: "Outstanding debt exceeds twenty-four months of income.".to_string(),
        });
    }
    if snapshot.loan_application_amount_idr as f64 > income * 36.0 {
        score += 0.10;
        explanations.push(Explanation {
            rule: "R8".to_string(),
            reason: "Requested amount exceeds thirty-six months of income.".to_string(),
        });
    }
    if snapshot.relationship_tenure_months >= 24 {
        score -= 0.05;
        explanations.push(Explanation {
            rule: "R9".to_string(),
            reason: "Established client relationship of two years or more.".to_string(),
        });
    }

    if snapshot.is_fraud {
        score = score.max(0.95);
        explanations.push(Explanation {
            rule: "R2".to_string(),
            reason: "Application is flagged as potential fraud.".to_string(),
        });
    }

    let score = score.clamp(0.02, 0.98);
    let final_prediction = if score < 0.33 {
        "LOW"
    } else if score < 0.66 {
        "MEDIUM"
    } else {
        "HIGH"
    };

    let profile_status = if snapshot.is_fraud {
        "flagged"
    } else if snapshot.relationship_tenure_months >= 24 {
        "established"
    } else {
        "standard"
    };
    let financial_level = if snapshot.total_outstanding_debt_idr as f64 > income * 24.0 {
        "strained"
    } else if snapshot.total_outstanding_debt_idr as f64 > income * 6.0 {
        "moderate"
    } else {
        "low"
    };
    let credit_risk = match snapshot.slik_loan_history {
        SlikHistory::Kol1 | SlikHistory::Kol2 => "low",
        SlikHistory::Kol3 => "medium",
        SlikHistory::Kol4 | SlikHistory::Kol5 => "high",
    };

    CreditRiskResult {
        final_prediction: final_prediction.to_string(),
        confidence: score.max(1.0 - score),
        ml_raw: MlProbabilities {
            pred_class: u8::from(score >= 0.5),
            proba_low: 1.0 - score,
            proba_high: score,
        },
        expert_system_result: ExpertSystemResult {
            profile: ExpertProfile {
                status: profile_status.to_string(),
            },
            financial: ExpertFinancial {
                level: financial_level.to_string(),
            },
            credit: ExpertCredit {
                risk: credit_risk.to_string(),
                rule_number: slik_rule,
            },
        },
        explanations,
    }
}
