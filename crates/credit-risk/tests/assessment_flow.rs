use std::sync::Mutex;

use async_trait::async_trait;
use credit_risk::form::FormState;
use credit_risk::pages::credit_risk::{
    form_from_snapshot, render_page, snapshot_from_form, validate_applicant_form,
};
use credit_risk::risk::{
    ApplicantSnapshot, AssessmentState, CreditRiskResult, EngineError, Explanation,
    ExpertCredit, ExpertFinancial, ExpertProfile, ExpertSystemResult, MlProbabilities,
    PresetKind, RiskEvaluator, ENGINE_UNREACHABLE_MESSAGE, LOW_RISK,
};
use credit_risk::seo::SiteConfig;

struct RecordingEvaluator {
    verdict: CreditRiskResult,
    payloads: Mutex<Vec<serde_json::Value>>,
}

impl RecordingEvaluator {
    fn returning(verdict: CreditRiskResult) -> Self {
        Self {
            verdict,
            payloads: Mutex::new(Vec::new()),
        }
    }

    fn recorded(&self) -> Vec<serde_json::Value> {
        self.payloads.lock().expect("payload lock").clone()
    }
}

#[async_trait]
impl RiskEvaluator for RecordingEvaluator {
    async fn evaluate(
        &self,
        snapshot: &ApplicantSnapshot,
        _access_token: Option<&str>,
    ) -> Result<CreditRiskResult, EngineError> {
        let payload = serde_json::to_value(snapshot).expect("snapshot serializes");
        self.payloads.lock().expect("payload lock").push(payload);
        Ok(self.verdict.clone())
    }
}

struct FailingEvaluator;

#[async_trait]
impl RiskEvaluator for FailingEvaluator {
    async fn evaluate(
        &self,
        _snapshot: &ApplicantSnapshot,
        _access_token: Option<&str>,
    ) -> Result<CreditRiskResult, EngineError> {
        Err(EngineError::Status { status: 502 })
    }
}

fn verdict(prediction: &str, confidence: f64) -> CreditRiskResult {
    CreditRiskResult {
        final_prediction: prediction.to_string(),
        confidence,
        ml_raw: MlProbabilities {
            pred_class: 1,
            proba_low: 0.266,
            proba_high: 0.734,
        },
        expert_system_result: ExpertSystemResult {
            profile: ExpertProfile {
                status: "standard".to_string(),
            },
            financial: ExpertFinancial {
                level: "moderate".to_string(),
            },
            credit: ExpertCredit {
                risk: "high".to_string(),
                rule_number: 7,
            },
        },
        explanations: vec![
            Explanation {
                rule: "R7".to_string(),
                reason: "SLIK history shows severe delinquency.".to_string(),
            },
            Explanation {
                rule: "R12".to_string(),
                reason: "Requested amount exceeds income multiple.".to_string(),
            },
        ],
    }
}

fn site() -> SiteConfig {
    SiteConfig {
        title: "Credit Risk Console".to_string(),
        description: "Console description.".to_string(),
        url: "http://localhost:3000".to_string(),
    }
}

#[tokio::test]
async fn preset_flows_to_the_engine_as_the_documented_payload() {
    let engine = RecordingEvaluator::returning(verdict("LOW", 0.91));
    let mut form = form_from_snapshot(&PresetKind::Low.snapshot());

    assert!(validate_applicant_form(&mut form));
    let snapshot = snapshot_from_form(&form).expect("validated form coerces");
    assert_eq!(snapshot, LOW_RISK);

    engine
        .evaluate(&snapshot, None)
        .await
        .expect("canned verdict");

    let recorded = engine.recorded();
    assert_eq!(recorded.len(), 1);
    assert_eq!(
        recorded[0],
        serde_json::json!({
            "age": 32,
            "employment_status": "employed",
            "employment_type": "permanent",
            "relationship_tenure_months": 48,
            "is_fraud": false,
            "monthly_income_idr": 15_000_000,
            "avg_monthly_balance_idr": 40_000_000,
            "avg_deposit_amount_idr": 5_000_000,
            "debit_card_spending_idr": 6_000_000,
            "total_outstanding_debt_idr": 20_000_000,
            "loan_application_amount_idr": 60_000_000,
            "late_payments_last_years": 0,
            "slik_loan_history": "kol1",
            "active_loans_count": 1,
        })
    );
}

#[tokio::test]
async fn verdict_renders_badge_confidence_and_rule_trace() {
    let engine = RecordingEvaluator::returning(verdict("HIGH", 0.734));
    let mut form = form_from_snapshot(&PresetKind::High.snapshot());
    assert!(validate_applicant_form(&mut form));
    let snapshot = snapshot_from_form(&form).expect("validated form coerces");

    let result = engine.evaluate(&snapshot, None).await.expect("verdict");
    let markup = render_page(&site(), &form, &AssessmentState::Ready(result));

    assert!(markup.contains("<h2>High risk</h2>"));
    assert!(markup.contains("class=\"badge badge-high\""));
    assert!(markup.contains("<span class=\"confidence-value\">73%</span>"));
    assert!(markup.contains("style=\"width: 73%\""));
    assert!(markup.contains("Machine learning view"));
    assert!(markup.contains("Probability high</p><p class=\"value\">73.4%"));
    assert!(markup.contains("Expert system summary"));
    assert!(markup.contains("high (rule 7)"));
    assert!(markup.contains("Rule trace"));
    let first = markup.find("SLIK history shows severe delinquency.").expect("first reason");
    let second = markup
        .find("Requested amount exceeds income multiple.")
        .expect("second reason");
    assert!(first < second);
}

#[tokio::test]
async fn unrecognized_prediction_renders_as_medium_risk() {
    let engine = RecordingEvaluator::returning(verdict("unknown_value", 0.5));
    let snapshot = PresetKind::Medium.snapshot();

    let result = engine.evaluate(&snapshot, None).await.expect("verdict");
    let markup = render_page(
        &site(),
        &form_from_snapshot(&snapshot),
        &AssessmentState::Ready(result),
    );

    assert!(markup.contains("<h2>Medium risk</h2>"));
    assert!(markup.contains("class=\"badge badge-medium\""));
}

#[tokio::test]
async fn engine_failure_renders_the_error_panel_without_a_verdict() {
    let mut form = form_from_snapshot(&PresetKind::Low.snapshot());
    assert!(validate_applicant_form(&mut form));
    let snapshot = snapshot_from_form(&form).expect("validated form coerces");

    let err = FailingEvaluator
        .evaluate(&snapshot, None)
        .await
        .expect_err("engine is down");
    let markup = render_page(
        &site(),
        &form,
        &AssessmentState::Failed(err.user_message().to_string()),
    );

    assert!(markup.contains("Unable to get a result"));
    assert!(markup.contains(ENGINE_UNREACHABLE_MESSAGE));
    assert!(!markup.contains("Final prediction"));
    assert!(!markup.contains("class=\"badge"));
}

#[tokio::test]
async fn resubmission_replaces_the_previous_verdict() {
    let engine = RecordingEvaluator::returning(verdict("LOW", 0.9));

    let first = engine
        .evaluate(&PresetKind::Low.snapshot(), None)
        .await
        .expect("first verdict");
    let ready = AssessmentState::resolve(false, None, Some(first));
    assert!(ready.is_ready());

    // A new submission goes back to loading, dropping both the old verdict
    // and any old error.
    let reloading = AssessmentState::resolve(true, None, None);
    assert!(reloading.is_loading());
    let markup = render_page(&site(), &form_from_snapshot(&LOW_RISK), &reloading);
    assert!(markup.contains("Engine is processing this application"));
    assert!(!markup.contains("Final prediction"));

    let failed = AssessmentState::resolve(false, Some("boom".to_string()), None);
    assert!(failed.is_failed());
}

#[test]
fn invalid_form_never_reaches_coercion() {
    let mut form = FormState::empty();
    assert!(!validate_applicant_form(&mut form));
    assert!(form.has_errors());

    let markup = render_page(&site(), &form, &AssessmentState::Empty);
    assert!(markup.contains("Age is required"));
    assert!(markup.contains("class=\"input invalid\""));
    assert!(markup.contains("No assessment yet"));
}
