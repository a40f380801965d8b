use crate::html;
use crate::risk::domain::CreditRiskResult;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// What the classification panel shows. Exactly one state is ever active.
#[derive(Debug, Clone, PartialEq)]
pub enum AssessmentState {
    Loading,
    Failed(String),
    Ready(CreditRiskResult),
    Empty,
}

impl AssessmentState {
    /// Collapses the three view-state slots into one panel state with the
    /// fixed precedence loading > error > result > placeholder.
    pub fn resolve(
        loading: bool,
        error: Option<String>,
        result: Option<CreditRiskResult>,
    ) -> Self {
        if loading {
            return Self::Loading;
        }
        if let Some(message) = error {
            return Self::Failed(message);
        }
        if let Some(result) = result {
            return Self::Ready(result);
        }
        Self::Empty
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

/// In-flight submission token: at most one assessment runs at a time per
/// service instance. Acquiring succeeds only while no guard is alive.
#[derive(Debug, Default)]
pub struct SubmissionGate {
    in_flight: AtomicBool,
}

impl SubmissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the gate. Returns `None` while another submission holds it.
    pub fn try_begin(self: &Arc<Self>) -> Option<SubmissionGuard> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SubmissionGuard {
                gate: Arc::clone(self),
            })
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

/// Releases the gate when dropped, on success and failure alike.
#[derive(Debug)]
pub struct SubmissionGuard {
    gate: Arc<SubmissionGate>,
}

impl Drop for SubmissionGuard {
    fn drop(&mut self) {
        self.gate.in_flight.store(false, Ordering::Release);
    }
}

/// Renders the classification panel for the given state.
pub fn render_assessment(state: &AssessmentState) -> String {
    match state {
        AssessmentState::Loading => render_loading(),
        AssessmentState::Failed(message) => render_failed(message),
        AssessmentState::Ready(result) => render_result(result),
        AssessmentState::Empty => render_empty(),
    }
}

fn render_loading() -> String {
    String::from(
        "<div class=\"panel-loading\">\n\
         <div class=\"spinner\"></div>\n\
         <p class=\"muted\">Engine is processing this application&#8230;</p>\n\
         </div>\n",
    )
}

fn render_failed(message: &str) -> String {
    format!(
        "<div class=\"panel-error\">\n\
         <p class=\"panel-error-title\">Unable to get a result</p>\n\
         <p class=\"muted\">{}</p>\n\
         </div>\n",
        html::escape(message)
    )
}

fn render_empty() -> String {
    String::from(
        "<div class=\"panel-empty\">\n\
         <p class=\"panel-empty-title\">No assessment yet</p>\n\
         <p class=\"muted\">Fill in the fields above and run one assessment to see the prediction, confidence, and rule trace.</p>\n\
         </div>\n",
    )
}

fn render_result(result: &CreditRiskResult) -> String {
    let level = result.risk_level();
    let percent = result.confidence_percent();
    let expert = &result.expert_system_result;

    let mut out = String::from("<div class=\"result\">\n");

    out.push_str("<div class=\"result-header\">\n<div>\n");
    out.push_str("<p class=\"caption\">Final prediction</p>\n");
    out.push_str(&format!("<h2>{}</h2>\n", level.label()));
    out.push_str(
        "<p class=\"muted\">Combined decision from the machine learning model and the expert rules.</p>\n",
    );
    out.push_str("</div>\n");
    out.push_str(&format!(
        "<span class=\"{}\">{}</span>\n",
        level.badge_class(),
        level.label()
    ));
    out.push_str("</div>\n");

    out.push_str("<div class=\"confidence\">\n");
    out.push_str(&format!(
        "<div class=\"confidence-row\"><span class=\"muted\">Confidence</span><span class=\"confidence-value\">{percent}%</span></div>\n"
    ));
    out.push_str(&format!(
        "<div class=\"bar\"><div class=\"bar-fill\" style=\"width: {percent}%\"></div></div>\n"
    ));
    out.push_str(
        "<p class=\"muted\">This value shows how strongly the engine leans toward this risk class for the current application.</p>\n",
    );
    out.push_str("</div>\n");

    out.push_str("<div class=\"panel\">\n");
    out.push_str("<p class=\"panel-title\">Machine learning view</p>\n");
    out.push_str("<div class=\"grid-2\">\n");
    out.push_str(&format!(
        "<div><p class=\"caption\">Probability low</p><p class=\"value\">{:.1}%</p></div>\n",
        result.ml_raw.proba_low * 100.0
    ));
    out.push_str(&format!(
        "<div><p class=\"caption\">Probability high</p><p class=\"value\">{:.1}%</p></div>\n",
        result.ml_raw.proba_high * 100.0
    ));
    out.push_str("</div>\n");
    out.push_str(
        "<p class=\"muted\">These probabilities come directly from the classifier, before the rule engine refines the final decision.</p>\n",
    );
    out.push_str("</div>\n");

    out.push_str("<div class=\"panel\">\n");
    out.push_str("<p class=\"panel-title\">Expert system summary</p>\n");
    out.push_str("<div class=\"grid-3\">\n");
    out.push_str(&format!(
        "<div><p class=\"caption\">Profile status</p><p class=\"value\">{}</p></div>\n",
        html::escape(&expert.profile.status)
    ));
    out.push_str(&format!(
        "<div><p class=\"caption\">Financial stress</p><p class=\"value\">{}</p></div>\n",
        html::escape(&expert.financial.level)
    ));
    out.push_str(&format!(
        "<div><p class=\"caption\">Credit risk from rules</p><p class=\"value\">{} (rule {})</p></div>\n",
        html::escape(&expert.credit.risk),
        expert.credit.rule_number
    ));
    out.push_str("</div>\n</div>\n");

    if !result.explanations.is_empty() {
        out.push_str("<div class=\"panel\">\n");
        out.push_str("<p class=\"panel-title\">Rule trace</p>\n");
        out.push_str("<div class=\"trace\">\n");
        for explanation in &result.explanations {
            out.push_str(&format!(
                "<div class=\"trace-item\"><p class=\"trace-rule\">{}</p><p class=\"muted\">{}</p></div>\n",
                html::escape(&explanation.rule),
                html::escape(&explanation.reason)
            ));
        }
        out.push_str("</div>\n</div>\n");
    }

    out.push_str("</div>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::domain::{
        CreditRiskResult, Explanation, ExpertCredit, ExpertFinancial, ExpertProfile,
        ExpertSystemResult, MlProbabilities,
    };

    fn sample_result() -> CreditRiskResult {
        CreditRiskResult {
            final_prediction: "HIGH".to_string(),
            confidence: 0.734,
            ml_raw: MlProbabilities {
                pred_class: 1,
                proba_low: 0.266,
                proba_high: 0.734,
            },
            expert_system_result: ExpertSystemResult {
                profile: ExpertProfile {
                    status: "watchlist".to_string(),
                },
                financial: ExpertFinancial {
                    level: "high".to_string(),
                },
                credit: ExpertCredit {
                    risk: "high".to_string(),
                    rule_number: 7,
                },
            },
            explanations: vec![
                Explanation {
                    rule: "R7".to_string(),
                    reason: "Severe SLIK delinquency".to_string(),
                },
                Explanation {
                    rule: "R2".to_string(),
                    reason: "Debt above income multiple".to_string(),
                },
            ],
        }
    }

    #[test]
    fn precedence_is_loading_then_error_then_result() {
        let result = sample_result();
        assert!(AssessmentState::resolve(true, Some("boom".into()), Some(result.clone()))
            .is_loading());
        assert!(AssessmentState::resolve(false, Some("boom".into()), Some(result.clone()))
            .is_failed());
        assert!(AssessmentState::resolve(false, None, Some(result)).is_ready());
        assert_eq!(
            AssessmentState::resolve(false, None, None),
            AssessmentState::Empty
        );
    }

    #[test]
    fn loading_panel_names_the_engine() {
        let markup = render_assessment(&AssessmentState::Loading);
        assert!(markup.contains("Engine is processing this application"));
    }

    #[test]
    fn error_panel_shows_title_and_stored_message() {
        let markup = render_assessment(&AssessmentState::Failed(
            "The engine could not be reached. Please try again.".to_string(),
        ));
        assert!(markup.contains("Unable to get a result"));
        assert!(markup.contains("The engine could not be reached. Please try again."));
        assert!(!markup.contains("Final prediction"));
    }

    #[test]
    fn empty_panel_invites_a_first_run() {
        let markup = render_assessment(&AssessmentState::Empty);
        assert!(markup.contains("No assessment yet"));
    }

    #[test]
    fn result_panel_renders_badge_confidence_and_summary() {
        let markup = render_assessment(&AssessmentState::Ready(sample_result()));
        assert!(markup.contains("<h2>High risk</h2>"));
        assert!(markup.contains("badge badge-high"));
        assert!(markup.contains(">73%<"));
        assert!(markup.contains("style=\"width: 73%\""));
        assert!(markup.contains("Probability low"));
        assert!(markup.contains(">26.6%<"));
        assert!(markup.contains(">73.4%<"));
        assert!(markup.contains("Profile status"));
        assert!(markup.contains("high (rule 7)"));
    }

    #[test]
    fn rule_trace_preserves_explanation_order() {
        let markup = render_assessment(&AssessmentState::Ready(sample_result()));
        let first = markup.find("R7").expect("first rule rendered");
        let second = markup.find("R2").expect("second rule rendered");
        assert!(first < second);
        assert!(markup.contains("Severe SLIK delinquency"));
    }

    #[test]
    fn result_without_explanations_omits_the_trace() {
        let mut result = sample_result();
        result.explanations.clear();
        let markup = render_assessment(&AssessmentState::Ready(result));
        assert!(!markup.contains("Rule trace"));
    }

    #[test]
    fn gate_admits_one_submission_at_a_time() {
        let gate = Arc::new(SubmissionGate::new());
        let guard = gate.try_begin().expect("first submission claims the gate");
        assert!(gate.is_busy());
        assert!(gate.try_begin().is_none());

        drop(guard);
        assert!(!gate.is_busy());
        assert!(gate.try_begin().is_some());
    }
}
