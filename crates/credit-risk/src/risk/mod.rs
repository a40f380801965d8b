//! Credit risk domain: the applicant snapshot and verdict types, the example
//! presets, the evaluation engine client, and the assessment view-state
//! machine with its panel renderers.

pub mod domain;
pub mod engine;
pub mod presets;
pub mod view;

pub use domain::{
    ApplicantSnapshot, CreditRiskResult, EmploymentStatus, EmploymentType, EvaluateResponse,
    Explanation, ExpertCredit, ExpertFinancial, ExpertProfile, ExpertSystemResult,
    MlProbabilities, RiskLevel, SlikHistory,
};
pub use engine::{EngineClient, EngineError, RiskEvaluator, ENGINE_UNREACHABLE_MESSAGE};
pub use presets::{PresetKind, HIGH_RISK, LOW_RISK, MEDIUM_RISK};
pub use view::{render_assessment, AssessmentState, SubmissionGate, SubmissionGuard};
