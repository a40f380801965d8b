use serde::{Deserialize, Serialize};

/// Employment status accepted by the evaluation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    Employed,
    SelfEmployed,
    Unemployed,
    Retired,
}

impl EmploymentStatus {
    pub const ALL: [Self; 4] = [Self::Employed, Self::SelfEmployed, Self::Unemployed, Self::Retired];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Employed => "employed",
            Self::SelfEmployed => "self_employed",
            Self::Unemployed => "unemployed",
            Self::Retired => "retired",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Employed => "Employed",
            Self::SelfEmployed => "Self employed",
            Self::Unemployed => "Unemployed",
            Self::Retired => "Retired",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

/// Contract shape of the applicant's employment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    Permanent,
    Contract,
    Freelance,
    BusinessOwner,
}

impl EmploymentType {
    pub const ALL: [Self; 4] = [Self::Permanent, Self::Contract, Self::Freelance, Self::BusinessOwner];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Permanent => "permanent",
            Self::Contract => "contract",
            Self::Freelance => "freelance",
            Self::BusinessOwner => "business_owner",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Permanent => "Permanent",
            Self::Contract => "Contract",
            Self::Freelance => "Freelance",
            Self::BusinessOwner => "Business owner",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

/// SLIK delinquency tier from the applicant's credit history, kol1 (clean)
/// through kol5 (severely delinquent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlikHistory {
    Kol1,
    Kol2,
    Kol3,
    Kol4,
    Kol5,
}

impl SlikHistory {
    pub const ALL: [Self; 5] = [Self::Kol1, Self::Kol2, Self::Kol3, Self::Kol4, Self::Kol5];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kol1 => "kol1",
            Self::Kol2 => "kol2",
            Self::Kol3 => "kol3",
            Self::Kol4 => "kol4",
            Self::Kol5 => "kol5",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Kol1 => "Kolektibilitas 1 (no late payments)",
            Self::Kol2 => "Kolektibilitas 2 (1-90 days late)",
            Self::Kol3 => "Kolektibilitas 3 (91-120 days late)",
            Self::Kol4 => "Kolektibilitas 4 (121-180 days late)",
            Self::Kol5 => "Kolektibilitas 5 (>180 days late)",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.as_str() == value)
    }
}

/// One applicant as the engine expects it on the wire. Field names match the
/// evaluate endpoint's JSON contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApplicantSnapshot {
    pub age: u32,
    pub employment_status: EmploymentStatus,
    pub employment_type: EmploymentType,
    pub relationship_tenure_months: u32,
    pub is_fraud: bool,
    pub monthly_income_idr: u64,
    pub avg_monthly_balance_idr: u64,
    pub avg_deposit_amount_idr: u64,
    pub debit_card_spending_idr: u64,
    pub total_outstanding_debt_idr: u64,
    pub loan_application_amount_idr: u64,
    pub late_payments_last_years: u32,
    pub slik_loan_history: SlikHistory,
    pub active_loans_count: u32,
}

/// Raw classifier output, before the rule engine refines it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MlProbabilities {
    pub pred_class: u8,
    pub proba_low: f64,
    pub proba_high: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpertProfile {
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpertFinancial {
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpertCredit {
    pub risk: String,
    pub rule_number: u32,
}

/// Rule-engine side of the verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpertSystemResult {
    pub profile: ExpertProfile,
    pub financial: ExpertFinancial,
    pub credit: ExpertCredit,
}

/// One (rule, reason) pair of the rule trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub rule: String,
    pub reason: String,
}

/// The engine's verdict for one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditRiskResult {
    pub final_prediction: String,
    pub confidence: f64,
    pub ml_raw: MlProbabilities,
    pub expert_system_result: ExpertSystemResult,
    #[serde(default)]
    pub explanations: Vec<Explanation>,
}

impl CreditRiskResult {
    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_prediction(&self.final_prediction)
    }

    /// Rounded percentage used for both the confidence label and the bar
    /// fill width.
    pub fn confidence_percent(&self) -> u8 {
        (self.confidence * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

/// Envelope the evaluate endpoint responds with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluateResponse {
    pub status: String,
    pub result: CreditRiskResult,
}

/// Normalized risk classification derived from the engine's free-text label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Case-insensitive exact match; unknown labels are not a level.
    pub fn recognize(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Rendering normalization: anything unrecognized reads as medium.
    pub fn from_prediction(value: &str) -> Self {
        Self::recognize(value).unwrap_or(Self::Medium)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low risk",
            Self::Medium => "Medium risk",
            Self::High => "High risk",
        }
    }

    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Low => "badge badge-low",
            Self::Medium => "badge badge-medium",
            Self::High => "badge badge-high",
        }
    }
}
