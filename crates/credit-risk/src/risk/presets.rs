use crate::risk::domain::{ApplicantSnapshot, EmploymentStatus, EmploymentType, SlikHistory};

/// Example application that the engine classifies as high risk.
pub const HIGH_RISK: ApplicantSnapshot = ApplicantSnapshot {
    age: 28,
    employment_status: EmploymentStatus::SelfEmployed,
    employment_type: EmploymentType::Freelance,
    relationship_tenure_months: 5,
    is_fraud: false,
    monthly_income_idr: 6_000_000,
    avg_monthly_balance_idr: 4_000_000,
    avg_deposit_amount_idr: 1_500_000,
    debit_card_spending_idr: 2_500_000,
    total_outstanding_debt_idr: 45_000_000,
    loan_application_amount_idr: 55_000_000,
    late_payments_last_years: 3,
    slik_loan_history: SlikHistory::Kol5,
    active_loans_count: 6,
};

/// Example application in the middle of the range.
pub const MEDIUM_RISK: ApplicantSnapshot = ApplicantSnapshot {
    age: 26,
    employment_status: EmploymentStatus::SelfEmployed,
    employment_type: EmploymentType::Freelance,
    relationship_tenure_months: 10,
    is_fraud: false,
    monthly_income_idr: 7_500_000,
    avg_monthly_balance_idr: 15_000_000,
    avg_deposit_amount_idr: 3_000_000,
    debit_card_spending_idr: 4_000_000,
    total_outstanding_debt_idr: 25_000_000,
    loan_application_amount_idr: 60_000_000,
    late_payments_last_years: 2,
    slik_loan_history: SlikHistory::Kol3,
    active_loans_count: 3,
};

/// Example application that the engine classifies as low risk.
pub const LOW_RISK: ApplicantSnapshot = ApplicantSnapshot {
    age: 32,
    employment_status: EmploymentStatus::Employed,
    employment_type: EmploymentType::Permanent,
    relationship_tenure_months: 48,
    is_fraud: false,
    monthly_income_idr: 15_000_000,
    avg_monthly_balance_idr: 40_000_000,
    avg_deposit_amount_idr: 5_000_000,
    debit_card_spending_idr: 6_000_000,
    total_outstanding_debt_idr: 20_000_000,
    loan_application_amount_idr: 60_000_000,
    late_payments_last_years: 0,
    slik_loan_history: SlikHistory::Kol1,
    active_loans_count: 1,
};

/// Which example snapshot a preset button applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetKind {
    High,
    Medium,
    Low,
}

impl PresetKind {
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    pub fn from_slug(value: &str) -> Option<Self> {
        match value {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High risk",
            Self::Medium => "Medium risk",
            Self::Low => "Low risk",
        }
    }

    pub const fn snapshot(self) -> ApplicantSnapshot {
        match self {
            Self::High => HIGH_RISK,
            Self::Medium => MEDIUM_RISK,
            Self::Low => LOW_RISK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip_and_reject_unknowns() {
        for preset in PresetKind::ALL {
            assert_eq!(PresetKind::from_slug(preset.slug()), Some(preset));
        }
        assert_eq!(PresetKind::from_slug("extreme"), None);
    }

    #[test]
    fn low_risk_preset_serializes_to_the_documented_payload() {
        let payload = serde_json::to_value(LOW_RISK).expect("preset serializes");
        assert_eq!(
            payload,
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

    #[test]
    fn high_risk_preset_keeps_its_documented_extremes() {
        assert_eq!(HIGH_RISK.slik_loan_history, SlikHistory::Kol5);
        assert_eq!(HIGH_RISK.active_loans_count, 6);
        assert_eq!(HIGH_RISK.late_payments_last_years, 3);
        assert_eq!(MEDIUM_RISK.slik_loan_history, SlikHistory::Kol3);
    }
}
