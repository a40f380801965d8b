/// Declarative constraints attached to a single field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldRules {
    required: Option<String>,
    min: Option<MinRule>,
}

#[derive(Debug, Clone, PartialEq)]
struct MinRule {
    value: f64,
    message: String,
}

impl FieldRules {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn required(message: impl Into<String>) -> Self {
        Self {
            required: Some(message.into()),
            min: None,
        }
    }

    pub fn with_min(mut self, value: f64, message: impl Into<String>) -> Self {
        self.min = Some(MinRule {
            value,
            message: message.into(),
        });
        self
    }

    pub fn is_required(&self) -> bool {
        self.required.is_some()
    }

    /// Message of the first violated rule, if any. A value that does not
    /// parse as a number fails the minimum rule it cannot satisfy.
    pub fn check(&self, raw: &str) -> Option<String> {
        let raw = raw.trim();
        if raw.is_empty() {
            return self.required.clone();
        }

        if let Some(min) = &self.min {
            match raw.parse::<f64>() {
                Ok(number) if number >= min.value => {}
                _ => return Some(min.message.clone()),
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_fires_on_empty_value() {
        let rules = FieldRules::required("Age is required");
        assert_eq!(rules.check(""), Some("Age is required".to_string()));
        assert_eq!(rules.check("   "), Some("Age is required".to_string()));
        assert_eq!(rules.check("30"), None);
    }

    #[test]
    fn minimum_is_inclusive() {
        let rules = FieldRules::required("Age is required").with_min(18.0, "Minimum age is 18");
        assert_eq!(rules.check("17"), Some("Minimum age is 18".to_string()));
        assert_eq!(rules.check("18"), None);
        assert_eq!(rules.check("65"), None);
    }

    #[test]
    fn non_numeric_value_fails_the_minimum_rule() {
        let rules = FieldRules::required("Monthly income is required")
            .with_min(0.0, "Must be positive");
        assert_eq!(rules.check("abc"), Some("Must be positive".to_string()));
    }

    #[test]
    fn optional_empty_value_passes() {
        let rules = FieldRules::none().with_min(0.0, "Cannot be negative");
        assert_eq!(rules.check(""), None);
    }
}
