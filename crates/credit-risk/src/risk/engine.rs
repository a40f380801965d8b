use crate::config::EngineConfig;
use crate::risk::domain::{ApplicantSnapshot, CreditRiskResult, EvaluateResponse};
use async_trait::async_trait;
use thiserror::Error;

/// Shown for every engine failure, regardless of cause.
pub const ENGINE_UNREACHABLE_MESSAGE: &str =
    "The engine could not be reached. Please try again.";

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("evaluation request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("engine returned status {status}")]
    Status { status: u16 },
}

impl EngineError {
    /// Transport failures, error statuses, and malformed bodies all collapse
    /// to the same user-facing message.
    pub fn user_message(&self) -> &'static str {
        ENGINE_UNREACHABLE_MESSAGE
    }
}

/// Boundary to the external evaluation engine.
#[async_trait]
pub trait RiskEvaluator: Send + Sync {
    async fn evaluate(
        &self,
        snapshot: &ApplicantSnapshot,
        access_token: Option<&str>,
    ) -> Result<CreditRiskResult, EngineError>;
}

/// HTTP client for the engine's evaluate endpoint.
pub struct EngineClient {
    http: reqwest::Client,
    evaluate_url: String,
}

impl EngineClient {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            evaluate_url: config.evaluate_url(),
        }
    }

    pub fn evaluate_url(&self) -> &str {
        &self.evaluate_url
    }
}

#[async_trait]
impl RiskEvaluator for EngineClient {
    async fn evaluate(
        &self,
        snapshot: &ApplicantSnapshot,
        access_token: Option<&str>,
    ) -> Result<CreditRiskResult, EngineError> {
        let mut request = self.http.post(&self.evaluate_url).json(snapshot);
        if let Some(token) = access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(EngineError::Status {
                status: status.as_u16(),
            });
        }

        let payload: EvaluateResponse = response.json().await?;
        Ok(payload.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_targets_the_evaluate_endpoint() {
        let config = EngineConfig::new("http://localhost:8000").expect("valid engine url");
        let client = EngineClient::new(&config);
        assert_eq!(client.evaluate_url(), "http://localhost:8000/api/evaluate");
    }

    #[test]
    fn every_failure_collapses_to_one_message() {
        let err = EngineError::Status { status: 503 };
        assert_eq!(err.user_message(), ENGINE_UNREACHABLE_MESSAGE);
        assert_eq!(err.to_string(), "engine returned status 503");
    }
}
