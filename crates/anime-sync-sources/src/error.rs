use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    /// Rate limiting persisted through every backoff attempt.
    #[error("rate limited after {attempts} attempts")]
    RateLimited { attempts: u32 },

    /// Non-success transport response that is not a rate-limit signal.
    /// Never retried.
    #[error("request failed: {status} {body}")]
    Http { status: u16, body: String },

    /// Error list reported by the catalog itself (not rate-limit-tagged).
    /// Never retried.
    #[error("catalog errors: {0}")]
    Api(String),

    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl SourceError {
    /// Rate-limit signals are the only retryable class.
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, SourceError::RateLimited { .. })
    }
}
