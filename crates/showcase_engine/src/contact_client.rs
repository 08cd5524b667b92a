use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use showcase_core::contact::ContactSubmission;
use showcase_logging::{showcase_info, showcase_warn};
use thiserror::Error;

use crate::contact_server::CONTACT_PATH;

const FALLBACK_ACCEPTED: &str = "Thanks — we got your request!";
const FALLBACK_REJECTED: &str = "Server error";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The server answered with an error message meant for the visitor.
    #[error("{0}")]
    Rejected(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("a submission is already in progress")]
    AlreadyPending,
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait ContactSubmitter: Send + Sync {
    /// Sends one submission; returns the server's confirmation message.
    async fn submit(&self, submission: &ContactSubmission) -> Result<String, SubmitError>;
}

/// Posts submissions as JSON. One request at a time, never retried.
#[derive(Debug)]
pub struct ReqwestContactClient {
    client: reqwest::Client,
    endpoint: reqwest::Url,
    in_flight: AtomicBool,
}

impl ReqwestContactClient {
    /// `base` is the site root, e.g. `http://127.0.0.1:3000`.
    pub fn new(base: &str, settings: ClientSettings) -> Result<Self, SubmitError> {
        let endpoint = reqwest::Url::parse(base)
            .and_then(|base| base.join(CONTACT_PATH))
            .map_err(|err| SubmitError::InvalidEndpoint(err.to_string()))?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| SubmitError::Network(err.to_string()))?;
        Ok(Self {
            client,
            endpoint,
            in_flight: AtomicBool::new(false),
        })
    }

    pub fn endpoint(&self) -> &reqwest::Url {
        &self.endpoint
    }

    async fn send(&self, submission: &ContactSubmission) -> Result<String, SubmitError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(submission)
            .send()
            .await
            .map_err(|err| SubmitError::Network(err.to_string()))?;

        let status = response.status();
        let body: serde_json::Value = response.json().await.unwrap_or(serde_json::Value::Null);
        let field = |name: &str| body.get(name).and_then(|v| v.as_str()).map(str::to_string);

        if status.is_success() {
            let message = field("message").unwrap_or_else(|| FALLBACK_ACCEPTED.to_string());
            showcase_info!("Contact submission accepted ({})", status);
            Ok(message)
        } else {
            let error = field("error").unwrap_or_else(|| FALLBACK_REJECTED.to_string());
            showcase_warn!("Contact submission rejected ({}): {}", status, error);
            Err(SubmitError::Rejected(error))
        }
    }
}

struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

#[async_trait::async_trait]
impl ContactSubmitter for ReqwestContactClient {
    async fn submit(&self, submission: &ContactSubmission) -> Result<String, SubmitError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(SubmitError::AlreadyPending);
        }
        let _guard = InFlightGuard(&self.in_flight);
        self.send(submission).await
    }
}
