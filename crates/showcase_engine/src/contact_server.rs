//! `POST /api/contact`: validate a submission, hand it to a sink, reply with JSON.

use std::future::Future;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use showcase_core::contact::{ContactError, ContactSubmission, ACCEPTED_MESSAGE};
use showcase_logging::{showcase_error, showcase_info, showcase_warn};
use thiserror::Error;
use tokio::net::TcpListener;

pub const CONTACT_PATH: &str = "/api/contact";

#[derive(Debug, Error)]
#[error("{0}")]
pub struct SinkError(pub String);

/// Receives accepted submissions. Email delivery would plug in here.
pub trait SubmissionSink: Send + Sync {
    fn accept(&self, submission: &ContactSubmission) -> Result<(), SinkError>;
}

/// Default sink: one info line per submission.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn accept(&self, submission: &ContactSubmission) -> Result<(), SinkError> {
        showcase_info!("New contact submission: {}", submission.log_summary());
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactAccepted {
    pub ok: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRejected {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ContactApiError {
    #[error(transparent)]
    Invalid(#[from] ContactError),
    #[error("unreadable body: {0}")]
    Body(#[from] JsonRejection),
    #[error("sink failed: {0}")]
    Sink(#[from] SinkError),
}

impl IntoResponse for ContactApiError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            ContactApiError::Invalid(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ContactApiError::Body(_) | ContactApiError::Sink(_) => {
                showcase_error!("Contact API error: {}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
        };
        (status, Json(ContactRejected { error })).into_response()
    }
}

#[derive(Clone)]
struct ContactState {
    sink: Arc<dyn SubmissionSink>,
}

pub fn router(sink: Arc<dyn SubmissionSink>) -> Router {
    Router::new()
        .route(CONTACT_PATH, post(contact_handler))
        .with_state(ContactState { sink })
}

async fn contact_handler(
    State(state): State<ContactState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ContactAccepted>, ContactApiError> {
    let Json(body) = body?;
    let submission = ContactSubmission::from_body(&body);
    if let Err(err) = submission.validate() {
        showcase_warn!("Rejected contact submission: {}", err);
        return Err(err.into());
    }
    state.sink.accept(&submission)?;
    Ok(Json(ContactAccepted {
        ok: true,
        message: ACCEPTED_MESSAGE.to_string(),
    }))
}

/// Serves the contact endpoint on `listener` until `shutdown` resolves.
pub async fn serve<S>(
    listener: TcpListener,
    sink: Arc<dyn SubmissionSink>,
    shutdown: S,
) -> std::io::Result<()>
where
    S: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        showcase_info!("Contact endpoint listening on http://{}{}", addr, CONTACT_PATH);
    }
    axum::serve(listener, router(sink))
        .with_graceful_shutdown(shutdown)
        .await
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            showcase_error!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
        showcase_info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                showcase_info!("Received terminate signal, shutting down");
            }
            Err(err) => {
                showcase_error!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
