use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Url};

use crate::domain::WaitlistEmail;
use crate::routes::error_chain_fmt;

use super::store::{PersistenceError, WaitlistStore};

/// The one result shape the presentation layer ever sees: success, duplicate
/// or failure. `join` never returns `Err` and never panics on bad input.
#[derive(Debug, serde::Serialize, PartialEq, Eq)]
pub struct SubmissionResult {
    pub success: bool,
    #[serde(rename = "alreadyJoined", skip_serializing_if = "Option::is_none")]
    pub already_joined: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmissionResult {
    fn joined() -> Self {
        Self {
            success: true,
            already_joined: None,
            error: None,
        }
    }

    fn already_joined() -> Self {
        Self {
            success: true,
            already_joined: Some(true),
            error: None,
        }
    }

    fn failed(error: String) -> Self {
        Self {
            success: false,
            already_joined: None,
            error: Some(error),
        }
    }
}

#[derive(thiserror::Error, Debug)]
#[error("Failed to request a confirmation email.")]
pub struct NotificationError(#[source] pub reqwest::Error);

#[derive(thiserror::Error)]
pub enum JoinError {
    #[error("{0}")]
    ValidationError(String),
    #[error("Failed to store the waitlist entry.")]
    PersistenceError(#[source] PersistenceError),
    #[error(transparent)]
    NotificationError(#[from] NotificationError),
}

impl std::fmt::Debug for JoinError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

enum JoinOutcome {
    Joined,
    AlreadyJoined,
}

#[derive(serde::Serialize)]
struct ConfirmationRequest<'a> {
    email: &'a str,
}

/// Orchestrates one waitlist submission: persist the entry, then ask the
/// confirmation service to send the welcome email. Duplicate entries
/// short-circuit before the notification step.
#[derive(Clone)]
pub struct WaitlistClient {
    store: Arc<dyn WaitlistStore>,
    http_client: Client,
    confirmation_url: Url,
}

impl WaitlistClient {
    pub fn new(store: Arc<dyn WaitlistStore>, confirmation_url: String, timeout: Duration) -> Self {
        Self {
            store,
            http_client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed building the confirmation http client."),
            confirmation_url: Url::parse(&confirmation_url)
                .expect("Failed parsing confirmation endpoint url."),
        }
    }

    #[tracing::instrument(name = "Joining the waitlist.", skip(self))]
    pub async fn join(&self, email: &str) -> SubmissionResult {
        match self.try_join(email).await {
            Ok(JoinOutcome::Joined) => SubmissionResult::joined(),
            Ok(JoinOutcome::AlreadyJoined) => SubmissionResult::already_joined(),
            Err(err) => {
                tracing::error!(
                    error.cause_chain = ?err,
                    error.message = %err,
                    "Failed to join the waitlist"
                );
                SubmissionResult::failed(err.to_string())
            }
        }
    }

    async fn try_join(&self, email: &str) -> Result<JoinOutcome, JoinError> {
        let email =
            WaitlistEmail::parse(email.to_string()).map_err(JoinError::ValidationError)?;

        match self.store.insert_entry(&email).await {
            Ok(()) => {}
            // An already-registered address is a success; it gets no second email.
            Err(PersistenceError::DuplicateEmail) => return Ok(JoinOutcome::AlreadyJoined),
            Err(err) => return Err(JoinError::PersistenceError(err)),
        }

        self.request_confirmation(&email).await?;

        Ok(JoinOutcome::Joined)
    }

    #[tracing::instrument(name = "Requesting a confirmation email", skip(self))]
    async fn request_confirmation(&self, email: &WaitlistEmail) -> Result<(), NotificationError> {
        self.http_client
            .post(self.confirmation_url.clone())
            .json(&ConfirmationRequest {
                email: email.as_ref(),
            })
            .send()
            .await
            .map_err(NotificationError)?
            .error_for_status()
            .map_err(NotificationError)?;

        Ok(())
    }
}
