// Moderation service - approve, reject and close job postings.
//
// Each action is one request and, if the server says so, two side effects:
// a success toast and the removal of the job's row from the page. Nothing is
// removed speculatively and nothing is retried.
//
// The service also owns `api_call`, the place where a failed request turns
// into a "connection error" toast. The API client itself stays silent.

use super::moderation_models::{reports_success, ActionOutcome, JobId, Messages, ModerationAction};
use crate::core::api::{ApiClient, HttpTransport, RequestOptions};
use crate::core::notifications::{Notifier, RenderSurface, SurfaceError};
use serde_json::Value;
use thiserror::Error;

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Error)]
pub enum ModerationError {
    /// The job's row was not on the page when the server confirmed the action.
    #[error("Job {job_id} has no element `{element_id}` on the page")]
    MissingElement {
        job_id: JobId,
        element_id: String,
        #[source]
        source: SurfaceError,
    },
}

// ============================================================================
// CORE SERVICE
// ============================================================================

pub struct ModerationService<T: HttpTransport, S: RenderSurface> {
    api: ApiClient<T>,
    notifier: Notifier<S>,
    messages: Messages,
}

impl<T: HttpTransport, S: RenderSurface> ModerationService<T, S> {
    pub fn new(api: ApiClient<T>, notifier: Notifier<S>, messages: Messages) -> Self {
        Self {
            api,
            notifier,
            messages,
        }
    }

    pub fn notifier(&self) -> &Notifier<S> {
        &self.notifier
    }

    #[allow(dead_code)]
    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    /// Call the API, turning any failure into a toast.
    ///
    /// Never fails: on a transport or parse error the details are logged,
    /// one error toast is shown and `None` comes back.
    pub async fn api_call(&self, url: &str, options: RequestOptions) -> Option<Value> {
        match self.api.fetch_json(url, options).await {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!(url = %url, error = %e, "API call failed");
                self.notifier.error(self.messages.connection_error.as_str());
                None
            }
        }
    }

    /// Run a moderation action against one job.
    pub async fn perform(
        &self,
        action: ModerationAction,
        job_id: &JobId,
    ) -> Result<ActionOutcome, ModerationError> {
        let options = RequestOptions::new().method(action.method());
        let Some(result) = self.api_call(&action.path(job_id), options).await else {
            return Ok(ActionOutcome::Unreachable);
        };

        if !reports_success(&result) {
            // The server said no. Nothing is shown for this.
            tracing::info!(job_id = %job_id, action = %action, "Server did not confirm action");
            return Ok(ActionOutcome::Declined);
        }

        self.notifier.success(action.success_message(&self.messages));

        let element_id = job_id.element_id();
        self.notifier
            .surface()
            .remove_by_id(&element_id)
            .map_err(|source| ModerationError::MissingElement {
                job_id: job_id.clone(),
                element_id,
                source,
            })?;

        tracing::info!(job_id = %job_id, action = %action, "Moderation action applied");
        Ok(ActionOutcome::Applied)
    }

    pub async fn approve_job(&self, job_id: impl Into<JobId>) -> Result<ActionOutcome, ModerationError> {
        self.perform(ModerationAction::Approve, &job_id.into()).await
    }

    pub async fn reject_job(&self, job_id: impl Into<JobId>) -> Result<ActionOutcome, ModerationError> {
        self.perform(ModerationAction::Reject, &job_id.into()).await
    }

    pub async fn close_job(&self, job_id: impl Into<JobId>) -> Result<ActionOutcome, ModerationError> {
        self.perform(ModerationAction::Close, &job_id.into()).await
    }
}

// ============================================================================
// TESTS
// ============================================================================
