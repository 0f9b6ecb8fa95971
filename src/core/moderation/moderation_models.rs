// Moderation domain models.
//
// A job posting is only known here by its id. The page renders it elsewhere
// as an element keyed `job-{id}`, and the backend exposes one POST endpoint
// per action under `/api/jobs/{id}/`.

use crate::core::api::HttpMethod;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque job identifier, used verbatim in URLs and element ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id of the page element that shows this job.
    pub fn element_id(&self) -> String {
        format!("job-{}", self.0)
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for JobId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for JobId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for JobId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Something a moderator (or the owning employer) can do to a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationAction {
    /// Publish a pending posting.
    Approve,
    /// Turn a pending posting down.
    Reject,
    /// Withdraw a posting. Employers use this on their own jobs.
    Close,
}

impl ModerationAction {
    pub fn as_str(self) -> &'static str {
        match self {
            ModerationAction::Approve => "approve",
            ModerationAction::Reject => "reject",
            ModerationAction::Close => "close",
        }
    }

    pub fn method(self) -> HttpMethod {
        HttpMethod::Post
    }

    /// Endpoint for this action on the given job.
    pub fn path(self, job_id: &JobId) -> String {
        format!("/api/jobs/{}/{}", job_id, self.as_str())
    }

    /// Text shown to the user once the server confirms the action.
    pub fn success_message(self, messages: &Messages) -> &str {
        match self {
            ModerationAction::Approve => &messages.job_approved,
            ModerationAction::Reject => &messages.job_rejected,
            ModerationAction::Close => &messages.job_closed,
        }
    }
}

impl std::fmt::Display for ModerationAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a single moderation action ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Server confirmed; the job's element was removed.
    Applied,
    /// Server answered but did not report success. Nothing was shown.
    Declined,
    /// Request failed; the user already saw a connection error.
    Unreachable,
}

/// Which fixed message table to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
}

/// User-facing texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Messages {
    pub job_approved: String,
    pub job_rejected: String,
    pub job_closed: String,
    pub connection_error: String,
}

impl Messages {
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::En => Self::english(),
            Language::Ru => Self::russian(),
        }
    }

    pub fn english() -> Self {
        Self {
            job_approved: "job approved".to_string(),
            job_rejected: "job rejected".to_string(),
            job_closed: "job closed".to_string(),
            connection_error: "connection error".to_string(),
        }
    }

    pub fn russian() -> Self {
        Self {
            job_approved: "Вакансия одобрена".to_string(),
            job_rejected: "Вакансия отклонена".to_string(),
            job_closed: "Вакансия закрыта".to_string(),
            connection_error: "Ошибка соединения".to_string(),
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::english()
    }
}

/// Whether the payload's `success` field counts as true.
///
/// Uses the loose rules a browser page would: `null`, `false`, `0`, `""` and
/// a missing field are all false. Only objects have fields.
pub fn reports_success(payload: &Value) -> bool {
    match payload.get("success") {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paths_and_element_ids() {
        let id = JobId::from(42);

        assert_eq!(ModerationAction::Approve.path(&id), "/api/jobs/42/approve");
        assert_eq!(ModerationAction::Reject.path(&id), "/api/jobs/42/reject");
        assert_eq!(ModerationAction::Close.path(&id), "/api/jobs/42/close");
        assert_eq!(id.element_id(), "job-42");
        assert_eq!(JobId::from("abc").element_id(), "job-abc");
    }

    #[test]
    fn test_every_action_posts() {
        for action in [
            ModerationAction::Approve,
            ModerationAction::Reject,
            ModerationAction::Close,
        ] {
            assert_eq!(action.method(), HttpMethod::Post);
        }
    }

    #[test]
    fn test_success_truthiness() {
        assert!(reports_success(&json!({ "success": true })));
        assert!(reports_success(&json!({ "success": 1 })));
        assert!(reports_success(&json!({ "success": "yes" })));
        assert!(reports_success(&json!({ "success": {} })));

        assert!(!reports_success(&json!({ "success": false })));
        assert!(!reports_success(&json!({ "success": 0 })));
        assert!(!reports_success(&json!({ "success": "" })));
        assert!(!reports_success(&json!({ "success": null })));
        assert!(!reports_success(&json!({ "error": "nope" })));
        assert!(!reports_success(&json!([true])));
        assert!(!reports_success(&json!("success")));
    }

    #[test]
    fn test_message_tables() {
        let en = Messages::for_language(Language::En);
        let ru = Messages::for_language(Language::Ru);

        assert_eq!(ModerationAction::Approve.success_message(&en), "job approved");
        assert_eq!(ModerationAction::Reject.success_message(&ru), "Вакансия отклонена");
        assert_eq!(Messages::default(), en);
    }
}
