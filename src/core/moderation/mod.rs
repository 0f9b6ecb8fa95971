pub mod moderation_models;
pub mod moderation_service;

pub use moderation_models::{ActionOutcome, JobId, Language, Messages, ModerationAction};
pub use moderation_service::{ModerationError, ModerationService};
