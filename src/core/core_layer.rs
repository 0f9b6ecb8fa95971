// The core module contains all moderation logic.
// Nothing here knows about HTTP libraries or terminals; it talks to the
// outside world through the `HttpTransport` and `RenderSurface` traits.

#[path = "notifications/mod.rs"]
pub mod notifications;

#[path = "api/mod.rs"]
pub mod api;

#[path = "moderation/mod.rs"]
pub mod moderation;
