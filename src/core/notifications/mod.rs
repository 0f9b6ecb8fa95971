pub mod notification_models;
pub mod notifier;
pub mod render_surface;

pub use notification_models::{Element, Toast, ToastKind, TOAST_LIFETIME};
pub use notifier::Notifier;
pub use render_surface::{RenderSurface, SurfaceError};
