// Notification domain models.
//
// A toast is a short message shown in the bottom-right corner of the page.
// It only exists as a rendered element, so the types here describe what gets
// rendered rather than anything that is stored.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How long a toast stays on the page before it is removed.
pub const TOAST_LIFETIME: Duration = Duration::from_millis(3000);

/// Classes shared by every toast: pinned to the bottom-right corner.
const TOAST_BASE_CLASSES: &str = "fixed bottom-4 right-4 px-6 py-3 rounded-lg";

/// Visual variant of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    /// Background/foreground classes for this variant.
    pub fn palette(self) -> &'static str {
        match self {
            ToastKind::Success => "bg-green-500 text-black",
            ToastKind::Error => "bg-red-500 text-white",
            ToastKind::Info => "bg-gray-800 text-white",
        }
    }

    /// Full class list for a toast element of this kind.
    pub fn class_name(self) -> String {
        format!("{} {}", TOAST_BASE_CLASSES, self.palette())
    }
}

impl std::fmt::Display for ToastKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToastKind::Info => write!(f, "info"),
            ToastKind::Success => write!(f, "success"),
            ToastKind::Error => write!(f, "error"),
        }
    }
}

/// A notification waiting to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    /// Build the page element for this toast under the given id.
    pub fn render(&self, id: impl Into<String>) -> Element {
        Element {
            id: id.into(),
            class_name: self.kind.class_name(),
            text: self.message.clone(),
        }
    }
}

/// A node on the rendering surface.
///
/// Job rows and toasts are both elements; the surface only cares about the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub id: String,
    pub class_name: String,
    pub text: String,
}

impl Element {
    pub fn new(id: impl Into<String>, class_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            class_name: class_name.into(),
            text: text.into(),
        }
    }

    /// True when this element was rendered from a toast.
    pub fn is_toast(&self) -> bool {
        self.class_name.starts_with(TOAST_BASE_CLASSES)
    }
}
