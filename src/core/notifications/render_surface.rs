// The rendering surface is the page the toasts and job rows live on.
//
// Core code never touches a concrete page. It only inserts elements and
// removes them by id through this trait, and the infra layer decides whether
// that means a terminal, a map in memory, or something else.

use super::notification_models::Element;

#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("No element with id `{0}` on the page")]
    NotFound(String),
    #[error("Element id `{0}` is already on the page")]
    DuplicateId(String),
}

/// A shared page that elements can be added to and removed from.
///
/// Implementations are shared between the notifier's timer tasks and the
/// moderation actions, so they must be usable from many tasks at once.
pub trait RenderSurface: Send + Sync + 'static {
    /// Add an element to the page.
    fn insert(&self, element: Element) -> Result<(), SurfaceError>;

    /// Remove the element with the given id.
    fn remove_by_id(&self, id: &str) -> Result<Element, SurfaceError>;

    /// Whether an element with this id is currently on the page.
    fn contains(&self, id: &str) -> bool;

    /// Snapshot of every element on the page, in insertion order.
    fn elements(&self) -> Vec<Element>;
}

impl<S: RenderSurface + ?Sized> RenderSurface for std::sync::Arc<S> {
    fn insert(&self, element: Element) -> Result<(), SurfaceError> {
        (**self).insert(element)
    }

    fn remove_by_id(&self, id: &str) -> Result<Element, SurfaceError> {
        (**self).remove_by_id(id)
    }

    fn contains(&self, id: &str) -> bool {
        (**self).contains(id)
    }

    fn elements(&self) -> Vec<Element> {
        (**self).elements()
    }
}
