// Notifier - shows toasts and takes them down again.
//
// Every toast gets its own timer task. There is no queue and no
// deduplication: two toasts shown at the same time simply sit on the page
// together until each timer fires.

use super::notification_models::{Toast, ToastKind, TOAST_LIFETIME};
use super::render_surface::RenderSurface;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;
use tokio::time::Instant;

pub struct Notifier<S: RenderSurface> {
    surface: Arc<S>,
    next_id: AtomicU64,
    /// Removal tasks that may still be waiting on their timer.
    timers: Mutex<Vec<JoinHandle<()>>>,
}

impl<S: RenderSurface> Notifier<S> {
    pub fn new(surface: Arc<S>) -> Self {
        Self {
            surface,
            next_id: AtomicU64::new(1),
            timers: Mutex::new(Vec::new()),
        }
    }

    /// The page this notifier renders onto.
    pub fn surface(&self) -> &Arc<S> {
        &self.surface
    }

    /// Show a toast and schedule its removal.
    ///
    /// Must be called from inside a Tokio runtime, since the removal runs on
    /// a spawned task. Surface errors are logged and never reach the caller.
    pub fn notify(&self, message: impl Into<String>, kind: ToastKind) {
        let toast = Toast::new(message, kind);
        let toast_id = format!("toast-{}", self.next_id.fetch_add(1, Ordering::Relaxed));

        // Fix the deadline now so a slow first poll of the timer task
        // can't stretch the toast's lifetime.
        let deadline = Instant::now() + TOAST_LIFETIME;

        if let Err(e) = self.surface.insert(toast.render(toast_id.clone())) {
            tracing::warn!(toast_id = %toast_id, "Failed to show toast: {}", e);
            return;
        }
        tracing::debug!(toast_id = %toast_id, kind = %kind, "Toast shown");

        let surface = Arc::clone(&self.surface);
        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            match surface.remove_by_id(&toast_id) {
                Ok(_) => tracing::debug!(toast_id = %toast_id, "Toast expired"),
                Err(e) => tracing::warn!(toast_id = %toast_id, "Failed to remove toast: {}", e),
            }
        });

        let mut timers = self.timers.lock().unwrap_or_else(|e| e.into_inner());
        timers.retain(|h| !h.is_finished());
        timers.push(handle);
    }

    #[allow(dead_code)]
    pub fn info(&self, message: impl Into<String>) {
        self.notify(message, ToastKind::Info);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(message, ToastKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(message, ToastKind::Error);
    }

    /// Number of toasts whose removal has not run yet.
    pub fn pending(&self) -> usize {
        let timers = self.timers.lock().unwrap_or_else(|e| e.into_inner());
        timers.iter().filter(|h| !h.is_finished()).count()
    }

    /// Wait until every scheduled toast has been removed.
    ///
    /// Timers are never cut short; this just waits them out, including any
    /// toasts shown while we are waiting.
    pub async fn settle(&self) {
        loop {
            let batch = {
                let mut timers = self.timers.lock().unwrap_or_else(|e| e.into_inner());
                std::mem::take(&mut *timers)
            };
            if batch.is_empty() {
                return;
            }
            for handle in batch {
                if let Err(e) = handle.await {
                    tracing::warn!("Toast timer task failed: {}", e);
                }
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::notifications::{Element, SurfaceError};
    use std::time::Duration;

    /// Bare-bones page for watching what the notifier does.
    #[derive(Default)]
    struct RecordingSurface {
        elements: Mutex<Vec<Element>>,
        inserted: AtomicU64,
    }

    impl RenderSurface for RecordingSurface {
        fn insert(&self, element: Element) -> Result<(), SurfaceError> {
            self.inserted.fetch_add(1, Ordering::Relaxed);
            self.elements.lock().unwrap().push(element);
            Ok(())
        }

        fn remove_by_id(&self, id: &str) -> Result<Element, SurfaceError> {
            let mut elements = self.elements.lock().unwrap();
            let pos = elements
                .iter()
                .position(|e| e.id == id)
                .ok_or_else(|| SurfaceError::NotFound(id.to_string()))?;
            Ok(elements.remove(pos))
        }

        fn contains(&self, id: &str) -> bool {
            self.elements.lock().unwrap().iter().any(|e| e.id == id)
        }

        fn elements(&self) -> Vec<Element> {
            self.elements.lock().unwrap().clone()
        }
    }

    /// Move the paused clock forward and let woken timer tasks run.
    async fn advance(ms: u64) {
        tokio::time::advance(Duration::from_millis(ms)).await;
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn test_toast_removed_after_exactly_lifetime() {
        for kind in [ToastKind::Info, ToastKind::Success, ToastKind::Error] {
            let surface = Arc::new(RecordingSurface::default());
            let notifier = Notifier::new(Arc::clone(&surface));

            notifier.notify("Hello", kind);

            let shown = surface.elements();
            assert_eq!(shown.len(), 1);
            assert_eq!(shown[0].text, "Hello");
            assert_eq!(shown[0].class_name, kind.class_name());

            advance(2999).await;
            assert_eq!(surface.elements().len(), 1, "{kind} toast removed too early");

            advance(1).await;
            assert!(surface.elements().is_empty(), "{kind} toast not removed");
            assert_eq!(notifier.pending(), 0);
        }
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn test_concurrent_toasts_expire_independently() {
        let surface = Arc::new(RecordingSurface::default());
        let notifier = Notifier::new(Arc::clone(&surface));

        notifier.info("first");
        advance(1000).await;
        notifier.error("second");

        assert_eq!(surface.elements().len(), 2);
        assert_eq!(notifier.pending(), 2);

        advance(2000).await;
        let left = surface.elements();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].text, "second");

        advance(1000).await;
        assert!(surface.elements().is_empty());
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn test_identical_messages_are_not_deduplicated() {
        let surface = Arc::new(RecordingSurface::default());
        let notifier = Notifier::new(Arc::clone(&surface));

        notifier.success("Saved");
        notifier.success("Saved");

        let shown = surface.elements();
        assert_eq!(shown.len(), 2);
        assert_ne!(shown[0].id, shown[1].id);
        assert_eq!(surface.inserted.load(Ordering::Relaxed), 2);
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn test_settle_waits_for_every_toast() {
        let surface = Arc::new(RecordingSurface::default());
        let notifier = Notifier::new(Arc::clone(&surface));

        notifier.info("a");
        notifier.info("b");

        // Paused time auto-advances while settle() is idle.
        notifier.settle().await;

        assert!(surface.elements().is_empty());
        assert_eq!(notifier.pending(), 0);
    }
}
