// Terminal rendering for the command-line front end.
//
// Wraps another surface and echoes toasts to stdout as they appear. Job rows
// are not printed; their removal is already announced by a toast.

use crate::core::notifications::{Element, RenderSurface, SurfaceError};
use chrono::Local;

pub struct ConsoleSurface<S: RenderSurface> {
    inner: S,
}

impl<S: RenderSurface> ConsoleSurface<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// One printable line for a toast, colored roughly like the page variant.
    fn format_toast(element: &Element) -> String {
        let color = if element.class_name.contains("bg-green-500") {
            "\x1b[30;42m"
        } else if element.class_name.contains("bg-red-500") {
            "\x1b[97;41m"
        } else {
            "\x1b[97;100m"
        };
        format!(
            "[{}] {} {} \x1b[0m",
            Local::now().format("%H:%M:%S"),
            color,
            element.text
        )
    }
}

impl<S: RenderSurface> RenderSurface for ConsoleSurface<S> {
    fn insert(&self, element: Element) -> Result<(), SurfaceError> {
        let line = element.is_toast().then(|| Self::format_toast(&element));
        self.inner.insert(element)?;
        if let Some(line) = line {
            println!("{}", line);
        }
        Ok(())
    }

    fn remove_by_id(&self, id: &str) -> Result<Element, SurfaceError> {
        let removed = self.inner.remove_by_id(id)?;
        if removed.is_toast() {
            tracing::debug!(toast_id = %id, "Toast dismissed");
        } else {
            tracing::debug!(element_id = %id, "Element removed from page");
        }
        Ok(removed)
    }

    fn contains(&self, id: &str) -> bool {
        self.inner.contains(id)
    }

    fn elements(&self) -> Vec<Element> {
        self.inner.elements()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::notifications::{Toast, ToastKind};
    use crate::infra::surface::InMemorySurface;

    #[test]
    fn test_delegates_to_inner_surface() {
        let surface = ConsoleSurface::new(InMemorySurface::new());
        surface
            .insert(Toast::new("job approved", ToastKind::Success).render("toast-1"))
            .unwrap();
        surface.insert(Element::new("job-1", "job-row", "Cook")).unwrap();

        assert!(surface.contains("toast-1"));
        assert_eq!(surface.elements().len(), 2);

        surface.remove_by_id("job-1").unwrap();
        assert!(!surface.contains("job-1"));
        assert!(surface.remove_by_id("job-1").is_err());
    }

    #[test]
    fn test_toast_line_uses_variant_color() {
        let success = Toast::new("ok", ToastKind::Success).render("t1");
        let error = Toast::new("down", ToastKind::Error).render("t2");

        let success_line = ConsoleSurface::<InMemorySurface>::format_toast(&success);
        let error_line = ConsoleSurface::<InMemorySurface>::format_toast(&error);

        assert!(success_line.contains("\x1b[30;42m") && success_line.contains("ok"));
        assert!(error_line.contains("\x1b[97;41m") && error_line.contains("down"));
    }
}
