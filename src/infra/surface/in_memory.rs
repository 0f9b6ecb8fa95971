// In-memory page.
//
// Keeps elements in a DashMap so moderation actions and toast timers running
// on different tasks can touch the page without a global lock. A separate
// sequence number per element preserves insertion order for `elements()`.

use crate::core::notifications::{Element, RenderSurface, SurfaceError};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

pub struct InMemorySurface {
    /// Maps element id -> (insertion sequence, element)
    elements: DashMap<String, (u64, Element)>,
    next_seq: AtomicU64,
}

impl InMemorySurface {
    pub fn new() -> Self {
        Self {
            elements: DashMap::new(),
            next_seq: AtomicU64::new(0),
        }
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Default for InMemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSurface for InMemorySurface {
    fn insert(&self, element: Element) -> Result<(), SurfaceError> {
        // Element ids are unique on a page.
        match self.elements.entry(element.id.clone()) {
            Entry::Occupied(_) => Err(SurfaceError::DuplicateId(element.id)),
            Entry::Vacant(slot) => {
                let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
                slot.insert((seq, element));
                Ok(())
            }
        }
    }

    fn remove_by_id(&self, id: &str) -> Result<Element, SurfaceError> {
        self.elements
            .remove(id)
            .map(|(_, (_, element))| element)
            .ok_or_else(|| SurfaceError::NotFound(id.to_string()))
    }

    fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn elements(&self) -> Vec<Element> {
        let mut all: Vec<(u64, Element)> = self
            .elements
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        all.sort_by_key(|(seq, _)| *seq);
        all.into_iter().map(|(_, element)| element).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: &str) -> Element {
        Element::new(format!("job-{}", id), "job-row", format!("Job {}", id))
    }

    #[test]
    fn test_insert_and_remove() {
        let surface = InMemorySurface::new();
        surface.insert(job("1")).unwrap();

        assert!(surface.contains("job-1"));
        let removed = surface.remove_by_id("job-1").unwrap();
        assert_eq!(removed.text, "Job 1");
        assert!(surface.is_empty());
    }

    #[test]
    fn test_remove_missing_is_not_found() {
        let surface = InMemorySurface::new();

        let err = surface.remove_by_id("job-404").unwrap_err();

        assert!(matches!(err, SurfaceError::NotFound(id) if id == "job-404"));
    }

    #[test]
    fn test_second_removal_fails() {
        let surface = InMemorySurface::new();
        surface.insert(job("3")).unwrap();

        assert!(surface.remove_by_id("job-3").is_ok());
        assert!(surface.remove_by_id("job-3").is_err());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let surface = InMemorySurface::new();
        surface.insert(job("1")).unwrap();

        let err = surface.insert(job("1")).unwrap_err();

        assert!(matches!(err, SurfaceError::DuplicateId(_)));
        assert_eq!(surface.len(), 1);
    }

    #[test]
    fn test_elements_keep_insertion_order() {
        let surface = InMemorySurface::new();
        for id in ["b", "a", "c"] {
            surface.insert(job(id)).unwrap();
        }
        surface.remove_by_id("job-a").unwrap();
        surface.insert(job("a")).unwrap();

        let ids: Vec<String> = surface.elements().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["job-b", "job-c", "job-a"]);
    }
}
