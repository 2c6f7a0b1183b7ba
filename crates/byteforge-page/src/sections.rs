//! Ordered page sections and their scroll offsets

use std::fmt;

/// Provides a section's vertical offset at the moment it is asked
///
/// Offsets are resolved lazily so they follow viewport resizes.
pub type OffsetFn = Box<dyn Fn() -> f64>;

/// One full-screen section of the page
pub struct SectionDescriptor {
    pub step: usize,
    pub id: String,
    pub title: String,
    offset: OffsetFn,
}

impl SectionDescriptor {
    pub fn new(
        step: usize,
        id: impl Into<String>,
        title: impl Into<String>,
        offset: impl Fn() -> f64 + 'static,
    ) -> Self {
        Self {
            step,
            id: id.into(),
            title: title.into(),
            offset: Box::new(offset),
        }
    }

    /// Current vertical offset of the section's top edge
    pub fn offset(&self) -> f64 {
        (self.offset)()
    }

    /// Whether this section is the one the page is on
    pub fn is_active(&self, current_step: usize) -> bool {
        self.step == current_step
    }
}

impl fmt::Debug for SectionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionDescriptor")
            .field("step", &self.step)
            .field("id", &self.id)
            .field("title", &self.title)
            .field("offset", &self.offset())
            .finish()
    }
}

/// Sections in step order
#[derive(Debug, Default)]
pub struct SectionRegistry {
    sections: Vec<SectionDescriptor>,
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a section, keeping the list ordered by step
    ///
    /// A section registered for an existing step replaces it.
    pub fn register(&mut self, section: SectionDescriptor) {
        match self
            .sections
            .binary_search_by_key(&section.step, |s| s.step)
        {
            Ok(idx) => self.sections[idx] = section,
            Err(idx) => self.sections.insert(idx, section),
        }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Highest step, 0 when empty
    pub fn max_step(&self) -> usize {
        self.sections.last().map(|s| s.step).unwrap_or(0)
    }

    pub fn get(&self, step: usize) -> Option<&SectionDescriptor> {
        self.sections
            .binary_search_by_key(&step, |s| s.step)
            .ok()
            .map(|idx| &self.sections[idx])
    }

    /// Resolve the offset of the section for `step`
    pub fn offset_of(&self, step: usize) -> Option<f64> {
        self.get(step).map(SectionDescriptor::offset)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionDescriptor> {
        self.sections.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_register_keeps_step_order() {
        let mut registry = SectionRegistry::new();
        registry.register(SectionDescriptor::new(2, "c", "C", || 200.0));
        registry.register(SectionDescriptor::new(0, "a", "A", || 0.0));
        registry.register(SectionDescriptor::new(1, "b", "B", || 100.0));

        let ids: Vec<&str> = registry.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(registry.max_step(), 2);
        assert_eq!(registry.offset_of(1), Some(100.0));
        assert_eq!(registry.offset_of(3), None);
    }

    #[test]
    fn test_register_replaces_same_step() {
        let mut registry = SectionRegistry::new();
        registry.register(SectionDescriptor::new(0, "old", "Old", || 0.0));
        registry.register(SectionDescriptor::new(0, "new", "New", || 5.0));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(0).map(|s| s.id.as_str()), Some("new"));
    }

    #[test]
    fn test_offsets_follow_viewport_height() {
        let height = Rc::new(Cell::new(40u16));
        let mut registry = SectionRegistry::new();
        for step in 0..3 {
            let height = Rc::clone(&height);
            registry.register(SectionDescriptor::new(step, "s", "S", move || {
                step as f64 * f64::from(height.get())
            }));
        }

        assert_eq!(registry.offset_of(2), Some(80.0));
        height.set(50);
        assert_eq!(registry.offset_of(2), Some(100.0));
    }

    #[test]
    fn test_is_active_tracks_current_step() {
        let section = SectionDescriptor::new(3, "ai", "AI Systems", || 0.0);
        assert!(section.is_active(3));
        assert!(!section.is_active(2));
    }
}
