//! Side navigation indicator
//!
//! Lists every step, highlights the current one and turns a selection into
//! a step-change request on the signal bus. It never touches the navigator
//! directly.

use crate::signals::SignalSender;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub step: usize,
    pub label: String,
    /// Short opaque glyph shown next to the label
    pub icon: String,
}

impl NavItem {
    pub fn new(step: usize, label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            step,
            label: label.into(),
            icon: icon.into(),
        }
    }
}

pub struct SideNav {
    items: Vec<NavItem>,
    signals: SignalSender,
}

impl SideNav {
    pub fn new(items: Vec<NavItem>, signals: SignalSender) -> Self {
        Self { items, signals }
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    /// Whether `item` is the highlighted entry for `current_step`
    pub fn is_current(&self, item: &NavItem, current_step: usize) -> bool {
        item.step == current_step
    }

    /// Request the step behind `item`
    pub fn select(&self, item: &NavItem) {
        self.signals.goto_step(item.step as i64);
    }

    /// Request the step of the item at `index`, if there is one
    pub fn select_index(&self, index: usize) -> bool {
        match self.items.get(index) {
            Some(item) => {
                self.select(item);
                true
            }
            None => false,
        }
    }

    /// Map a row inside the rendered list to its item
    ///
    /// Items are drawn one per row starting at `first_row`.
    pub fn item_at_row(&self, first_row: u16, row: u16) -> Option<&NavItem> {
        let index = row.checked_sub(first_row)? as usize;
        self.items.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::{PageSignal, SignalBus};

    fn items() -> Vec<NavItem> {
        vec![
            NavItem::new(0, "Home", "◆"),
            NavItem::new(1, "Services", "▣"),
            NavItem::new(2, "Web & App", "◧"),
        ]
    }

    #[test]
    fn test_select_emits_goto_step() {
        let mut bus = SignalBus::new();
        let nav = SideNav::new(items(), bus.sender());

        nav.select(&nav.items()[2].clone());
        assert!(nav.select_index(1));
        assert!(!nav.select_index(9));

        assert_eq!(
            bus.drain(),
            vec![
                PageSignal::GotoStep { step: 2 },
                PageSignal::GotoStep { step: 1 },
            ]
        );
    }

    #[test]
    fn test_current_highlight() {
        let bus = SignalBus::new();
        let nav = SideNav::new(items(), bus.sender());
        let current: Vec<bool> = nav.items().iter().map(|i| nav.is_current(i, 1)).collect();
        assert_eq!(current, vec![false, true, false]);
    }

    #[test]
    fn test_item_at_row() {
        let bus = SignalBus::new();
        let nav = SideNav::new(items(), bus.sender());
        assert_eq!(nav.item_at_row(4, 3), None);
        assert_eq!(nav.item_at_row(4, 4).map(|i| i.step), Some(0));
        assert_eq!(nav.item_at_row(4, 6).map(|i| i.step), Some(2));
        assert_eq!(nav.item_at_row(4, 7), None);
    }
}
