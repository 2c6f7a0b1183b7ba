mod contact_modal;
mod popup;
mod section_view;
mod side_nav;
mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub use contact_modal::ContactModalWidget;
pub use popup::{centered_rect, PopupWidget};
pub use section_view::SectionViewWidget;
pub use side_nav::SideNavWidget;
pub use status_bar::StatusBarWidget;

/// Side navigation column width
const SIDE_NAV_WIDTH: u16 = 16;

/// Screen regions of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub sections: Rect,
    pub side_nav: Rect,
    pub status: Rect,
}

impl PageLayout {
    pub fn new(size: Rect) -> Self {
        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(SIDE_NAV_WIDTH)])
            .split(main_layout[0]);

        Self {
            sections: columns[0],
            side_nav: columns[1],
            status: main_layout[1],
        }
    }
}
