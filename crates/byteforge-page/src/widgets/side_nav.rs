use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::app::App;
use crate::side_nav::{NavItem, SideNav};

pub struct SideNavWidget;

impl SideNavWidget {
    /// Rows the item list occupies inside `area`, vertically centered
    pub fn list_area(area: Rect, count: usize) -> Rect {
        let inner_height = area.height.saturating_sub(2);
        let rows = (count as u16).min(inner_height);
        let y = area.y + 1 + (inner_height - rows) / 2;
        Rect::new(area.x + 1, y, area.width.saturating_sub(2), rows)
    }

    /// Item drawn at (`column`, `row`), if any
    pub fn item_at<'a>(area: Rect, nav: &'a SideNav, column: u16, row: u16) -> Option<&'a NavItem> {
        let list = Self::list_area(area, nav.items().len());
        let inside = column >= list.x
            && column < list.x + list.width
            && row < list.y + list.height;
        if !inside {
            return None;
        }
        nav.item_at_row(list.y, row)
    }

    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let current = app.step();

        let block = Block::default()
            .borders(Borders::LEFT)
            .border_style(Style::default().fg(theme.grey0))
            .style(Style::default().bg(theme.bg0));
        frame.render_widget(block, area);

        let items: Vec<ListItem> = app
            .side_nav
            .items()
            .iter()
            .map(|item| {
                let is_current = app.side_nav.is_current(item, current);
                let (marker, style) = if is_current {
                    (
                        "▌",
                        Style::default()
                            .fg(theme.emerald)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    (" ", Style::default().fg(theme.grey1))
                };

                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(theme.emerald)),
                    Span::styled(format!("{} ", item.icon), style),
                    Span::styled(item.label.clone(), style),
                ]))
            })
            .collect();

        let list_area = Self::list_area(area, items.len());
        frame.render_widget(List::new(items), list_area);
    }
}
