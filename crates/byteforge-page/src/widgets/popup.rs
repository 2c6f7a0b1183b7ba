use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear},
    Frame,
};

use crate::theme::Theme;

pub struct PopupWidget;

impl PopupWidget {
    /// Clear a centered area, draw a titled border and return the inner area
    pub fn render_frame(
        frame: &mut Frame,
        title: &str,
        width: u16,
        height: u16,
        border: Color,
        theme: &Theme,
    ) -> Rect {
        let area = frame.area();

        let popup_width = width.min(area.width.saturating_sub(4));
        let popup_height = height.min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        // Clear the background area
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(format!(" {} ", title))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(theme.bg1));

        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);
        inner
    }
}

/// Helper function to create a centered rect
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
