use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::App;
use crate::content::SectionContent;

/// Stacked full-screen sections seen through the scrolled viewport
pub struct SectionViewWidget;

impl SectionViewWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let height = i64::from(area.height);
        if height == 0 {
            return;
        }
        let offset = app.scroll_offset().round() as i64;

        for section in &app.sections {
            let top = section.step as i64 * height - offset;
            let Some((clip, skip)) = visible_slice(top, height) else {
                continue;
            };

            let rect = Rect::new(area.x, area.y + clip.0, area.width, clip.1);
            let lines = Self::section_lines(section, app, area.height);
            let bg = if section.step % 2 == 0 {
                app.theme.bg0
            } else {
                app.theme.bg1
            };

            let paragraph = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(Block::default().style(Style::default().bg(bg)))
                .scroll((skip, 0));
            frame.render_widget(paragraph, rect);
        }
    }

    fn section_lines<'a>(section: &'a SectionContent, app: &App, height: u16) -> Vec<Line<'a>> {
        let theme = &app.theme;
        let is_current = section.step == app.step();
        let reveal = app
            .timelines
            .get(section.step)
            .map(|t| t.eased())
            .unwrap_or(1.0);

        let mut content = vec![
            Line::from(Span::styled(
                section.eyebrow.to_uppercase(),
                Style::default().fg(theme.teal),
            )),
            Line::from(Span::styled(
                section.title,
                Style::default()
                    .fg(theme.emerald)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                section.headline,
                Style::default().fg(theme.fg1).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        let shown = revealed_lines(section.body.len(), reveal);
        for (idx, text) in section.body.iter().enumerate() {
            let line = if idx < shown {
                Line::from(Span::styled(*text, Style::default().fg(theme.fg0)))
            } else {
                Line::from("")
            };
            content.push(line);
        }

        content.push(Line::from(""));
        let mut ctas = Vec::new();
        for (idx, cta) in section.ctas.iter().enumerate() {
            if idx > 0 {
                ctas.push(Span::raw("   "));
            }
            let style = if is_current && idx == app.cta_focus {
                Style::default()
                    .fg(theme.bg0)
                    .bg(theme.emerald)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.emerald)
            };
            ctas.push(Span::styled(format!("[ {} ]", cta.label), style));
        }
        content.push(Line::from(ctas));

        let padding = (height as usize).saturating_sub(content.len()) / 2;
        let mut lines = vec![Line::from(""); padding];
        lines.extend(content);
        lines
    }
}

/// Lines of a body with `len` lines shown at entrance progress `reveal`
fn revealed_lines(len: usize, reveal: f64) -> usize {
    ((len as f64) * reveal.clamp(0.0, 1.0)).ceil() as usize
}

/// Part of a section starting at row `top` (relative to the viewport) that
/// falls inside a viewport of `height` rows
///
/// Returns `((y, rows), skip)`: where to draw, how many rows, and how many
/// of the section's own rows are scrolled off the top.
fn visible_slice(top: i64, height: i64) -> Option<((u16, u16), u16)> {
    let start = top.max(0);
    let end = (top + height).min(height);
    if end <= start {
        return None;
    }
    let skip = (start - top) as u16;
    Some(((start as u16, (end - start) as u16), skip))
}
