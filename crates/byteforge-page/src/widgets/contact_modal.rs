use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::contact_form::{ContactForm, FormField, FormStatus};
use crate::theme::Theme;
use crate::widgets::popup::PopupWidget;

const LABEL_WIDTH: usize = 19;

pub struct ContactModalWidget;

impl ContactModalWidget {
    pub fn render(frame: &mut Frame, form: &ContactForm, theme: &Theme) {
        let border = match form.status() {
            FormStatus::Failed(_) => theme.error,
            FormStatus::Sent { .. } => theme.success,
            _ => theme.accent,
        };
        let inner = PopupWidget::render_frame(frame, "Contact ByteForge", 64, 18, border, theme);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),  // Source
                Constraint::Length(FormField::ORDER.len() as u16), // Fields
                Constraint::Length(1),  // Spacer
                Constraint::Min(2),     // Status
                Constraint::Length(1),  // Hint
            ])
            .split(inner);

        let source = Paragraph::new(Line::from(vec![
            Span::styled("From: ", Style::default().fg(theme.grey1)),
            Span::styled(form.source().to_string(), Style::default().fg(theme.teal)),
        ]));
        frame.render_widget(source, chunks[0]);

        let value_width = (inner.width as usize).saturating_sub(LABEL_WIDTH + 2);
        let rows: Vec<Line> = FormField::ORDER
            .iter()
            .map(|field| Self::field_line(form, *field, value_width, theme))
            .collect();
        frame.render_widget(Paragraph::new(rows), chunks[1]);

        let status = match form.status() {
            FormStatus::Editing => Line::from(""),
            FormStatus::Sending => Line::from(Span::styled(
                "Sending...",
                Style::default().fg(theme.gold),
            )),
            FormStatus::Sent { .. } => Line::from(Span::styled(
                "Sent! We'll reply within one business day.",
                Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
            )),
            FormStatus::Failed(error) => Line::from(Span::styled(
                error.clone(),
                Style::default().fg(theme.error),
            )),
        };
        frame.render_widget(Paragraph::new(status).wrap(Wrap { trim: true }), chunks[3]);

        let hint = Paragraph::new(Line::from(Span::styled(
            "Tab/Shift-Tab move  ←/→ change  Enter send  Esc close",
            Style::default().fg(theme.grey1),
        )));
        frame.render_widget(hint, chunks[4]);
    }

    fn field_line<'a>(
        form: &'a ContactForm,
        field: FormField,
        width: usize,
        theme: &Theme,
    ) -> Line<'a> {
        let focused = form.focus() == field;
        let label_style = if focused {
            Style::default().fg(theme.emerald).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.grey1)
        };
        let value_style = if focused {
            Style::default().fg(theme.fg1).bg(theme.selection)
        } else {
            Style::default().fg(theme.fg0)
        };

        match field {
            FormField::Submit => {
                let label = if form.is_sending() { "[ Sending... ]" } else { "[ Send ]" };
                let style = if focused {
                    Style::default()
                        .fg(theme.bg0)
                        .bg(theme.emerald)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.emerald)
                };
                Line::from(vec![
                    Span::raw(" ".repeat(LABEL_WIDTH + 2)),
                    Span::styled(label, style),
                ])
            }
            FormField::Need => Line::from(vec![
                Span::styled(format!("{:<w$}: ", field.label(), w = LABEL_WIDTH), label_style),
                Span::styled(format!("‹ {} ›", form.need.label()), value_style),
            ]),
            _ => {
                let value = form.value(field).unwrap_or_default();
                let cursor = if focused { "▏" } else { "" };
                let shown = tail_fit(value, width.saturating_sub(1));
                Line::from(vec![
                    Span::styled(format!("{:<w$}: ", field.label(), w = LABEL_WIDTH), label_style),
                    Span::styled(format!("{}{}", shown, cursor), value_style),
                ])
            }
        }
    }
}

/// Longest suffix of `s` that fits in `width` terminal columns
fn tail_fit(s: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = s.len();
    for (idx, c) in s.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &s[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_fit_ascii() {
        assert_eq!(tail_fit("hello", 10), "hello");
        assert_eq!(tail_fit("hello world", 5), "world");
        assert_eq!(tail_fit("abc", 0), "");
    }

    #[test]
    fn test_tail_fit_wide_chars() {
        // Each CJK character is two columns wide
        assert_eq!(tail_fit("日本語", 4), "本語");
        assert_eq!(tail_fit("日本語", 5), "本語");
    }
}
