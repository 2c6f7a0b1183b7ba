use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;
use crate::contact_form::FormField;
use crate::navigator::NavKey;

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    /// Arrow/page key handed to the navigator
    Nav(NavKey),
    /// Wheel delta, positive scrolls down
    Wheel(f64),
    /// Digit shortcut: pick the side nav entry at this index
    SelectNav(usize),
    OpenContact,
    NextCta,
    ActivateCta,
    /// Left click at (column, row)
    Click(u16, u16),
    // Contact modal
    FormNext,
    FormPrev,
    FormInput(char),
    FormBackspace,
    FormCycle(bool),
    FormSubmit,
    CloseContact,
    None,
}

/// Map a crossterm key to the DOM-style code the navigator understands
pub fn nav_key(code: KeyCode) -> Option<NavKey> {
    match code {
        KeyCode::Down | KeyCode::Char('j') => Some(NavKey::ArrowDown),
        KeyCode::Up | KeyCode::Char('k') => Some(NavKey::ArrowUp),
        KeyCode::PageDown => Some(NavKey::PageDown),
        KeyCode::PageUp => Some(NavKey::PageUp),
        _ => None,
    }
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    if let Some(form) = &app.contact {
        return handle_form_mode(key, form.focus());
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::NONE) => Action::OpenContact,
        (KeyCode::Tab, _) => Action::NextCta,
        (KeyCode::Enter, _) => Action::ActivateCta,
        (KeyCode::Char(d @ '1'..='6'), KeyModifiers::NONE) => {
            Action::SelectNav(usize::from(d as u8 - b'1'))
        }
        (code, KeyModifiers::NONE) => nav_key(code).map(Action::Nav).unwrap_or(Action::None),
        _ => Action::None,
    }
}

/// Handle key events while the contact modal is open
fn handle_form_mode(key: KeyEvent, focus: FormField) -> Action {
    match key.code {
        KeyCode::Esc => Action::CloseContact,
        KeyCode::Tab | KeyCode::Down => Action::FormNext,
        KeyCode::BackTab | KeyCode::Up => Action::FormPrev,
        KeyCode::Enter if focus == FormField::Submit => Action::FormSubmit,
        KeyCode::Enter => Action::FormNext,
        KeyCode::Left if focus == FormField::Need => Action::FormCycle(false),
        KeyCode::Right if focus == FormField::Need => Action::FormCycle(true),
        KeyCode::Backspace => Action::FormBackspace,
        KeyCode::Char(c) if focus.is_text() => Action::FormInput(c),
        _ => Action::None,
    }
}

/// Handle a mouse event; one wheel notch reports `notch_delta`
pub fn handle_mouse_event(mouse: MouseEvent, notch_delta: f64) -> Action {
    match mouse.kind {
        MouseEventKind::ScrollDown => Action::Wheel(notch_delta),
        MouseEventKind::ScrollUp => Action::Wheel(-notch_delta),
        MouseEventKind::Down(MouseButton::Left) => Action::Click(mouse.column, mouse.row),
        _ => Action::None,
    }
}
