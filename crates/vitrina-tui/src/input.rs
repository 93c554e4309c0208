use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Focus};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    JumpToTop,
    JumpToBottom,
    /// Smooth-scroll to a section by index
    JumpToSection(usize),
    ToggleMenu,
    CycleFocus,
    CarouselPrev,
    CarouselNext,
    SubmitForm,
    CloseOverlay, // Esc: close the menu
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    // The open menu captures keys: digits jump, Esc closes
    if app.menu_open {
        return match key.code {
            KeyCode::Esc => Action::CloseOverlay,
            KeyCode::Char('m') => Action::ToggleMenu,
            KeyCode::Char(c @ '1'..='9') => {
                Action::JumpToSection(c as usize - '1' as usize)
            }
            KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        };
    }

    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Arrow keys drive the carousel when it has focus, the page
        // otherwise; left/right always reach the carousel
        (KeyCode::Left, KeyModifiers::NONE) => Action::CarouselPrev,
        (KeyCode::Right, KeyModifiers::NONE) => Action::CarouselNext,
        (KeyCode::Char('h'), KeyModifiers::NONE) => Action::CarouselPrev,
        (KeyCode::Char('l'), KeyModifiers::NONE) => Action::CarouselNext,

        // Page scrolling
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Down, KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Up, KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::ScrollHalfPageDown,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ScrollHalfPageUp,
        (KeyCode::Char('g'), KeyModifiers::NONE) => Action::JumpToTop,
        (KeyCode::Char('G'), KeyModifiers::SHIFT) => Action::JumpToBottom,

        // Section shortcuts
        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
            Action::JumpToSection(c as usize - '1' as usize)
        }

        // Menu / focus
        (KeyCode::Char('m'), KeyModifiers::NONE) => Action::ToggleMenu,
        (KeyCode::Tab, KeyModifiers::NONE) => Action::CycleFocus,

        // Enter submits the form when it has focus
        (KeyCode::Enter, KeyModifiers::NONE) if app.focus == Focus::Form => Action::SubmitForm,

        (KeyCode::Esc, KeyModifiers::NONE) => Action::CloseOverlay,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Instant;
    use vitrina_core::AppConfig;

    fn app() -> App {
        App::new(Arc::new(AppConfig::default()), (80, 24), Instant::now())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrows_map_to_carousel() {
        let app = app();
        assert_eq!(handle_key_event(key(KeyCode::Left), &app), Action::CarouselPrev);
        assert_eq!(handle_key_event(key(KeyCode::Right), &app), Action::CarouselNext);
    }

    #[test]
    fn test_enter_submits_only_with_form_focus() {
        let mut app = app();
        assert_eq!(handle_key_event(key(KeyCode::Enter), &app), Action::None);
        app.focus = Focus::Form;
        assert_eq!(handle_key_event(key(KeyCode::Enter), &app), Action::SubmitForm);
    }

    #[test]
    fn test_open_menu_captures_keys() {
        let mut app = app();
        app.menu_open = true;
        assert_eq!(handle_key_event(key(KeyCode::Esc), &app), Action::CloseOverlay);
        assert_eq!(
            handle_key_event(key(KeyCode::Char('3')), &app),
            Action::JumpToSection(2)
        );
        assert_eq!(handle_key_event(key(KeyCode::Char('j')), &app), Action::None);
    }

    #[test]
    fn test_section_shortcuts() {
        let app = app();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('1')), &app),
            Action::JumpToSection(0)
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('5')), &app),
            Action::JumpToSection(4)
        );
    }
}
