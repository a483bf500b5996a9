use crate::application::{App, AppMode};
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) && key == KeyCode::Char('c') {
            app.quit();
            return;
        }

        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key),
            AppMode::Adding => Self::handle_adding_mode(app, key, modifiers),
            AppMode::Editing => Self::handle_editing_mode(app, key, modifiers),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode) {
        app.status_message = None;

        match key {
            KeyCode::Char('a') | KeyCode::Char('+') | KeyCode::Insert => app.start_adding(),
            KeyCode::Char('e') | KeyCode::Enter | KeyCode::F(2) => app.start_editing(),
            KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
            KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => app.select_next(),
            KeyCode::Home | KeyCode::Char('g') => app.select_first(),
            KeyCode::End | KeyCode::Char('G') => app.select_last(),
            KeyCode::F(1) | KeyCode::Char('?') => app.show_help(),
            KeyCode::Char('q') | KeyCode::Esc => app.quit(),
            _ => {}
        }
    }

    fn handle_adding_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match key {
            KeyCode::Enter => app.submit_adding(),
            KeyCode::Esc => app.cancel_adding(),
            _ => Self::handle_form_key(app, key, modifiers),
        }
    }

    fn handle_editing_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match key {
            KeyCode::Enter => app.finish_editing(),
            KeyCode::Esc => app.cancel_editing(),
            _ => Self::handle_form_key(app, key, modifiers),
        }
    }

    fn handle_form_key(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match key {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => app.toggle_field(),
            KeyCode::Backspace => app.pop_char(),
            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => app.push_char(c),
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::F(1) => {
                app.close_help()
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Draft, Item};

    fn press(app: &mut App, key: KeyCode) {
        InputHandler::handle_key_event(app, key, KeyModifiers::NONE);
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn add_via_keys(app: &mut App, name: &str, quantity: &str) {
        press(app, KeyCode::Char('a'));
        type_text(app, name);
        press(app, KeyCode::Tab);
        type_text(app, quantity);
        press(app, KeyCode::Enter);
    }

    #[test]
    fn test_add_item_key_sequence() {
        let mut app = App::default();
        add_via_keys(&mut app, "Milk", "2");

        assert!(matches!(app.mode, AppMode::Normal));
        assert_eq!(app.store.items(), &[Item::new(1, "Milk", 2)]);
    }

    #[test]
    fn test_letters_in_dialog_are_text_not_commands() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "dq?e");

        assert!(matches!(app.mode, AppMode::Adding));
        assert!(!app.should_quit);
        assert_eq!(app.store.draft(), Some(&Draft::new("dq?e", "")));
    }

    #[test]
    fn test_escape_cancels_dialog() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Milk");
        press(&mut app, KeyCode::Esc);

        assert!(matches!(app.mode, AppMode::Normal));
        assert!(app.store.draft().is_none());
        assert!(app.store.is_empty());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_blank_submit_keeps_dialog_open() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Enter);

        assert!(matches!(app.mode, AppMode::Adding));
        assert_eq!(app.status_message.as_deref(), Some("Item name cannot be blank"));
    }

    #[test]
    fn test_edit_and_delete_key_sequence() {
        let mut app = App::default();
        add_via_keys(&mut app, "Milk", "2");
        add_via_keys(&mut app, "Eggs", "6");

        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Char('e'));
        assert!(matches!(app.mode, AppMode::Editing));
        assert!(app.store.is_editing(1));

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Backspace);
        type_text(&mut app, "3");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.store.get(1), Some(&Item::new(1, "Milk", 3)));

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.store.items(), &[Item::new(2, "Eggs", 6)]);
    }

    #[test]
    fn test_help_toggle() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('?'));
        assert!(matches!(app.mode, AppMode::Help));

        press(&mut app, KeyCode::Char('q'));
        assert!(matches!(app.mode, AppMode::Normal));
        assert!(!app.should_quit);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = App::default();
        press(&mut app, KeyCode::Char('a'));
        InputHandler::handle_key_event(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }
}
