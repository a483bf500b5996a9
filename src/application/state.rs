//! Application state management for the shopping list screen.
//!
//! This module contains the screen state and mode management that sit
//! between the key handler and the list store.

use crate::domain::{Draft, FormField, Item, ItemId, ListStore, Rejected};
use crate::infrastructure::AppConfig;
use tracing::warn;

/// Represents the current mode of the application.
///
/// The mode decides how key presses are interpreted and which overlays are
/// drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Browsing the list - arrow keys move the selection
    Normal,
    /// The "add item" dialog is open
    Adding,
    /// The selected row is being edited in place
    Editing,
    /// Help screen is displayed
    Help,
}

/// Screen state: the list itself plus everything needed to draw it.
///
/// # Examples
///
/// ```
/// use shoplist::application::{App, AppMode};
///
/// let app = App::default();
/// assert!(matches!(app.mode, AppMode::Normal));
/// assert!(app.store.is_empty());
/// ```
#[derive(Debug)]
pub struct App {
    /// The shopping list
    pub store: ListStore,
    /// Current application mode
    pub mode: AppMode,
    /// Index of the selected row
    pub selected: usize,
    /// First row visible in the list viewport
    pub scroll: usize,
    /// Number of rows the list viewport can show
    pub viewport_rows: usize,
    /// Field receiving typed text in the add dialog or the edit row
    pub focus: FormField,
    /// Text of the row being edited
    pub edit_form: Draft,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// Loaded configuration
    pub config: AppConfig,
    /// Set once the user asks to leave
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self {
            store: ListStore::default(),
            mode: AppMode::Normal,
            selected: 0,
            scroll: 0,
            viewport_rows: 20,
            focus: FormField::Name,
            edit_form: Draft::default(),
            status_message: None,
            config,
            should_quit: false,
        }
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.store.items().get(self.selected)
    }

    fn selected_id(&self) -> Option<ItemId> {
        self.selected_item().map(|item| item.id)
    }

    fn reject(&mut self, reason: Rejected) {
        warn!(event = "app.input_rejected", mode = ?self.mode, reason = %reason);
        self.status_message = Some(reason.to_string());
    }

    /// Opens the add dialog with an empty form.
    pub fn start_adding(&mut self) {
        self.store.open_draft();
        self.focus = FormField::Name;
        self.mode = AppMode::Adding;
        self.status_message = None;
    }

    /// Submits the add dialog.
    ///
    /// A rejected form keeps the dialog open and shows why.
    pub fn submit_adding(&mut self) {
        match self.store.submit_draft() {
            Ok(item) => {
                self.mode = AppMode::Normal;
                self.selected = self.store.len() - 1;
                self.ensure_selection_visible();
                self.status_message = Some(format!("Added {} x{}", item.name, item.quantity));
            }
            Err(reason) => self.reject(reason),
        }
    }

    /// Closes the add dialog and throws its text away.
    pub fn cancel_adding(&mut self) {
        self.store.cancel_draft();
        self.mode = AppMode::Normal;
        self.focus = FormField::Name;
        self.status_message = None;
    }

    /// Puts the selected row into edit mode, loading its current values.
    pub fn start_editing(&mut self) {
        let Some(item) = self.selected_item().cloned() else {
            return;
        };
        self.store.begin_edit(item.id);
        self.edit_form = Draft::new(item.name, item.quantity.to_string());
        self.focus = FormField::Name;
        self.mode = AppMode::Editing;
        self.status_message = None;
    }

    /// Saves the edit row.
    ///
    /// With `strict_edit_quantity` a bad quantity keeps the row in edit
    /// mode; otherwise it is saved as 1.
    pub fn finish_editing(&mut self) {
        let Some(id) = self.store.editing() else {
            self.mode = AppMode::Normal;
            return;
        };
        let Draft { name, quantity } = self.edit_form.clone();

        let updated = if self.config.behavior.strict_edit_quantity {
            match self.store.commit_edit_strict(id, &name, &quantity) {
                Ok(updated) => updated,
                Err(reason) => {
                    self.reject(reason);
                    return;
                }
            }
        } else {
            self.store.commit_edit(id, &name, &quantity)
        };

        self.status_message = updated.map(|item| format!("Updated {} x{}", item.name, item.quantity));
        self.edit_form = Draft::default();
        self.focus = FormField::Name;
        self.mode = AppMode::Normal;
    }

    /// Leaves edit mode without saving.
    pub fn cancel_editing(&mut self) {
        self.store.cancel_edit();
        self.edit_form = Draft::default();
        self.focus = FormField::Name;
        self.mode = AppMode::Normal;
    }

    /// Deletes the selected row and keeps the selection within the list.
    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        if let Some(item) = self.store.delete(id) {
            self.status_message = Some(format!("Deleted {}", item.name));
        }
        self.clamp_selection();
    }

    fn active_form_mut(&mut self) -> Option<&mut Draft> {
        match self.mode {
            AppMode::Adding => self.store.draft_mut(),
            AppMode::Editing => Some(&mut self.edit_form),
            _ => None,
        }
    }

    /// Form shown by the current mode, if any.
    pub fn active_form(&self) -> Option<&Draft> {
        match self.mode {
            AppMode::Adding => self.store.draft(),
            AppMode::Editing => Some(&self.edit_form),
            _ => None,
        }
    }

    pub fn push_char(&mut self, c: char) {
        let focus = self.focus;
        if let Some(form) = self.active_form_mut() {
            form.field_mut(focus).push(c);
        }
    }

    pub fn pop_char(&mut self) {
        let focus = self.focus;
        if let Some(form) = self.active_form_mut() {
            form.field_mut(focus).pop();
        }
    }

    pub fn toggle_field(&mut self) {
        self.focus = self.focus.toggled();
    }

    pub fn show_help(&mut self) {
        self.mode = AppMode::Help;
    }

    pub fn close_help(&mut self) {
        self.mode = AppMode::Normal;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.store.len() {
            self.selected += 1;
            self.ensure_selection_visible();
        }
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.ensure_selection_visible();
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
        self.ensure_selection_visible();
    }

    pub fn select_last(&mut self) {
        self.selected = self.store.len().saturating_sub(1);
        self.ensure_selection_visible();
    }

    fn clamp_selection(&mut self) {
        if self.selected >= self.store.len() {
            self.selected = self.store.len().saturating_sub(1);
        }
        self.ensure_selection_visible();
    }

    /// Updates the viewport size for proper scrolling calculations.
    pub fn update_viewport_size(&mut self, rows: usize) {
        self.viewport_rows = rows.max(1);
        self.ensure_selection_visible();
    }

    /// Ensures the selected row is visible by adjusting the scroll position.
    pub fn ensure_selection_visible(&mut self) {
        if self.selected < self.scroll {
            self.scroll = self.selected;
        } else if self.selected >= self.scroll + self.viewport_rows {
            self.scroll = self.selected + 1 - self.viewport_rows;
        }
        let max_scroll = self.store.len().saturating_sub(self.viewport_rows);
        self.scroll = self.scroll.min(max_scroll);
    }
}
