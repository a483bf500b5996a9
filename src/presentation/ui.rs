use crate::application::{App, AppMode};
use crate::domain::{Draft, FormField, Item};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

const HEADER_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 3;
const DIALOG_WIDTH: u16 = 44;
const DIALOG_HEIGHT: u16 = 9;

/// Number of list rows that fit in a terminal of the given height.
pub fn list_viewport_rows(terminal_height: u16) -> usize {
    // The list block's borders take two rows.
    terminal_height.saturating_sub(HEADER_HEIGHT + STATUS_HEIGHT + 2) as usize
}

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_list(f, app, chunks[1]);
    render_status_bar(f, app, chunks[2]);

    match app.mode {
        AppMode::Adding => {
            if let Some(draft) = app.store.draft() {
                render_add_dialog(f, draft, app.focus);
            }
        }
        AppMode::Help => render_help_popup(f),
        AppMode::Normal | AppMode::Editing => {}
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!(
        "{} | {} items, {} total | a: Add Item",
        app.config.ui.title,
        app.store.len(),
        app.store.total_quantity()
    ))
    .style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn render_list(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Items")
        .border_style(Style::default().fg(Color::Rgb(0x01, 0x87, 0x86)));

    if app.store.is_empty() {
        let hint = Paragraph::new("Nothing on the list yet. Press 'a' to add an item.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(hint, area);
        return;
    }

    let visible_rows = area.height.saturating_sub(2) as usize;
    let rows: Vec<ListItem> = app
        .store
        .items()
        .iter()
        .enumerate()
        .skip(app.scroll)
        .take(visible_rows)
        .map(|(index, item)| {
            let selected = index == app.selected;
            if app.store.is_editing(item.id) && matches!(app.mode, AppMode::Editing) {
                ListItem::new(edit_row(app, &app.edit_form))
            } else {
                ListItem::new(item_row(app, item, selected))
            }
        })
        .collect();

    f.render_widget(List::new(rows).block(block), area);
}

fn item_row<'a>(app: &App, item: &'a Item, selected: bool) -> Line<'a> {
    let style = if selected {
        Style::default().bg(Color::Blue).fg(Color::White)
    } else {
        Style::default()
    };

    let mut spans = Vec::new();
    if app.config.ui.show_ids {
        spans.push(Span::styled(format!("#{:<4}", item.id), style.fg(Color::Yellow)));
    }
    spans.push(Span::styled(format!(" {:<24}", item.name), style));
    spans.push(Span::styled(format!(" x{}", item.quantity), style.add_modifier(Modifier::BOLD)));
    Line::from(spans)
}

fn edit_row<'a>(app: &App, form: &'a Draft) -> Line<'a> {
    Line::from(vec![
        Span::raw(" Name: "),
        Span::styled(&form.name, field_style(app.focus == FormField::Name)),
        Span::raw("  Qty: "),
        Span::styled(&form.quantity, field_style(app.focus == FormField::Quantity)),
        Span::styled("  [Enter] Save  [Esc] Cancel", Style::default().fg(Color::DarkGray)),
    ])
}

fn field_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::LightGreen)
            .add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default().fg(Color::Green).add_modifier(Modifier::UNDERLINED)
    }
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let text = match (&app.status_message, app.mode) {
        (Some(status), _) => status.clone(),
        (None, AppMode::Normal) => {
            "a: add | e/Enter: edit | d: delete | ↑↓/jk: move | ?: help | q: quit".to_string()
        }
        (None, AppMode::Adding) => {
            "Adding item (Tab: switch field, Enter to add, Esc to cancel)".to_string()
        }
        (None, AppMode::Editing) => {
            "Editing item (Tab: switch field, Enter to save, Esc to cancel)".to_string()
        }
        (None, AppMode::Help) => "Esc/q: close help".to_string(),
    };

    let status = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.mode {
            AppMode::Normal => Style::default(),
            AppMode::Adding => Style::default().fg(Color::Yellow),
            AppMode::Editing => Style::default().fg(Color::Green),
            AppMode::Help => Style::default().fg(Color::Cyan),
        });
    f.render_widget(status, area);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_add_dialog(f: &mut Frame, draft: &Draft, focus: FormField) {
    let popup_area = centered_rect(f.area(), DIALOG_WIDTH, DIALOG_HEIGHT);
    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Add Shopping Item")
        .style(Style::default().fg(Color::White));
    let inner = block.inner(popup_area);

    let label = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(Span::styled("Name", label)),
        Line::from(vec![
            Span::raw("> "),
            Span::styled(draft.name.as_str(), field_style(focus == FormField::Name)),
        ]),
        Line::from(Span::styled("Quantity", label)),
        Line::from(vec![
            Span::raw("> "),
            Span::styled(draft.quantity.as_str(), field_style(focus == FormField::Quantity)),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled("[Enter] Add", Style::default().fg(Color::Green)),
            Span::raw("    "),
            Span::styled("[Esc] Cancel", Style::default().fg(Color::Red)),
        ]),
    ];

    f.render_widget(Paragraph::new(lines).block(block), popup_area);

    let (row, text) = match focus {
        FormField::Name => (1, &draft.name),
        FormField::Quantity => (3, &draft.quantity),
    };
    if inner.width > 2 && inner.height > row {
        let len = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        let cursor_x = inner.x.saturating_add(2).saturating_add(len);
        f.set_cursor_position((cursor_x.min(inner.right() - 1), inner.y + row));
    }
}

fn render_help_popup(f: &mut Frame) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_widget = Paragraph::new(HELP_TEXT)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Keys")
                .style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

const HELP_TEXT: &str = "\
=== LIST ===
a / + / Insert     Add Item
e / Enter / F2     Edit selected item
d / Delete         Delete selected item
Arrow keys / jk    Move selection
Home/End / g/G     First / last item
? / F1             Show this help
q / Esc            Quit

=== ADD DIALOG AND EDIT ROW ===
Tab / Up / Down    Switch between name and quantity
Backspace          Erase last character
Enter              Add or save
Esc                Cancel

Ctrl+C quits from anywhere.";
