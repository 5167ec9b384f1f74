use crate::ui::app::App;
use crate::ui::browse::BrowseIntent;
use crate::ui::editor::EditorIntent;
use crate::ui::page::Page;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Route a key press. Dialogs capture input first, then the search box,
/// then global bindings, then the current page.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if app.confirm().is_visible() {
        handle_confirm_key(app, key);
        return;
    }

    if app.editor().is_open() {
        handle_editor_key(app, key);
        return;
    }

    if app.is_searching() {
        handle_search_key(app, key);
        return;
    }

    if is_ctrl_char(key, 'r') {
        app.request_fetch();
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.request_quit();
            return;
        }
        KeyCode::Tab => {
            app.navigate(app.page().next());
            return;
        }
        KeyCode::BackTab => {
            app.navigate(app.page().prev());
            return;
        }
        KeyCode::Esc => {
            app.dismiss_notification();
            return;
        }
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            if let Some(page) = ch.to_digit(10).and_then(Page::from_digit) {
                app.navigate(page);
            }
            return;
        }
        _ => {}
    }

    match app.page() {
        Page::Catalog => {
            handle_list_key(app, key);
        }
        Page::Admin => {
            if !handle_list_key(app, key) {
                handle_admin_key(app, key);
            }
        }
        Page::Cart => {
            if key.code == KeyCode::Enter {
                app.navigate(Page::Catalog);
            }
        }
        Page::Profile => match key.code {
            KeyCode::Left => app.cycle_profile_tab(false),
            KeyCode::Right => app.cycle_profile_tab(true),
            _ => {}
        },
        Page::Home => {
            if key.code == KeyCode::Enter {
                app.navigate(Page::Catalog);
            }
        }
    }
}

fn handle_confirm_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            app.accept_delete();
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_delete(),
        _ => {}
    }
}

fn handle_editor_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.dispatch_editor(EditorIntent::Close),
        KeyCode::Enter => {
            app.submit_editor();
        }
        KeyCode::Tab | KeyCode::Down => app.dispatch_editor(EditorIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_editor(EditorIntent::FocusPrev),
        KeyCode::Left => app.dispatch_editor(EditorIntent::CycleRarity { forward: false }),
        KeyCode::Right => app.dispatch_editor(EditorIntent::CycleRarity { forward: true }),
        KeyCode::Backspace => app.dispatch_editor(EditorIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_editor(EditorIntent::Input(ch));
        }
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.dispatch_browse(BrowseIntent::EndSearch),
        KeyCode::Backspace => app.dispatch_browse(BrowseIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_browse(BrowseIntent::Input(ch));
        }
        _ => {}
    }
}

/// Bindings shared by the catalog and admin lists. Returns true if handled.
fn handle_list_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('/') => app.dispatch_browse(BrowseIntent::StartSearch),
        KeyCode::Char('r') => app.dispatch_browse(BrowseIntent::CycleRarity),
        KeyCode::Char('s') => app.dispatch_browse(BrowseIntent::CycleSort),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(false),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(true),
        _ => return false,
    }
    true
}

fn handle_admin_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('n') => app.open_create(),
        KeyCode::Char('e') | KeyCode::Enter => app.open_edit_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.ask_delete_selected(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
