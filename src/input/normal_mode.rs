use chrono::Local;
use crossterm::event::KeyCode;

use crate::app::{Action, AppState, CategoryForm, EventForm, Mode};
use crate::ui::month_view::{first_of_month, next_month, prev_month};

/// Handles one Normal-mode key. Keys that change the collections or the
/// displayed month return the action for the session loop to dispatch;
/// keys that only touch UI chrome mutate the state directly.
pub fn handle_key(key: KeyCode, state: &mut AppState) -> Option<Action> {
    match key {
        KeyCode::Char('h') | KeyCode::Char('{') => {
            Some(Action::ChangeMonth(prev_month(state.month)))
        }
        KeyCode::Char('l') | KeyCode::Char('}') => {
            Some(Action::ChangeMonth(next_month(state.month)))
        }
        KeyCode::Char('t') => Some(Action::ChangeMonth(first_of_month(
            Local::now().date_naive(),
        ))),
        KeyCode::Char('j') => {
            state.move_event_selection_down();
            None
        }
        KeyCode::Char('k') => {
            state.move_event_selection_up();
            None
        }
        KeyCode::Char('a') => {
            enter_event_form(state);
            None
        }
        KeyCode::Char('c') => {
            enter_category_form(state);
            None
        }
        KeyCode::Char('x') => delete_selected_event(state),
        KeyCode::Char('X') => {
            request_clear_month(state);
            None
        }
        KeyCode::Char(':') => {
            enter_command_mode(state);
            None
        }
        KeyCode::Char('?') => {
            state.show_help = true;
            None
        }
        _ => None,
    }
}

fn enter_event_form(state: &mut AppState) {
    state.event_form = Some(EventForm::new(state.month));
    state.mode = Mode::Insert;
}

fn enter_category_form(state: &mut AppState) {
    state.category_form = Some(CategoryForm::new(state.categories.len()));
    state.mode = Mode::Insert;
}

fn delete_selected_event(state: &mut AppState) -> Option<Action> {
    state
        .selected_event()
        .map(|event| Action::DeleteEvent(event.id.clone()))
}

fn request_clear_month(state: &mut AppState) {
    if !state.displayed_events().is_empty() {
        state.clear_month_pending = true;
    }
}

fn enter_command_mode(state: &mut AppState) {
    state.mode = Mode::Command;
    state.command_buffer = ":".to_string();
}
