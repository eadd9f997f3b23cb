use crossterm::event::KeyCode;

use crate::app::{AppState, PickerTarget};

/// Handles keys while the glyph picker overlays a form. Enter assigns
/// the highlighted glyph to whichever form field summoned the picker.
pub fn handle_key(key: KeyCode, state: &mut AppState) {
    let Some(picker) = state.glyph_picker.as_mut() else {
        return;
    };

    match key {
        KeyCode::Char('h') | KeyCode::Left => picker.move_left(),
        KeyCode::Char('l') | KeyCode::Right => picker.move_right(),
        KeyCode::Char('k') | KeyCode::Up => picker.move_up(),
        KeyCode::Char('j') | KeyCode::Down => picker.move_down(),
        KeyCode::Enter => {
            let glyph = picker.current().to_string();
            let target = picker.target;
            state.glyph_picker = None;

            match target {
                PickerTarget::EventIcon => {
                    if let Some(form) = state.event_form.as_mut() {
                        form.icon = glyph;
                    }
                }
                PickerTarget::CategoryIcon => {
                    if let Some(form) = state.category_form.as_mut() {
                        form.icon = glyph;
                    }
                }
            }
        }
        KeyCode::Esc => {
            state.glyph_picker = None;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{CategoryForm, EventForm, GlyphPicker, GLYPHS};
    use chrono::NaiveDate;

    fn state_with_picker(target: PickerTarget) -> AppState {
        let mut state = AppState::new();
        let month = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        state.event_form = Some(EventForm::new(month));
        state.category_form = Some(CategoryForm::new(0));
        state.glyph_picker = Some(GlyphPicker::new(target));
        state
    }

    #[test]
    fn navigation_moves_the_highlight() {
        let mut state = state_with_picker(PickerTarget::EventIcon);

        handle_key(KeyCode::Char('j'), &mut state);
        handle_key(KeyCode::Char('l'), &mut state);

        assert_eq!(state.glyph_picker.as_ref().unwrap().selected, 9);
    }

    #[test]
    fn enter_assigns_glyph_to_the_event_form() {
        let mut state = state_with_picker(PickerTarget::EventIcon);
        state.glyph_picker.as_mut().unwrap().selected = 2;

        handle_key(KeyCode::Enter, &mut state);

        assert!(state.glyph_picker.is_none());
        assert_eq!(state.event_form.as_ref().unwrap().icon, GLYPHS[2]);
    }

    #[test]
    fn enter_assigns_glyph_to_the_category_form() {
        let mut state = state_with_picker(PickerTarget::CategoryIcon);
        state.glyph_picker.as_mut().unwrap().selected = 5;

        handle_key(KeyCode::Enter, &mut state);

        assert_eq!(state.category_form.as_ref().unwrap().icon, GLYPHS[5]);
        // The event form keeps whatever icon it had.
        assert_eq!(state.event_form.as_ref().unwrap().icon, "");
    }

    #[test]
    fn esc_closes_the_picker_without_assigning() {
        let mut state = state_with_picker(PickerTarget::EventIcon);
        state.glyph_picker.as_mut().unwrap().selected = 4;

        handle_key(KeyCode::Esc, &mut state);

        assert!(state.glyph_picker.is_none());
        assert_eq!(state.event_form.as_ref().unwrap().icon, "");
    }
}
