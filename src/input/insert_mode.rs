use crossterm::event::KeyCode;

use crate::app::{AppState, CategoryField, FormField, GlyphPicker, PickerTarget};

/// Handles Insert-mode keys for whichever form is open. Submission
/// (Enter) and cancellation (Esc) are the session loop's concern; this
/// module only edits the form in place.
pub fn handle_key(key: KeyCode, state: &mut AppState) {
    if state.event_form.is_some() {
        handle_event_form_key(key, state);
    } else if state.category_form.is_some() {
        handle_category_form_key(key, state);
    }
}

fn handle_event_form_key(key: KeyCode, state: &mut AppState) {
    let category_count = state.categories.len();
    let Some(form) = state.event_form.as_mut() else {
        return;
    };

    match key {
        KeyCode::Tab => form.next_field(),
        KeyCode::BackTab => form.prev_field(),
        KeyCode::Left if form.active_field == FormField::Category => {
            form.cycle_category(false, category_count);
        }
        KeyCode::Right if form.active_field == FormField::Category => {
            form.cycle_category(true, category_count);
        }
        KeyCode::Backspace => match form.active_field {
            FormField::Date => {
                form.date_buffer.pop();
                form.date_touched = true;
            }
            FormField::Time => {
                form.time_buffer.pop();
                form.time_touched = true;
            }
            FormField::Category => {}
            FormField::Icon => {
                form.icon.pop();
            }
            FormField::Note => {
                form.note.pop();
            }
        },
        KeyCode::Char(c) => match form.active_field {
            FormField::Date => {
                if c.is_ascii_digit() || c == '-' {
                    if !form.date_touched {
                        form.date_buffer.clear();
                        form.date_touched = true;
                    }
                    if form.date_buffer.len() < 10 {
                        form.date_buffer.push(c);
                    }
                }
            }
            FormField::Time => {
                if c.is_ascii_digit() || c == ':' {
                    if !form.time_touched {
                        form.time_buffer.clear();
                        form.time_touched = true;
                    }
                    if form.time_buffer.len() < 5 {
                        form.time_buffer.push(c);
                    }
                }
            }
            FormField::Category => {}
            FormField::Icon => {
                // Space summons the glyph picker; any other character
                // becomes the icon directly.
                if c == ' ' {
                    state.glyph_picker = Some(GlyphPicker::new(PickerTarget::EventIcon));
                } else {
                    form.icon.push(c);
                }
            }
            FormField::Note => {
                form.note.push(c);
            }
        },
        _ => {}
    }
}

fn handle_category_form_key(key: KeyCode, state: &mut AppState) {
    let Some(form) = state.category_form.as_mut() else {
        return;
    };

    match key {
        KeyCode::Tab => form.next_field(),
        KeyCode::BackTab => form.prev_field(),
        KeyCode::Backspace => match form.active_field {
            CategoryField::Name => {
                form.name.pop();
            }
            CategoryField::Icon => {
                form.icon.pop();
            }
            CategoryField::Color => {
                form.color_buffer.pop();
            }
        },
        KeyCode::Char(c) => match form.active_field {
            CategoryField::Name => {
                form.name.push(c);
            }
            CategoryField::Icon => {
                if c == ' ' {
                    state.glyph_picker = Some(GlyphPicker::new(PickerTarget::CategoryIcon));
                } else {
                    form.icon.push(c);
                }
            }
            CategoryField::Color => {
                if c == '#' || c.is_ascii_hexdigit() {
                    if form.color_buffer.len() < 7 {
                        form.color_buffer.push(c);
                    }
                }
            }
        },
        _ => {}
    }
}
