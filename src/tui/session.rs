use std::io;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use chronowheel::{
    app::{Action, AppState, Mode},
    input::{command_mode, insert_mode, normal_mode, picker_mode},
    storage::{Config, StateStore},
    ui::{svg, theme::Theme},
};
use crate::tui::{presentation::ui, sample_events::add_sample_events};

// The width clamp works in device pixels; a terminal cell is taken as a
// nominal 8 px, and the wheel pane gets 60% of the frame.
const CELL_PIXEL_WIDTH: u32 = 8;

fn observed_width(total_cells: u16) -> u32 {
    total_cells as u32 * CELL_PIXEL_WIDTH * 60 / 100
}

pub fn run_tui(sample: bool) -> Result<(), io::Error> {
    let config = Config::load_or_create()
        .map_err(|e| io::Error::other(e.to_string()))?;

    let store = match &config.storage.data_dir {
        Some(dir) => StateStore::at_dir(dir),
        None => StateStore::at_dir(StateStore::default_dir()),
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let theme = Theme::get_by_name(&config.ui.theme);
    let mut app = AppState::from_persisted(store.load()).with_theme(theme);

    if sample {
        add_sample_events(&mut app);
        store.save(&app.persisted());
    }

    let size = terminal.size()?;
    app.apply(Action::Resize(observed_width(size.width)));

    let res = run_app(&mut terminal, &mut app, &store, &config);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    store: &StateStore,
    config: &Config,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        match event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => match app.mode {
                Mode::Normal => {
                    if app.show_help {
                        handle_help_keys(key.code, app);
                    } else if app.clear_month_pending {
                        handle_clear_confirmation(key.code, app, store);
                    } else {
                        match key.code {
                            KeyCode::Char('q') => return Ok(()),
                            KeyCode::Char('e') => export_chart(app, None, config),
                            code => dispatch(normal_mode::handle_key(code, app), app, store),
                        }
                    }
                }
                Mode::Insert => {
                    if app.glyph_picker.is_some() {
                        picker_mode::handle_key(key.code, app);
                    } else {
                        handle_insert_mode(key.code, app, store);
                    }
                }
                Mode::Command => {
                    if handle_command_mode(key.code, app, store, config) {
                        return Ok(());
                    }
                }
            },
            TermEvent::Resize(width, _) => {
                app.apply(Action::Resize(observed_width(width)));
            }
            _ => {}
        }
    }
}

/// Applies an action and persists when the collections changed — the
/// explicit save step after every state transition that needs one.
fn dispatch(action: Option<Action>, app: &mut AppState, store: &StateStore) {
    if let Some(action) = action
        && app.apply(action)
    {
        store.save(&app.persisted());
    }
}

fn handle_help_keys(code: KeyCode, app: &mut AppState) {
    match code {
        KeyCode::Char('j') => {
            app.help_scroll = app.help_scroll.saturating_add(1);
        }
        KeyCode::Char('k') => {
            app.help_scroll = app.help_scroll.saturating_sub(1);
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            app.show_help = false;
            app.help_scroll = 0;
        }
        _ => {}
    }
}

fn handle_clear_confirmation(code: KeyCode, app: &mut AppState, store: &StateStore) {
    match code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            let month_label = app.month.format("%B %Y").to_string();
            app.clear_month_pending = false;
            tracing::info!("Clearing all events in {}", month_label);
            if app.apply(Action::ClearMonth) {
                store.save(&app.persisted());
                app.status_message = Some(format!("Cleared {}", month_label));
            }
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.clear_month_pending = false;
        }
        _ => {}
    }
}

fn handle_insert_mode(code: KeyCode, app: &mut AppState, store: &StateStore) {
    match code {
        KeyCode::Esc => {
            app.event_form = None;
            app.category_form = None;
            app.mode = Mode::Normal;
        }
        KeyCode::Enter => {
            if let Some(form) = &app.event_form {
                // A malformed submission is a silent no-op; the form
                // stays open with the typed input intact.
                if let Some(payload) = form.build(&app.categories) {
                    app.event_form = None;
                    app.mode = Mode::Normal;
                    dispatch(Some(Action::AddEvent(payload)), app, store);
                } else {
                    tracing::debug!("Ignoring malformed event submission");
                }
            } else if let Some(form) = &app.category_form {
                if let Some(payload) = form.build() {
                    app.category_form = None;
                    app.mode = Mode::Normal;
                    dispatch(Some(Action::AddCategory(payload)), app, store);
                } else {
                    tracing::debug!("Ignoring malformed category submission");
                }
            }
        }
        code => insert_mode::handle_key(code, app),
    }
}

/// Returns true when the session should end.
fn handle_command_mode(
    code: KeyCode,
    app: &mut AppState,
    store: &StateStore,
    config: &Config,
) -> bool {
    match code {
        KeyCode::Enter => {
            let command_text = app.command_buffer.clone();
            app.command_buffer.clear();
            app.mode = Mode::Normal;

            match command_mode::parse_command(&command_text) {
                command_mode::Command::Quit => return true,
                command_mode::Command::Help => {
                    app.show_help = true;
                }
                command_mode::Command::Goto(month) => {
                    dispatch(Some(Action::ChangeMonth(month)), app, store);
                }
                command_mode::Command::Theme(name) => {
                    app.theme = Theme::get_by_name(&name);
                }
                command_mode::Command::Clear => {
                    if !app.displayed_events().is_empty() {
                        app.clear_month_pending = true;
                    }
                }
                command_mode::Command::Export(path) => {
                    export_chart(app, path, config);
                }
                command_mode::Command::Error(message) => {
                    app.status_message = Some(message);
                }
            }
            false
        }
        KeyCode::Esc => {
            app.command_buffer.clear();
            app.mode = Mode::Normal;
            false
        }
        KeyCode::Backspace => {
            app.command_buffer.pop();
            false
        }
        KeyCode::Char(c) => {
            app.command_buffer.push(c);
            false
        }
        _ => false,
    }
}

fn export_chart(app: &mut AppState, path: Option<String>, config: &Config) {
    let path = path.unwrap_or_else(|| svg::default_export_name(app.month));
    let document =
        svg::render_month_svg(&app.categories, &app.events, app.month, config.chart.export_width);

    match std::fs::write(&path, document) {
        Ok(()) => {
            tracing::info!("Exported chart to {}", path);
            app.status_message = Some(format!("Exported {}", path));
        }
        Err(e) => {
            tracing::error!("Chart export failed: {}", e);
            app.status_message = Some(format!("Export failed: {}", e));
        }
    }
}
