use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use chronowheel::app::{AppState, Mode};
use crate::tui::{dialogs, views};

pub fn ui(f: &mut Frame, app: &AppState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.size());

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60),
            Constraint::Percentage(40),
        ])
        .split(main_chunks[1]);

    let legend_height = (app.categories.len() as u16 + 3).min(12);
    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10),
            Constraint::Length(legend_height),
            Constraint::Min(0),
        ])
        .split(content_chunks[1]);

    let title_text = format!(
        "chronowheel — {} — {} Mode",
        app.month.format("%B %Y"),
        match app.mode {
            Mode::Normal => "Normal",
            Mode::Insert => "Insert",
            Mode::Command => "Command",
        }
    );

    let title = Paragraph::new(title_text)
        .style(Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, main_chunks[0]);

    views::wheel::render(f, app, content_chunks[0]);
    views::dots::render(f, app, side_chunks[0]);
    views::legend::render(f, app, side_chunks[1]);
    views::event_list::render(f, app, side_chunks[2]);

    let status_text = if matches!(app.mode, Mode::Command) {
        app.command_buffer.to_string()
    } else if let Some(message) = &app.status_message {
        message.clone()
    } else {
        format!(
            "Events this month: {} | Total: {} | Press 'q' to quit, '?' for help",
            app.displayed_events().len(),
            app.events.len()
        )
    };

    let status_color = if matches!(app.mode, Mode::Command) {
        app.theme.command_mode
    } else {
        app.theme.status_bar
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(if matches!(app.mode, Mode::Command) {
            Alignment::Left
        } else {
            Alignment::Center
        })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, main_chunks[2]);

    if app.show_help {
        dialogs::help::render(f, app);
    }

    if app.event_form.is_some() {
        dialogs::event_form::render(f, app);
    }

    if app.category_form.is_some() {
        dialogs::category_form::render(f, app);
    }

    if app.glyph_picker.is_some() {
        dialogs::glyph_picker::render(f, app);
    }

    if app.clear_month_pending {
        dialogs::clear_confirmation::render(f, app);
    }
}
