mod session;
mod presentation;
mod sample_events;
mod views;
mod dialogs;

pub use session::run_tui;
