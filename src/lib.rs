pub mod model;
pub mod input;
pub mod ui;
pub mod storage;
pub mod app;

pub use model::{Category, EventItem};
pub use app::{Action, AppState, Mode};

pub use input::{command_mode, normal_mode};
