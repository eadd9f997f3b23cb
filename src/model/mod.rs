pub mod category;
pub mod event;

pub use category::{Category, FALLBACK_ICON, default_categories};
pub use event::{EventDisplay, EventItem, resolve_display};
