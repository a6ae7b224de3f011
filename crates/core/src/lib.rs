pub mod commands;
pub mod form;

pub use commands::LedEvent;
pub use form::{ControlForm, DEFAULT_BRIGHTNESS, DEFAULT_GAIN};
