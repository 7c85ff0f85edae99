//! UI module - text presentation for the terminal game

pub mod display;
pub mod input;
pub mod state;

pub use input::{parse_intent, Intent};
pub use state::{GameUI, LogCategory, LogEntry};
