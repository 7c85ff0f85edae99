pub mod config;
pub mod error;
pub mod types;

pub use config::GameConfig;
pub use error::{Result, RouletteError};
pub use types::{Phase, Shell, Target};
