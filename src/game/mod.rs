//! Round and shell resolution engine

pub mod machine;
pub mod magazine;
pub mod resolver;
pub mod session;
pub mod state;

pub use machine::RoundMachine;
pub use magazine::{Magazine, MAX_SHELLS, MIN_SHELLS};
pub use resolver::{resolve_shot, ShotEffect, ShotReport};
pub use session::GameSession;
pub use state::RoundState;
