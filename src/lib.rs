//! Truth Roulette - shell roulette duel gated by headline picks

pub mod core;
pub mod game;
pub mod llm;
pub mod statements;
pub mod ui;
