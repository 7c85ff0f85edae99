//! Render a round snapshot as plain text

use std::fmt::Write;

use crate::core::types::Phase;
use crate::game::state::RoundState;

/// Health bar with `max` slots, filled up to `health`
pub fn health_bar(health: u8, max: u8) -> String {
    (0..max)
        .map(|i| if i < health { "[#]" } else { "[ ]" })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Full table view for the current phase
pub fn render(state: &RoundState, max_health: u8) -> String {
    let mut s = String::new();

    let _ = writeln!(s);
    let _ = writeln!(
        s,
        "DEALER  {}    YOU  {}",
        health_bar(state.dealer_health(), max_health),
        health_bar(state.player_health(), max_health)
    );

    match state.phase() {
        Phase::Intro => {
            let _ = writeln!(s, "\n  TRUTH ROULETTE");
            let _ = writeln!(s, "  {}", state.message());
            let _ = writeln!(s, "\n  Type 'start' to connect.");
        }
        Phase::ChoosingStatement => {
            let _ = writeln!(s, "Shells left: {}", state.magazine().len());
            let _ = writeln!(s, "\n  Which headline is FAKE?");
            for (i, statement) in state.statements().iter().enumerate() {
                let _ = writeln!(s, "  {}) {}", i + 1, statement.text);
            }
        }
        Phase::Shooting => {
            let _ = writeln!(s, "Shells left: {}", state.magazine().len());
            let _ = writeln!(s, "\n  {}", state.message());
            let _ = writeln!(s, "  'fire me' or 'fire dealer'");
        }
        Phase::GameOver => {
            let _ = writeln!(s, "\n  {}", state.message());
            let _ = writeln!(s, "  Type 'restart' to re-sync.");
        }
        Phase::LoadingRound | Phase::RoundOver => {
            let _ = writeln!(s, "\n  {}", state.message());
        }
    }

    s
}
