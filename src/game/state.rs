//! Round state and the fixed display strings

use serde::Serialize;

use crate::core::config::GameConfig;
use crate::core::types::{Phase, Target};
use crate::game::magazine::Magazine;
use crate::statements::StatementSet;

pub const MSG_INTRO: &str = "WELCOME TO TRUTH ROULETTE.";
pub const MSG_LOADING: &str = "ACCESSING NEWS DATABASE...";
pub const MSG_LOADED: &str = "SCANNING HEADLINES...";
pub const MSG_PICKED_FALSE: &str = "DISINFORMATION IDENTIFIED. TRIGGER ACCESS GRANTED.";
pub const MSG_PICKED_TRUE: &str = "FILTER ERROR! SELF-PUNISHMENT PROTOCOL.";
pub const MSG_PLAYER_ELIMINATED: &str = "TRANSMISSION INTERRUPTED.";
pub const MSG_DEALER_ELIMINATED: &str = "DEALER ELIMINATED.";
pub const MSG_BUFFER_EMPTY: &str = "BUFFER EMPTY. STAND BY.";
pub const MSG_NEXT_SCAN: &str = "NEXT SCAN.";
pub const MSG_BLANK_PLAYER: &str = "CLICK. SIGNAL STABLE.";
pub const MSG_BLANK_DEALER: &str = "CLICK. THE DEALER IS STILL HERE.";

/// Everything the presentation needs to draw the table
///
/// Fields are only written by the round machine and the shot resolver;
/// everyone else reads through the accessors.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundState {
    pub(crate) player_health: u8,
    pub(crate) dealer_health: u8,
    pub(crate) magazine: Magazine,
    pub(crate) current_statement_set: StatementSet,
    pub(crate) phase: Phase,
    pub(crate) message: String,
    pub(crate) is_player_turn: bool,
}

impl RoundState {
    /// Fresh state for a new game, sitting in the intro
    pub fn new(config: &GameConfig) -> Self {
        Self {
            player_health: config.initial_player_health,
            dealer_health: config.initial_dealer_health,
            magazine: Magazine::empty(),
            current_statement_set: StatementSet::empty(),
            phase: Phase::Intro,
            message: MSG_INTRO.to_string(),
            is_player_turn: true,
        }
    }

    pub fn player_health(&self) -> u8 {
        self.player_health
    }

    pub fn dealer_health(&self) -> u8 {
        self.dealer_health
    }

    pub fn health_of(&self, target: Target) -> u8 {
        match target {
            Target::Player => self.player_health,
            Target::Dealer => self.dealer_health,
        }
    }

    pub fn magazine(&self) -> &Magazine {
        &self.magazine
    }

    pub fn statements(&self) -> &StatementSet {
        &self.current_statement_set
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_player_turn(&self) -> bool {
        self.is_player_turn
    }

    pub fn both_alive(&self) -> bool {
        self.player_health > 0 && self.dealer_health > 0
    }

    pub(crate) fn health_mut(&mut self, target: Target) -> &mut u8 {
        match target {
            Target::Player => &mut self.player_health,
            Target::Dealer => &mut self.dealer_health,
        }
    }

    pub(crate) fn set_phase(&mut self, phase: Phase, message: impl Into<String>) {
        debug_assert!(
            self.phase.can_transition_to(phase),
            "illegal transition {:?} -> {:?}",
            self.phase,
            phase
        );
        tracing::debug!("Phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
        self.message = message.into();
    }
}
