//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Who the weapon is pointed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Player,
    Dealer,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Player => write!(f, "player"),
            Target::Dealer => write!(f, "dealer"),
        }
    }
}

/// A single load unit in the magazine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shell {
    pub is_live: bool,
    /// Reserved for reveal mechanics; nothing sets it yet
    pub is_known: bool,
}

impl Shell {
    pub fn live() -> Self {
        Self {
            is_live: true,
            is_known: false,
        }
    }

    pub fn blank() -> Self {
        Self {
            is_live: false,
            is_known: false,
        }
    }
}

/// Game phases
///
/// Exactly one is active at a time and it decides which intents are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    #[default]
    Intro,
    LoadingRound,
    ChoosingStatement,
    Shooting,
    RoundOver,
    GameOver,
}

impl Phase {
    /// Whether `self -> next` is one of the allowed single-step transitions
    pub fn can_transition_to(self, next: Phase) -> bool {
        use Phase::*;
        matches!(
            (self, next),
            (Intro, LoadingRound)
                | (LoadingRound, ChoosingStatement)
                | (ChoosingStatement, Shooting)
                | (Shooting, ChoosingStatement)
                | (Shooting, RoundOver)
                | (Shooting, GameOver)
                | (RoundOver, LoadingRound)
                | (GameOver, LoadingRound)
        )
    }
}
