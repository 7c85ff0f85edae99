//! UI state management for the terminal game

use std::collections::VecDeque;

use crate::core::types::Phase;
use crate::game::resolver::ShotEffect;
use crate::game::state::RoundState;

/// Maximum log entries to keep
const MAX_LOG_ENTRIES: usize = 50;

/// Game UI state
#[derive(Debug, Default)]
pub struct GameUI {
    /// Event log, oldest first
    pub action_log: VecDeque<LogEntry>,
    /// Whether to print the log under the table
    pub show_action_log: bool,
    /// Last message already written to the log
    last_message: Option<String>,
}

/// An entry in the event log
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub round: u32,
    pub message: String,
    pub category: LogCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogCategory {
    Shot,
    Phase,
    System,
}

impl GameUI {
    pub fn new() -> Self {
        Self {
            action_log: VecDeque::with_capacity(MAX_LOG_ENTRIES),
            show_action_log: true,
            last_message: None,
        }
    }

    /// Add an entry to the event log
    pub fn log(&mut self, round: u32, message: String, category: LogCategory) {
        if self.action_log.len() >= MAX_LOG_ENTRIES {
            self.action_log.pop_front();
        }
        self.action_log.push_back(LogEntry {
            round,
            message,
            category,
        });
    }

    /// Record a shot effect for display
    pub fn log_shot(&mut self, round: u32, effect: ShotEffect) {
        let message = match effect {
            ShotEffect::Damage(target) => format!("BANG - {} hit", target),
            ShotEffect::Misfire(target) => format!("click - blank at {}", target),
        };
        self.log(round, message, LogCategory::Shot);
    }

    /// Log the state's message if it changed since the last call
    pub fn observe(&mut self, round: u32, state: &RoundState) {
        if self.last_message.as_deref() == Some(state.message()) {
            return;
        }
        self.last_message = Some(state.message().to_string());
        let category = match state.phase() {
            Phase::Intro | Phase::LoadingRound => LogCategory::System,
            _ => LogCategory::Phase,
        };
        self.log(round, state.message().to_string(), category);
    }

    pub fn toggle_log(&mut self) {
        self.show_action_log = !self.show_action_log;
    }

    /// Most recent entries, oldest first
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &LogEntry> {
        let skip = self.action_log.len().saturating_sub(count);
        self.action_log.iter().skip(skip)
    }
}
