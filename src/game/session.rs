//! Session host: drives the round machine with async statement fetches
//! and the round-over timer.
//!
//! All mutation goes through `&mut self`, so a session is serialized by
//! construction: a fire intent cannot overlap a pending fetch, and only
//! one fetch is ever in flight.
//!
//! The round-over delay is a deadline owned by the session. Hosts that
//! wait on input can race it with [`GameSession::next_round_due`]; any
//! later call into the session applies an elapsed deadline before doing
//! anything else, so the next round never depends on the host polling.

use rand::Rng;
use std::future;
use std::pin::Pin;
use tokio::time::{Instant, Sleep};

use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::core::types::{Phase, Target};
use crate::game::machine::RoundMachine;
use crate::game::resolver::{ShotEffect, ShotReport};
use crate::game::state::RoundState;
use crate::statements::{fetch_statements, StatementProvider};
use crate::ui::Intent;

pub struct GameSession<P: StatementProvider, R: Rng> {
    machine: RoundMachine<R>,
    provider: P,
    round_advance: Option<Pin<Box<Sleep>>>,
}

impl<P: StatementProvider, R: Rng> GameSession<P, R> {
    pub fn new(config: GameConfig, provider: P, rng: R) -> Self {
        Self {
            machine: RoundMachine::new(config, rng),
            provider,
            round_advance: None,
        }
    }

    pub fn state(&self) -> &RoundState {
        self.machine.state()
    }

    pub fn config(&self) -> &GameConfig {
        self.machine.config()
    }

    pub fn rounds_started(&self) -> u32 {
        self.machine.rounds_started()
    }

    /// Whether a round-over delay is currently scheduled
    pub fn round_advance_pending(&self) -> bool {
        self.round_advance.is_some()
    }

    /// Start (or restart after game over) and load the first round
    pub async fn start(&mut self) -> bool {
        self.advance_if_due().await;
        if !self.machine.start() {
            return false;
        }
        self.load_round().await;
        true
    }

    async fn load_round(&mut self) {
        let statements = fetch_statements(&self.provider).await;
        self.machine.finish_loading(statements);
    }

    pub async fn select_statement(&mut self, index: usize) -> Option<bool> {
        self.advance_if_due().await;
        self.machine.select_statement(index)
    }

    /// Fire at `target`, then fetch statements or schedule the next round
    ///
    /// Returns the effect to animate, or `Ok(None)` when the intent was
    /// ignored.
    pub async fn fire(&mut self, target: Target) -> Result<Option<ShotEffect>> {
        self.advance_if_due().await;
        let Some(report) = self.machine.fire(target)? else {
            return Ok(None);
        };
        self.after_shot(&report).await;
        Ok(Some(report.effect))
    }

    async fn after_shot(&mut self, report: &ShotReport) {
        match report.phase {
            Phase::ChoosingStatement => {
                let statements = fetch_statements(&self.provider).await;
                self.machine.refresh_statements(statements);
            }
            Phase::RoundOver if self.machine.state().both_alive() => {
                let delay = self.machine.config().round_over_delay();
                tracing::debug!("Next round in {:?}", delay);
                self.round_advance = Some(Box::pin(tokio::time::sleep(delay)));
            }
            _ => {}
        }
    }

    fn cancel_round_advance(&mut self) {
        if self.round_advance.take().is_some() {
            tracing::debug!("Cancelled scheduled round advance");
        }
    }

    /// Resolves once the scheduled round advance is due
    ///
    /// Never resolves when nothing is scheduled. Cancel safe, so it can
    /// sit in a `tokio::select!` next to an input read.
    pub async fn next_round_due(&mut self) {
        match self.round_advance.as_mut() {
            Some(sleep) => sleep.as_mut().await,
            None => future::pending::<()>().await,
        }
    }

    /// Load the next round if the round-over delay has elapsed
    pub async fn advance_if_due(&mut self) -> bool {
        let due = self
            .round_advance
            .as_ref()
            .is_some_and(|sleep| sleep.deadline() <= Instant::now());
        if !due {
            return false;
        }
        self.round_advance = None;
        if !self.machine.begin_next_round() {
            return false;
        }
        self.load_round().await;
        true
    }

    /// Wait out the round-over delay, then load the next round
    ///
    /// Returns false when nothing was scheduled.
    pub async fn wait_for_next_round(&mut self) -> bool {
        if !self.round_advance_pending() {
            return false;
        }
        self.next_round_due().await;
        self.advance_if_due().await
    }

    /// Discard the current game and return to the intro
    ///
    /// Cancels a pending round advance. The RNG keeps its position so the
    /// next game does not replay the previous magazines.
    pub fn reset(&mut self) {
        self.cancel_round_advance();
        self.machine.reset();
        tracing::info!("Session reset");
    }

    /// Apply a presentation intent
    ///
    /// `Quit` is handled by the host loop and ignored here.
    pub async fn dispatch(&mut self, intent: Intent) -> Result<Option<ShotEffect>> {
        self.advance_if_due().await;
        match intent {
            Intent::Start => {
                self.start().await;
            }
            Intent::SelectStatement(index) => {
                self.select_statement(index).await;
            }
            Intent::Fire(target) => return self.fire(target).await,
            Intent::Restart => {
                if self.state().phase() == Phase::GameOver {
                    self.start().await;
                } else {
                    self.reset();
                }
            }
            Intent::Quit => {}
        }
        Ok(None)
    }
}
