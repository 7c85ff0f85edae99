//! Round state machine
//!
//! Owns the round state and applies intents to it. Intents that are not
//! legal in the current phase are ignored and reported as `false`/`None`,
//! never as errors. The machine itself is synchronous; the session host
//! performs the statement fetches and timers and feeds results back in.

use rand::Rng;

use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::core::types::{Phase, Target};
use crate::game::magazine::{Magazine, MAX_SHELLS, MIN_SHELLS};
use crate::game::resolver::{resolve_shot, ShotReport};
use crate::game::state::{RoundState, MSG_LOADED, MSG_LOADING, MSG_PICKED_FALSE, MSG_PICKED_TRUE};
use crate::statements::StatementSet;

pub struct RoundMachine<R: Rng> {
    state: RoundState,
    config: GameConfig,
    rng: R,
    /// A shot left the machine waiting for a replacement statement set
    statements_pending: bool,
    rounds_started: u32,
}

impl<R: Rng> RoundMachine<R> {
    pub fn new(config: GameConfig, rng: R) -> Self {
        Self {
            state: RoundState::new(&config),
            config,
            rng,
            statements_pending: false,
            rounds_started: 0,
        }
    }

    /// Read-only view of the current state
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn statements_pending(&self) -> bool {
        self.statements_pending
    }

    pub fn rounds_started(&self) -> u32 {
        self.rounds_started
    }

    /// Start or restart the game: INTRO or GAME_OVER -> LOADING_ROUND
    ///
    /// Restores both health values and clears the magazine.
    pub fn start(&mut self) -> bool {
        if !matches!(self.state.phase, Phase::Intro | Phase::GameOver) {
            tracing::debug!("Ignoring start in {:?}", self.state.phase);
            return false;
        }

        if self.state.phase == Phase::GameOver {
            tracing::info!("Restarting game");
        } else {
            tracing::info!("Starting game");
        }

        self.state.player_health = self.config.initial_player_health;
        self.state.dealer_health = self.config.initial_dealer_health;
        self.rounds_started = 0;
        self.enter_loading();
        true
    }

    /// Throw the current game away and sit in the intro again
    pub fn reset(&mut self) {
        self.state = RoundState::new(&self.config);
        self.statements_pending = false;
        self.rounds_started = 0;
    }

    /// ROUND_OVER -> LOADING_ROUND once the round-over delay has elapsed
    pub fn begin_next_round(&mut self) -> bool {
        if self.state.phase != Phase::RoundOver || !self.state.both_alive() {
            tracing::debug!("Ignoring next round in {:?}", self.state.phase);
            return false;
        }
        self.enter_loading();
        true
    }

    fn enter_loading(&mut self) {
        self.state.magazine.clear();
        self.state.current_statement_set = StatementSet::empty();
        self.state.is_player_turn = true;
        self.statements_pending = false;
        self.state.set_phase(Phase::LoadingRound, MSG_LOADING);
    }

    /// LOADING_ROUND -> CHOOSING_STATEMENT with a new magazine and statements
    pub fn finish_loading(&mut self, statements: StatementSet) -> bool {
        if self.state.phase != Phase::LoadingRound {
            tracing::debug!("Ignoring loaded round in {:?}", self.state.phase);
            return false;
        }
        let magazine = Magazine::generate(&mut self.rng);
        self.load_magazine(magazine, statements)
    }

    /// Like `finish_loading`, with a magazine chosen by the caller
    ///
    /// Sizes outside `MIN_SHELLS..=MAX_SHELLS` are refused.
    pub fn load_magazine(&mut self, magazine: Magazine, statements: StatementSet) -> bool {
        if self.state.phase != Phase::LoadingRound {
            tracing::debug!("Ignoring loaded round in {:?}", self.state.phase);
            return false;
        }
        if !(MIN_SHELLS..=MAX_SHELLS).contains(&magazine.len()) {
            tracing::error!("Refusing magazine of {} shells", magazine.len());
            return false;
        }

        self.state.magazine = magazine;
        self.state.current_statement_set = statements;
        self.rounds_started += 1;

        tracing::info!(
            "Round {} loaded: {} shells ({} live, {} blank)",
            self.rounds_started,
            self.state.magazine.len(),
            self.state.magazine.live_count(),
            self.state.magazine.blank_count()
        );

        self.state.set_phase(Phase::ChoosingStatement, MSG_LOADED);
        true
    }

    /// CHOOSING_STATEMENT -> SHOOTING
    ///
    /// Returns the truth of the picked statement. The pick only changes
    /// the message; both targets stay available either way.
    pub fn select_statement(&mut self, index: usize) -> Option<bool> {
        if self.state.phase != Phase::ChoosingStatement || self.statements_pending {
            tracing::debug!("Ignoring statement selection in {:?}", self.state.phase);
            return None;
        }

        let is_true = self.state.current_statement_set.get(index)?.is_true;
        let message = if is_true {
            MSG_PICKED_TRUE
        } else {
            MSG_PICKED_FALSE
        };
        self.state.set_phase(Phase::Shooting, message);
        Some(is_true)
    }

    /// SHOOTING -> CHOOSING_STATEMENT | ROUND_OVER | GAME_OVER
    ///
    /// `Ok(None)` means the intent was ignored. An error means the shot
    /// resolver was reached with an empty magazine, which phase gating
    /// should make impossible.
    pub fn fire(&mut self, target: Target) -> Result<Option<ShotReport>> {
        if self.state.phase != Phase::Shooting {
            tracing::debug!("Ignoring fire at {} in {:?}", target, self.state.phase);
            return Ok(None);
        }

        let report = resolve_shot(&mut self.state, target).inspect_err(|e| {
            tracing::error!("Shot resolution failed: {}", e);
        })?;

        match report.phase {
            Phase::GameOver => tracing::info!("Game over: {}", self.state.message),
            Phase::RoundOver => tracing::info!("Round {} over", self.rounds_started),
            _ => {}
        }

        self.statements_pending = report.needs_statements();
        Ok(Some(report))
    }

    /// Replace the statement set after a non-terminal shot
    pub fn refresh_statements(&mut self, statements: StatementSet) -> bool {
        if !self.statements_pending || self.state.phase != Phase::ChoosingStatement {
            tracing::debug!("Ignoring statement refresh in {:?}", self.state.phase);
            return false;
        }
        self.state.current_statement_set = statements;
        self.statements_pending = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::RouletteError;
    use crate::core::types::Shell;
    use crate::statements::{fallback_statements, Statement};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn machine() -> RoundMachine<ChaCha8Rng> {
        RoundMachine::new(GameConfig::default(), ChaCha8Rng::seed_from_u64(42))
    }

    fn loaded() -> RoundMachine<ChaCha8Rng> {
        let mut m = machine();
        assert!(m.start());
        assert!(m.finish_loading(fallback_statements()));
        m
    }

    #[test]
    fn test_start_from_intro() {
        let mut m = machine();
        assert!(m.start());
        assert_eq!(m.phase(), Phase::LoadingRound);
        assert_eq!(m.state().message(), MSG_LOADING);
        assert!(m.state().is_player_turn());
        assert!(m.state().magazine().is_empty());
    }

    #[test]
    fn test_start_ignored_mid_game() {
        let mut m = loaded();
        assert!(!m.start());
        assert_eq!(m.phase(), Phase::ChoosingStatement);
    }

    #[test]
    fn test_finish_loading_generates_magazine() {
        let m = loaded();
        assert_eq!(m.phase(), Phase::ChoosingStatement);
        assert!(m.state().magazine().len() >= 2);
        assert_eq!(m.state().statements(), &fallback_statements());
        assert_eq!(m.rounds_started(), 1);
    }

    #[test]
    fn test_finish_loading_ignored_outside_loading() {
        let mut m = machine();
        assert!(!m.finish_loading(fallback_statements()));
        assert_eq!(m.phase(), Phase::Intro);
    }

    #[test]
    fn test_selection_messages_do_not_branch() {
        let set = StatementSet::new(vec![
            Statement::new("True one", true),
            Statement::new("False one", false),
        ]);

        let mut a = machine();
        a.start();
        a.finish_loading(set.clone());
        assert_eq!(a.select_statement(0), Some(true));
        assert_eq!(a.phase(), Phase::Shooting);
        assert_eq!(a.state().message(), MSG_PICKED_TRUE);

        let mut b = machine();
        b.start();
        b.finish_loading(set);
        assert_eq!(b.select_statement(1), Some(false));
        assert_eq!(b.phase(), Phase::Shooting);
        assert_eq!(b.state().message(), MSG_PICKED_FALSE);
    }

    #[test]
    fn test_out_of_range_selection_ignored() {
        let mut m = loaded();
        assert_eq!(m.select_statement(9), None);
        assert_eq!(m.phase(), Phase::ChoosingStatement);
    }

    #[test]
    fn test_fire_ignored_outside_shooting() {
        let mut m = loaded();
        let before = m.state().clone();
        assert!(m.fire(Target::Dealer).unwrap().is_none());
        assert_eq!(m.state(), &before);
    }

    #[test]
    fn test_fire_sets_pending_until_refresh() {
        let mut m = loaded();
        m.state.magazine = Magazine::from_shells([Shell::blank(), Shell::live()]);
        m.select_statement(0);

        let report = m.fire(Target::Player).unwrap().unwrap();
        assert_eq!(report.phase, Phase::ChoosingStatement);
        assert!(m.statements_pending());
        assert_eq!(m.select_statement(0), None);

        assert!(m.refresh_statements(fallback_statements()));
        assert!(!m.statements_pending());
        assert!(!m.refresh_statements(fallback_statements()));
        assert_eq!(m.select_statement(0), Some(true));
    }

    #[test]
    fn test_round_over_then_next_round() {
        let mut m = loaded();
        m.state.magazine = Magazine::from_shells([Shell::blank()]);
        m.select_statement(0);
        m.fire(Target::Dealer).unwrap();

        assert_eq!(m.phase(), Phase::RoundOver);
        assert!(!m.statements_pending());
        assert!(m.begin_next_round());
        assert_eq!(m.phase(), Phase::LoadingRound);
        assert!(m.finish_loading(fallback_statements()));
        assert_eq!(m.rounds_started(), 2);
    }

    #[test]
    fn test_game_over_restart_resets_health() {
        let mut m = loaded();
        m.state.magazine = Magazine::from_shells([Shell::live(), Shell::live()]);
        m.state.dealer_health = 1;
        m.select_statement(0);
        m.fire(Target::Player).unwrap();
        m.select_statement(0);
        // pending refresh gates selection
        m.refresh_statements(fallback_statements());
        m.select_statement(0);
        m.fire(Target::Dealer).unwrap();

        assert_eq!(m.phase(), Phase::GameOver);
        assert!(!m.begin_next_round());
        assert!(m.fire(Target::Dealer).unwrap().is_none());

        assert!(m.start());
        assert_eq!(m.state().player_health(), 3);
        assert_eq!(m.state().dealer_health(), 3);
        assert_eq!(m.phase(), Phase::LoadingRound);
        assert_eq!(m.rounds_started(), 0);
    }

    #[test]
    fn test_empty_magazine_while_shooting_surfaces_error() {
        let mut m = loaded();
        m.select_statement(0);
        m.state.magazine = Magazine::empty();
        assert!(matches!(
            m.fire(Target::Dealer),
            Err(RouletteError::EmptyMagazine)
        ));
    }
}
