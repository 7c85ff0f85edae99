//! Shot resolution
//!
//! One call consumes exactly one shell. Replaying a call is not a retry:
//! it fires the next shell.

use serde::Serialize;

use crate::core::error::{Result, RouletteError};
use crate::core::types::{Phase, Shell, Target};
use crate::game::state::{
    RoundState, MSG_BLANK_DEALER, MSG_BLANK_PLAYER, MSG_BUFFER_EMPTY, MSG_DEALER_ELIMINATED,
    MSG_NEXT_SCAN, MSG_PLAYER_ELIMINATED,
};

/// Damage dealt by a live shell
pub const LIVE_SHELL_DAMAGE: u8 = 1;

/// What the presentation should animate for a shot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "target", rename_all = "lowercase")]
pub enum ShotEffect {
    Damage(Target),
    Misfire(Target),
}

impl ShotEffect {
    pub fn target(&self) -> Target {
        match self {
            ShotEffect::Damage(t) | ShotEffect::Misfire(t) => *t,
        }
    }
}

/// Result of resolving one shot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShotReport {
    pub shell: Shell,
    pub effect: ShotEffect,
    pub phase: Phase,
}

impl ShotReport {
    /// Whether a new statement set is needed before the next decision
    pub fn needs_statements(&self) -> bool {
        self.phase == Phase::ChoosingStatement
    }
}

/// Fire the front shell at `target` and advance the phase
///
/// Fails with `EmptyMagazine` only when called out of turn; phase gating
/// keeps the magazine non-empty while shooting. On failure the state is
/// left untouched.
pub fn resolve_shot(state: &mut RoundState, target: Target) -> Result<ShotReport> {
    let shell = state.magazine.pop_front().ok_or(RouletteError::EmptyMagazine)?;

    let effect = if shell.is_live {
        let health = state.health_mut(target);
        *health = health.saturating_sub(LIVE_SHELL_DAMAGE);
        ShotEffect::Damage(target)
    } else {
        ShotEffect::Misfire(target)
    };

    tracing::debug!(
        "Shot at {}: {} (player {}, dealer {}, {} shells left)",
        target,
        if shell.is_live { "live" } else { "blank" },
        state.player_health,
        state.dealer_health,
        state.magazine.len()
    );

    // Player defeat is checked first so it wins a simultaneous knockout.
    if state.player_health == 0 {
        state.set_phase(Phase::GameOver, MSG_PLAYER_ELIMINATED);
    } else if state.dealer_health == 0 {
        state.set_phase(Phase::GameOver, MSG_DEALER_ELIMINATED);
    } else {
        let next = if state.magazine.is_empty() {
            Phase::RoundOver
        } else {
            Phase::ChoosingStatement
        };
        let message = match (shell.is_live, target) {
            (true, _) if next == Phase::RoundOver => MSG_BUFFER_EMPTY,
            (true, _) => MSG_NEXT_SCAN,
            (false, Target::Player) => MSG_BLANK_PLAYER,
            (false, Target::Dealer) => MSG_BLANK_DEALER,
        };
        state.set_phase(next, message);
    }

    Ok(ShotReport {
        shell,
        effect,
        phase: state.phase,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::game::magazine::Magazine;

    fn shooting_state(shells: &[Shell], player: u8, dealer: u8) -> RoundState {
        let mut state = RoundState::new(&GameConfig::default());
        state.player_health = player;
        state.dealer_health = dealer;
        state.magazine = Magazine::from_shells(shells.iter().copied());
        state.phase = Phase::Shooting;
        state
    }

    #[test]
    fn test_live_shell_damages_target() {
        let mut state = shooting_state(&[Shell::live(), Shell::blank()], 3, 3);
        let report = resolve_shot(&mut state, Target::Dealer).unwrap();

        assert_eq!(report.effect, ShotEffect::Damage(Target::Dealer));
        assert_eq!(state.dealer_health, 2);
        assert_eq!(state.player_health, 3);
        assert_eq!(state.magazine.len(), 1);
        assert_eq!(state.phase, Phase::ChoosingStatement);
        assert_eq!(state.message, MSG_NEXT_SCAN);
        assert!(report.needs_statements());
    }

    #[test]
    fn test_blank_changes_no_health() {
        let mut state = shooting_state(&[Shell::blank(), Shell::live()], 3, 3);
        let report = resolve_shot(&mut state, Target::Player).unwrap();

        assert_eq!(report.effect, ShotEffect::Misfire(Target::Player));
        assert_eq!(state.player_health, 3);
        assert_eq!(state.dealer_health, 3);
        assert_eq!(state.phase, Phase::ChoosingStatement);
        assert_eq!(state.message, MSG_BLANK_PLAYER);
    }

    #[test]
    fn test_blank_at_dealer_message() {
        let mut state = shooting_state(&[Shell::blank(), Shell::live()], 3, 3);
        resolve_shot(&mut state, Target::Dealer).unwrap();
        assert_eq!(state.message, MSG_BLANK_DEALER);
    }

    #[test]
    fn test_last_shell_ends_round() {
        let mut state = shooting_state(&[Shell::live()], 3, 3);
        let report = resolve_shot(&mut state, Target::Player).unwrap();

        assert_eq!(report.phase, Phase::RoundOver);
        assert_eq!(state.player_health, 2);
        assert_eq!(state.message, MSG_BUFFER_EMPTY);
        assert!(!report.needs_statements());
    }

    #[test]
    fn test_last_blank_ends_round() {
        let mut state = shooting_state(&[Shell::blank()], 3, 3);
        let report = resolve_shot(&mut state, Target::Dealer).unwrap();
        assert_eq!(report.phase, Phase::RoundOver);
        assert_eq!(state.message, MSG_BLANK_DEALER);
    }

    #[test]
    fn test_dealer_eliminated() {
        let mut state = shooting_state(&[Shell::live(), Shell::live()], 3, 1);
        let report = resolve_shot(&mut state, Target::Dealer).unwrap();

        assert_eq!(report.phase, Phase::GameOver);
        assert_eq!(state.dealer_health, 0);
        assert_eq!(state.message, MSG_DEALER_ELIMINATED);
    }

    #[test]
    fn test_player_eliminated() {
        let mut state = shooting_state(&[Shell::live()], 1, 3);
        resolve_shot(&mut state, Target::Player).unwrap();
        assert_eq!(state.phase, Phase::GameOver);
        assert_eq!(state.message, MSG_PLAYER_ELIMINATED);
    }

    #[test]
    fn test_player_defeat_takes_precedence() {
        // Only reachable by a misapplied resolver; both sides are at zero.
        let mut state = shooting_state(&[Shell::blank()], 0, 0);
        resolve_shot(&mut state, Target::Dealer).unwrap();
        assert_eq!(state.phase, Phase::GameOver);
        assert_eq!(state.message, MSG_PLAYER_ELIMINATED);
    }

    #[test]
    fn test_health_never_below_zero() {
        let mut state = shooting_state(&[Shell::live(), Shell::live()], 1, 3);
        resolve_shot(&mut state, Target::Player).unwrap();
        assert_eq!(state.player_health, 0);
    }

    #[test]
    fn test_empty_magazine_is_contract_violation() {
        let mut state = shooting_state(&[], 3, 3);
        let before = state.clone();
        let result = resolve_shot(&mut state, Target::Dealer);

        assert!(matches!(result, Err(RouletteError::EmptyMagazine)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_effect_serialization() {
        let json = serde_json::to_string(&ShotEffect::Damage(Target::Dealer)).unwrap();
        assert_eq!(json, r#"{"kind":"damage","target":"dealer"}"#);
    }
}
