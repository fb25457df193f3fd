//! Crime severity escalation into wanted stars
use crate::config::WantedConfig;
use crate::hooks::{AchievementKind, AchievementSink};
use crate::state::{Position, WantedState};

/// Register a witnessed crime of the given severity at the player's position.
///
/// Severity accumulates across calls within a pursuit; each full
/// `severity_per_star` worth grants one star, clamped to the maximum. The
/// accumulator is part of the pursuit episode and resets with it. Returns
/// whether any escalation occurred.
pub fn on_crime_witnessed<A: AchievementSink>(
    state: &mut WantedState,
    cfg: &WantedConfig,
    severity: u32,
    position: Position,
    achievements: &mut A,
) -> bool {
    if severity == 0 {
        return false;
    }

    state.flags.severity_accumulator = state.flags.severity_accumulator.saturating_add(severity);

    let mut gained = 0;
    while state.flags.severity_accumulator >= cfg.severity_per_star {
        state.flags.severity_accumulator -= cfg.severity_per_star;
        if state.gain_stars(1, cfg) == 0 {
            break;
        }
        gained += 1;
    }

    if gained == 0 {
        return false;
    }

    state.last_known_position = position;
    if state.wanted_stars == cfg.max_stars && !state.public_enemy_awarded {
        state.public_enemy_awarded = true;
        achievements.unlock(AchievementKind::PublicEnemy);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::AchievementKind;

    #[derive(Default)]
    struct RecordingSink(Vec<AchievementKind>);

    impl AchievementSink for RecordingSink {
        fn unlock(&mut self, kind: AchievementKind) {
            self.0.push(kind);
        }
    }

    #[test]
    fn severity_below_threshold_does_not_escalate() {
        let cfg = WantedConfig::default_config();
        let mut state = WantedState::new();
        let escalated = on_crime_witnessed(
            &mut state,
            &cfg,
            cfg.severity_per_star - 1,
            Position::ORIGIN,
            &mut (),
        );
        assert!(!escalated);
        assert_eq!(state.wanted_stars(), 0);
    }

    #[test]
    fn repeated_petty_crimes_accumulate_into_a_star() {
        let cfg = WantedConfig::default_config();
        let mut state = WantedState::new();
        let half = cfg.severity_per_star / 2;
        assert!(!on_crime_witnessed(&mut state, &cfg, half, Position::ORIGIN, &mut ()));
        assert!(on_crime_witnessed(
            &mut state,
            &cfg,
            cfg.severity_per_star - half,
            Position::ORIGIN,
            &mut ()
        ));
        assert_eq!(state.wanted_stars(), 1);
        assert!(state.is_wanted());
    }

    #[test]
    fn severe_crime_grants_multiple_stars_at_once() {
        let cfg = WantedConfig::default_config();
        let mut state = WantedState::new();
        on_crime_witnessed(
            &mut state,
            &cfg,
            cfg.severity_per_star * 3,
            Position::new(10.0, 0.0, 10.0),
            &mut (),
        );
        assert_eq!(state.wanted_stars(), 3);
        assert_eq!(state.last_known_position(), Position::new(10.0, 0.0, 10.0));
    }

    #[test]
    fn stars_clamp_at_max_and_fire_public_enemy_once() {
        let cfg = WantedConfig::default_config();
        let mut state = WantedState::new();
        let mut sink = RecordingSink::default();
        on_crime_witnessed(
            &mut state,
            &cfg,
            cfg.severity_per_star * (cfg.max_stars + 4),
            Position::ORIGIN,
            &mut sink,
        );
        assert_eq!(state.wanted_stars(), cfg.max_stars);
        assert_eq!(sink.0, vec![AchievementKind::PublicEnemy]);

        on_crime_witnessed(
            &mut state,
            &cfg,
            cfg.severity_per_star,
            Position::ORIGIN,
            &mut sink,
        );
        assert_eq!(sink.0.len(), 1);
    }

    #[test]
    fn accumulator_resets_with_the_pursuit() {
        let cfg = WantedConfig::default_config();
        let mut state = WantedState::new();
        let half = cfg.severity_per_star / 2;
        on_crime_witnessed(&mut state, &cfg, cfg.severity_per_star + half, Position::ORIGIN, &mut ());
        assert_eq!(state.wanted_stars(), 1);

        state.lose_stars(1);

        // Residual half-star severity must not leak into the next pursuit.
        assert!(!on_crime_witnessed(&mut state, &cfg, half, Position::ORIGIN, &mut ()));
        assert_eq!(state.wanted_stars(), 0);
    }
}
