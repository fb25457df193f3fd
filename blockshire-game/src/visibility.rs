//! Police line-of-sight geometry under weather and time-of-day
use crate::config::WantedConfig;
use crate::npc::PursuitNpc;
use crate::state::{Position, WantedState};
use crate::weather::Weather;

/// Effective police LOS range in blocks.
///
/// Weather and night each cut the base range by a fixed amount; when several
/// conditions apply at once, the single largest reduction wins (reductions
/// never stack). Heightened alert adds a flat bonus on top. The result never
/// drops below the configured floor.
#[must_use]
pub fn effective_los_range(
    cfg: &WantedConfig,
    weather: Weather,
    night: bool,
    heightened_alert: bool,
) -> f32 {
    let weather_cut = weather.los_reduction(cfg);
    let night_cut = if night { cfg.night_los_reduction } else { 0.0 };
    let reduction = weather_cut.max(night_cut);
    let bonus = if heightened_alert {
        cfg.heightened_alert_los_bonus
    } else {
        0.0
    };
    (cfg.base_los_range - reduction + bonus).max(cfg.los_range_floor)
}

/// Check whether any active police-like NPC can see the player.
///
/// A fully hidden player at or below the hiding efficacy threshold is never
/// spotted; above it, hiding does not deter the police. On contact the
/// player's position is recorded as the last known position.
pub fn has_police_los<N: PursuitNpc>(
    state: &mut WantedState,
    cfg: &WantedConfig,
    player: Position,
    npcs: &[N],
    weather: Weather,
    night: bool,
) -> bool {
    if state.hiding_complete() && state.wanted_stars <= cfg.hiding_police_entry_threshold {
        return false;
    }

    let range = effective_los_range(cfg, weather, night, state.heightened_alert_active);
    let spotted = npcs
        .iter()
        .any(|npc| npc.is_active_police() && npc.position().distance_to(player) < range);

    if spotted {
        state.last_known_position = player;
    }
    spotted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::npc::{NpcBehaviour, NpcId, NpcKind};

    struct TestNpc {
        id: NpcId,
        kind: NpcKind,
        position: Position,
        behaviour: NpcBehaviour,
    }

    impl TestNpc {
        fn officer_at(x: f32) -> Self {
            Self {
                id: 1,
                kind: NpcKind::Officer,
                position: Position::new(x, 0.0, 0.0),
                behaviour: NpcBehaviour::Patrolling,
            }
        }
    }

    impl PursuitNpc for TestNpc {
        fn id(&self) -> NpcId {
            self.id
        }
        fn kind(&self) -> NpcKind {
            self.kind
        }
        fn position(&self) -> Position {
            self.position
        }
        fn behaviour(&self) -> NpcBehaviour {
            self.behaviour
        }
        fn set_behaviour(&mut self, behaviour: NpcBehaviour) {
            self.behaviour = behaviour;
        }
    }

    #[test]
    fn weather_reductions_apply_independently() {
        let cfg = WantedConfig::default_config();
        let clear = effective_los_range(&cfg, Weather::Clear, false, false);
        let rain = effective_los_range(&cfg, Weather::Rain, false, false);
        let fog = effective_los_range(&cfg, Weather::Fog, false, false);
        assert_eq!(clear, cfg.base_los_range);
        assert_eq!(rain, cfg.base_los_range - cfg.rain_los_reduction);
        assert_eq!(fog, cfg.base_los_range - cfg.fog_los_reduction);
    }

    #[test]
    fn largest_single_reduction_wins() {
        let cfg = WantedConfig::default_config();
        let rain_night = effective_los_range(&cfg, Weather::Rain, true, false);
        let expected =
            cfg.base_los_range - cfg.rain_los_reduction.max(cfg.night_los_reduction);
        assert_eq!(rain_night, expected);
    }

    #[test]
    fn heightened_alert_widens_range() {
        let cfg = WantedConfig::default_config();
        let alert = effective_los_range(&cfg, Weather::Clear, false, true);
        assert_eq!(alert, cfg.base_los_range + cfg.heightened_alert_los_bonus);
    }

    #[test]
    fn range_never_drops_below_floor() {
        let mut cfg = WantedConfig::default_config();
        cfg.fog_los_reduction = cfg.base_los_range + 50.0;
        let range = effective_los_range(&cfg, Weather::Fog, false, false);
        assert_eq!(range, cfg.los_range_floor);
    }

    #[test]
    fn contact_records_last_known_position() {
        let cfg = WantedConfig::default_config();
        let mut state = WantedState::new();
        let npcs = [TestNpc::officer_at(5.0)];
        let player = Position::new(1.0, 2.0, 3.0);

        assert!(has_police_los(
            &mut state,
            &cfg,
            player,
            &npcs,
            Weather::Clear,
            false
        ));
        assert_eq!(state.last_known_position(), player);
    }

    #[test]
    fn rain_breaks_contact_at_the_margin() {
        let cfg = WantedConfig::default_config();
        let mut state = WantedState::new();
        let d = cfg.base_los_range - cfg.rain_los_reduction + 1.0;
        let npcs = [TestNpc::officer_at(d)];

        assert!(has_police_los(
            &mut state,
            &cfg,
            Position::ORIGIN,
            &npcs,
            Weather::Clear,
            false
        ));
        assert!(!has_police_los(
            &mut state,
            &cfg,
            Position::ORIGIN,
            &npcs,
            Weather::Rain,
            false
        ));
    }

    #[test]
    fn idle_and_civilian_npcs_never_spot() {
        let cfg = WantedConfig::default_config();
        let mut state = WantedState::new();
        let mut idle = TestNpc::officer_at(2.0);
        idle.behaviour = NpcBehaviour::Idle;
        let civilian = TestNpc {
            id: 2,
            kind: NpcKind::Civilian,
            position: Position::new(1.0, 0.0, 0.0),
            behaviour: NpcBehaviour::Patrolling,
        };

        assert!(!has_police_los(
            &mut state,
            &cfg,
            Position::ORIGIN,
            &[idle, civilian],
            Weather::Clear,
            false
        ));
    }

    #[test]
    fn complete_hiding_suppresses_los_at_low_stars_only() {
        let cfg = WantedConfig::default_config();
        let mut state = WantedState::new();
        state.gain_stars(cfg.hiding_police_entry_threshold, &cfg);
        state.hiding = true;
        state.hiding_progress = 1.0;
        let npcs = [TestNpc::officer_at(2.0)];

        assert!(!has_police_los(
            &mut state,
            &cfg,
            Position::ORIGIN,
            &npcs,
            Weather::Clear,
            false
        ));

        state.gain_stars(1, &cfg);
        assert!(has_police_los(
            &mut state,
            &cfg,
            Position::ORIGIN,
            &npcs,
            Weather::Clear,
            false
        ));
    }
}
