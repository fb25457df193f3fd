//! Pursuit state aggregate for the wanted system.
//!
//! One [`WantedState`] value is created per game session and lives for its
//! duration. The frame step in [`crate::pursuit`] and the discrete player
//! actions in [`crate::escape`] and [`crate::arrest`] mutate it; nothing else
//! may. Host-facing reads go through the accessors so the transition rules
//! cannot be bypassed outside the `test-support` feature.
use serde::{Deserialize, Serialize};

use crate::config::WantedConfig;
use crate::constants::{
    LOG_WANTED_PURSUIT_CLEARED, LOG_WANTED_PURSUIT_STARTED, LOG_WANTED_STAR_GAINED,
    LOG_WANTED_STAR_LOST,
};
use crate::npc::NpcId;

/// World-space coordinate supplied by the host each call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Straight-line distance; no occlusion model
    #[must_use]
    pub fn distance_to(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// One-shot guards and accumulators scoped to a single pursuit episode.
///
/// Reset exactly when `wanted_stars` transitions to 0, so every fresh pursuit
/// starts with a clean set of escape options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PursuitFlags {
    pub(crate) disguise_escape_used: bool,
    pub(crate) leg_it_done: bool,
    pub(crate) severity_accumulator: u32,
}

impl PursuitFlags {
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The wanted-system aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WantedState {
    pub(crate) wanted_stars: u32,
    pub(crate) decay_timer: f32,
    pub(crate) last_known_position: Position,
    pub(crate) police_has_los: bool,
    pub(crate) heightened_alert_active: bool,
    pub(crate) heightened_alert_timer: f32,
    pub(crate) hiding: bool,
    pub(crate) hiding_progress: f32,
    pub(crate) hiding_timer: f32,
    pub(crate) in_safe_house: bool,
    pub(crate) safe_house_timer: f32,
    pub(crate) flags: PursuitFlags,
    // Corruption bookkeeping survives arrests and pursuit resets.
    pub(crate) corrupt_pcso_id: Option<NpcId>,
    pub(crate) corrupt_pcso_tea_count: u32,
    pub(crate) has_corrupt_pcso: bool,
    // One-time achievement guards, session-scoped.
    pub(crate) wheelie_bin_awarded: bool,
    pub(crate) clean_getaway_awarded: bool,
    pub(crate) nicked_awarded: bool,
    pub(crate) public_enemy_awarded: bool,
    /// i18n log keys for the host UI to drain and localize
    pub logs: Vec<String>,
}

impl WantedState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // Read accessors ------------------------------------------------------

    #[must_use]
    pub const fn wanted_stars(&self) -> u32 {
        self.wanted_stars
    }

    #[must_use]
    pub const fn is_wanted(&self) -> bool {
        self.wanted_stars > 0
    }

    #[must_use]
    pub const fn decay_timer(&self) -> f32 {
        self.decay_timer
    }

    #[must_use]
    pub const fn last_known_position(&self) -> Position {
        self.last_known_position
    }

    #[must_use]
    pub const fn police_has_los(&self) -> bool {
        self.police_has_los
    }

    #[must_use]
    pub const fn heightened_alert_active(&self) -> bool {
        self.heightened_alert_active
    }

    #[must_use]
    pub const fn heightened_alert_timer(&self) -> f32 {
        self.heightened_alert_timer
    }

    #[must_use]
    pub const fn hiding(&self) -> bool {
        self.hiding
    }

    #[must_use]
    pub const fn hiding_progress(&self) -> f32 {
        self.hiding_progress
    }

    #[must_use]
    pub const fn hiding_timer(&self) -> f32 {
        self.hiding_timer
    }

    /// Check whether the hiding ramp has finished
    #[must_use]
    pub fn hiding_complete(&self) -> bool {
        self.hiding && self.hiding_progress >= 1.0
    }

    #[must_use]
    pub const fn in_safe_house(&self) -> bool {
        self.in_safe_house
    }

    #[must_use]
    pub const fn safe_house_timer(&self) -> f32 {
        self.safe_house_timer
    }

    #[must_use]
    pub const fn disguise_escape_used_this_pursuit(&self) -> bool {
        self.flags.disguise_escape_used
    }

    #[must_use]
    pub const fn leg_it_condition_met(&self) -> bool {
        self.flags.leg_it_done
    }

    #[must_use]
    pub const fn corrupt_pcso_id(&self) -> Option<NpcId> {
        self.corrupt_pcso_id
    }

    #[must_use]
    pub const fn corrupt_pcso_tea_count(&self) -> u32 {
        self.corrupt_pcso_tea_count
    }

    #[must_use]
    pub const fn has_corrupt_pcso(&self) -> bool {
        self.has_corrupt_pcso
    }

    // Transition helpers --------------------------------------------------

    /// Add stars, clamped to the configured maximum; returns the number
    /// actually gained. Logs pursuit start on the 0 -> wanted transition.
    pub(crate) fn gain_stars(&mut self, count: u32, cfg: &WantedConfig) -> u32 {
        let before = self.wanted_stars;
        let after = before.saturating_add(count).min(cfg.max_stars);
        if after == before {
            return 0;
        }
        if before == 0 {
            self.logs.push(String::from(LOG_WANTED_PURSUIT_STARTED));
        }
        for _ in before..after {
            self.logs.push(String::from(LOG_WANTED_STAR_GAINED));
        }
        self.wanted_stars = after;
        after - before
    }

    /// Remove stars, clamped at zero; returns the number actually lost.
    /// The 0-star transition resets the pursuit episode.
    pub(crate) fn lose_stars(&mut self, count: u32) -> u32 {
        let before = self.wanted_stars;
        let after = before.saturating_sub(count);
        if after == before {
            return 0;
        }
        for _ in after..before {
            self.logs.push(String::from(LOG_WANTED_STAR_LOST));
        }
        self.wanted_stars = after;
        if after == 0 {
            self.on_pursuit_cleared();
        }
        before - after
    }

    /// Reset every pursuit-scoped field. Corruption bookkeeping and
    /// achievement guards survive; they are session-scoped.
    pub(crate) fn reset_pursuit_fields(&mut self) {
        self.wanted_stars = 0;
        self.decay_timer = 0.0;
        self.heightened_alert_active = false;
        self.heightened_alert_timer = 0.0;
        self.hiding = false;
        self.hiding_progress = 0.0;
        self.hiding_timer = 0.0;
        self.in_safe_house = false;
        self.safe_house_timer = 0.0;
        self.flags.reset();
    }

    fn on_pursuit_cleared(&mut self) {
        self.decay_timer = 0.0;
        self.flags.reset();
        self.logs.push(String::from(LOG_WANTED_PURSUIT_CLEARED));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gain_stars_clamps_to_max() {
        let cfg = WantedConfig::default_config();
        let mut state = WantedState::new();
        assert_eq!(state.gain_stars(3, &cfg), 3);
        assert_eq!(state.gain_stars(9, &cfg), cfg.max_stars - 3);
        assert_eq!(state.wanted_stars(), cfg.max_stars);
        assert_eq!(state.gain_stars(1, &cfg), 0);
    }

    #[test]
    fn pursuit_start_logged_once() {
        let cfg = WantedConfig::default_config();
        let mut state = WantedState::new();
        state.gain_stars(2, &cfg);
        state.gain_stars(1, &cfg);
        let starts = state
            .logs
            .iter()
            .filter(|key| *key == LOG_WANTED_PURSUIT_STARTED)
            .count();
        assert_eq!(starts, 1);
    }

    #[test]
    fn losing_last_star_resets_episode_flags() {
        let cfg = WantedConfig::default_config();
        let mut state = WantedState::new();
        state.gain_stars(1, &cfg);
        state.flags.disguise_escape_used = true;
        state.flags.leg_it_done = true;
        state.decay_timer = 12.0;

        assert_eq!(state.lose_stars(1), 1);

        assert!(!state.disguise_escape_used_this_pursuit());
        assert!(!state.leg_it_condition_met());
        assert_eq!(state.decay_timer(), 0.0);
        assert!(state.logs.iter().any(|k| k == LOG_WANTED_PURSUIT_CLEARED));
    }

    #[test]
    fn lose_stars_clamps_at_zero() {
        let cfg = WantedConfig::default_config();
        let mut state = WantedState::new();
        state.gain_stars(2, &cfg);
        assert_eq!(state.lose_stars(5), 2);
        assert_eq!(state.wanted_stars(), 0);
    }

    #[test]
    fn reset_pursuit_fields_keeps_corruption() {
        let cfg = WantedConfig::default_config();
        let mut state = WantedState::new();
        state.gain_stars(4, &cfg);
        state.corrupt_pcso_id = Some(7);
        state.corrupt_pcso_tea_count = 3;
        state.has_corrupt_pcso = true;
        state.hiding = true;
        state.in_safe_house = true;

        state.reset_pursuit_fields();

        assert_eq!(state.wanted_stars(), 0);
        assert!(!state.hiding());
        assert!(!state.in_safe_house());
        assert!(state.has_corrupt_pcso());
        assert_eq!(state.corrupt_pcso_tea_count(), 3);
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3.0, 4.0, 0.0);
        assert!((a.distance_to(b) - 5.0).abs() < f32::EPSILON);
    }
}
