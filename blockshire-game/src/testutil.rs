//! Deterministic-setup back doors for tests.
//!
//! Compiled only for this crate's own tests or under the `test-support`
//! feature, so shipped builds cannot bypass the real transition rules.
use crate::npc::NpcId;
use crate::state::{Position, WantedState};

impl WantedState {
    pub fn set_wanted_stars_for_testing(&mut self, stars: u32) {
        self.wanted_stars = stars;
    }

    pub fn set_decay_timer_for_testing(&mut self, seconds: f32) {
        self.decay_timer = seconds;
    }

    pub fn set_last_known_position_for_testing(&mut self, position: Position) {
        self.last_known_position = position;
    }

    pub fn set_heightened_alert_for_testing(&mut self, active: bool, timer: f32) {
        self.heightened_alert_active = active;
        self.heightened_alert_timer = timer;
    }

    pub fn set_hiding_for_testing(&mut self, hiding: bool, progress: f32) {
        self.hiding = hiding;
        self.hiding_progress = progress;
        self.hiding_timer = 0.0;
    }

    pub fn set_safe_house_for_testing(&mut self, inside: bool, timer: f32) {
        self.in_safe_house = inside;
        self.safe_house_timer = timer;
    }

    pub fn set_disguise_escape_used_for_testing(&mut self, used: bool) {
        self.flags.disguise_escape_used = used;
    }

    pub fn set_leg_it_condition_for_testing(&mut self, met: bool) {
        self.flags.leg_it_done = met;
    }

    pub fn set_corrupt_pcso_for_testing(&mut self, id: Option<NpcId>, teas: u32, corrupt: bool) {
        self.corrupt_pcso_id = id;
        self.corrupt_pcso_tea_count = teas;
        self.has_corrupt_pcso = corrupt;
    }
}
