//! Per-frame pursuit step: LOS refresh, decay, leg-it, alert, hiding ramp,
//! safe-house countdown.
//!
//! All timers are delta-seconds accumulators, so behavior is frame-rate
//! independent. The engine retains no collaborator references between frames.
use crate::config::WantedConfig;
use crate::constants::{
    LOG_WANTED_ALERT_EXPIRED, LOG_WANTED_ALERT_RAISED, LOG_WANTED_LEG_IT,
    LOG_WANTED_SAFE_HOUSE_CLEAR,
};
use crate::hooks::{AchievementKind, AchievementSink};
use crate::npc::PursuitNpc;
use crate::state::{Position, WantedState};
use crate::visibility::has_police_los;
use crate::weather::Weather;

/// Advance the pursuit simulation by one frame.
///
/// Order matters: LOS is recomputed first because the decay and leg-it
/// checks both read the refreshed contact state.
#[allow(clippy::too_many_arguments)]
pub fn update<N: PursuitNpc, A: AchievementSink>(
    state: &mut WantedState,
    cfg: &WantedConfig,
    delta_seconds: f32,
    player: Position,
    npcs: &[N],
    weather: Weather,
    night: bool,
    achievements: &mut A,
) {
    debug_assert!(
        delta_seconds.is_finite() && delta_seconds >= 0.0,
        "frame delta must be a non-negative number of seconds"
    );
    if !delta_seconds.is_finite() || delta_seconds < 0.0 {
        return;
    }

    state.police_has_los = has_police_los(state, cfg, player, npcs, weather, night);

    if state.police_has_los {
        state.decay_timer = 0.0;
    } else if state.is_wanted() {
        state.decay_timer += delta_seconds;
        if state.decay_timer >= cfg.decay_seconds_per_star {
            state.lose_stars(1);
            state.decay_timer = 0.0;
        }
    }

    check_leg_it(state, cfg, player, achievements);
    tick_heightened_alert(state, cfg, delta_seconds);
    tick_hiding(state, cfg, delta_seconds);
    tick_safe_house(state, cfg, delta_seconds, achievements);
}

/// Raise heightened alert, widening police LOS until the timer expires.
///
/// Triggered externally, e.g. when a front-page crime story is published.
pub fn trigger_heightened_alert(state: &mut WantedState) {
    state.heightened_alert_active = true;
    state.heightened_alert_timer = 0.0;
    state.logs.push(String::from(LOG_WANTED_ALERT_RAISED));
}

fn check_leg_it<A: AchievementSink>(
    state: &mut WantedState,
    cfg: &WantedConfig,
    player: Position,
    achievements: &mut A,
) {
    if !state.is_wanted() || state.flags.leg_it_done || state.police_has_los {
        return;
    }
    let far_enough = player.distance_to(state.last_known_position) > cfg.leg_it_distance;
    let lost_long_enough = state.decay_timer > cfg.leg_it_los_break_seconds;
    if !(far_enough && lost_long_enough) {
        return;
    }

    state.flags.leg_it_done = true;
    state.logs.push(String::from(LOG_WANTED_LEG_IT));
    achievements.unlock(AchievementKind::LegItLegend);
    state.lose_stars(cfg.leg_it_star_reward);
}

fn tick_heightened_alert(state: &mut WantedState, cfg: &WantedConfig, delta_seconds: f32) {
    if !state.heightened_alert_active {
        return;
    }
    state.heightened_alert_timer += delta_seconds;
    if state.heightened_alert_timer >= cfg.heightened_alert_duration {
        state.heightened_alert_active = false;
        state.heightened_alert_timer = 0.0;
        state.logs.push(String::from(LOG_WANTED_ALERT_EXPIRED));
    }
}

fn tick_hiding(state: &mut WantedState, cfg: &WantedConfig, delta_seconds: f32) {
    if !state.hiding || state.hiding_progress >= 1.0 {
        return;
    }
    state.hiding_timer += delta_seconds;
    state.hiding_progress = (state.hiding_timer / cfg.hiding_enter_duration).clamp(0.0, 1.0);
}

fn tick_safe_house<A: AchievementSink>(
    state: &mut WantedState,
    cfg: &WantedConfig,
    delta_seconds: f32,
    achievements: &mut A,
) {
    if !state.in_safe_house {
        return;
    }
    // The timer runs regardless of star count; above the entry threshold it
    // never resolves. That asymmetry is the designed "doesn't work at high
    // heat" behavior, not an oversight.
    state.safe_house_timer += delta_seconds;
    let eligible =
        state.is_wanted() && state.wanted_stars <= cfg.safe_house_police_entry_threshold;
    if eligible && state.safe_house_timer >= cfg.safe_house_duration {
        state.in_safe_house = false;
        state.safe_house_timer = 0.0;
        state.logs.push(String::from(LOG_WANTED_SAFE_HOUSE_CLEAR));
        let stars = state.wanted_stars;
        state.lose_stars(stars);
        if !state.clean_getaway_awarded {
            state.clean_getaway_awarded = true;
            achievements.unlock(AchievementKind::CleanGetaway);
        }
    }
}
