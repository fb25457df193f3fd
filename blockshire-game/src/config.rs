//! Wanted-system tuning configuration
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    ARREST_FINE_PER_STAR, ARREST_NOTORIETY_PER_STAR, BASE_LOS_RANGE, BRIBE_COST_PER_STAR,
    CORRUPT_PCSO_TEA_INTERACTIONS, DECAY_SECONDS_PER_STAR, DISGUISE_ESCAPE_MAX_STARS,
    FOG_LOS_REDUCTION, HEIGHTENED_ALERT_DURATION, HEIGHTENED_ALERT_LOS_BONUS,
    HIDING_ENTER_DURATION, HIDING_POLICE_ENTRY_THRESHOLD, LEG_IT_DISTANCE,
    LEG_IT_LOS_BREAK_SECONDS, LEG_IT_STAR_REWARD, LOS_RANGE_FLOOR, MAX_STARS,
    NIGHT_LOS_REDUCTION, NOTORIETY_BRIBE_CEILING, RAIN_LOS_REDUCTION, SAFE_HOUSE_DURATION,
    SAFE_HOUSE_POLICE_ENTRY_THRESHOLD, SEVERITY_PER_STAR,
};

/// Errors raised while loading or validating a wanted-system configuration
#[derive(Debug, Error)]
pub enum WantedConfigError {
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {field} {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Complete tuning table for the pursuit simulation.
///
/// Defaults come from `constants.rs`; hosts may override via
/// [`WantedConfig::from_json`], which validates before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WantedConfig {
    pub max_stars: u32,
    pub severity_per_star: u32,
    pub decay_seconds_per_star: f32,
    pub base_los_range: f32,
    pub los_range_floor: f32,
    pub rain_los_reduction: f32,
    pub fog_los_reduction: f32,
    pub night_los_reduction: f32,
    pub heightened_alert_los_bonus: f32,
    pub heightened_alert_duration: f32,
    pub leg_it_distance: f32,
    pub leg_it_los_break_seconds: f32,
    pub leg_it_star_reward: u32,
    pub hiding_enter_duration: f32,
    pub hiding_police_entry_threshold: u32,
    pub safe_house_duration: f32,
    pub safe_house_police_entry_threshold: u32,
    pub disguise_escape_max_stars: u32,
    pub bribe_cost_per_star: i64,
    pub notoriety_bribe_ceiling: i32,
    pub corrupt_pcso_tea_interactions: u32,
    pub arrest_fine_per_star: i64,
    pub arrest_notoriety_per_star: i32,
}

impl Default for WantedConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

impl WantedConfig {
    /// Get the reviewed default tuning table
    #[must_use]
    pub const fn default_config() -> Self {
        Self {
            max_stars: MAX_STARS,
            severity_per_star: SEVERITY_PER_STAR,
            decay_seconds_per_star: DECAY_SECONDS_PER_STAR,
            base_los_range: BASE_LOS_RANGE,
            los_range_floor: LOS_RANGE_FLOOR,
            rain_los_reduction: RAIN_LOS_REDUCTION,
            fog_los_reduction: FOG_LOS_REDUCTION,
            night_los_reduction: NIGHT_LOS_REDUCTION,
            heightened_alert_los_bonus: HEIGHTENED_ALERT_LOS_BONUS,
            heightened_alert_duration: HEIGHTENED_ALERT_DURATION,
            leg_it_distance: LEG_IT_DISTANCE,
            leg_it_los_break_seconds: LEG_IT_LOS_BREAK_SECONDS,
            leg_it_star_reward: LEG_IT_STAR_REWARD,
            hiding_enter_duration: HIDING_ENTER_DURATION,
            hiding_police_entry_threshold: HIDING_POLICE_ENTRY_THRESHOLD,
            safe_house_duration: SAFE_HOUSE_DURATION,
            safe_house_police_entry_threshold: SAFE_HOUSE_POLICE_ENTRY_THRESHOLD,
            disguise_escape_max_stars: DISGUISE_ESCAPE_MAX_STARS,
            bribe_cost_per_star: BRIBE_COST_PER_STAR,
            notoriety_bribe_ceiling: NOTORIETY_BRIBE_CEILING,
            corrupt_pcso_tea_interactions: CORRUPT_PCSO_TEA_INTERACTIONS,
            arrest_fine_per_star: ARREST_FINE_PER_STAR,
            arrest_notoriety_per_star: ARREST_NOTORIETY_PER_STAR,
        }
    }

    /// Load a configuration override from a JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed or fails validation.
    pub fn from_json(json_str: &str) -> Result<Self, WantedConfigError> {
        let config: Self = serde_json::from_str(json_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate tuning values are usable by the simulation
    ///
    /// # Errors
    ///
    /// Returns an error naming the first offending field.
    pub fn validate(&self) -> Result<(), WantedConfigError> {
        const fn invalid(field: &'static str, reason: &'static str) -> WantedConfigError {
            WantedConfigError::Invalid { field, reason }
        }

        if self.max_stars == 0 {
            return Err(invalid("max_stars", "must be at least 1"));
        }
        if self.severity_per_star == 0 {
            return Err(invalid("severity_per_star", "must be at least 1"));
        }
        if self.leg_it_star_reward == 0 {
            return Err(invalid("leg_it_star_reward", "must be at least 1"));
        }
        if self.corrupt_pcso_tea_interactions == 0 {
            return Err(invalid("corrupt_pcso_tea_interactions", "must be at least 1"));
        }

        for (field, value) in [
            ("decay_seconds_per_star", self.decay_seconds_per_star),
            ("heightened_alert_duration", self.heightened_alert_duration),
            ("leg_it_distance", self.leg_it_distance),
            ("leg_it_los_break_seconds", self.leg_it_los_break_seconds),
            ("hiding_enter_duration", self.hiding_enter_duration),
            ("safe_house_duration", self.safe_house_duration),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(field, "must be a positive duration"));
            }
        }

        for (field, value) in [
            ("base_los_range", self.base_los_range),
            ("los_range_floor", self.los_range_floor),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(field, "must be a positive range"));
            }
        }

        for (field, value) in [
            ("rain_los_reduction", self.rain_los_reduction),
            ("fog_los_reduction", self.fog_los_reduction),
            ("night_los_reduction", self.night_los_reduction),
            ("heightened_alert_los_bonus", self.heightened_alert_los_bonus),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, "must be non-negative"));
            }
        }

        if self.bribe_cost_per_star < 0 {
            return Err(invalid("bribe_cost_per_star", "must be non-negative"));
        }
        if self.arrest_fine_per_star < 0 {
            return Err(invalid("arrest_fine_per_star", "must be non-negative"));
        }

        Ok(())
    }
}
