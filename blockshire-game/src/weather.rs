//! Weather and time-of-day conditions as they affect police visibility
use serde::{Deserialize, Serialize};

use crate::config::WantedConfig;

/// Weather conditions supplied by the host simulation each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Weather {
    #[default]
    Clear,
    Rain,
    Fog,
    ColdSnap,
    Smoke,
}

impl Weather {
    /// Check if this weather shortens police line of sight
    #[must_use]
    pub const fn is_visibility_reducing(self) -> bool {
        matches!(self, Self::Rain | Self::Fog)
    }

    /// Get i18n key for weather state name
    #[must_use]
    pub const fn i18n_key(self) -> &'static str {
        match self {
            Self::Clear => "weather.states.Clear",
            Self::Rain => "weather.states.Rain",
            Self::Fog => "weather.states.Fog",
            Self::ColdSnap => "weather.states.ColdSnap",
            Self::Smoke => "weather.states.Smoke",
        }
    }

    /// LOS reduction in blocks for this condition alone
    #[must_use]
    pub const fn los_reduction(self, cfg: &WantedConfig) -> f32 {
        match self {
            Self::Rain => cfg.rain_los_reduction,
            Self::Fog => cfg.fog_los_reduction,
            Self::Clear | Self::ColdSnap | Self::Smoke => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_rain_and_fog_reduce_visibility() {
        assert!(Weather::Rain.is_visibility_reducing());
        assert!(Weather::Fog.is_visibility_reducing());
        assert!(!Weather::Clear.is_visibility_reducing());
        assert!(!Weather::ColdSnap.is_visibility_reducing());
        assert!(!Weather::Smoke.is_visibility_reducing());
    }

    #[test]
    fn reductions_come_from_config() {
        let cfg = WantedConfig::default_config();
        assert!(Weather::Fog.los_reduction(&cfg) > Weather::Rain.los_reduction(&cfg));
        assert_eq!(Weather::ColdSnap.los_reduction(&cfg), 0.0);
    }
}
