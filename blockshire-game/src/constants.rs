//! Centralized balance and tuning constants for the Blockshire wanted system.
//!
//! These values define the deterministic math for the pursuit simulation.
//! Keeping them together ensures that gameplay can only be adjusted via
//! code changes reviewed in version control, rather than through external
//! JSON assets.

// Logging keys -------------------------------------------------------------
pub(crate) const LOG_WANTED_STAR_GAINED: &str = "log.wanted.star-gained";
pub(crate) const LOG_WANTED_STAR_LOST: &str = "log.wanted.star-lost";
pub(crate) const LOG_WANTED_PURSUIT_STARTED: &str = "log.wanted.pursuit-started";
pub(crate) const LOG_WANTED_PURSUIT_CLEARED: &str = "log.wanted.pursuit-cleared";
pub(crate) const LOG_WANTED_LEG_IT: &str = "log.wanted.leg-it";
pub(crate) const LOG_WANTED_ALERT_RAISED: &str = "log.wanted.alert-raised";
pub(crate) const LOG_WANTED_ALERT_EXPIRED: &str = "log.wanted.alert-expired";
pub(crate) const LOG_WANTED_BIN_HIDDEN: &str = "log.wanted.bin-hidden";
pub(crate) const LOG_WANTED_SAFE_HOUSE_CLEAR: &str = "log.wanted.safe-house-clear";
pub(crate) const LOG_WANTED_DISGUISE_ESCAPE: &str = "log.wanted.disguise-escape";
pub(crate) const LOG_WANTED_BRIBE_PAID: &str = "log.wanted.bribe-paid";
pub(crate) const LOG_WANTED_TEA_OFFERED: &str = "log.wanted.tea-offered";
pub(crate) const LOG_WANTED_BENT_COPPER: &str = "log.wanted.bent-copper";
pub(crate) const LOG_WANTED_ARRESTED: &str = "log.wanted.arrested";

// Criminal record counters -------------------------------------------------
pub const RECORD_TIMES_ARRESTED: &str = "times_arrested";

// Escalation tuning --------------------------------------------------------
pub(crate) const MAX_STARS: u32 = 5;
pub(crate) const SEVERITY_PER_STAR: u32 = 10;

// Decay and pursuit timers -------------------------------------------------
pub(crate) const DECAY_SECONDS_PER_STAR: f32 = 30.0;
pub(crate) const LEG_IT_DISTANCE: f32 = 48.0;
pub(crate) const LEG_IT_LOS_BREAK_SECONDS: f32 = 10.0;
pub(crate) const LEG_IT_STAR_REWARD: u32 = 2;

// Line-of-sight tuning -----------------------------------------------------
pub(crate) const BASE_LOS_RANGE: f32 = 24.0;
pub(crate) const LOS_RANGE_FLOOR: f32 = 1.0;
pub(crate) const RAIN_LOS_REDUCTION: f32 = 8.0;
pub(crate) const FOG_LOS_REDUCTION: f32 = 12.0;
pub(crate) const NIGHT_LOS_REDUCTION: f32 = 6.0;
pub(crate) const HEIGHTENED_ALERT_LOS_BONUS: f32 = 8.0;
pub(crate) const HEIGHTENED_ALERT_DURATION: f32 = 120.0;

// Hiding tuning ------------------------------------------------------------
pub(crate) const HIDING_ENTER_DURATION: f32 = 3.0;
pub(crate) const HIDING_POLICE_ENTRY_THRESHOLD: u32 = 2;

// Safe house tuning --------------------------------------------------------
pub(crate) const SAFE_HOUSE_DURATION: f32 = 45.0;
pub(crate) const SAFE_HOUSE_POLICE_ENTRY_THRESHOLD: u32 = 2;

// Escape tuning ------------------------------------------------------------
pub(crate) const DISGUISE_ESCAPE_MAX_STARS: u32 = 3;
pub(crate) const BRIBE_COST_PER_STAR: i64 = 50;
pub(crate) const NOTORIETY_BRIBE_CEILING: i32 = 70;
pub(crate) const CORRUPT_PCSO_TEA_INTERACTIONS: u32 = 3;

// Arrest tuning ------------------------------------------------------------
pub(crate) const ARREST_FINE_PER_STAR: i64 = 100;
pub(crate) const ARREST_NOTORIETY_PER_STAR: i32 = 2;
