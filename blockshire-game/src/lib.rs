//! Blockshire Wanted System
//!
//! Platform-agnostic criminal-pursuit simulation for the Blockshire survival
//! game. This crate tracks how overtly the player breaks the law, escalates
//! the police response, and resolves escapes; it carries no UI, rendering, or
//! persistence concerns. Collaborating systems (inventory, criminal record,
//! notoriety, NPC roster, disguises) are consumed through the narrow trait
//! contracts in [`hooks`] and [`npc`] and passed by reference per call.
//!
//! The engine is single-threaded and frame-stepped: the host calls
//! [`pursuit::update`] once per simulation tick with the frame's delta
//! seconds, and invokes the discrete player actions in [`escape`] and
//! [`arrest`] as input arrives. All timers accumulate delta seconds, so
//! behavior is frame-rate independent.

pub mod arrest;
pub mod config;
pub mod constants;
pub mod escalation;
pub mod escape;
pub mod hooks;
pub mod npc;
pub mod pursuit;
pub mod state;
#[cfg(any(test, feature = "test-support"))]
pub mod testutil;
pub mod visibility;
pub mod weather;

// Re-export commonly used types
pub use arrest::apply_arrest_consequences;
pub use config::{WantedConfig, WantedConfigError};
pub use constants::RECORD_TIMES_ARRESTED;
pub use escalation::on_crime_witnessed;
pub use escape::{
    BribeOutcome, DisguiseEscapeOutcome, TeaOutcome, attempt_bribe_pcso, attempt_disguise_escape,
    bribe_cost, offer_tea_to_pcso, on_enter_safe_house, on_wheelie_bin_hidden, toggle_hiding,
};
pub use hooks::{
    AchievementKind, AchievementSink, CriminalRecord, DisguiseSystem, Inventory, Notoriety,
};
pub use npc::{NpcBehaviour, NpcId, NpcKind, PursuitNpc};
pub use pursuit::{trigger_heightened_alert, update};
pub use state::{Position, PursuitFlags, WantedState};
pub use visibility::{effective_los_range, has_police_los};
pub use weather::Weather;
