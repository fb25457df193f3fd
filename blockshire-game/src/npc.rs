//! NPC roster contract consumed by the pursuit engine
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::state::Position;

/// Stable identifier assigned to an NPC by the host roster
pub type NpcId = u32;

/// NPC archetypes the pursuit engine distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NpcKind {
    Officer,
    Pcso,
    Civilian,
}

impl NpcKind {
    /// Check whether this NPC counts toward police line of sight
    #[must_use]
    pub const fn is_police_like(self) -> bool {
        matches!(self, Self::Officer | Self::Pcso)
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Officer => "officer",
            Self::Pcso => "pcso",
            Self::Civilian => "civilian",
        }
    }
}

impl fmt::Display for NpcKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Behavioural state owned by the host NPC simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NpcBehaviour {
    #[default]
    Patrolling,
    Chasing,
    Idle,
}

impl NpcBehaviour {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Patrolling => "patrolling",
            Self::Chasing => "chasing",
            Self::Idle => "idle",
        }
    }
}

/// Roster element contract.
///
/// The host owns NPC pathfinding and rendering; the pursuit engine only
/// reads kind/position/behaviour and flips chasing NPCs back to patrol on a
/// successful escape. Roster references are passed fresh each call and never
/// retained.
pub trait PursuitNpc {
    fn id(&self) -> NpcId;
    fn kind(&self) -> NpcKind;
    fn position(&self) -> Position;
    fn behaviour(&self) -> NpcBehaviour;
    fn set_behaviour(&mut self, behaviour: NpcBehaviour);

    /// Check whether this NPC currently participates in LOS checks
    fn is_active_police(&self) -> bool {
        self.kind().is_police_like() && self.behaviour() != NpcBehaviour::Idle
    }
}
