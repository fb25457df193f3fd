//! Collaborator contracts the pursuit engine calls into.
//!
//! The engine owns none of these systems; hosts pass implementations by
//! reference per call (see the roster contract in [`crate::npc`] for the NPC
//! side). Keeping the seams as traits keeps the engine trivially mockable.
use serde::{Deserialize, Serialize};

/// Achievements the wanted system can unlock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementKind {
    /// Escaped pursuit by sheer distance
    LegItLegend,
    /// Shook off a chase with a disguise swap
    QuickChange,
    /// Fully hidden in a wheelie bin
    WheelieBinWally,
    /// Waited out a pursuit in a safe house
    CleanGetaway,
    /// Cultivated a corrupt PCSO with three cups of tea
    BentCopper,
    /// First arrest on record
    Nicked,
    /// Reached the maximum wanted level
    PublicEnemy,
}

impl AchievementKind {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::LegItLegend => "achievement.leg-it-legend",
            Self::QuickChange => "achievement.quick-change",
            Self::WheelieBinWally => "achievement.wheelie-bin-wally",
            Self::CleanGetaway => "achievement.clean-getaway",
            Self::BentCopper => "achievement.bent-copper",
            Self::Nicked => "achievement.nicked",
            Self::PublicEnemy => "achievement.public-enemy",
        }
    }
}

/// Sink for achievement unlocks
pub trait AchievementSink {
    fn unlock(&mut self, kind: AchievementKind);
}

/// No-op sink for hosts that do not track achievements
impl AchievementSink for () {
    fn unlock(&mut self, _kind: AchievementKind) {}
}

/// Coin and gift-item access into the player inventory
pub trait Inventory {
    fn coins(&self) -> i64;

    /// Remove up to `amount` coins; returns the amount actually removed.
    /// The balance never goes negative.
    fn spend_coins(&mut self, amount: i64) -> i64;

    fn tea_count(&self) -> u32;

    /// Consume one tea gift; returns false when none are held
    fn take_tea(&mut self) -> bool;
}

/// Named-counter criminal record
pub trait CriminalRecord {
    fn increment(&mut self, counter: &str);
}

/// Notoriety level read for bribe gating; arrests feed back into it
pub trait Notoriety {
    fn level(&self) -> i32;
    fn add(&mut self, amount: i32);
}

/// Read-only view of the disguise system
pub trait DisguiseSystem {
    fn is_disguised(&self) -> bool;
}
