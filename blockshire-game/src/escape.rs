//! Player-triggered escape mechanics.
//!
//! Every action is a single deterministic attempt returning a closed outcome
//! enum; ineligibility is never an error. The caller decides whether to
//! re-offer the action next frame.
use serde::{Deserialize, Serialize};

use crate::config::WantedConfig;
use crate::constants::{
    LOG_WANTED_BENT_COPPER, LOG_WANTED_BIN_HIDDEN, LOG_WANTED_BRIBE_PAID,
    LOG_WANTED_DISGUISE_ESCAPE, LOG_WANTED_TEA_OFFERED,
};
use crate::hooks::{AchievementKind, AchievementSink, DisguiseSystem, Inventory, Notoriety};
use crate::npc::{NpcBehaviour, NpcId, NpcKind, PursuitNpc};
use crate::state::WantedState;

/// Resolution of a disguise-escape attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisguiseEscapeOutcome {
    Success,
    AlreadyUsed,
    TooManyStars,
    NotDisguised,
    NotWanted,
}

impl DisguiseEscapeOutcome {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Success => "escape.disguise.success",
            Self::AlreadyUsed => "escape.disguise.already-used",
            Self::TooManyStars => "escape.disguise.too-many-stars",
            Self::NotDisguised => "escape.disguise.not-disguised",
            Self::NotWanted => "escape.disguise.not-wanted",
        }
    }
}

/// Resolution of a PCSO bribe attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BribeOutcome {
    Success,
    TooNotorious,
    InsufficientFunds,
    NotWanted,
    NotPcso,
}

impl BribeOutcome {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Success => "escape.bribe.success",
            Self::TooNotorious => "escape.bribe.too-notorious",
            Self::InsufficientFunds => "escape.bribe.insufficient-funds",
            Self::NotWanted => "escape.bribe.not-wanted",
            Self::NotPcso => "escape.bribe.not-pcso",
        }
    }
}

/// Resolution of a tea-cultivation gift
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeaOutcome {
    Accepted,
    CorruptNow,
    NoTea,
    NotPcso,
}

/// Toggle hiding (e.g. climbing into a wheelie bin).
///
/// Entering starts the progress ramp from zero; leaving resets it. The
/// boolean state stays truthful at any star count even when hiding does not
/// deter the police. Returns whether the toggle was accepted (a redundant
/// toggle is refused so re-entering cannot restart a finished ramp).
pub fn toggle_hiding(state: &mut WantedState, entering: bool) -> bool {
    if state.hiding == entering {
        return false;
    }
    state.hiding = entering;
    state.hiding_timer = 0.0;
    state.hiding_progress = 0.0;
    true
}

/// Completion hook for the hiding ramp.
///
/// Awards the wheelie-bin achievement the first time the player is fully
/// hidden; later completions are quiet. Returns whether the award fired.
pub fn on_wheelie_bin_hidden<A: AchievementSink>(
    state: &mut WantedState,
    achievements: &mut A,
) -> bool {
    if !state.hiding_complete() || state.wheelie_bin_awarded {
        return false;
    }
    state.wheelie_bin_awarded = true;
    state.logs.push(String::from(LOG_WANTED_BIN_HIDDEN));
    achievements.unlock(AchievementKind::WheelieBinWally);
    true
}

/// Attempt to shake pursuit by having swapped disguise.
///
/// Eligible once per pursuit at low star counts. On success every chasing
/// police NPC returns to patrol.
pub fn attempt_disguise_escape<D, N, A>(
    state: &mut WantedState,
    cfg: &WantedConfig,
    disguise: &D,
    npcs: &mut [N],
    achievements: &mut A,
) -> DisguiseEscapeOutcome
where
    D: DisguiseSystem,
    N: PursuitNpc,
    A: AchievementSink,
{
    if !state.is_wanted() {
        return DisguiseEscapeOutcome::NotWanted;
    }
    if state.wanted_stars > cfg.disguise_escape_max_stars {
        return DisguiseEscapeOutcome::TooManyStars;
    }
    if state.flags.disguise_escape_used {
        return DisguiseEscapeOutcome::AlreadyUsed;
    }
    if !disguise.is_disguised() {
        return DisguiseEscapeOutcome::NotDisguised;
    }

    for npc in npcs.iter_mut() {
        if npc.kind().is_police_like() && npc.behaviour() == NpcBehaviour::Chasing {
            npc.set_behaviour(NpcBehaviour::Patrolling);
        }
    }
    state.flags.disguise_escape_used = true;
    state.logs.push(String::from(LOG_WANTED_DISGUISE_ESCAPE));
    achievements.unlock(AchievementKind::QuickChange);
    DisguiseEscapeOutcome::Success
}

/// Coin cost of bribing the given PCSO at the current star count.
///
/// Halved once that specific PCSO has been cultivated as corrupt.
#[must_use]
pub fn bribe_cost(state: &WantedState, cfg: &WantedConfig, pcso: NpcId) -> i64 {
    let base = cfg.bribe_cost_per_star * i64::from(state.wanted_stars);
    if state.has_corrupt_pcso && state.corrupt_pcso_id == Some(pcso) {
        base / 2
    } else {
        base
    }
}

/// Attempt to bribe a PCSO to look the other way.
///
/// Refused outright at high notoriety. On success the cost is deducted, one
/// star is removed, and the PCSO returns to patrol.
pub fn attempt_bribe_pcso<N, I, T>(
    state: &mut WantedState,
    cfg: &WantedConfig,
    pcso: &mut N,
    inventory: &mut I,
    notoriety: &T,
) -> BribeOutcome
where
    N: PursuitNpc,
    I: Inventory,
    T: Notoriety,
{
    if !state.is_wanted() {
        return BribeOutcome::NotWanted;
    }
    if pcso.kind() != NpcKind::Pcso {
        return BribeOutcome::NotPcso;
    }
    if notoriety.level() >= cfg.notoriety_bribe_ceiling {
        return BribeOutcome::TooNotorious;
    }
    let cost = bribe_cost(state, cfg, pcso.id());
    if inventory.coins() < cost {
        return BribeOutcome::InsufficientFunds;
    }

    inventory.spend_coins(cost);
    pcso.set_behaviour(NpcBehaviour::Patrolling);
    state.logs.push(String::from(LOG_WANTED_BRIBE_PAID));
    state.lose_stars(1);
    BribeOutcome::Success
}

/// Offer a cup of tea to a PCSO, cultivating them toward corruption.
///
/// Consumes one tea per call. Gifts are tracked per NPC; switching targets
/// restarts the count. On the configured interaction the PCSO turns corrupt
/// and future bribes involving them cost half.
pub fn offer_tea_to_pcso<N, I, A>(
    state: &mut WantedState,
    cfg: &WantedConfig,
    pcso: &N,
    inventory: &mut I,
    achievements: &mut A,
) -> TeaOutcome
where
    N: PursuitNpc,
    I: Inventory,
    A: AchievementSink,
{
    if pcso.kind() != NpcKind::Pcso {
        return TeaOutcome::NotPcso;
    }
    if !inventory.take_tea() {
        return TeaOutcome::NoTea;
    }

    if state.corrupt_pcso_id == Some(pcso.id()) {
        state.corrupt_pcso_tea_count = state.corrupt_pcso_tea_count.saturating_add(1);
    } else {
        state.corrupt_pcso_id = Some(pcso.id());
        state.corrupt_pcso_tea_count = 1;
        state.has_corrupt_pcso = false;
    }
    state.logs.push(String::from(LOG_WANTED_TEA_OFFERED));

    if !state.has_corrupt_pcso
        && state.corrupt_pcso_tea_count >= cfg.corrupt_pcso_tea_interactions
    {
        state.has_corrupt_pcso = true;
        state.logs.push(String::from(LOG_WANTED_BENT_COPPER));
        achievements.unlock(AchievementKind::BentCopper);
        return TeaOutcome::CorruptNow;
    }
    TeaOutcome::Accepted
}

/// Enter or leave a safe house. Entering arms the dwell countdown resolved
/// by the frame step; see [`crate::pursuit`].
pub fn on_enter_safe_house(state: &mut WantedState, entering: bool) {
    if state.in_safe_house == entering {
        return;
    }
    state.in_safe_house = entering;
    state.safe_house_timer = 0.0;
}
