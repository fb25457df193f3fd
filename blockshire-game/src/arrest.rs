//! Arrest resolution: the terminal consequence of being cornered
use crate::config::WantedConfig;
use crate::constants::{LOG_WANTED_ARRESTED, RECORD_TIMES_ARRESTED};
use crate::hooks::{AchievementKind, AchievementSink, CriminalRecord, Inventory, Notoriety};
use crate::state::WantedState;

/// Apply the full consequences of an arrest.
///
/// The fine is `arrest_fine_per_star` per current star, deducted saturating
/// at the available balance. The criminal record gains a `times_arrested`
/// count, notoriety rises with the arrest's star count, and every
/// pursuit-scoped field resets. Corrupt-PCSO cultivation survives. Returns
/// the assessed fine.
///
/// A call while not wanted is a defensive no-op returning 0.
pub fn apply_arrest_consequences<I, C, T, A>(
    state: &mut WantedState,
    cfg: &WantedConfig,
    inventory: &mut I,
    record: &mut C,
    notoriety: &mut T,
    achievements: &mut A,
) -> i64
where
    I: Inventory,
    C: CriminalRecord,
    T: Notoriety,
    A: AchievementSink,
{
    if !state.is_wanted() {
        return 0;
    }

    let stars = state.wanted_stars;
    let fine = cfg.arrest_fine_per_star * i64::from(stars);
    inventory.spend_coins(fine);
    record.increment(RECORD_TIMES_ARRESTED);
    notoriety.add(cfg.arrest_notoriety_per_star * i32::try_from(stars).unwrap_or(i32::MAX));

    state.logs.push(String::from(LOG_WANTED_ARRESTED));
    state.reset_pursuit_fields();
    if !state.nicked_awarded {
        state.nicked_awarded = true;
        achievements.unlock(AchievementKind::Nicked);
    }
    fine
}
