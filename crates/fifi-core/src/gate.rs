//! Feature gate: investing unlocks once the emergency fund is full

use crate::models::UserProfile;

/// Emergency fund fill ratio (1.0 = target reached)
///
/// `None` when the target is zero or negative: there is no meaningful ratio.
pub fn emergency_fund_progress(profile: &UserProfile) -> Option<f64> {
    let target = profile.emergency_fund_target;
    if target > 0.0 {
        Some(profile.emergency_fund_current / target)
    } else {
        None
    }
}

/// Progress as a display percentage, clamped to [0, 100]
///
/// A zero target shows 100% when anything is saved and 0% otherwise, which
/// agrees with [`is_investing_unlocked`].
pub fn emergency_fund_percent(profile: &UserProfile) -> f64 {
    match emergency_fund_progress(profile) {
        Some(ratio) => (ratio * 100.0).clamp(0.0, 100.0),
        None if profile.emergency_fund_current > 0.0 => 100.0,
        None => 0.0,
    }
}

/// Whether the investing surface is available
pub fn is_investing_unlocked(profile: &UserProfile) -> bool {
    match emergency_fund_progress(profile) {
        Some(ratio) => ratio >= 1.0,
        None => profile.emergency_fund_current > 0.0,
    }
}

/// Amount still needed to unlock investing (zero once unlocked)
pub fn emergency_fund_shortfall(profile: &UserProfile) -> f64 {
    (profile.emergency_fund_target - profile.emergency_fund_current).max(0.0)
}
