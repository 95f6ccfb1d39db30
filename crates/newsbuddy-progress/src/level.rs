use newsbuddy_types::XpSchedule;

/// Level reached with `xp` accumulated: `floor(xp / per_level) + 1`.
///
/// Total over every `u64` and monotonic non-decreasing in `xp`.
pub fn level_for(xp: u64, schedule: &XpSchedule) -> u64 {
    (xp / schedule.per_level.get()).saturating_add(1)
}

/// XP still needed to reach the next level. Always in `1..=per_level`.
pub fn xp_to_next_level(xp: u64, schedule: &XpSchedule) -> u64 {
    let span = schedule.per_level.get();
    span - xp % span
}

/// Fraction of the current level already earned, in `[0, 1)`.
pub fn level_progress(xp: u64, schedule: &XpSchedule) -> f64 {
    let span = schedule.per_level.get();
    (xp % span) as f64 / span as f64
}
