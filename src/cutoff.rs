//! Cutoff time calculation

use chrono::{DateTime, Days, Local, TimeDelta, TimeZone};

use crate::error::{CleanupError, Result};

/// Compute `now` minus `days` calendar days
///
/// Works in local calendar days, so the wall-clock time of day is kept across
/// DST changes. Negative `days` puts the cutoff in the future.
pub fn cutoff_time(now: DateTime<Local>, days: i64) -> Result<DateTime<Local>> {
    let out_of_range = || CleanupError::CutoffOutOfRange { days };

    let shift = Days::new(days.unsigned_abs());
    let wall_clock = if days >= 0 {
        now.naive_local().checked_sub_days(shift)
    } else {
        now.naive_local().checked_add_days(shift)
    }
    .ok_or_else(out_of_range)?;

    // Ambiguous (DST fold) takes the earlier instant; a DST gap has no local
    // instant at all, so fall back to whole 24h days
    match Local.from_local_datetime(&wall_clock).earliest() {
        Some(cutoff) => Ok(cutoff),
        None => TimeDelta::try_days(days)
            .and_then(|delta| now.checked_sub_signed(delta))
            .ok_or_else(out_of_range),
    }
}
