use crate::pattern::Bitmap;
use chrono::{Datelike, Days, NaiveDate};
use std::collections::BTreeMap;

/// Commit counts keyed by calendar date, iterated in ascending order.
pub type Schedule = BTreeMap<NaiveDate, u32>;

/// Maps the bitmap onto the calendar starting at `anchor`.
///
/// The bitmap is read column-major: column = week offset from the anchor,
/// row = day offset within that week, so cell (row, col) lands on
/// `anchor + 7*col + row` days. A lit cell contributes `unit` commits.
pub fn build_schedule(bitmap: &Bitmap, anchor: NaiveDate, unit: u32) -> Schedule {
    let mut schedule = Schedule::new();

    for col in 0..bitmap.width() {
        for row in 0..bitmap.rows().len() {
            let offset = (col * 7 + row) as u64;
            let Some(date) = anchor.checked_add_days(Days::new(offset)) else {
                // Only reachable with an anchor at the edge of the calendar.
                continue;
            };
            let count = if bitmap.is_set(row, col) { unit } else { 0 };
            *schedule.entry(date).or_insert(0) += count;
        }
    }

    schedule
}

/// The most recent Sunday on or before `today`, so the pattern's first row
/// lines up with the top of a Sunday-anchored contribution grid.
pub fn most_recent_sunday(today: NaiveDate) -> NaiveDate {
    let days_since_sunday = today.weekday().num_days_from_sunday() as u64;
    today
        .checked_sub_days(Days::new(days_since_sunday))
        .expect("date within calendar range")
}
