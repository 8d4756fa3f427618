//! Contribution aggregation.
//!
//! Turns the nested week → day calendar returned by the profile query into a
//! flat daily series and a per-month rollup. Pure; performs no I/O and never
//! fails.

use chrono::NaiveDate;

use crate::{Activity, ContributionCalendar, ContributionDay, MonthlyRollup};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of a canonical `YYYY-MM-DD` date.
const DATE_LEN: usize = 10;

/// Length of the `YYYY-MM` prefix of an ISO date.
const MONTH_KEY_LEN: usize = 7;

/// Flattens `calendar` into an [`Activity`].
///
/// Days keep their source order (oldest first). The monthly rollup groups on
/// the `YYYY-MM` prefix of each date, with groups ordered by first
/// occurrence. A day whose date is not a valid `YYYY-MM-DD` or whose count is
/// negative is skipped from both outputs, so
/// `activity.monthly.total() == activity.total_contributions` always holds.
pub fn aggregate(calendar: &ContributionCalendar) -> Activity {
    let mut daily = Vec::new();
    let mut monthly = MonthlyRollup::new();

    for day in calendar.weeks.iter().flat_map(|week| week.days.iter()) {
        let Some((date, month_key)) = parse_day(&day.date) else {
            tracing::trace!(date = %day.date, "Skipping calendar day with malformed date");
            continue;
        };
        let Ok(count) = u64::try_from(day.contribution_count) else {
            tracing::trace!(date = %day.date, count = day.contribution_count, "Skipping calendar day with negative count");
            continue;
        };

        daily.push(ContributionDay { date, count });
        monthly.add(month_key, count);
    }

    let total_contributions = daily.iter().map(|d| d.count).sum();

    Activity {
        daily,
        monthly,
        total_contributions,
    }
}

/// Accepts only the canonical `YYYY-MM-DD` form, so the month key taken from
/// `raw` always matches the formatted date in the daily series.
fn parse_day(raw: &str) -> Option<(NaiveDate, &str)> {
    if raw.len() != DATE_LEN {
        return None;
    }
    let date = NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()?;
    if date.format(DATE_FORMAT).to_string() != raw {
        return None;
    }
    let month_key = raw.get(..MONTH_KEY_LEN)?;
    Some((date, month_key))
}
