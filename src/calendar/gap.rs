use chrono::NaiveDate;

use super::date::CalendarDate;
use crate::errors::DateError;

/// Returns the dates in ascending chronological order.
///
/// Fails on the first date that does not exist on the calendar; ties keep
/// their input order.
pub fn sort_chronologically(dates: &[CalendarDate]) -> Result<Vec<CalendarDate>, DateError> {
    let mut keyed = dates
        .iter()
        .map(|date| Ok((date.to_naive_date()?, *date)))
        .collect::<Result<Vec<(NaiveDate, CalendarDate)>, DateError>>()?;
    keyed.sort_by_key(|(naive, _)| *naive);
    Ok(keyed.into_iter().map(|(_, date)| date).collect())
}

/// Largest day distance between any two of the given dates.
///
/// Every unordered pair is examined, so this is quadratic in the input
/// length. Fewer than two dates yield `0`.
pub fn max_day_gap(dates: &[CalendarDate]) -> Result<i64, DateError> {
    let mut max_days = 0;
    for (i, first) in dates.iter().enumerate() {
        for second in &dates[i + 1..] {
            let days = CalendarDate::days_between(first, second)?;
            if days > max_days {
                max_days = days;
            }
        }
    }
    tracing::debug!(count = dates.len(), max_days, "pairwise gap scan finished");
    Ok(max_days)
}
