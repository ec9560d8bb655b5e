use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;

use super::month_names::{month_name_genitive, YEAR_SUFFIX};
use crate::errors::{DateError, DateField};

/// A day/month/year triple whose day and month are range checked.
///
/// The setters only enforce `1..=31` and `1..=12`; whether the combination
/// exists on the calendar (31 April, 29 February of a common year) is a
/// separate question answered by [`CalendarDate::is_valid_calendar_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    day: i32,
    month: i32,
    year: i32,
}

impl CalendarDate {
    pub fn new(day: i32, month: i32, year: i32) -> Result<Self, DateError> {
        let mut date = Self {
            day: 1,
            month: 1,
            year,
        };
        date.set_day(day)?;
        date.set_month(month)?;
        Ok(date)
    }

    pub fn day(&self) -> i32 {
        self.day
    }

    pub fn month(&self) -> i32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn set_day(&mut self, value: i32) -> Result<(), DateError> {
        self.day = checked(DateField::Day, value)?;
        Ok(())
    }

    pub fn set_month(&mut self, value: i32) -> Result<(), DateError> {
        self.month = checked(DateField::Month, value)?;
        Ok(())
    }

    pub fn set_year(&mut self, value: i32) {
        self.year = value;
    }

    /// Century the year belongs to: years 1..=100 are the first century.
    pub fn century(&self) -> i32 {
        let century = (i64::from(self.year) - 1).div_euclid(100) + 1;
        i32::try_from(century).unwrap_or(i32::MAX)
    }

    /// Long Ukrainian form, e.g. `5 березня 2024 року`.
    pub fn long_form(&self) -> Result<String, DateError> {
        let month_name = month_name_genitive(self.month).ok_or(DateError::OutOfRange {
            field: DateField::Month,
            value: self.month,
        })?;
        Ok(format!(
            "{} {} {} {}",
            self.day, month_name, self.year, YEAR_SUFFIX
        ))
    }

    /// Short form `DD.MM.YYYY`.
    pub fn short_form(&self) -> String {
        format!("{:02}.{:02}.{}", self.day, self.month, self.year)
    }

    pub fn is_valid_calendar_date(&self) -> bool {
        self.to_naive_date().is_ok()
    }

    /// Resolves the triple into a proleptic Gregorian date.
    pub fn to_naive_date(&self) -> Result<NaiveDate, DateError> {
        let not_a_date = || DateError::NotACalendarDate {
            day: self.day,
            month: self.month,
            year: self.year,
        };
        let month = u32::try_from(self.month).map_err(|_| not_a_date())?;
        let day = u32::try_from(self.day).map_err(|_| not_a_date())?;
        NaiveDate::from_ymd_opt(self.year, month, day).ok_or_else(not_a_date)
    }

    /// Absolute number of whole days between two dates, midnight to midnight.
    pub fn days_between(a: &CalendarDate, b: &CalendarDate) -> Result<i64, DateError> {
        let first = a.to_naive_date()?;
        let second = b.to_naive_date()?;
        Ok((second - first).num_days().abs())
    }

    pub fn chronological_cmp(&self, other: &CalendarDate) -> Result<Ordering, DateError> {
        Ok(self.to_naive_date()?.cmp(&other.to_naive_date()?))
    }
}

fn checked(field: DateField, value: i32) -> Result<i32, DateError> {
    let (min, max) = field.bounds();
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        tracing::debug!(%field, value, "rejected out-of-range date field");
        Err(DateError::OutOfRange { field, value })
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_form())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: i32, month: i32, year: i32) -> CalendarDate {
        CalendarDate::new(day, month, year).expect("in-range date")
    }

    #[test]
    fn constructor_accepts_impossible_calendar_combination() {
        let feb_31 = date(31, 2, 2024);
        assert_eq!(feb_31.short_form(), "31.02.2024");
        assert!(!feb_31.is_valid_calendar_date());
    }

    #[test]
    fn setters_keep_previous_value_on_failure() {
        let mut value = date(10, 6, 2020);
        assert!(value.set_day(0).is_err());
        assert!(value.set_month(13).is_err());
        assert_eq!((value.day(), value.month()), (10, 6));

        value.set_year(-44);
        assert_eq!(value.year(), -44);
    }

    #[test]
    fn long_form_spells_month() {
        assert_eq!(date(5, 3, 2024).long_form().unwrap(), "5 березня 2024 року");
        assert_eq!(date(1, 12, 1991).long_form().unwrap(), "1 грудня 1991 року");
    }

    #[test]
    fn century_uses_floor_division() {
        assert_eq!(date(1, 1, 0).century(), 0);
        assert_eq!(date(1, 1, -99).century(), 0);
        assert_eq!(date(1, 1, -100).century(), -1);
    }

    #[test]
    fn century_covers_extreme_years() {
        assert_eq!(date(1, 1, i32::MIN).century(), -21_474_836);
        assert_eq!(date(1, 1, i32::MAX).century(), 21_474_837);
    }

    #[test]
    fn days_between_spans_leap_day() {
        let a = date(28, 2, 2024);
        let b = date(1, 3, 2024);
        assert_eq!(CalendarDate::days_between(&a, &b), Ok(2));
    }

    #[test]
    fn days_between_rejects_impossible_date() {
        let a = date(31, 4, 2023);
        let b = date(1, 5, 2023);
        assert_eq!(
            CalendarDate::days_between(&a, &b),
            Err(DateError::NotACalendarDate {
                day: 31,
                month: 4,
                year: 2023
            })
        );
    }
}
