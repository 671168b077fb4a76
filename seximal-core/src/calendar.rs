//! Seximal calendar arithmetic.
//!
//! Years count from the autumnal equinox of Gregorian year 2000 (day zero
//! of year 1). A year holds six sixty-day "twomoons", each split into ten
//! six-day weeks, followed by five intercalary festival days (six in leap
//! years).

use std::fmt;

use chrono::NaiveDate;
use log::debug;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::{CoreError, CoreResult};

/// The six sixty-day twomoons of the seximal year.
pub const TWOMOONS: [&str; 6] = ["Pama", "Befa", "Tiva", "Donu", "Kusu", "Gerza"];

/// The six days of the seximal week.
pub const DAYS_OF_WEEK: [&str; 6] = [
    "Firsday", "Seconday", "Thirday", "Forday", "Fifday", "Siksday",
];

/// Names of the intercalary festival days closing the year.
pub const INTERCALARY_DAYS: [&str; 6] = [
    "Festival 1",
    "Festival 2",
    "Festival 3",
    "Festival 4",
    "Festival 5",
    "Festival 6",
];

/// Regular (non-intercalary) days in a year: six twomoons of sixty days.
const REGULAR_DAYS: i64 = 360;

/// Day count used to advance the year counter.
const DAYS_PER_YEAR: i64 = 365;

// Autumnal equinox of Gregorian year 2000, day zero of year 1.
static SEXIMAL_EPOCH: Lazy<NaiveDate> =
    Lazy::new(|| NaiveDate::from_ymd_opt(2000, 9, 22).expect("valid epoch date"));

/// Whether a seximal year carries a sixth festival day.
///
/// Years divisible by 3 are leap years, except those divisible by 12;
/// a year three before a multiple of 108 is not leap, but a year three
/// before a multiple of 648 is.
#[must_use]
pub fn is_leap_year(year: i64) -> bool {
    if year % 12 == 0 {
        return false;
    }
    if year % 3 == 0 {
        return true;
    }
    if (year + 3) % 108 == 0 {
        return false;
    }
    if (year + 3) % 648 == 0 {
        return true;
    }
    false
}

/// A date on the seximal calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeximalDate {
    pub year: i64,
    /// 0-5, Pama through Gerza
    pub twomoon: u32,
    /// 0-9 within the twomoon
    pub week: u32,
    /// 0-5, Firsday through Siksday
    pub day_of_week: u32,
    /// 0-364 (365 in leap years)
    pub day_of_year: u32,
    /// Festival index for the intercalary period at year end
    pub intercalary_day: Option<u32>,
}

impl SeximalDate {
    /// Converts a Gregorian date to the seximal calendar.
    ///
    /// Dates before the epoch are rejected.
    pub fn from_gregorian(date: NaiveDate) -> CoreResult<Self> {
        let days_since_epoch = (date - *SEXIMAL_EPOCH).num_days();
        if days_since_epoch < 0 {
            return Err(CoreError::PreEpochDate(date.to_string()));
        }
        debug!("{date} is day {days_since_epoch} of the seximal era");

        let year = days_since_epoch / DAYS_PER_YEAR + 1;
        let day_of_year = (days_since_epoch % DAYS_PER_YEAR) as u32;

        if i64::from(day_of_year) >= REGULAR_DAYS {
            return Ok(Self {
                year,
                twomoon: 5,
                week: 9,
                day_of_week: 0,
                day_of_year,
                intercalary_day: Some(day_of_year - REGULAR_DAYS as u32),
            });
        }

        let twomoon = day_of_year / 60;
        let remaining = day_of_year % 60;
        let week = remaining / 6;
        let day_of_week = remaining % 6;

        Ok(Self {
            year,
            twomoon,
            week,
            day_of_week,
            day_of_year,
            intercalary_day: None,
        })
    }

    #[must_use]
    pub fn twomoon_name(&self) -> &'static str {
        TWOMOONS[self.twomoon as usize]
    }

    #[must_use]
    pub fn weekday_name(&self) -> &'static str {
        DAYS_OF_WEEK[self.day_of_week as usize]
    }

    #[must_use]
    pub fn is_intercalary(&self) -> bool {
        self.intercalary_day.is_some()
    }
}

impl fmt::Display for SeximalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.intercalary_day {
            Some(day) => write!(
                f,
                "{}, year {}",
                INTERCALARY_DAYS[day.min(5) as usize],
                self.year
            ),
            None => write!(
                f,
                "{}, week {} of {}, year {}",
                self.weekday_name(),
                self.week + 1,
                self.twomoon_name(),
                self.year
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn epoch() -> NaiveDate {
        NaiveDate::from_ymd_opt(2000, 9, 22).unwrap()
    }

    #[test]
    fn test_epoch_is_first_day_of_year_one() {
        let date = SeximalDate::from_gregorian(epoch()).unwrap();
        assert_eq!(date.year, 1);
        assert_eq!(date.twomoon_name(), "Pama");
        assert_eq!(date.week, 0);
        assert_eq!(date.weekday_name(), "Firsday");
        assert!(!date.is_intercalary());
    }

    #[test]
    fn test_day_after_epoch() {
        let date = SeximalDate::from_gregorian(epoch() + Duration::days(1)).unwrap();
        assert_eq!(date.weekday_name(), "Seconday");
        assert_eq!(date.day_of_year, 1);
    }

    #[test]
    fn test_twomoon_boundaries() {
        let date = SeximalDate::from_gregorian(epoch() + Duration::days(60)).unwrap();
        assert_eq!(date.twomoon_name(), "Befa");
        assert_eq!(date.week, 0);
        assert_eq!(date.weekday_name(), "Firsday");

        let date = SeximalDate::from_gregorian(epoch() + Duration::days(359)).unwrap();
        assert_eq!(date.twomoon_name(), "Gerza");
        assert_eq!(date.week, 9);
        assert_eq!(date.weekday_name(), "Siksday");
    }

    #[test]
    fn test_intercalary_period() {
        let date = SeximalDate::from_gregorian(epoch() + Duration::days(360)).unwrap();
        assert!(date.is_intercalary());
        assert_eq!(date.intercalary_day, Some(0));
        assert_eq!(date.to_string(), "Festival 1, year 1");

        let date = SeximalDate::from_gregorian(epoch() + Duration::days(364)).unwrap();
        assert_eq!(date.intercalary_day, Some(4));
    }

    #[test]
    fn test_year_rollover() {
        let date = SeximalDate::from_gregorian(epoch() + Duration::days(365)).unwrap();
        assert_eq!(date.year, 2);
        assert_eq!(date.day_of_year, 0);
        assert_eq!(date.twomoon_name(), "Pama");
    }

    #[test]
    fn test_pre_epoch_dates_rejected() {
        let result = SeximalDate::from_gregorian(epoch() - Duration::days(1));
        assert!(matches!(result, Err(CoreError::PreEpochDate(_))));
    }

    #[test]
    fn test_leap_year_rule() {
        assert!(is_leap_year(3));
        assert!(is_leap_year(6));
        assert!(is_leap_year(9));
        assert!(!is_leap_year(12));
        assert!(!is_leap_year(24));
        assert!(!is_leap_year(1));
        assert!(!is_leap_year(2));
        assert!(is_leap_year(105));
    }

    #[test]
    fn test_display_regular_day() {
        let date = SeximalDate::from_gregorian(epoch()).unwrap();
        assert_eq!(date.to_string(), "Firsday, week 1 of Pama, year 1");
    }
}
