// seximal-core/tests/calendar_tests.rs

use chrono::{Duration, NaiveDate};
use seximal_core::calendar::{DAYS_OF_WEEK, SeximalDate, TWOMOONS, is_leap_year};

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 9, 22).unwrap()
}

#[test]
fn test_week_cycles_through_all_six_days() {
    for offset in 0..12 {
        let date = SeximalDate::from_gregorian(epoch() + Duration::days(offset)).unwrap();
        assert_eq!(date.weekday_name(), DAYS_OF_WEEK[(offset % 6) as usize]);
    }
}

#[test]
fn test_each_twomoon_lasts_sixty_days() {
    for (index, name) in TWOMOONS.iter().enumerate() {
        let first_day = index as i64 * 60;
        let date = SeximalDate::from_gregorian(epoch() + Duration::days(first_day)).unwrap();
        assert_eq!(date.twomoon_name(), *name);
        assert_eq!(date.week, 0);

        let last_day = first_day + 59;
        let date = SeximalDate::from_gregorian(epoch() + Duration::days(last_day)).unwrap();
        assert_eq!(date.twomoon_name(), *name);
        assert_eq!(date.week, 9);
        assert_eq!(date.weekday_name(), "Siksday");
    }
}

#[test]
fn test_intercalary_festival_closes_the_year() {
    let date = SeximalDate::from_gregorian(epoch() + Duration::days(360)).unwrap();
    assert!(date.is_intercalary());
    assert_eq!(date.intercalary_day, Some(0));

    let date = SeximalDate::from_gregorian(epoch() + Duration::days(364)).unwrap();
    assert_eq!(date.intercalary_day, Some(4));

    let date = SeximalDate::from_gregorian(epoch() + Duration::days(365)).unwrap();
    assert!(!date.is_intercalary());
    assert_eq!(date.year, 2);
}

#[test]
fn test_years_advance_every_365_days() {
    for year in 1..=30 {
        let offset = (year - 1) * 365;
        let date = SeximalDate::from_gregorian(epoch() + Duration::days(offset)).unwrap();
        assert_eq!(date.year, year);
        assert_eq!(date.day_of_year, 0);
    }
}

#[test]
fn test_leap_years_follow_the_three_twelve_rule() {
    let leap_years: Vec<i64> = (1..=30).filter(|y| is_leap_year(*y)).collect();
    assert_eq!(leap_years, vec![3, 6, 9, 15, 18, 21, 27, 30]);
}

#[test]
fn test_pre_epoch_is_rejected() {
    let date = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
    assert!(SeximalDate::from_gregorian(date).is_err());
}
