// seximal-core/tests/time_tests.rs

use seximal_core::time::{Convention, SeximalTime, TimeSystem, compose_standard_seconds};

#[test]
fn test_one_standard_hour_under_both_conventions() {
    // The scale factor is a policy choice and the two conventions disagree
    // for the same input.
    let minute_based = SeximalTime::from_standard_seconds(3600.0, Convention::MinuteBased);
    assert_eq!(minute_based.to_string(), "01:00:00.0");

    let second_based = SeximalTime::from_standard_seconds(3600.0, Convention::SecondBased);
    assert_eq!(second_based.to_string(), "10:00:00.0");
}

#[test]
fn test_zero_seconds_under_any_convention() {
    for convention in [Convention::MinuteBased, Convention::SecondBased] {
        let time = SeximalTime::from_standard_seconds(0.0, convention);
        assert_eq!(time.to_string(), "00:00:00.0");
    }
}

#[test]
fn test_minute_based_progression() {
    let cases = [
        (600.0, "00:10:00.0"),
        (1800.0, "00:30:00.0"),
        (3000.0, "00:50:00.0"),
        (7200.0, "02:00:00.0"),
        (21600.0, "10:00:00.0"),
        (129_600.0, "100:00:00.0"),
    ];
    for (seconds, expected) in cases {
        let time = SeximalTime::from_standard_seconds(seconds, Convention::MinuteBased);
        assert_eq!(time.to_string(), expected, "{seconds} standard seconds");
    }
}

#[test]
fn test_components_stay_within_two_seximal_digits() {
    // Minutes and seconds never reach 36 decimal, so the padded display
    // stays exactly two digits wide for them.
    for seconds in [0.0, 99.0, 599.0, 3599.0, 35_999.0, 100_000.0] {
        for convention in [Convention::MinuteBased, Convention::SecondBased] {
            let time = SeximalTime::from_standard_seconds(seconds, convention);
            let display = time.to_string();
            let minutes = display.split(':').nth(1).unwrap();
            let secs = display.split(':').nth(2).unwrap();
            assert_eq!(minutes.len(), 2, "{display}");
            assert_eq!(secs.len(), 4, "{display}"); // "SS.f"
        }
    }
}

#[test]
fn test_sixths_digit_stays_in_base_six_range() {
    for tenths in 0..600 {
        let seconds = f64::from(tenths) / 10.0;
        let time = SeximalTime::from_standard_seconds(seconds, Convention::SecondBased);
        let sixths: u32 = time.sixths.parse().unwrap();
        assert!(sixths < 6, "sixths digit {sixths} for {seconds}s");
    }
}

#[test]
fn test_composition_inverts_decomposition_for_whole_units() {
    // One seximal hour composed to standard seconds and decomposed again
    // lands back on the same display.
    let seconds = compose_standard_seconds(1, 0, 0, TimeSystem::Seximal);
    assert_eq!(seconds, 600.0);
    let time = SeximalTime::from_standard_seconds(seconds, Convention::SecondBased);
    assert_eq!(time.to_string(), "01:00:00.0");

    // Nine seximal seconds display as "13" in base 6
    let seconds = compose_standard_seconds(2, 3, 9, TimeSystem::Seximal);
    let time = SeximalTime::from_standard_seconds(seconds, Convention::SecondBased);
    assert_eq!(time.to_string(), "02:03:13.0");
}

#[test]
fn test_standard_composition() {
    assert_eq!(
        compose_standard_seconds(1, 30, 15, TimeSystem::Standard),
        5415.0
    );
}
