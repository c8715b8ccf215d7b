// Host-side tests for love-meter tiers and slider parsing.

use valentine_web::core::{parse_reading, LoveMessages, Tier};

#[test]
fn tier_boundaries() {
    assert_eq!(Tier::for_value(100), None);
    assert_eq!(Tier::for_value(101), Some(Tier::Normal));
    assert_eq!(Tier::for_value(1000), Some(Tier::Normal));
    assert_eq!(Tier::for_value(1001), Some(Tier::High));
    assert_eq!(Tier::for_value(4999), Some(Tier::High));
    assert_eq!(Tier::for_value(5000), Some(Tier::Extreme));
}

#[test]
fn low_and_huge_values() {
    assert_eq!(Tier::for_value(0), None);
    assert_eq!(Tier::for_value(-50), None);
    assert_eq!(Tier::for_value(i64::MAX), Some(Tier::Extreme));
}

#[test]
fn tier_picks_matching_message() {
    let messages = LoveMessages {
        normal: "n".into(),
        high: "h".into(),
        extreme: "x".into(),
    };
    assert_eq!(Tier::Normal.message(&messages), "n");
    assert_eq!(Tier::High.message(&messages), "h");
    assert_eq!(Tier::Extreme.message(&messages), "x");
}

#[test]
fn parse_reading_takes_integer_prefix() {
    assert_eq!(parse_reading("250"), Some(250));
    assert_eq!(parse_reading(" 42px"), Some(42));
    assert_eq!(parse_reading("12.9"), Some(12));
    assert_eq!(parse_reading("-7"), Some(-7));
    assert_eq!(parse_reading("abc"), None);
    assert_eq!(parse_reading(""), None);
}
