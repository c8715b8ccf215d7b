// Host-side tests for config normalization.

use valentine_web::core::*;

fn with_colors(pairs: &[(&str, &str)]) -> Config {
    let mut cfg = Config {
        valentine_name: "Alex".into(),
        ..Config::default()
    };
    for (slot, value) in pairs {
        cfg.colors.insert(slot.to_string(), value.to_string());
    }
    cfg
}

fn with_duration(raw: &str) -> Config {
    let mut cfg = with_colors(&[]);
    cfg.animations.float_duration = Some(raw.to_string());
    cfg
}

fn with_explosion(size: f64) -> Config {
    let mut cfg = with_colors(&[]);
    cfg.animations.heart_explosion_size = Some(size);
    cfg
}

#[test]
fn missing_name_gets_default_and_warning() {
    let out = normalize(Config::default());
    assert_eq!(out.config.valentine_name, DEFAULT_VALENTINE_NAME);
    assert_eq!(out.warnings.as_slice(), &[ConfigWarning::MissingName]);
}

#[test]
fn clean_config_produces_no_warnings() {
    let mut cfg = with_colors(&[("textColor", "#ff4757")]);
    cfg.animations.float_duration = Some("15s".into());
    cfg.animations.heart_explosion_size = Some(2.0);
    let out = normalize(cfg);
    assert!(out.warnings.is_empty());
}

#[test]
fn valid_hex_colors_are_unchanged() {
    let inputs = ["#ffafbd", "#FFC3A0", "#AbC", "#000", "fff", "123456"];
    for value in inputs {
        let out = normalize(with_colors(&[("backgroundStart", value)]));
        assert_eq!(out.config.colors["backgroundStart"], value, "input {value}");
        assert!(out.warnings.is_empty(), "input {value}");
    }
}

#[test]
fn invalid_colors_fall_back_to_slot_default() {
    let inputs = ["red", "#ff", "#ffff", "#gggggg", " #fff", "#fffffff", ""];
    for value in inputs {
        let out = normalize(with_colors(&[("buttonHover", value)]));
        assert_eq!(out.config.colors["buttonHover"], "#ff8787", "input {value:?}");
        assert_eq!(
            out.warnings.as_slice(),
            &[ConfigWarning::InvalidColor {
                slot: "buttonHover".into()
            }]
        );
    }
}

#[test]
fn every_slot_has_its_own_default() {
    for (slot, hex) in DEFAULT_COLORS {
        let out = normalize(with_colors(&[(slot, "nope")]));
        assert_eq!(out.config.colors[slot], hex);
    }
}

#[test]
fn absent_color_slots_are_not_added() {
    let out = normalize(with_colors(&[("textColor", "bad")]));
    assert_eq!(out.config.colors.len(), 1);
    assert!(!out.config.colors.contains_key("backgroundStart"));
}

#[test]
fn invalid_unknown_slot_is_dropped() {
    let out = normalize(with_colors(&[("accent", "bad"), ("textColor", "#fff")]));
    assert!(!out.config.colors.contains_key("accent"));
    assert_eq!(out.config.colors["textColor"], "#fff");
    assert_eq!(out.warnings.len(), 1);
}

#[test]
fn color_warnings_are_in_slot_order() {
    let out = normalize(with_colors(&[
        ("textColor", "x"),
        ("backgroundEnd", "x"),
        ("buttonHover", "x"),
    ]));
    let slots: Vec<String> = out
        .warnings
        .iter()
        .map(|w| match w {
            ConfigWarning::InvalidColor { slot } => slot.clone(),
            other => panic!("unexpected warning {other:?}"),
        })
        .collect();
    assert_eq!(slots, ["backgroundEnd", "buttonHover", "textColor"]);
}

#[test]
fn short_float_durations_become_five_seconds() {
    for raw in ["4.9s", "0", "3", "-10s", " 2s", ".5s", "1e0s", "-Infinity"] {
        let out = normalize(with_duration(raw));
        assert_eq!(
            out.config.animations.float_duration.as_deref(),
            Some(FLOAT_DURATION_FLOOR),
            "input {raw:?}"
        );
        assert!(matches!(
            out.warnings.as_slice(),
            [ConfigWarning::ShortFloatDuration { .. }]
        ));
    }
}

#[test]
fn long_enough_durations_are_unchanged() {
    for raw in ["5s", "5", "15s", "10.25s", "1e2s", "Infinity"] {
        let out = normalize(with_duration(raw));
        assert_eq!(out.config.animations.float_duration.as_deref(), Some(raw));
        assert!(out.warnings.is_empty(), "input {raw:?}");
    }
}

#[test]
fn unparseable_durations_are_left_alone() {
    for raw in ["fast", "s5", "", "-", ".s", "NaN"] {
        let out = normalize(with_duration(raw));
        assert_eq!(out.config.animations.float_duration.as_deref(), Some(raw));
        assert!(out.warnings.is_empty(), "input {raw:?}");
    }
}

#[test]
fn explosion_size_outside_range_is_reset() {
    for size in [0.0, 0.99, 3.01, -2.0, 10.0, f64::INFINITY] {
        let out = normalize(with_explosion(size));
        assert_eq!(
            out.config.animations.heart_explosion_size,
            Some(DEFAULT_EXPLOSION_SIZE)
        );
        assert_eq!(out.warnings.len(), 1);
    }
}

#[test]
fn explosion_size_inside_range_is_kept() {
    for size in [1.0, 1.5, 2.2, 3.0] {
        let out = normalize(with_explosion(size));
        assert_eq!(out.config.animations.heart_explosion_size, Some(size));
        assert!(out.warnings.is_empty());
    }
}

#[test]
fn missing_animation_fields_are_left_unset() {
    let out = normalize(with_colors(&[]));
    assert!(out.config.animations.float_duration.is_none());
    assert!(out.config.animations.heart_explosion_size.is_none());
}

#[test]
fn parse_float_prefix_reads_leading_number() {
    assert_eq!(parse_float_prefix("12.5s"), Some(12.5));
    assert_eq!(parse_float_prefix("  7"), Some(7.0));
    assert_eq!(parse_float_prefix("+3px"), Some(3.0));
    assert_eq!(parse_float_prefix("5."), Some(5.0));
    assert_eq!(parse_float_prefix("2e"), Some(2.0));
    assert_eq!(parse_float_prefix("2e-1s"), Some(0.2));
    assert_eq!(parse_float_prefix("abc"), None);
    assert_eq!(parse_float_prefix("."), None);
}

#[test]
fn warnings_have_readable_messages() {
    assert_eq!(
        ConfigWarning::MissingName.to_string(),
        "Valentine's name not set. Using default."
    );
    assert_eq!(
        ConfigWarning::InvalidColor {
            slot: "textColor".into()
        }
        .to_string(),
        "Invalid color for textColor. Using default."
    );
}

#[test]
fn mistyped_fields_are_repaired_without_losing_the_rest() {
    let cfg = Config::from_json(
        r#"{ "valentineName": "Alex",
             "colors": { "textColor": true },
             "animations": { "floatDuration": 2, "heartExplosionSize": "5" } }"#,
    )
    .unwrap();
    let out = normalize(cfg);
    assert_eq!(out.config.valentine_name, "Alex");
    assert_eq!(out.config.colors.get("textColor").map(String::as_str), Some("#ff4757"));
    assert_eq!(out.config.animations.float_duration.as_deref(), Some(FLOAT_DURATION_FLOOR));
    assert_eq!(out.config.animations.heart_explosion_size, Some(DEFAULT_EXPLOSION_SIZE));
    assert_eq!(out.warnings.len(), 3);
}
