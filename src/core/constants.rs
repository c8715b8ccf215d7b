// Defaults and thresholds shared by the normalizer and the page binder.

// Normalizer
pub const DEFAULT_VALENTINE_NAME: &str = "Moi Moi";
pub const MIN_FLOAT_DURATION_SEC: f64 = 5.0;
pub const FLOAT_DURATION_FLOOR: &str = "5s"; // replacement when the configured duration is too short
pub const EXPLOSION_SIZE_MIN: f64 = 1.0;
pub const EXPLOSION_SIZE_MAX: f64 = 3.0;
pub const DEFAULT_EXPLOSION_SIZE: f64 = 1.5;

// Fallback palette, keyed by color slot name
pub const DEFAULT_COLORS: [(&str, &str); 5] = [
    ("backgroundStart", "#ffafbd"),
    ("backgroundEnd", "#ffc3a0"),
    ("buttonBackground", "#ff6b6b"),
    ("buttonHover", "#ff8787"),
    ("textColor", "#ff4757"),
];

// Love meter
pub const METER_BASELINE: i64 = 100;
pub const METER_HIGH_ABOVE: i64 = 1000; // strictly greater than this is "high"
pub const METER_EXTREME_FROM: i64 = 5000; // this value and above is "extreme"

// Decorations (seconds / viewport-width percent)
pub const DECOR_LEFT_SPAN_VW: f64 = 100.0;
pub const DECOR_DELAY_MAX_SEC: f64 = 5.0;
pub const DECOR_DURATION_MIN_SEC: f64 = 10.0;
pub const DECOR_DURATION_SPAN_SEC: f64 = 20.0;
pub const HEART_EXPLOSION_COUNT: usize = 50;

// Music
pub const DEFAULT_VOLUME: f64 = 0.5;

#[inline]
pub fn default_color(slot: &str) -> Option<&'static str> {
    DEFAULT_COLORS
        .iter()
        .find(|(name, _)| *name == slot)
        .map(|(_, hex)| *hex)
}
