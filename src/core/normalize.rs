//! Best-effort repair of a freshly loaded [`Config`].
//!
//! Each rule is independent: a defect is replaced with its documented
//! default and recorded as a [`ConfigWarning`]. Nothing here fails.

use super::config::Config;
use super::constants::*;
use smallvec::SmallVec;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigWarning {
    MissingName,
    InvalidColor { slot: String },
    ShortFloatDuration { was: String },
    ExplosionSizeOutOfRange { was: f64 },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::MissingName => {
                write!(f, "Valentine's name not set. Using default.")
            }
            ConfigWarning::InvalidColor { slot } => {
                write!(f, "Invalid color for {slot}. Using default.")
            }
            ConfigWarning::ShortFloatDuration { was } => write!(
                f,
                "Float duration {was:?} is shorter than {MIN_FLOAT_DURATION_SEC}s. Using {FLOAT_DURATION_FLOOR}."
            ),
            ConfigWarning::ExplosionSizeOutOfRange { was } => write!(
                f,
                "Heart explosion size {was} is outside [{EXPLOSION_SIZE_MIN}, {EXPLOSION_SIZE_MAX}]. Using {DEFAULT_EXPLOSION_SIZE}."
            ),
        }
    }
}

pub type Warnings = SmallVec<[ConfigWarning; 4]>;

#[derive(Clone, Debug)]
pub struct Normalized {
    pub config: Config,
    pub warnings: Warnings,
}

impl Normalized {
    /// Emit collected warnings to the log. Advisory only.
    pub fn report(&self) {
        if self.warnings.is_empty() {
            return;
        }
        log::warn!("⚠️ Config Warnings:");
        for w in &self.warnings {
            log::warn!("{}", w);
        }
    }
}

pub fn normalize(mut config: Config) -> Normalized {
    let mut warnings = Warnings::new();

    if config.valentine_name.is_empty() {
        warnings.push(ConfigWarning::MissingName);
        config.valentine_name = DEFAULT_VALENTINE_NAME.to_string();
    }

    // Sorted so warning order does not depend on hash iteration order.
    let mut slots: Vec<String> = config.colors.keys().cloned().collect();
    slots.sort();
    for slot in slots {
        let valid = config
            .colors
            .get(&slot)
            .map(|v| is_hex_color(v))
            .unwrap_or(true);
        if valid {
            continue;
        }
        match default_color(&slot) {
            Some(hex) => {
                config.colors.insert(slot.clone(), hex.to_string());
            }
            None => {
                config.colors.remove(&slot);
            }
        }
        warnings.push(ConfigWarning::InvalidColor { slot });
    }

    if let Some(raw) = config.animations.float_duration.as_deref() {
        // NaN compares false, so unparseable durations are kept as-is.
        if parse_float_prefix(raw).is_some_and(|secs| secs < MIN_FLOAT_DURATION_SEC) {
            warnings.push(ConfigWarning::ShortFloatDuration {
                was: raw.to_string(),
            });
            config.animations.float_duration = Some(FLOAT_DURATION_FLOOR.to_string());
        }
    }

    if let Some(size) = config.animations.heart_explosion_size {
        if size < EXPLOSION_SIZE_MIN || size > EXPLOSION_SIZE_MAX {
            warnings.push(ConfigWarning::ExplosionSizeOutOfRange { was: size });
            config.animations.heart_explosion_size = Some(DEFAULT_EXPLOSION_SIZE);
        }
    }

    Normalized { config, warnings }
}

/// `#RGB` / `#RRGGBB`, case-insensitive; the leading `#` is optional.
pub fn is_hex_color(value: &str) -> bool {
    let digits = value.strip_prefix('#').unwrap_or(value);
    matches!(digits.len(), 3 | 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Parse the longest leading decimal literal, ignoring any trailing unit
/// (`"12.5s"` -> 12.5). Returns `None` where a browser's `parseFloat`
/// would yield NaN.
pub fn parse_float_prefix(raw: &str) -> Option<f64> {
    let s = raw.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let sign = if negative { -1.0 } else { 1.0 };
    if rest.starts_with("Infinity") {
        return Some(sign * f64::INFINITY);
    }

    let bytes = rest.as_bytes();
    let mut i = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_part = &rest[..i];
    let mut frac_part = "";
    if i < bytes.len() && bytes[i] == b'.' {
        let start = i + 1;
        let mut j = start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        frac_part = &rest[start..j];
        i = j;
    }
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let mut exponent = String::new();
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        let mut exp_sign = "";
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            exp_sign = if bytes[j] == b'-' { "-" } else { "" };
            j += 1;
        }
        let digits_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > digits_start {
            exponent = format!("e{}{}", exp_sign, &rest[digits_start..j]);
        }
    }

    let literal = format!(
        "{}.{}{}",
        if int_part.is_empty() { "0" } else { int_part },
        if frac_part.is_empty() { "0" } else { frac_part },
        exponent
    );
    literal.parse::<f64>().ok().map(|v| sign * v)
}
