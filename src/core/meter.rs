use super::config::LoveMessages;
use super::constants::{METER_BASELINE, METER_EXTREME_FROM, METER_HIGH_ABOVE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    Normal,
    High,
    Extreme,
}

impl Tier {
    /// `None` means the bonus message stays hidden.
    pub fn for_value(value: i64) -> Option<Tier> {
        if value <= METER_BASELINE {
            None
        } else if value >= METER_EXTREME_FROM {
            Some(Tier::Extreme)
        } else if value > METER_HIGH_ABOVE {
            Some(Tier::High)
        } else {
            Some(Tier::Normal)
        }
    }

    pub fn message(self, messages: &LoveMessages) -> &str {
        match self {
            Tier::Normal => &messages.normal,
            Tier::High => &messages.high,
            Tier::Extreme => &messages.extreme,
        }
    }
}

/// Integer prefix of a slider value (`"250"`, `" 42px"`), as `parseInt`
/// reads it. Non-numeric input yields `None`.
pub fn parse_reading(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    let magnitude = rest[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
