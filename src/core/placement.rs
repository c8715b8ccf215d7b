//! Random placement for floating decorations and evasive controls.

use super::constants::*;
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One floating emoji. Units: `left_vw` in viewport-width percent, the
/// animation timings in seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct Decoration {
    pub emoji: String,
    pub left_vw: f64,
    pub delay_sec: f64,
    pub duration_sec: f64,
}

impl Decoration {
    pub fn scattered(emoji: impl Into<String>, rng: &mut impl Rng) -> Self {
        Self {
            emoji: emoji.into(),
            left_vw: rng.gen::<f64>() * DECOR_LEFT_SPAN_VW,
            delay_sec: rng.gen::<f64>() * DECOR_DELAY_MAX_SEC,
            duration_sec: DECOR_DURATION_MIN_SEC + rng.gen::<f64>() * DECOR_DURATION_SPAN_SEC,
        }
    }
}

/// One decoration per emoji, in list order.
pub fn seed_decorations<'a>(
    emojis: impl IntoIterator<Item = &'a String>,
    rng: &mut impl Rng,
) -> Vec<Decoration> {
    emojis
        .into_iter()
        .map(|e| Decoration::scattered(e.as_str(), rng))
        .collect()
}

/// `count` decorations, each an independent pick (with repetition) from
/// `pool`. An empty pool yields nothing.
pub fn burst(pool: &[String], count: usize, rng: &mut impl Rng) -> Vec<Decoration> {
    let mut out = Vec::with_capacity(if pool.is_empty() { 0 } else { count });
    for _ in 0..count {
        match pool.choose(rng) {
            Some(emoji) => out.push(Decoration::scattered(emoji.as_str(), rng)),
            None => break,
        }
    }
    out
}

/// Uniform position keeping a control of `size` fully inside `viewport`.
/// When the control is larger than the viewport along an axis it is
/// pinned to 0 on that axis.
pub fn evasive_position(viewport: Extent, size: Extent, rng: &mut impl Rng) -> Point {
    let max_x = (viewport.width - size.width).max(0.0);
    let max_y = (viewport.height - size.height).max(0.0);
    Point {
        x: rng.gen::<f64>() * max_x,
        y: rng.gen::<f64>() * max_y,
    }
}
