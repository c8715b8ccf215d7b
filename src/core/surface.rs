//! The page elements the binder is allowed to touch.
//!
//! Every method tolerates a missing element: lookups return `false`/`None`
//! and mutations become no-ops. The browser implementation lives in
//! `dom::DomSurface`.

use super::placement::{Decoration, Extent, Point};

/// Element ids the binder looks up.
pub mod slot {
    pub const TITLE: &str = "valentineTitle";

    pub const QUESTION1_TEXT: &str = "question1Text";
    pub const YES1: &str = "yesBtn1";
    pub const NO1: &str = "noBtn1";
    pub const SECRET_ANSWER: &str = "secretAnswerBtn";

    pub const QUESTION2_TEXT: &str = "question2Text";
    pub const START_TEXT: &str = "startText";
    pub const NEXT: &str = "nextBtn";

    pub const QUESTION3_TEXT: &str = "question3Text";
    pub const YES3: &str = "yesBtn3";
    pub const NO3: &str = "noBtn3";

    pub const LOVE_METER: &str = "loveMeter";
    pub const LOVE_VALUE: &str = "loveValue";
    pub const EXTRA_LOVE: &str = "extraLove";

    pub const CELEBRATION: &str = "celebration";
    pub const CELEBRATION_TITLE: &str = "celebrationTitle";
    pub const CELEBRATION_MESSAGE: &str = "celebrationMessage";
    pub const CELEBRATION_EMOJIS: &str = "celebrationEmojis";

    pub const MUSIC_TOGGLE: &str = "musicToggle";
    pub const BG_MUSIC: &str = "bgMusic";
    pub const MUSIC_SOURCE: &str = "musicSource";

    /// Controls that run away instead of answering.
    pub const EVASIVE: [&str; 2] = [NO1, NO3];
}

pub trait Surface {
    fn set_document_title(&mut self, title: &str);

    /// Set a CSS custom property (`--name`) on the document root.
    fn set_css_var(&mut self, name: &str, value: &str);

    fn has_slot(&self, id: &str) -> bool;

    /// Returns `false` when the element is missing.
    fn set_text(&mut self, id: &str, text: &str) -> bool;

    fn set_visible(&mut self, id: &str, visible: bool) -> bool;

    /// Hide every question panel.
    fn hide_all_panels(&mut self);

    /// Append to the decoration container. `false` when there is none.
    fn spawn_decoration(&mut self, decoration: &Decoration) -> bool;

    fn viewport(&self) -> Extent;

    fn control_extent(&self, id: &str) -> Option<Extent>;

    /// Fix a control at viewport coordinates.
    fn pin_control(&mut self, id: &str, at: Point);

    /// Set the slider value. `false` when the slider is missing.
    fn set_meter_value(&mut self, value: i64) -> bool;

    /// Point the media element at `src` with the given volume and reload.
    /// `false` when the audio or source element is missing.
    fn load_audio(&mut self, src: &str, volume: f64) -> bool;

    /// Start playback. Playback may be refused asynchronously; on refusal
    /// the toggle label is set to `fallback_label` when one is given.
    fn start_audio(&mut self, fallback_label: Option<&str>);

    fn pause_audio(&mut self);

    fn audio_paused(&self) -> bool;
}
