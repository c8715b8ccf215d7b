//! Binds a normalized [`Config`] to a [`Surface`] and drives the page.
//!
//! `bind` runs the one-shot setup; the remaining methods are the bodies of
//! the click/hover/input handlers the web layer registers.

use super::config::{Config, Music};
use super::constants::{DEFAULT_VOLUME, HEART_EXPLOSION_COUNT, METER_BASELINE};
use super::flow::{Control, QuestionFlow, Stage};
use super::meter::Tier;
use super::placement::{self, Decoration, Point};
use super::surface::{slot, Surface};
use rand::Rng;

/// Resolved audio settings; absent when music should not be touched.
#[derive(Clone, Debug, PartialEq)]
pub struct AudioPlan {
    pub url: String,
    pub volume: f64,
    pub autoplay: bool,
}

impl AudioPlan {
    pub fn from_music(music: &Music) -> Option<Self> {
        if !music.enabled {
            return None;
        }
        let url = music.music_url.clone()?;
        // A zero volume counts as unset. Media elements throw on volumes
        // outside [0, 1].
        let volume = music
            .volume
            .filter(|v| v.is_finite() && *v != 0.0)
            .unwrap_or(DEFAULT_VOLUME)
            .clamp(0.0, 1.0);
        Some(Self {
            url,
            volume,
            autoplay: music.autoplay,
        })
    }
}

pub struct Page<S: Surface> {
    config: Config,
    surface: S,
    flow: QuestionFlow,
    music_ready: bool,
}

impl<S: Surface> Page<S> {
    pub fn new(config: Config, surface: S) -> Self {
        Self {
            config,
            surface,
            flow: QuestionFlow::new(),
            music_ready: false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn stage(&self) -> Stage {
        self.flow.stage()
    }

    /// Whether an audio element was configured and the toggle should work.
    pub fn music_ready(&self) -> bool {
        self.music_ready
    }

    pub fn bind(&mut self, rng: &mut impl Rng) {
        self.apply_document_title();
        self.apply_theme();
        self.project_text();
        let seeded = self.seed_decorations(rng);
        log::info!("[page] seeded {} floating decorations", seeded);
        self.setup_music();
        self.init_meter();
    }

    fn apply_document_title(&mut self) {
        if let Some(title) = self.config.page_title.as_deref() {
            self.surface.set_document_title(title);
        }
    }

    fn apply_theme(&mut self) {
        let mut slots: Vec<(&String, &String)> = self.config.colors.iter().collect();
        slots.sort();
        for (slot, hex) in slots {
            self.surface.set_css_var(&css_var_name(slot), hex);
        }
        let anim = &self.config.animations;
        if let Some(d) = anim.float_duration.as_deref() {
            self.surface.set_css_var("--float-duration", d);
        }
        if let Some(size) = anim.heart_explosion_size {
            self.surface
                .set_css_var("--heart-explosion-size", &size.to_string());
        }
    }

    pub fn project_text(&mut self) {
        let greeting = self.config.greeting();
        self.surface.set_text(slot::TITLE, &greeting);

        let q = &self.config.questions;
        let texts: [(&str, &str); 10] = [
            (slot::QUESTION1_TEXT, q.first.text.as_str()),
            (slot::YES1, q.first.yes_btn.as_str()),
            (slot::NO1, q.first.no_btn.as_str()),
            (slot::SECRET_ANSWER, q.first.secret_answer.as_str()),
            (slot::QUESTION2_TEXT, q.second.text.as_str()),
            (slot::START_TEXT, q.second.start_text.as_str()),
            (slot::NEXT, q.second.next_btn.as_str()),
            (slot::QUESTION3_TEXT, q.third.text.as_str()),
            (slot::YES3, q.third.yes_btn.as_str()),
            (slot::NO3, q.third.no_btn.as_str()),
        ];
        for (id, text) in texts {
            self.surface.set_text(id, text);
        }
        self.project_celebration_text();
    }

    fn project_celebration_text(&mut self) {
        let c = &self.config.celebration;
        self.surface.set_text(slot::CELEBRATION_TITLE, &c.title);
        self.surface.set_text(slot::CELEBRATION_MESSAGE, &c.message);
        self.surface.set_text(slot::CELEBRATION_EMOJIS, &c.emojis);
    }

    /// One decoration per configured heart and bear. Returns how many were
    /// placed (0 without a container).
    pub fn seed_decorations(&mut self, rng: &mut impl Rng) -> usize {
        let emojis = &self.config.floating_emojis;
        let batch = placement::seed_decorations(emojis.hearts.iter().chain(&emojis.bears), rng);
        self.place(&batch)
    }

    fn place(&mut self, batch: &[Decoration]) -> usize {
        let mut placed = 0;
        for d in batch {
            if !self.surface.spawn_decoration(d) {
                log::debug!("[page] no decoration container");
                break;
            }
            placed += 1;
        }
        placed
    }

    /// Hide every panel, then reveal the control's target (or celebrate).
    /// Does nothing once the celebration is showing.
    pub fn trigger(&mut self, control: Control, rng: &mut impl Rng) -> Stage {
        if self.stage().is_terminal() {
            return self.stage();
        }
        let stage = self.flow.trigger(control);
        self.surface.hide_all_panels();
        match stage {
            Stage::Celebration => {
                self.celebrate(rng);
            }
            other => {
                self.surface.set_visible(other.panel_id(), true);
            }
        }
        stage
    }

    /// Reveal the celebration panel and burst hearts. Returns how many
    /// decorations were spawned.
    fn celebrate(&mut self, rng: &mut impl Rng) -> usize {
        if !self.surface.set_visible(slot::CELEBRATION, true) {
            log::warn!("[flow] celebration panel missing");
            return 0;
        }
        self.project_celebration_text();

        let hearts = &self.config.floating_emojis.hearts;
        if hearts.is_empty() {
            log::warn!("[flow] no hearts configured; skipping explosion");
            return 0;
        }
        let batch = placement::burst(hearts, HEART_EXPLOSION_COUNT, rng);
        self.place(&batch)
    }

    /// Run an evasive control away to a random on-screen spot.
    pub fn evade(&mut self, id: &str, rng: &mut impl Rng) -> Option<Point> {
        let size = self.surface.control_extent(id)?;
        let at = placement::evasive_position(self.surface.viewport(), size, rng);
        self.surface.pin_control(id, at);
        Some(at)
    }

    pub fn init_meter(&mut self) -> bool {
        if !self.surface.set_meter_value(METER_BASELINE) {
            return false;
        }
        self.surface
            .set_text(slot::LOVE_VALUE, &METER_BASELINE.to_string());
        true
    }

    pub fn on_meter_input(&mut self, value: i64) -> Option<Tier> {
        self.surface.set_text(slot::LOVE_VALUE, &value.to_string());
        if !self.surface.has_slot(slot::EXTRA_LOVE) {
            return None;
        }
        let tier = Tier::for_value(value);
        match tier {
            Some(t) => {
                self.surface.set_visible(slot::EXTRA_LOVE, true);
                self.surface
                    .set_text(slot::EXTRA_LOVE, t.message(&self.config.love_messages));
            }
            None => {
                self.surface.set_visible(slot::EXTRA_LOVE, false);
            }
        }
        tier
    }

    fn setup_music(&mut self) {
        let Some(plan) = AudioPlan::from_music(&self.config.music) else {
            log::info!("[music] disabled");
            return;
        };
        if !self.surface.load_audio(&plan.url, plan.volume) {
            log::warn!("[music] audio elements missing");
            return;
        }
        self.music_ready = true;
        if plan.autoplay {
            self.surface
                .start_audio(Some(self.config.music.start_text.as_str()));
        }
    }

    /// Play when paused, pause otherwise, and relabel the toggle.
    pub fn toggle_music(&mut self) {
        if !self.music_ready {
            return;
        }
        let music = &self.config.music;
        if self.surface.audio_paused() {
            self.surface.start_audio(None);
            self.surface.set_text(slot::MUSIC_TOGGLE, &music.stop_text);
        } else {
            self.surface.pause_audio();
            self.surface.set_text(slot::MUSIC_TOGGLE, &music.start_text);
        }
    }
}

/// `backgroundStart` -> `--background-start`.
pub fn css_var_name(slot: &str) -> String {
    let mut out = String::with_capacity(slot.len() + 4);
    out.push_str("--");
    for c in slot.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
