use crate::audio;
use crate::constants::*;
use crate::core::{slot, Decoration, Extent, Point, Surface};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Register `handler` for `event` on the element with `element_id`.
/// Returns `false` when the element does not exist.
#[inline]
pub fn add_listener(
    document: &web::Document,
    element_id: &str,
    event: &str,
    mut handler: impl FnMut() + 'static,
) -> bool {
    let Some(el) = document.get_element_by_id(element_id) else {
        return false;
    };
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
    true
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    handler: impl FnMut() + 'static,
) -> bool {
    add_listener(document, element_id, "click", handler)
}

#[inline]
pub fn show(el: &web::Element) {
    _ = el.class_list().remove_1(HIDDEN_CLASS);
}

#[inline]
pub fn hide(el: &web::Element) {
    _ = el.class_list().add_1(HIDDEN_CLASS);
}

/// Browser-backed [`Surface`]: looks elements up by id on every call, so a
/// missing element is simply skipped.
pub struct DomSurface {
    window: web::Window,
    document: web::Document,
}

impl DomSurface {
    pub fn new(window: web::Window, document: web::Document) -> Self {
        Self { window, document }
    }

    fn element(&self, id: &str) -> Option<web::Element> {
        self.document.get_element_by_id(id)
    }

    fn html_element(&self, id: &str) -> Option<web::HtmlElement> {
        self.element(id)?.dyn_into::<web::HtmlElement>().ok()
    }

    fn media(&self) -> Option<web::HtmlMediaElement> {
        self.element(slot::BG_MUSIC)?
            .dyn_into::<web::HtmlMediaElement>()
            .ok()
    }
}

fn px(v: Result<JsValue, JsValue>) -> f64 {
    v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

impl Surface for DomSurface {
    fn set_document_title(&mut self, title: &str) {
        self.document.set_title(title);
    }

    fn set_css_var(&mut self, name: &str, value: &str) {
        if let Some(root) = self
            .document
            .document_element()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        {
            _ = root.style().set_property(name, value);
        }
    }

    fn has_slot(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    fn set_text(&mut self, id: &str, text: &str) -> bool {
        match self.element(id) {
            Some(el) => {
                el.set_text_content(Some(text));
                true
            }
            None => false,
        }
    }

    fn set_visible(&mut self, id: &str, visible: bool) -> bool {
        match self.element(id) {
            Some(el) => {
                if visible {
                    show(&el);
                } else {
                    hide(&el);
                }
                true
            }
            None => false,
        }
    }

    fn hide_all_panels(&mut self) {
        let Ok(panels) = self.document.query_selector_all(PANEL_SELECTOR) else {
            return;
        };
        for i in 0..panels.length() {
            if let Some(el) = panels.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                hide(&el);
            }
        }
    }

    fn spawn_decoration(&mut self, decoration: &Decoration) -> bool {
        let Ok(Some(container)) = self.document.query_selector(DECORATION_CONTAINER_SELECTOR)
        else {
            return false;
        };
        let Ok(el) = self.document.create_element("div") else {
            return false;
        };
        el.set_class_name(DECORATION_CLASS);
        el.set_text_content(Some(decoration.emoji.as_str()));
        if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
            let style = html.style();
            _ = style.set_property("left", &format!("{}vw", decoration.left_vw));
            _ = style.set_property("animation-delay", &format!("{}s", decoration.delay_sec));
            _ = style.set_property(
                "animation-duration",
                &format!("{}s", decoration.duration_sec),
            );
        }
        container.append_child(&el).is_ok()
    }

    fn viewport(&self) -> Extent {
        Extent {
            width: px(self.window.inner_width()),
            height: px(self.window.inner_height()),
        }
    }

    fn control_extent(&self, id: &str) -> Option<Extent> {
        let el = self.html_element(id)?;
        Some(Extent {
            width: el.offset_width() as f64,
            height: el.offset_height() as f64,
        })
    }

    fn pin_control(&mut self, id: &str, at: Point) {
        if let Some(el) = self.html_element(id) {
            let style = el.style();
            _ = style.set_property("position", "fixed");
            _ = style.set_property("left", &format!("{}px", at.x));
            _ = style.set_property("top", &format!("{}px", at.y));
        }
    }

    fn set_meter_value(&mut self, value: i64) -> bool {
        match self
            .element(slot::LOVE_METER)
            .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        {
            Some(input) => {
                input.set_value(&value.to_string());
                true
            }
            None => false,
        }
    }

    fn load_audio(&mut self, src: &str, volume: f64) -> bool {
        let source = self
            .element(slot::MUSIC_SOURCE)
            .and_then(|el| el.dyn_into::<web::HtmlSourceElement>().ok());
        let (Some(media), Some(source)) = (self.media(), source) else {
            return false;
        };
        source.set_src(src);
        media.set_volume(volume);
        media.load();
        log::info!("[music] loaded {} at volume {:.2}", src, volume);
        true
    }

    fn start_audio(&mut self, fallback_label: Option<&str>) {
        let Some(media) = self.media() else {
            return;
        };
        let fallback = fallback_label.and_then(|label| {
            self.element(slot::MUSIC_TOGGLE)
                .map(|toggle| (toggle, label.to_string()))
        });
        audio::play(media, fallback);
    }

    fn pause_audio(&mut self) {
        if let Some(media) = self.media() {
            _ = media.pause();
        }
    }

    fn audio_paused(&self) -> bool {
        self.media().map(|m| m.paused()).unwrap_or(true)
    }
}
