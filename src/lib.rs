//! Configuration-driven greeting page.
//!
//! `core` is plain Rust (config, normalizer, question flow, binder) and is
//! tested on the host; everything that touches the DOM is wasm-only.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod audio;
#[cfg(target_arch = "wasm32")]
mod constants;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;

#[cfg(target_arch = "wasm32")]
pub use web_entry::start;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::constants::CONFIG_GLOBAL;
    use crate::core::{normalize, Config, ConfigError, Page};
    use crate::{dom, events};
    use instant::Instant;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys as web;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("valentine-web starting");

        let Some(document) = dom::window_document() else {
            log::error!("no document");
            return Ok(());
        };
        if document.ready_state() == "loading" {
            let on_ready = Closure::wrap(Box::new(run) as Box<dyn FnMut()>);
            document.add_event_listener_with_callback(
                "DOMContentLoaded",
                on_ready.as_ref().unchecked_ref(),
            )?;
            on_ready.forget();
        } else {
            run();
        }
        Ok(())
    }

    fn run() {
        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
    }

    fn init() -> anyhow::Result<()> {
        let started = Instant::now();
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        let raw = match load_config(&window) {
            Ok(c) => c,
            Err(e) => {
                log::error!("[config] {}; continuing with defaults", e);
                Config::default()
            }
        };
        let normalized = normalize(raw);
        normalized.report();

        let surface = dom::DomSurface::new(window, document.clone());
        let page = Rc::new(RefCell::new(Page::new(normalized.config, surface)));
        page.borrow_mut().bind(&mut rand::thread_rng());
        events::wire_all(&document, &page);

        log::info!("[page] ready in {:?}", started.elapsed());
        Ok(())
    }

    fn load_config(window: &web::Window) -> Result<Config, ConfigError> {
        let value = js_sys::Reflect::get(window, &JsValue::from_str(CONFIG_GLOBAL))
            .map_err(|_| ConfigError::Missing(CONFIG_GLOBAL))?;
        if value.is_undefined() || value.is_null() {
            return Err(ConfigError::Missing(CONFIG_GLOBAL));
        }
        let json = js_sys::JSON::stringify(&value)
            .map_err(|e| ConfigError::Stringify(format!("{:?}", e)))?;
        Config::from_json(&String::from(json))
    }
}
