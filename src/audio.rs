use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Start playback of `media`. Browsers may refuse unsolicited audio; the
/// refusal arrives asynchronously, and when `fallback` is given its element
/// gets the label text so the user can start playback by hand.
pub fn play(media: web::HtmlMediaElement, fallback: Option<(web::Element, String)>) {
    let promise = match media.play() {
        Ok(p) => p,
        Err(e) => {
            log::warn!("[music] play() threw: {:?}", e);
            apply_fallback(fallback);
            return;
        }
    };
    spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => log::info!("[music] playing"),
            Err(e) => {
                log::warn!("[music] playback refused: {:?}", e);
                apply_fallback(fallback);
            }
        }
    });
}

fn apply_fallback(fallback: Option<(web::Element, String)>) {
    if let Some((toggle, label)) = fallback {
        toggle.set_text_content(Some(label.as_str()));
    }
}
