use gloo::events::EventListener;
use gloo::utils::document;
use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(extends = Element)]
    type FullscreenElement;

    /// `Element.requestFullscreen`, keeping the promise web-sys drops.
    #[wasm_bindgen(method, catch, js_name = requestFullscreen)]
    fn request_fullscreen_promise(this: &FullscreenElement) -> Result<Promise, JsValue>;
}

/// Any click on the page asks for fullscreen. The listener lives as long as
/// the returned handle.
pub(crate) fn install() -> EventListener {
    EventListener::new(&document(), "click", |_| request())
}

fn request() {
    let document = document();
    if document.fullscreen_element().is_some() {
        return;
    }
    let Some(root) = document.document_element() else {
        log::warn!("no document element to show fullscreen");
        return;
    };
    match root.unchecked_ref::<FullscreenElement>().request_fullscreen_promise() {
        Ok(promise) => spawn_local(async move {
            if let Err(err) = settle(promise).await {
                log::error!("fullscreen request failed: {:?}", err);
            }
        }),
        Err(err) => log::error!("fullscreen request failed: {:?}", err),
    }
}

/// Most refusals (no user gesture, iframe policy) arrive as a rejection.
async fn settle(promise: Promise) -> Result<(), JsValue> {
    JsFuture::from(promise).await.map(drop)
}
