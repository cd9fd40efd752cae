//! Browser-backed location provider.

use ra_nav::LocationProvider;
use wasm_bindgen::JsValue;

/// [`LocationProvider`] over the window location and the history API.
///
/// Zero-sized: the window is fetched on every call, which keeps the router
/// free of JS handles and therefore shareable through Leptos context.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLocation;

impl LocationProvider for BrowserLocation {
    fn pathname(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    fn fragment(&self) -> Option<String> {
        let hash = web_sys::window()?.location().hash().ok()?;
        let frag = hash.strip_prefix('#').unwrap_or(&hash);
        if frag.is_empty() {
            None
        } else {
            Some(frag.to_string())
        }
    }

    fn push(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(history) = window.history() else {
            return;
        };
        if let Err(err) = history.push_state_with_url(&JsValue::NULL, "", Some(url)) {
            web_sys::console::error_1(&err);
        }
    }
}
