//! JavaScript-facing exports

use super::dom::{observe_reveal, DocumentRoot, LocalStorage, RevealHandle};
use crate::theme::{ThemeId, ThemeManager};
use wasm_bindgen::prelude::*;
use web_sys::Element;

fn manager() -> ThemeManager<LocalStorage, DocumentRoot> {
    ThemeManager::new(LocalStorage, DocumentRoot)
}

fn to_js(e: crate::UiError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Stored theme id, `"forest"` when none.
#[wasm_bindgen(js_name = getTheme)]
pub fn get_theme() -> String {
    manager().get_theme().id().to_string()
}

#[wasm_bindgen(js_name = setTheme)]
pub fn set_theme(id: &str) -> Result<(), JsValue> {
    let theme: ThemeId = id.parse().map_err(to_js)?;
    manager().set_theme(theme).map_err(to_js)
}

#[wasm_bindgen(js_name = initTheme)]
pub fn init_theme() -> Result<String, JsValue> {
    manager()
        .init_theme()
        .map(|t| t.id().to_string())
        .map_err(to_js)
}

/// Reveal action handle returned to JavaScript.
#[wasm_bindgen]
pub struct WasmReveal {
    inner: RevealHandle,
}

#[wasm_bindgen]
impl WasmReveal {
    pub fn destroy(&self) {
        self.inner.destroy();
    }
}

/// Svelte-style action: `use:reveal`.
#[wasm_bindgen]
pub fn reveal(node: &Element) -> Result<WasmReveal, JsValue> {
    observe_reveal(node)
        .map(|inner| WasmReveal { inner })
        .map_err(to_js)
}
