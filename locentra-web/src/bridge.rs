//! JavaScript entry points for hosts that are not Yew applications.

use locentra_footer::{FooterView, SystemClock};
use wasm_bindgen::prelude::*;

use crate::components::footer::Footer;
use crate::dom;
use crate::error::BridgeError;

impl From<BridgeError> for JsValue {
    fn from(err: BridgeError) -> Self {
        let message = err.to_string();
        log::error!("{message}");
        dom::console_error(&message);
        JsValue::from_str(&message)
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Footer description as a plain JS object (`{ root: { tag, attributes, children } }`).
///
/// # Errors
///
/// Returns an error if the fragment cannot be converted into a JS value.
#[wasm_bindgen(js_name = renderFooter)]
pub fn render_footer() -> Result<JsValue, JsValue> {
    let fragment = FooterView::default().render(&SystemClock);
    serde_wasm_bindgen::to_value(&fragment)
        .map_err(BridgeError::from)
        .map_err(JsValue::from)
}

/// Footer markup for string-templating hosts.
#[wasm_bindgen(js_name = footerHtml)]
#[must_use]
pub fn footer_html() -> String {
    FooterView::default().render(&SystemClock).to_html()
}

/// Footer text content without markup.
#[wasm_bindgen(js_name = footerText)]
#[must_use]
pub fn footer_text() -> String {
    FooterView::default().render(&SystemClock).text_content()
}

/// Mount the Yew footer into the element with id `root_id`.
///
/// # Errors
///
/// Returns an error if there is no document or no element with that id.
#[wasm_bindgen(js_name = mountFooter)]
pub fn mount_footer(root_id: &str) -> Result<(), JsValue> {
    let root = find_root(root_id)?;
    log::debug!("mounting footer into #{root_id}");
    yew::Renderer::<Footer>::with_root(root).render();
    Ok(())
}

fn find_root(root_id: &str) -> Result<web_sys::Element, BridgeError> {
    let doc = dom::document().ok_or(BridgeError::NoDocument)?;
    doc.get_element_by_id(root_id)
        .ok_or_else(|| BridgeError::MissingRoot(root_id.to_string()))
}
