//! Browser file-save helper.
//!
//! Offers in-memory bytes as a named download by clicking a transient
//! anchor with a `data:` URL. Requires a browser environment; outside one
//! (e.g. in native tests) every call is a no-op.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use wasm_bindgen::JsCast;

/// Save `bytes` as a file named `filename` with the given MIME type.
pub fn save_file(filename: &str, mime: &str, bytes: &[u8]) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(element) = document.create_element("a") else {
        return;
    };
    let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() else {
        return;
    };

    let href = format!("data:{mime};base64,{}", STANDARD.encode(bytes));
    anchor.set_href(&href);
    anchor.set_download(filename);

    // The anchor must be in the document for the click to count everywhere.
    let Some(body) = document.body() else {
        return;
    };
    let _ = body.append_child(&anchor);
    anchor.click();
    anchor.remove();
}
