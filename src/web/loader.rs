//! Off-document image loading.

use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

use super::dom::js_error;
use crate::error::FolioError;

fn detached(src: &str) -> Result<HtmlImageElement, FolioError> {
    let img = HtmlImageElement::new().map_err(|e| js_error("new Image", &e))?;
    img.set_decoding("async");
    img.set_src(src);
    Ok(img)
}

/// Fetch and decode `src` without touching the document. Resolves once
/// the image can be swapped in without a flash.
pub(super) async fn decode(src: String) -> Result<(), FolioError> {
    let img = detached(&src)?;
    let _ = JsFuture::from(img.decode())
        .await
        .map_err(|e| js_error(&src, &e))?;
    Ok(())
}

/// Warm the HTTP cache with `src`; the result is not observed.
pub(super) fn preload(src: &str) {
    if let Err(e) = detached(src) {
        log::debug!("preload skipped: {e}");
    }
}
