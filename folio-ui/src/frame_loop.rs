//! Browser render-loop bridge and DOM measurement via web-sys.
//!
//! Animation state lives in `folio_motion`; this module only supplies the clock
//! (`requestAnimationFrame` timestamps) and the widths that state needs.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Resolves on the next animation frame with its timestamp in milliseconds.
///
/// Returns `None` outside a browser or when the frame request is rejected.
/// Dropping the future (e.g. when the owning task is cancelled on unmount)
/// simply ignores the pending frame.
pub async fn next_frame() -> Option<f64> {
    let window = web_sys::window()?;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        if let Err(err) = window.request_animation_frame(&resolve) {
            log::warn!("requestAnimationFrame failed: {:?}", err);
            let _ = reject.call1(&JsValue::NULL, &err);
        }
    });
    JsFuture::from(promise).await.ok()?.as_f64()
}

/// Converts a frame timestamp to the seconds `folio_motion` works in.
pub fn to_seconds(timestamp_ms: f64) -> f64 {
    timestamp_ms / 1000.0
}

/// Rendered width of the element with the given DOM id.
pub fn element_width(id: &str) -> Option<f64> {
    let element = web_sys::window()?.document()?.get_element_by_id(id)?;
    Some(element.get_bounding_client_rect().width())
}

/// Viewport-relative left edge of the element with the given DOM id.
pub fn element_left(id: &str) -> Option<f64> {
    let element = web_sys::window()?.document()?.get_element_by_id(id)?;
    Some(element.get_bounding_client_rect().left())
}

/// Layout viewport width in CSS pixels.
pub fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Whether the document and its subresources have finished loading.
pub fn document_ready() -> bool {
    web_sys::window()
        .and_then(|window| window.document())
        .map(|document| document.ready_state() == "complete")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::to_seconds;

    #[test]
    fn test_to_seconds() {
        assert_eq!(to_seconds(0.0), 0.0);
        assert_eq!(to_seconds(1500.0), 1.5);
    }
}
