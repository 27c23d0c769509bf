//! WASM utilities for browser interop
//!
//! # Event Listener Cleanup Pattern
//!
//! A JavaScript listener backed by a `Closure` must keep the closure alive for
//! as long as it is attached. `closure.forget()` does that by leaking it, which
//! also leaves the listener attached forever.
//!
//! Instead the closure lives in a guard that removes the listener in `Drop`,
//! so the listener's lifetime follows Rust ownership:
//!
//! ```ignore
//! // Listener is attached when the guard is created
//! let listener = WindowEventListener::new(window, "keydown", callback);
//!
//! // ...and removed when the guard is dropped
//! drop(listener);
//! ```
//!
//! `ObjectUrl` applies the same idea to `URL.createObjectURL`: the URL is
//! revoked when the guard is dropped.

use studio_core::KeyChord;
use wasm_bindgen_x::prelude::*;

/// A window event listener that removes itself when dropped.
pub struct WindowEventListener {
    window: web_sys_x::Window,
    event_name: &'static str,
    callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)>,
}

impl WindowEventListener {
    /// Attaches an event listener to the window.
    pub fn new(
        window: web_sys_x::Window,
        event_name: &'static str,
        callback: impl FnMut(wasm_bindgen_x::JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)> =
            Closure::wrap(Box::new(callback));

        window
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .ok();

        Self {
            window,
            event_name,
            callback,
        }
    }
}

impl Drop for WindowEventListener {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Read a raw `keydown` event into a `KeyChord`
pub fn key_chord(event: &wasm_bindgen_x::JsValue) -> Option<KeyChord> {
    let event = event.dyn_ref::<web_sys_x::KeyboardEvent>()?;
    Some(KeyChord {
        key: event.key(),
        alt: event.alt_key(),
        ctrl: event.ctrl_key(),
        meta: event.meta_key(),
        shift: event.shift_key(),
    })
}

/// Blob URL that is revoked when dropped
#[derive(Debug)]
pub struct ObjectUrl {
    url: String,
}

impl ObjectUrl {
    /// Wrap `data` in a Blob of `mime_type` and create a URL for it
    pub fn from_bytes(data: &[u8], mime_type: &str) -> Result<Self, String> {
        let uint8_array = js_sys_x::Uint8Array::from(data);
        let array = js_sys_x::Array::new();
        array.push(&uint8_array);

        let opts = web_sys_x::BlobPropertyBag::new();
        opts.set_type(mime_type);
        let blob = web_sys_x::Blob::new_with_u8_array_sequence_and_options(&array, &opts)
            .map_err(|e| format!("Failed to create blob: {e:?}"))?;

        let url = web_sys_x::Url::create_object_url_with_blob(&blob)
            .map_err(|e| format!("Failed to create blob URL: {e:?}"))?;

        Ok(Self { url })
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        let _ = web_sys_x::Url::revoke_object_url(&self.url);
    }
}

/// Blob type for an uploaded file, by extension. Anything unrecognised is
/// passed through as opaque bytes and simply fails to display.
pub fn mime_for_file_name(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "avif" => "image/avif",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for_common_images() {
        assert_eq!(mime_for_file_name("shirt.png"), "image/png");
        assert_eq!(mime_for_file_name("photo.JPG"), "image/jpeg");
        assert_eq!(mime_for_file_name("a.b.jpeg"), "image/jpeg");
        assert_eq!(mime_for_file_name("logo.svg"), "image/svg+xml");
    }

    #[test]
    fn test_mime_for_unknown() {
        assert_eq!(mime_for_file_name("notes.txt"), "application/octet-stream");
        assert_eq!(mime_for_file_name("README"), "application/octet-stream");
        assert_eq!(mime_for_file_name(""), "application/octet-stream");
    }
}
