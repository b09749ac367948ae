//! Copying generated copy to the system clipboard.

use wasm_bindgen_futures::{spawn_local, JsFuture};

use crate::types::{GeneratedContent, Notifier, Toast};

/// Plain-text clipboard sink.
pub trait ClipboardWriter {
    fn write_text(&self, text: &str);
}

/// The browser's async clipboard (`navigator.clipboard`).
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClipboard;

impl ClipboardWriter for BrowserClipboard {
    fn write_text(&self, text: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("No window, cannot copy");
            return;
        };

        let promise = window.navigator().clipboard().write_text(text);
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("Clipboard write rejected: {:?}", e);
            }
        });
    }
}

/// Copy the result text verbatim and confirm.
///
/// Does nothing without a result. The confirmation does not wait for the
/// clipboard write. Returns whether a copy was attempted.
pub fn copy_result(
    result: Option<&GeneratedContent>,
    clipboard: &impl ClipboardWriter,
    notifier: &impl Notifier,
) -> bool {
    let Some(content) = result else {
        return false;
    };
    clipboard.write_text(&content.text);
    notifier.notify(Toast::copied());
    true
}
