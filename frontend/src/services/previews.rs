//! Object-URL backed image previews.

use web_sys::{File, Url};

use crate::state::PreviewStore;
use crate::types::IntakeError;

/// Previews as `blob:` URLs owned by the current document.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserPreviews;

impl PreviewStore for BrowserPreviews {
    type File = File;

    fn create(&self, file: &File) -> Result<String, IntakeError> {
        Url::create_object_url_with_blob(file)
            .map_err(|e| IntakeError::Preview(format!("{:?}", e)))
    }

    fn release(&self, url: &str) {
        if let Err(e) = Url::revoke_object_url(url) {
            log::warn!("Failed to revoke preview {}: {:?}", url, e);
        }
    }
}
