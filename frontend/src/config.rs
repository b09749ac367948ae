//! Application configuration.
//!
//! Centralized configuration for the Prompto frontend.
//! Everything is compiled in; the widget has no runtime config source.

/// Generation API base URL.
///
/// Empty means same origin as the page serving the widget.
pub const API_BASE_URL: &str = "";

/// Path of the ad generation endpoint.
pub const GENERATE_PATH: &str = "/api/ai/generate-ad";

/// Maximum number of images attached to a single draft.
pub const MAX_IMAGES: usize = 5;

/// `accept` attribute of the hidden file input.
pub const ACCEPTED_IMAGE_TYPES: &str = "image/*";

/// Multipart field carrying the product description.
pub const DESCRIPTION_FIELD: &str = "description";

/// Multipart field carrying each image (repeated once per file).
pub const IMAGE_FIELD: &str = "image";

/// Message shown when a failure carries no usable server message.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate content";

/// How long a toast stays on screen before it is dismissed.
pub const TOAST_DURATION_MS: u32 = 5_000;

/// Maximum toasts kept on screen at once.
pub const MAX_TOASTS: usize = 3;

/// Leading character that turns a word into a tag badge.
pub const TAG_MARKER: char = '#';

/// Full URL of the generation endpoint for a given base.
pub fn generate_url(base: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), GENERATE_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_url_same_origin() {
        assert_eq!(generate_url(API_BASE_URL), "/api/ai/generate-ad");
    }

    #[test]
    fn test_generate_url_strips_trailing_slash() {
        assert_eq!(
            generate_url("http://localhost:5000/"),
            "http://localhost:5000/api/ai/generate-ad"
        );
    }
}
