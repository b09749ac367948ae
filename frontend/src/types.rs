//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **API Types** - Generation endpoint payloads
//! - **Notification Types** - Toasts and the [`Notifier`] seam
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Deserializer, Serialize};
use std::cell::RefCell;
use thiserror::Error;

use crate::config::{GENERIC_FAILURE_MESSAGE, MAX_IMAGES};

// =============================================================================
// API Types
// =============================================================================

/// Successful response of the generation endpoint.
///
/// Replaced wholesale on every successful submission, never merged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    /// Ad copy, paragraphs separated by line breaks
    pub text: String,
    /// Media the service suggests pairing with the copy. Absent and
    /// `null` both mean none.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub suggested_media: Vec<SuggestedMedia>,
}

/// A single suggested image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SuggestedMedia {
    pub url: String,
    /// Alt text, empty when the service omits it
    #[serde(default)]
    pub alt: String,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of a failed generation response.
///
/// Every field is optional: the endpoint may answer with any JSON object.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================================
// Notification Types
// =============================================================================

/// Visual style of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    /// Neutral confirmation
    Default,
    /// Failure or rejection
    Destructive,
}

impl ToastVariant {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastVariant::Default => "toast-default",
            ToastVariant::Destructive => "toast-destructive",
        }
    }
}

/// A transient user-visible notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: ToastVariant::Destructive,
            ..Self::new(title, description)
        }
    }

    /// Batch rejected because it would exceed [`MAX_IMAGES`].
    pub fn too_many_images() -> Self {
        Self::destructive(
            "Too many images",
            format!("You can upload a maximum of {} images.", MAX_IMAGES),
        )
    }

    pub fn generated() -> Self {
        Self::new("Content generated", "Your AI-generated ad content is ready!")
    }

    pub fn generation_failed(message: impl Into<String>) -> Self {
        Self::destructive("Generation failed", message)
    }

    pub fn copied() -> Self {
        Self::new("Copied to clipboard", "Content has been copied to your clipboard.")
    }
}

/// Sink for user-visible notifications.
///
/// The UI implements it over a signal; tests record into a `RefCell`.
pub trait Notifier {
    fn notify(&self, toast: Toast);
}

/// Buffers toasts, e.g. while a signal is borrowed for update.
impl Notifier for RefCell<Vec<Toast>> {
    fn notify(&self, toast: Toast) {
        self.borrow_mut().push(toast);
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Errors from adding or removing draft images.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IntakeError {
    /// Batch would push the draft over the image cap.
    #[error("Too many images: {current} attached + {selected} selected exceeds {max}")]
    TooManyImages {
        current: usize,
        selected: usize,
        max: usize,
    },

    /// Removal index outside the draft.
    #[error("No image at index {index} (draft holds {len})")]
    InvalidIndex { index: usize, len: usize },

    /// The browser refused to create a preview reference.
    #[error("Failed to create preview: {0}")]
    Preview(String),
}

/// Errors from a generation request.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// Request body could not be assembled.
    #[error("Failed to build request: {0}")]
    Request(String),

    /// Network or connection failure.
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// Non-success status.
    #[error("Server error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Server { status: u16, message: Option<String> },

    /// Success status with a body that is not a valid payload.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl GenerateError {
    /// Message shown to the user.
    ///
    /// Only the server's own message is surfaced; everything else falls
    /// back to [`GENERIC_FAILURE_MESSAGE`].
    pub fn user_message(&self) -> String {
        match self {
            GenerateError::Server {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Why a submission could not start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("Description is empty")]
    EmptyDescription,

    #[error("A generation is already in progress")]
    AlreadyPending,
}

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Intake error: {0}")]
    Intake(#[from] IntakeError),

    #[error("Generation error: {0}")]
    Generate(#[from] GenerateError),

    #[error("Submission rejected: {0}")]
    Submit(#[from] SubmitRejected),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
