//! UI Components for the Prompto application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`AdGenerator`] - Description form, generate/regenerate/copy actions
//! - [`ImagePicker`] - Image attachments with previews
//! - [`ContentPanel`] - Generated copy and suggested media
//! - [`ToastStack`] - Transient notifications

mod hero;
mod generator;
mod image_picker;
mod content;
mod toasts;
mod footer;

pub use hero::*;
pub use generator::*;
pub use image_picker::*;
pub use content::*;
pub use toasts::*;
pub use footer::*;
