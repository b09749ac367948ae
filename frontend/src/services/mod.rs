//! Browser-facing services.
//!
//! # Services
//!
//! - [`generate`] - Multipart submission to the generation endpoint
//! - [`previews`] - Object-URL previews for attached images
//! - [`clipboard`] - Copying generated text

pub mod generate;
pub mod previews;
pub mod clipboard;

pub use generate::*;
pub use previews::*;
pub use clipboard::*;
