//! Widget state, independent of the UI toolkit.
//!
//! - [`draft`] - Description and attached images with their previews
//! - [`request`] - Generation request lifecycle

pub mod draft;
pub mod request;

pub use draft::*;
pub use request::*;
