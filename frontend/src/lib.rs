//! Prompto - Frontend Rust/Leptos Application
//!
//! A WebAssembly widget that turns a product description and a few
//! images into ad copy using a remote generation service.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Hero (title, description)                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  AdGenerator                                                 │
//! │  ├── description + ImagePicker (Draft)                      │
//! │  └── ContentPanel (Generation)                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ToastStack, Footer                                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (GeneratedContent, Toast, errors)
//! - [`state`] - Draft and request lifecycle, toolkit independent
//! - [`render`] - Ad copy tokenizer
//! - [`components`] - UI components
//! - [`services`] - Browser glue (generation request, previews, clipboard)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod render;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // API
    GeneratedContent, SuggestedMedia,
    // Notifications
    Notifier, Toast, ToastVariant,
    // Errors
    AppError, AppResult, GenerateError, IntakeError, SubmitRejected,
};

// State
pub use state::{Draft, Generation, PreviewStore, RequestStatus};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install panic hook and logger, then mount the application.
pub fn run() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Prompto - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Prompto - AI Ad Generator"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let toasts = ToastQueue::new();

    view! {
        <div class="container">
            <Hero/>
            <AdGenerator toasts=toasts/>
        </div>

        <ToastStack toasts=toasts/>
        <Footer/>
    }
}
