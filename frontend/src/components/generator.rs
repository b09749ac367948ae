//! The ad generator card.
//!
//! Owns the draft and the request state, wires the generate, regenerate
//! and copy actions, and releases outstanding previews on teardown.

use leptos::*;

use crate::components::{ContentPanel, ImagePicker, ToastQueue};
use crate::config::API_BASE_URL;
use crate::services::{copy_result, generate_ad, BrowserClipboard, BrowserPreviews};
use crate::state::{Draft, Generation};
use crate::types::{AppError, Notifier};

#[component]
pub fn AdGenerator(toasts: ToastQueue) -> impl IntoView {
    let draft = create_rw_signal(Draft::new(BrowserPreviews));
    let generation = create_rw_signal(Generation::new());

    on_cleanup(move || {
        draft.try_update(|d| d.release_all());
        generation.try_update(|g| g.abandon());
    });

    let can_generate = move || draft.with(|d| generation.with(|g| g.can_generate(&d.description)));
    let can_regenerate = move || draft.with(|d| generation.with(|g| g.can_regenerate(&d.description)));
    let has_result = move || generation.with(|g| g.result().is_some());
    let is_pending = move || generation.with(|g| g.is_pending());

    // Generate and regenerate share this path
    let submit = move || {
        let description = draft.with(|d| d.description.clone());
        let ticket = match generation.try_update(|g| g.begin(&description)) {
            Some(Ok(ticket)) => ticket,
            Some(Err(rejected)) => {
                log::warn!("{}", AppError::from(rejected));
                return;
            }
            None => return,
        };
        let files = draft.with(|d| d.files());

        spawn_local(async move {
            let outcome = generate_ad(&description, &files, API_BASE_URL).await;
            match &outcome {
                Ok(content) => log::info!("✅ Generated {} chars of copy", content.text.len()),
                Err(e) => log::error!("❌ {}", AppError::from(e.clone())),
            }

            if let Some(Some(toast)) = generation.try_update(|g| g.settle(ticket, outcome)) {
                toasts.notify(toast);
            }
        });
    };

    let on_copy = move |_| {
        let result = generation.with(|g| g.result().cloned());
        copy_result(result.as_ref(), &BrowserClipboard, &toasts);
    };

    view! {
        <div class="card generator">
            <div class="card-header">
                <h2 class="card-title">"AI Ad Generator"</h2>
                <p class="card-description">"Create compelling ad copy with Prompto technology"</p>
            </div>

            <div class="card-content generator-grid">
                <div class="generator-form">
                    <label class="field-label">"Product Description"</label>
                    <textarea
                        class="description-input"
                        placeholder="Describe your product or service..."
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.description = value);
                        }
                    ></textarea>

                    <label class="field-label">"Upload Images (Optional)"</label>
                    <ImagePicker draft=draft toasts=toasts/>

                    <button
                        class="btn btn-primary generate-button"
                        on:click=move |_| submit()
                        disabled=move || !can_generate()
                    >
                        {move || if is_pending() {
                            view! { <span class="spinner"></span> }.into_view()
                        } else {
                            view! { <span class="generate-icon">"✨"</span> }.into_view()
                        }}
                        "Generate Ad Content"
                    </button>
                </div>

                <div class="generator-output">
                    <div class="output-header">
                        <h3>"Generated Content"</h3>
                        <div class="output-actions">
                            <button
                                class="btn btn-ghost"
                                title="Regenerate"
                                on:click=move |_| submit()
                                disabled=move || !can_regenerate()
                            >
                                "↻"
                            </button>
                            <button
                                class="btn btn-ghost"
                                title="Copy"
                                on:click=on_copy
                                disabled=move || !has_result()
                            >
                                "⧉"
                            </button>
                        </div>
                    </div>

                    <ContentPanel generation=generation/>
                </div>
            </div>
        </div>
    }
}
