//! Image attachment picker with previews.
//!
//! Handles file selection through a hidden input, the 5-image cap,
//! preview thumbnails and removal.

use leptos::*;
use std::cell::RefCell;
use web_sys::{Event, File, HtmlInputElement};

use crate::config::ACCEPTED_IMAGE_TYPES;
use crate::services::BrowserPreviews;
use crate::state::{intake, upload_hint, Draft};
use crate::types::{Notifier, Toast};
use crate::ToastQueue;

/// Files currently selected in `input`, in selection order.
fn selected_files(input: &HtmlInputElement) -> Vec<File> {
    let Some(files) = input.files() else {
        return Vec::new();
    };
    (0..files.length()).filter_map(|i| files.get(i)).collect()
}

#[component]
pub fn ImagePicker(draft: RwSignal<Draft<BrowserPreviews>>, toasts: ToastQueue) -> impl IntoView {
    let input_ref = create_node_ref::<html::Input>();

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let files = selected_files(&input);

        // Toasts go out once the draft is no longer borrowed
        let raised: RefCell<Vec<Toast>> = RefCell::default();
        let _ = draft.try_update(|d| intake(d, files, &raised));
        for toast in raised.into_inner() {
            toasts.notify(toast);
        }

        // Allows selecting the same file again
        input.set_value("");
    };

    let open_file_dialog = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let remove_image = move |index: usize| {
        if let Some(Err(err)) = draft.try_update(|d| d.remove(index)) {
            log::warn!("{}", err);
        }
    };

    view! {
        <div class="image-picker">
            <input
                type="file"
                node_ref=input_ref
                class="hidden"
                accept=ACCEPTED_IMAGE_TYPES
                multiple=true
                style="display:none"
                on:change=on_file_change
            />

            <div class="image-previews">
                <For
                    each=move || draft.with(|d| d.preview_urls().into_iter().enumerate().collect::<Vec<_>>())
                    key=|(index, url)| (*index, url.clone())
                    children=move |(index, url)| {
                        view! {
                            <div class="image-preview">
                                <img src=url alt=format!("Uploaded image {}", index + 1)/>
                                <button
                                    type="button"
                                    class="image-remove"
                                    on:click=move |_| remove_image(index)
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    }
                />

                <Show
                    when=move || draft.with(|d| d.can_add_more())
                    fallback=|| view! { }
                >
                    <button type="button" class="image-add" on:click=open_file_dialog>
                        <span class="image-add-icon">"⬆"</span>
                        <span class="image-add-text">"Add"</span>
                    </button>
                </Show>
            </div>

            <p class="upload-hint">{move || upload_hint(draft.with(|d| d.len()))}</p>
        </div>
    }
}
