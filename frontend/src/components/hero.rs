//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Prompto"</h1>
            <p class="subtitle">
                "Describe your product, add a few photos, and get ready-to-post ad copy "
                "with hashtags and media suggestions."
            </p>
        </div>
    }
}
