//! Result panel: generated copy, suggested media, pending and error states.

use leptos::*;

use crate::render::{paragraphs, Token};
use crate::state::{Generation, RequestStatus};
use crate::types::{GeneratedContent, SuggestedMedia};

#[component]
fn Paragraph(tokens: Vec<Token>) -> impl IntoView {
    view! {
        <p>
            {tokens
                .into_iter()
                .map(|token| match token {
                    Token::Tag(tag) => view! { <span class="badge badge-tag">{tag}</span> }.into_view(),
                    Token::Word(word) => view! { <span>{format!("{} ", word)}</span> }.into_view(),
                })
                .collect_view()}
        </p>
    }
}

#[component]
fn MediaStrip(media: Vec<SuggestedMedia>) -> impl IntoView {
    view! {
        <div class="suggested-media">
            <h4>"Suggested Media"</h4>
            <div class="suggested-media-list">
                {media
                    .into_iter()
                    .map(|m| view! { <img src=m.url alt=m.alt class="suggested-media-item"/> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn RenderedContent(content: GeneratedContent) -> impl IntoView {
    let GeneratedContent { text, suggested_media } = content;
    let text_view = paragraphs(&text)
        .into_iter()
        .map(|tokens| view! { <Paragraph tokens=tokens/> })
        .collect_view();
    let media_view = (!suggested_media.is_empty())
        .then(move || view! { <MediaStrip media=suggested_media/> });

    view! {
        <div class="generated-text">{text_view}</div>
        {media_view}
    }
}

#[component]
pub fn ContentPanel(generation: RwSignal<Generation>) -> impl IntoView {
    let status = create_memo(move |_| generation.with(|g| g.status().clone()));

    view! {
        <div class="content-panel">
            {move || match status.get() {
                RequestStatus::Idle => view! {
                    <div class="content-placeholder">
                        <div class="content-placeholder-icon">"✨"</div>
                        <p>"Fill in the details and click \"Generate\" to create ad content with AI."</p>
                    </div>
                }.into_view(),
                RequestStatus::Pending => view! {
                    <div class="content-pending">
                        <div class="spinner spinner-large"></div>
                        <p>"Generating creative content..."</p>
                    </div>
                }.into_view(),
                RequestStatus::Succeeded(content) => view! {
                    <RenderedContent content=content/>
                }.into_view(),
                RequestStatus::Failed(message) => view! {
                    <div class="error-message">{message}</div>
                }.into_view(),
            }}
        </div>
    }
}
