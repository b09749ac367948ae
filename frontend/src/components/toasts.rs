//! Transient notification stack.
//!
//! Toasts are pushed through the [`Notifier`] trait, capped at
//! [`MAX_TOASTS`] and dismissed after [`TOAST_DURATION_MS`] or on click.

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::config::{MAX_TOASTS, TOAST_DURATION_MS};
use crate::types::{Notifier, Toast};

/// A toast on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastEntry {
    pub id: u64,
    pub toast: Toast,
}

/// Append `entry`, evicting the oldest entries beyond [`MAX_TOASTS`].
fn push_capped(entries: &mut Vec<ToastEntry>, entry: ToastEntry) {
    entries.push(entry);
    if entries.len() > MAX_TOASTS {
        let excess = entries.len() - MAX_TOASTS;
        entries.drain(..excess);
    }
}

/// Signal-backed toast queue, shared by copy between components.
#[derive(Clone, Copy)]
pub struct ToastQueue {
    entries: RwSignal<Vec<ToastEntry>>,
    next_id: StoredValue<u64>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self {
            entries: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        }
    }

    pub fn entries(&self) -> ReadSignal<Vec<ToastEntry>> {
        self.entries.read_only()
    }

    pub fn dismiss(&self, id: u64) {
        // The owner may already be gone when a timer fires.
        self.entries.try_update(|entries| entries.retain(|entry| entry.id != id));
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, toast: Toast) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        log::info!("🔔 {}: {}", toast.title, toast.description);
        self.entries.update(|entries| push_capped(entries, ToastEntry { id, toast }));

        let queue = *self;
        Timeout::new(TOAST_DURATION_MS, move || queue.dismiss(id)).forget();
    }
}

#[component]
pub fn ToastStack(toasts: ToastQueue) -> impl IntoView {
    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.entries().get()
                key=|entry| entry.id
                children=move |entry| {
                    let id = entry.id;
                    view! {
                        <div
                            class=format!("toast {}", entry.toast.variant.css_class())
                            on:click=move |_| toasts.dismiss(id)
                        >
                            <div class="toast-title">{entry.toast.title}</div>
                            <div class="toast-description">{entry.toast.description}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u64) -> ToastEntry {
        ToastEntry {
            id,
            toast: Toast::new(format!("t{}", id), ""),
        }
    }

    #[test]
    fn test_push_capped_evicts_oldest() {
        let mut entries = Vec::new();
        for id in 0..(MAX_TOASTS as u64 + 2) {
            push_capped(&mut entries, entry(id));
        }

        assert_eq!(entries.len(), MAX_TOASTS);
        assert_eq!(entries.first().map(|e| e.id), Some(2));
        assert_eq!(entries.last().map(|e| e.id), Some(MAX_TOASTS as u64 + 1));
    }
}
