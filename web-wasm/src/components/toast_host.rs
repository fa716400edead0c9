//! トースト表示

use leptos::prelude::*;
use crate::notifier::{dismiss_toast, Toast};

#[component]
pub fn ToastHost(toasts: RwSignal<Vec<Toast>>) -> impl IntoView {
    view! {
        <div class="toast-container">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("toast {}", toast.tone.as_str())
                            role="alert"
                            on:click=move |_| toasts.update(|list| dismiss_toast(list, id))
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
