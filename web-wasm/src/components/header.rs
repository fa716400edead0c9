//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"👁 Authentic-Eye"</h1>
            <p class="text-muted">"Upload a video or image to detect if it is a deepfake."</p>
        </header>
    }
}
