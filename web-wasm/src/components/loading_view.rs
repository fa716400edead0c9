//! 推論待ちの画面

use leptos::prelude::*;

#[component]
pub fn LoadingView() -> impl IntoView {
    view! {
        <div class="loading-view">
            <div class="dna-spinner" aria-label="dna-loading">
                <span class="strand" />
                <span class="strand" />
                <span class="strand" />
            </div>
            <h1 class="loading-text">"Be patient, It may take a while..."</h1>
        </div>
    }
}
