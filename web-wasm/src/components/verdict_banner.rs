//! 判定結果の表示

use leptos::prelude::*;
use authentic_eye_common::RenderState;

#[component]
pub fn VerdictBanner(state: Memo<RenderState>) -> impl IntoView {
    let verdict = Memo::new(move |_| state.with(|s| s.verdict));

    move || {
        verdict.get().map(|v| {
            view! {
                <div class="verdict">
                    "Prediction Result: "
                    <span class=format!("verdict-label {}", v.label.tone())>
                        {v.label.display_text()}
                    </span>
                </div>
            }
        })
    }
}
