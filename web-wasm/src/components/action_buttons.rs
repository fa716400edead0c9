//! 操作ボタンコンポーネント

use leptos::prelude::*;
use authentic_eye_common::{MediaKind, RenderState};

pub fn predict_label(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Video => "Predict Video!",
        MediaKind::Image => "Predict Image!",
    }
}

#[component]
pub fn ActionButtons<FR, FP>(
    state: Memo<RenderState>,
    on_reset: FR,
    on_predict: FP,
) -> impl IntoView
where
    FR: Fn(()) + 'static + Clone + Send + Sync,
    FP: Fn(()) + 'static + Clone + Send + Sync,
{
    let show_try_another = Memo::new(move |_| state.with(|s| s.show_try_another));
    let predict_action = Memo::new(move |_| state.with(|s| s.predict_action));

    view! {
        <div class="action-buttons">
            <Show when=move || show_try_another.get()>
                <button
                    class="btn btn-secondary"
                    on:click={
                        let on_reset = on_reset.clone();
                        move |_| on_reset(())
                    }
                >
                    "Try another"
                </button>
            </Show>

            {move || {
                predict_action.get().map(|kind| {
                    let on_predict = on_predict.clone();
                    view! {
                        <button
                            class=format!("btn btn-primary predict-{}", kind.as_str())
                            on:click=move |_| on_predict(())
                        >
                            {predict_label(kind)}
                        </button>
                    }
                })
            }}
        </div>
    }
}
