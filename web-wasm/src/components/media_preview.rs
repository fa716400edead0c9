//! 選択したファイルのプレビュー

use leptos::prelude::*;
use authentic_eye_common::{MediaKind, RenderState};

#[component]
pub fn MediaPreview(state: Memo<RenderState>) -> impl IntoView {
    // 判定結果が変わっても動画を作り直さないように分けておく
    let media = Memo::new(move |_| state.with(|s| (s.media_kind, s.preview.clone())));

    move || match media.get() {
        (Some(MediaKind::Video), Some(preview)) => {
            let src = preview.as_str().to_string();
            let mime = preview.mime_type().to_string();
            view! {
                <div class="media-preview">
                    <video controls class="video-controls">
                        <source src=src type=mime />
                        "Your browser does not support the video tag."
                    </video>
                </div>
            }
            .into_any()
        }
        (Some(MediaKind::Image), Some(preview)) => view! {
            <div class="media-preview">
                <img src=preview.as_str().to_string() alt="Uploaded" class="img-upload" />
            </div>
        }
        .into_any(),
        _ => ().into_any(),
    }
}
