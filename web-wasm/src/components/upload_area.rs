//! アップロードエリアコンポーネント
//!
//! 動画・画像それぞれの選択口。クリックまたはドラッグ&ドロップで1ファイルを受け取る。

use leptos::prelude::*;
use web_sys::{DragEvent, File, HtmlInputElement};
use authentic_eye_common::MediaKind;

#[component]
pub fn UploadArea<F>(on_select: F) -> impl IntoView
where
    F: Fn(MediaKind, File) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="upload-area">
            {MediaKind::ALL
                .into_iter()
                .map(|kind| view! { <MediaPicker kind=kind on_select=on_select.clone() /> })
                .collect_view()}
        </div>
    }
}

fn picker_text(kind: MediaKind) -> (&'static str, &'static str) {
    match kind {
        MediaKind::Video => ("🎬", "Upload Video"),
        MediaKind::Image => ("🖼", "Upload Image"),
    }
}

#[component]
fn MediaPicker<F>(kind: MediaKind, on_select: F) -> impl IntoView
where
    F: Fn(MediaKind, File) + 'static + Clone + Send + Sync,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let (icon, label) = picker_text(kind);

    let on_change = {
        let on_select = on_select.clone();
        move |ev: web_sys::Event| {
            let input: HtmlInputElement = event_target(&ev);
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                on_select(kind, file);
            }
            // 同じファイルを選び直しても change が発火するように
            input.set_value("");
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);

        let Some(file) = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0))
        else {
            return;
        };

        // ダイアログの accept と同じ条件
        if kind.accepts_mime(&file.type_()) {
            on_select(kind, file);
        } else {
            tracing::debug!(kind = kind.as_str(), mime = %file.type_(), "dropped file ignored");
        }
    };

    view! {
        <label
            class=move || {
                let mut classes = vec!["media-picker", kind.as_str()];
                if is_dragover.get() {
                    classes.push("dragover");
                }
                classes.join(" ")
            }
            on:dragover=move |ev: DragEvent| {
                ev.prevent_default();
                set_is_dragover.set(true);
            }
            on:dragleave=move |_: DragEvent| set_is_dragover.set(false)
            on:drop=on_drop
        >
            <span class="picker-icon">{icon}</span>
            <span class="picker-label">{label}</span>
            <input type="file" accept=kind.accept() class="hidden" on:change=on_change />
        </label>
    }
}
