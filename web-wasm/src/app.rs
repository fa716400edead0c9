//! メインアプリケーションコンポーネント
//!
//! セッションは RwSignal に置き、同期の遷移メソッドだけで更新する。
//! ファイル読込と推論リクエストは spawn_local で走らせ、終わったら結果を反映する。

use leptos::prelude::*;
use leptos::task::spawn_local;
use authentic_eye_common::{
    InferenceClient, MediaKind, Notifier, PreviewReader, ServiceConfig, UploadSession,
};
use crate::api::inference::FetchClient;
use crate::components::{
    action_buttons::ActionButtons,
    header::Header,
    loading_view::LoadingView,
    media_preview::MediaPreview,
    toast_host::ToastHost,
    upload_area::UploadArea,
    verdict_banner::VerdictBanner,
};
use crate::notifier::{Toast, ToastNotifier};
use crate::preview::BrowserFileReader;

/// ビルド時に指定する推論サービスのURL
const API_URL: Option<&str> = option_env!("AUTHENTIC_EYE_API_URL");

fn service_config() -> ServiceConfig {
    ServiceConfig::from_optional(API_URL).unwrap_or_else(|err| {
        tracing::error!(error = %err, "invalid AUTHENTIC_EYE_API_URL; using default");
        ServiceConfig::default()
    })
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let session = RwSignal::new(UploadSession::new());
    let toasts = RwSignal::new(Vec::<Toast>::new());
    let notifier = ToastNotifier::new(toasts);
    let client = StoredValue::new(FetchClient::new(service_config()));

    let state = Memo::new(move |_| session.with(|s| s.render_state()));

    // ファイル選択ハンドラ
    let on_select = move |kind: MediaKind, file: web_sys::File| {
        let Some(ticket) = session.try_update(|s| s.begin_selection()).flatten() else {
            tracing::debug!("selection ignored while busy");
            return;
        };

        spawn_local(async move {
            let read = BrowserFileReader.read(file, kind).await;
            // 読込中にリセット・再選択・推論開始があった結果はここで捨てられる
            if let Some(err) = session.try_update(|s| s.finish_selection(ticket, kind, read)).flatten() {
                notifier.notify_error(&err.to_string());
            }
        });
    };

    // 推論開始ハンドラ
    let on_predict = move |_: ()| {
        let Some(request) = session.try_update(|s| s.begin_prediction()).flatten() else {
            return;
        };
        let client = client.get_value();

        spawn_local(async move {
            let outcome = client.predict(&request).await;
            if let Some(notification) = session.try_update(|s| s.complete_prediction(outcome)).flatten() {
                notification.dispatch(&notifier);
            }
        });
    };

    // リセットハンドラ
    let on_reset = move |_: ()| {
        session.update(|s| {
            s.reset();
        });
    };

    view! {
        <div class="container">
            <Show
                when=move || !state.with(|s| s.is_busy())
                fallback=|| view! { <LoadingView /> }
            >
                <div class="card">
                    <Header />

                    <Show
                        when=move || state.with(|s| s.shows_picker())
                        fallback=move || view! { <MediaPreview state=state /> }
                    >
                        <UploadArea on_select=on_select />
                    </Show>

                    <VerdictBanner state=state />

                    <ActionButtons state=state on_reset=on_reset on_predict=on_predict />
                </div>
            </Show>

            <ToastHost toasts=toasts />
        </div>
    }
}
