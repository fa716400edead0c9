#![allow(dead_code)]

//! テスト用の推論サービススタブ（axum）

use std::cell::Cell;
use std::sync::{Arc, Mutex};

use authentic_eye_common::Notifier;
use axum::extract::{Multipart, State};
use axum::http::{StatusCode, Uri};
use axum::routing::post;
use axum::Router;

/// スタブが受け取ったアップロード
#[derive(Debug, Clone)]
pub struct ReceivedUpload {
    pub path: String,
    pub field: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

struct StubState {
    status: StatusCode,
    body: String,
    received: Mutex<Vec<ReceivedUpload>>,
}

/// 起動済みのスタブ
pub struct StubService {
    pub base_url: String,
    state: Arc<StubState>,
}

impl StubService {
    pub fn received(&self) -> Vec<ReceivedUpload> {
        self.state.received.lock().unwrap().clone()
    }
}

async fn handle_upload(
    State(state): State<Arc<StubState>>,
    uri: Uri,
    mut multipart: Multipart,
) -> (StatusCode, String) {
    while let Some(field) = multipart.next_field().await.expect("invalid multipart") {
        let upload = ReceivedUpload {
            path: uri.path().to_string(),
            field: field.name().unwrap_or_default().to_string(),
            file_name: field.file_name().map(str::to_string),
            content_type: field.content_type().map(str::to_string),
            bytes: field.bytes().await.expect("field body").to_vec(),
        };
        state.received.lock().unwrap().push(upload);
    }
    (state.status, state.body.clone())
}

/// 指定したステータスと本文を返すスタブを起動
pub async fn spawn_stub(status: u16, body: &str) -> StubService {
    let state = Arc::new(StubState {
        status: StatusCode::from_u16(status).expect("valid status"),
        body: body.to_string(),
        received: Mutex::new(Vec::new()),
    });

    let app = Router::new()
        .route("/predictImage", post(handle_upload))
        .route("/predictVideo", post(handle_upload))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server failed");
    });

    StubService {
        base_url: format!("http://{}", addr),
        state,
    }
}

/// 何も待ち受けていないアドレス
pub async fn unused_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}", addr)
}

/// 通知回数を数える
#[derive(Default)]
pub struct CountingNotifier {
    pub successes: Cell<usize>,
    pub errors: Cell<usize>,
}

impl Notifier for CountingNotifier {
    fn notify_success(&self, _message: &str) {
        self.successes.set(self.successes.get() + 1);
    }

    fn notify_error(&self, _message: &str) {
        self.errors.set(self.errors.get() + 1);
    }
}
