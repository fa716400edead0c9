//! 推論サービスとの境界

use std::future::Future;

use crate::config::ServiceConfig;
use crate::error::Result;
use crate::media::{MediaFile, MediaKind};
use crate::verdict::Verdict;

/// 推論開始時にセッションから切り出す送信内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionRequest {
    pub kind: MediaKind,
    pub file: MediaFile,
}

impl PredictionRequest {
    pub fn endpoint_url(&self, config: &ServiceConfig) -> String {
        config.endpoint(self.kind)
    }

    pub fn form_field(&self) -> &'static str {
        self.kind.form_field()
    }
}

/// 推論クライアント
///
/// 1回だけ送信し、リトライしない。通信失敗・成功以外のステータスは
/// `PredictionTransport`、本文が読めなければ `PredictionDecode` を返す。
pub trait InferenceClient {
    fn predict(&self, request: &PredictionRequest) -> impl Future<Output = Result<Verdict>>;
}
