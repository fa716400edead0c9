//! 1ファイルの選択から判定までを UploadSession で実行する

use std::path::Path;

use authentic_eye_common::{
    InferenceClient, MediaKind, Notification, Notifier, UploadSession, Verdict, VerdictLabel,
};
use serde::Serialize;

use crate::error::{AuthenticEyeError, Result};
use crate::reader::FsReader;

/// 判定結果（--json 出力用）
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub file_name: String,
    pub kind: MediaKind,
    pub label: VerdictLabel,
    pub code: Option<i64>,
    pub text: &'static str,
}

impl Prediction {
    fn new(file_name: &str, kind: MediaKind, verdict: Verdict) -> Self {
        Self {
            file_name: file_name.to_string(),
            kind,
            label: verdict.label,
            code: verdict.code,
            text: verdict.label.display_text(),
        }
    }
}

/// 種別の指定が無ければ拡張子から判定
pub fn resolve_kind(path: &Path, kind: Option<MediaKind>) -> Result<MediaKind> {
    match kind {
        Some(kind) => Ok(kind),
        None => MediaKind::from_path(path)
            .ok_or_else(|| AuthenticEyeError::UnknownMediaKind(path.display().to_string())),
    }
}

/// ファイルを選択して1回だけ推論する
pub async fn predict_file<C, N>(
    path: &Path,
    kind: Option<MediaKind>,
    client: &C,
    notifier: &N,
) -> Result<Prediction>
where
    C: InferenceClient,
    N: Notifier,
{
    if !path.is_file() {
        return Err(AuthenticEyeError::FileNotFound(path.display().to_string()));
    }
    let kind = resolve_kind(path, kind)?;

    let mut session = UploadSession::new();
    session.select_media(kind, path.to_path_buf(), &FsReader).await?;

    let notification = session.submit_for_prediction(client, notifier).await;

    match (notification, session.verdict(), session.selected_file()) {
        (Some(Notification::PredictionSucceeded), Some(verdict), Some(file)) => {
            Ok(Prediction::new(file.name(), kind, *verdict))
        }
        _ => Err(AuthenticEyeError::PredictionFailed(
            Notification::PredictionFailed.message().to_string(),
        )),
    }
}
