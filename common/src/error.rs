//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// どのエラーもセッションを操作可能な状態に戻す。致命的なものはない。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// ファイルをプレビューに変換できなかった
    #[error("Preview error: {0}")]
    PreviewRead(String),

    /// 通信失敗、または成功以外のステータス
    #[error("Prediction transport error: {0}")]
    PredictionTransport(String),

    /// レスポンスが判定結果の形になっていない
    #[error("Prediction decode error: {0}")]
    PredictionDecode(String),

    /// 推論中のため操作を受け付けない
    #[error("Session is busy: a prediction is in flight")]
    SessionBusy,

    /// 後から別の選択やリセットがあり、この読込結果は使われない
    #[error("Selection superseded by a newer one")]
    StaleSelection,

    #[error("Config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::PredictionDecode(err.to_string())
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
