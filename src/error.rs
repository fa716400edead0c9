use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthenticEyeError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("メディア種別を判定できません: {0} （--kind image|video を指定してください）")]
    UnknownMediaKind(String),

    #[error("推論に失敗しました: {0} （-v で詳細を表示）")]
    PredictionFailed(String),

    #[error(transparent)]
    Session(#[from] authentic_eye_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AuthenticEyeError>;
