//! 描画用のセッションスナップショット

use crate::media::{MediaKind, PreviewSource};
use crate::verdict::Verdict;

/// 表示する画面
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// 推論待ちのアニメーション
    Busy,
    /// 画像・動画の2つのアップロード口
    Picker,
    /// プレビュー + 操作ボタン
    Preview,
    /// プレビュー + 判定結果
    Verdict,
}

/// `UploadSession::render_state` の戻り値
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderState {
    pub view: View,
    pub media_kind: Option<MediaKind>,
    pub preview: Option<PreviewSource>,
    pub verdict: Option<Verdict>,
    /// "Try another" ボタン
    pub show_try_another: bool,
    /// 表示する "Predict" ボタンの種別
    pub predict_action: Option<MediaKind>,
}

impl RenderState {
    pub fn is_busy(&self) -> bool {
        self.view == View::Busy
    }

    pub fn shows_picker(&self) -> bool {
        self.view == View::Picker
    }
}
