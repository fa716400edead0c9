//! 判定結果の型とレスポンスのパース
//!
//! 推論サービスは `{"result": <code>}` を返す。
//! 0 → 本物、1 → 改ざん、それ以外（顔が検出できない場合を含む）→ 判定不能。

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// 判定ラベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictLabel {
    Authentic,
    Manipulated,
    Undetected,
}

impl VerdictLabel {
    /// コード値からラベルへの変換（全域関数）
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => VerdictLabel::Authentic,
            1 => VerdictLabel::Manipulated,
            _ => VerdictLabel::Undetected,
        }
    }

    /// 画面表示用
    pub fn display_text(&self) -> &'static str {
        match self {
            VerdictLabel::Authentic => "Real",
            VerdictLabel::Manipulated => "Fake",
            VerdictLabel::Undetected => "No face Detected",
        }
    }

    /// スタイル用のクラス名
    pub fn tone(&self) -> &'static str {
        match self {
            VerdictLabel::Authentic => "authentic",
            VerdictLabel::Manipulated => "manipulated",
            VerdictLabel::Undetected => "undetected",
        }
    }
}

impl std::fmt::Display for VerdictLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_text())
    }
}

/// 判定結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub label: VerdictLabel,
    /// サービスが返したコード。整数で返らなかった場合はNone
    pub code: Option<i64>,
}

impl Verdict {
    pub fn from_code(code: i64) -> Self {
        Self {
            label: VerdictLabel::from_code(code),
            code: Some(code),
        }
    }

    pub fn undetected() -> Self {
        Self {
            label: VerdictLabel::Undetected,
            code: None,
        }
    }
}

/// `result` フィールドを整数として読む。2.0 のような整数値の浮動小数も受け付ける
fn code_of(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

/// レスポンス本文をパース
///
/// # Returns
/// * `Ok(Verdict)` - JSONオブジェクトだった場合。`result` が無い・整数でない場合は判定不能
/// * `Err(PredictionDecode)` - JSONでない、またはオブジェクトでない
pub fn decode_prediction(body: &str) -> Result<Verdict> {
    let payload: Value = serde_json::from_str(body.trim())?;
    let object = payload
        .as_object()
        .ok_or_else(|| Error::PredictionDecode(format!("expected a JSON object, got: {}", payload)))?;

    let verdict = match object.get("result").and_then(code_of) {
        Some(code) => Verdict::from_code(code),
        None => Verdict::undetected(),
    };

    tracing::debug!(label = ?verdict.label, code = ?verdict.code, "decoded prediction");
    Ok(verdict)
}
