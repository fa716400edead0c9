//! メディア型とプレビュー生成
//!
//! - MediaKind: 画像 / 動画の区別。エンドポイントとフォーム名を決める
//! - MediaFile: 選択されたファイル本体（バイト列は共有）
//! - PreviewSource: ネットワークを使わずに作る data URI
//! - PreviewReader: プラットフォームごとのファイル読込の境界

use std::future::Future;
use std::path::Path;
use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// メディア種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mov", "mkv", "avi", "m4v"];

impl MediaKind {
    pub const ALL: [MediaKind; 2] = [MediaKind::Video, MediaKind::Image];

    /// multipartのフィールド名
    pub fn form_field(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }

    pub fn endpoint_path(&self) -> &'static str {
        match self {
            MediaKind::Image => "/predictImage",
            MediaKind::Video => "/predictVideo",
        }
    }

    /// ファイル選択ダイアログのフィルタ
    pub fn accept(&self) -> &'static str {
        match self {
            MediaKind::Image => "image/*",
            MediaKind::Video => "video/*",
        }
    }

    pub fn default_mime(&self) -> &'static str {
        match self {
            MediaKind::Image => "image/jpeg",
            MediaKind::Video => "video/mp4",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }

    /// ドロップされたファイルのMIMEタイプが "image/*" / "video/*" に合うか
    pub fn accepts_mime(&self, mime: &str) -> bool {
        mime.split('/').next() == Some(self.as_str())
    }

    /// 拡張子から種別を推定
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            Some(MediaKind::Image)
        } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            Some(MediaKind::Video)
        } else {
            None
        }
    }
}

impl std::str::FromStr for MediaKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "image" => Ok(MediaKind::Image),
            "video" => Ok(MediaKind::Video),
            other => Err(Error::Config(format!("unknown media kind: {}", other))),
        }
    }
}

/// 選択されたファイル
///
/// クローンしてもバイト列はコピーされない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    name: String,
    mime: String,
    bytes: Arc<[u8]>,
}

impl MediaFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes: bytes.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// MIMEタイプが空なら種別の既定値を入れる
    fn with_default_mime(mut self, kind: MediaKind) -> Self {
        if self.mime.trim().is_empty() {
            self.mime = kind.default_mime().to_string();
        }
        self
    }
}

/// 描画可能なプレビュー（data URI）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewSource(String);

impl PreviewSource {
    /// "data:<mime>;base64,<payload>" を生成
    pub fn from_file(file: &MediaFile) -> Self {
        Self(format!("data:{};base64,{}", file.mime(), STANDARD.encode(file.bytes())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// data URIからMIMEタイプを抽出
    pub fn mime_type(&self) -> &str {
        self.0
            .strip_prefix("data:")
            .and_then(|s| s.split(';').next())
            .unwrap_or("")
    }
}

/// プレビュー読込の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedMedia {
    pub file: MediaFile,
    pub preview: PreviewSource,
}

impl LoadedMedia {
    /// ファイルからプレビューを作る。空ファイルは描画できないので拒否
    pub fn from_file(file: MediaFile, kind: MediaKind) -> Result<Self> {
        if file.is_empty() {
            return Err(Error::PreviewRead(format!("{} is empty", file.name())));
        }
        let file = file.with_default_mime(kind);
        let preview = PreviewSource::from_file(&file);
        Ok(Self { file, preview })
    }
}

/// ファイル読込の境界
///
/// `Source` はプラットフォームが渡すもの（パス、ブラウザのFileなど）。
/// 読込が終わるまでセッションには触れない。
pub trait PreviewReader {
    type Source;

    fn read(&self, source: Self::Source, kind: MediaKind) -> impl Future<Output = Result<LoadedMedia>>;
}

/// 既にメモリ上にあるファイル用
#[derive(Debug, Clone, Copy, Default)]
pub struct InMemoryReader;

impl PreviewReader for InMemoryReader {
    type Source = MediaFile;

    async fn read(&self, source: MediaFile, kind: MediaKind) -> Result<LoadedMedia> {
        LoadedMedia::from_file(source, kind)
    }
}
