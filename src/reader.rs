//! ファイルシステムからの読込

use std::path::{Path, PathBuf};

use authentic_eye_common::{Error, LoadedMedia, MediaFile, MediaKind, PreviewReader, Result};

/// 拡張子からMIMEタイプを決める。不明なら空文字（種別の既定値になる）
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        "mp4" => "video/mp4",
        "m4v" => "video/x-m4v",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "mkv" => "video/x-matroska",
        "avi" => "video/x-msvideo",
        _ => "",
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl PreviewReader for FsReader {
    type Source = PathBuf;

    async fn read(&self, source: PathBuf, kind: MediaKind) -> Result<LoadedMedia> {
        let bytes = tokio::fs::read(&source)
            .await
            .map_err(|e| Error::PreviewRead(format!("{}: {}", source.display(), e)))?;

        let name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        LoadedMedia::from_file(MediaFile::new(name, mime_for_path(&source), bytes), kind)
    }
}
