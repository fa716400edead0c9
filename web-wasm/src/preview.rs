//! ブラウザのFileからプレビューを作る

use authentic_eye_common::{Error, LoadedMedia, MediaFile, MediaKind, PreviewReader, Result};
use gloo::file::futures::read_as_bytes;

/// `<input type="file">` やドロップで渡された File を読む
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserFileReader;

impl PreviewReader for BrowserFileReader {
    type Source = web_sys::File;

    async fn read(&self, source: web_sys::File, kind: MediaKind) -> Result<LoadedMedia> {
        let file = gloo::file::File::from(source);
        let bytes = read_as_bytes(&file)
            .await
            .map_err(|e| Error::PreviewRead(format!("{}: {}", file.name(), e)))?;

        tracing::debug!(file = %file.name(), bytes = bytes.len(), "file read for preview");
        LoadedMedia::from_file(MediaFile::new(file.name(), file.raw_mime_type(), bytes), kind)
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn browser_file(name: &str, mime: &str, bytes: &[u8]) -> web_sys::File {
        let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
        let options = web_sys::FilePropertyBag::new();
        options.set_type(mime);
        web_sys::File::new_with_u8_array_sequence_and_options(&JsValue::from(parts), name, &options)
            .expect("File creation failed")
    }

    #[wasm_bindgen_test]
    async fn wasm_reads_file_into_data_uri() {
        let file = browser_file("face.png", "image/png", b"abc");
        let loaded = BrowserFileReader.read(file, MediaKind::Image).await.unwrap();

        assert_eq!(loaded.file.name(), "face.png");
        assert_eq!(loaded.preview.as_str(), "data:image/png;base64,YWJj");
    }

    #[wasm_bindgen_test]
    async fn wasm_empty_file_is_preview_error() {
        let file = browser_file("empty.mp4", "video/mp4", b"");
        let result = BrowserFileReader.read(file, MediaKind::Video).await;
        assert!(matches!(result, Err(Error::PreviewRead(_))));
    }
}
