//! 推論サービス連携（fetch API）
//!
//! POST <base>/predictImage または <base>/predictVideo に
//! multipart/form-data でファイルを1つ送る。

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Request, RequestInit, RequestMode, Response};

use authentic_eye_common::{
    decode_prediction, Error, InferenceClient, MediaFile, PredictionRequest, Result, ServiceConfig,
    Verdict,
};

/// JsValueのエラーを文字列にする
fn js_error_text(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// バイト列からBlobを作る
fn to_blob(file: &MediaFile) -> std::result::Result<Blob, JsValue> {
    let bytes = js_sys::Uint8Array::from(file.bytes());
    let parts = js_sys::Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    options.set_type(file.mime());
    Blob::new_with_u8_array_sequence_and_options(&parts, &options)
}

/// fetch呼び出し（レスポンス本文まで）
async fn post_form(url: &str, request: &PredictionRequest) -> std::result::Result<(u16, String), JsValue> {
    let form = FormData::new()?;
    let blob = to_blob(&request.file)?;
    form.append_with_blob_and_filename(request.form_field(), &blob, request.file.name())?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(url, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let status = resp.status();
    let body = JsFuture::from(resp.text()?).await?.as_string().unwrap_or_default();
    Ok((status, body))
}

/// ブラウザ用の推論クライアント
#[derive(Debug, Clone)]
pub struct FetchClient {
    config: ServiceConfig,
}

impl FetchClient {
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }
}

impl InferenceClient for FetchClient {
    async fn predict(&self, request: &PredictionRequest) -> Result<Verdict> {
        let url = request.endpoint_url(&self.config);
        tracing::info!(%url, file = request.file.name(), bytes = request.file.len(), "sending prediction request");

        let (status, body) = post_form(&url, request)
            .await
            .map_err(|e| Error::PredictionTransport(js_error_text(&e)))?;

        if !(200..300).contains(&status) {
            return Err(Error::PredictionTransport(format!("HTTP {}", status)));
        }

        decode_prediction(&body)
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_blob_keeps_size_and_type() {
        let file = MediaFile::new("clip.mp4", "video/mp4", vec![1u8; 64]);
        let blob = to_blob(&file).expect("blob creation failed");
        assert_eq!(blob.size() as usize, 64);
        assert_eq!(blob.type_(), "video/mp4");
    }

    #[wasm_bindgen_test]
    async fn wasm_unreachable_service_is_transport_error() {
        let config = ServiceConfig::new("http://127.0.0.1:9").unwrap();
        let client = FetchClient::new(config);
        let request = PredictionRequest {
            kind: authentic_eye_common::MediaKind::Image,
            file: MediaFile::new("face.jpg", "image/jpeg", vec![0xff, 0xd8]),
        };

        let result = client.predict(&request).await;
        assert!(matches!(result, Err(Error::PredictionTransport(_))));
    }
}
