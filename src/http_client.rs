//! 推論サービス連携（reqwest）

use authentic_eye_common::{
    decode_prediction, Error, InferenceClient, PredictionRequest, Result, ServiceConfig, Verdict,
};
use reqwest::multipart::{Form, Part};

fn transport(err: reqwest::Error) -> Error {
    Error::PredictionTransport(err.to_string())
}

/// ネイティブ用の推論クライアント
///
/// タイムアウトは設定しない。応答が無ければ待ち続ける。
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    config: ServiceConfig,
}

impl HttpClient {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

impl InferenceClient for HttpClient {
    async fn predict(&self, request: &PredictionRequest) -> Result<Verdict> {
        let url = request.endpoint_url(&self.config);
        tracing::info!(%url, file = request.file.name(), bytes = request.file.len(), "sending prediction request");

        let part = Part::bytes(request.file.bytes().to_vec())
            .file_name(request.file.name().to_string())
            .mime_str(request.file.mime())
            .map_err(transport)?;
        let form = Form::new().part(request.form_field(), part);

        let response = self.http.post(&url).multipart(form).send().await.map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::PredictionTransport(format!("HTTP {}", status.as_u16())));
        }

        let body = response.text().await.map_err(transport)?;
        tracing::debug!(%status, body = %body, "prediction response");
        decode_prediction(&body)
    }
}
