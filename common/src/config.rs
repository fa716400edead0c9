//! 推論サービスの接続先設定

use crate::error::{Error, Result};
use crate::media::MediaKind;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// 推論サービスのベースURL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    base_url: String,
}

impl ServiceConfig {
    /// スキームを検証し、末尾のスラッシュを取り除く
    pub fn new(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let host = trimmed
            .strip_prefix("http://")
            .or_else(|| trimmed.strip_prefix("https://"))
            .ok_or_else(|| {
                Error::Config(format!("base URL must start with http:// or https://: {}", base_url))
            })?;
        if host.is_empty() {
            return Err(Error::Config(format!("base URL has no host: {}", base_url)));
        }
        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// 値があればそれを、無ければ既定値を使う
    pub fn from_optional(base_url: Option<&str>) -> Result<Self> {
        match base_url {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Ok(Self::default()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, kind: MediaKind) -> String {
        format!("{}{}", self.base_url, kind.endpoint_path())
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
