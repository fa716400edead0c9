use crate::error::{AuthenticEyeError, Result};
use authentic_eye_common::ServiceConfig;

/// 推論サービスURLの環境変数
pub const API_URL_ENV: &str = "AUTHENTIC_EYE_API_URL";

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub service: ServiceConfig,
}

impl Config {
    /// --base-url > 環境変数 > 既定値
    pub fn load(base_url_flag: Option<&str>) -> Result<Self> {
        let env_value = std::env::var(API_URL_ENV).ok();
        Self::resolve(base_url_flag, env_value.as_deref())
    }

    pub fn resolve(base_url_flag: Option<&str>, env_value: Option<&str>) -> Result<Self> {
        let non_empty = |v: &&str| !v.trim().is_empty();
        let chosen = base_url_flag.filter(non_empty).or(env_value.filter(non_empty));

        let service = ServiceConfig::from_optional(chosen)
            .map_err(|e| AuthenticEyeError::Config(e.to_string()))?;
        Ok(Self { service })
    }
}
