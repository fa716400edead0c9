//! Authentic-Eye ネイティブクライアント
//!
//! ブラウザ版と同じ UploadSession を reqwest とファイルシステムで動かす

pub mod cli;
pub mod config;
pub mod error;
pub mod http_client;
pub mod logging;
pub mod predict;
pub mod reader;
pub mod terminal;
