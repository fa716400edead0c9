//! Authentic-Eye Common Library
//!
//! ブラウザ版(WASM)とネイティブ版で共有するアップロードセッションと型

pub mod client;
pub mod config;
pub mod error;
pub mod media;
pub mod notify;
pub mod render;
pub mod session;
pub mod verdict;

pub use client::{InferenceClient, PredictionRequest};
pub use config::{ServiceConfig, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use media::{InMemoryReader, LoadedMedia, MediaFile, MediaKind, PreviewReader, PreviewSource};
pub use notify::{Notification, Notifier};
pub use render::{RenderState, View};
pub use session::{Mode, SelectionTicket, UploadSession};
pub use verdict::{decode_prediction, Verdict, VerdictLabel};
