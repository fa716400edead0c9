use authentic_eye_common::MediaKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "authentic-eye")]
#[command(about = "画像・動画のディープフェイク判定クライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 推論サービスのベースURL（既定: 環境変数 AUTHENTIC_EYE_API_URL → http://localhost:8000）
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ファイルを送信して判定結果を表示
    Predict {
        /// 画像または動画ファイル
        #[arg(required = true)]
        file: PathBuf,

        /// メディア種別 (image/video)。省略時は拡張子から判定
        #[arg(short, long)]
        kind: Option<MediaKind>,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 送信先のエンドポイントを表示
    Endpoints,
}
