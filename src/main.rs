use clap::Parser;
use authentic_eye::{cli, config, error, http_client, logging, predict, terminal};
use authentic_eye_common::MediaKind;
use cli::{Cli, Commands};
use config::Config;
use error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load(cli.base_url.as_deref())?;

    match cli.command {
        Commands::Predict { file, kind, json } => {
            let client = http_client::HttpClient::new(config.service.clone());

            if !json {
                println!("👁 authentic-eye - 判定\n");
                println!("- 送信中: {} → {}", file.display(), config.service.base_url());
                println!("  Be patient, It may take a while...\n");
            }

            let prediction =
                predict::predict_file(&file, kind, &client, &terminal::TerminalNotifier).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&prediction)?);
            } else {
                println!("\nPrediction Result: {}", prediction.text);
            }
        }

        Commands::Endpoints => {
            for kind in MediaKind::ALL {
                println!("{:<6} {}", kind.as_str(), config.service.endpoint(kind));
            }
        }
    }

    Ok(())
}
