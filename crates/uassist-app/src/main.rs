//! Utility Assistant front-end binary.

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use uassist_app::screens;
use uassist_app::{AppArgs, AppCommand, AppConfig, AppResult, FileCapture, ScreenSession};
use uassist_ml_client::MlClient;
use uassist_models::{ActivityLog, Feature, NewsArticle};
use uassist_speech::{EngineSpeaker, NullSink, SpeechSink};

#[tokio::main]
async fn main() {
    // Install rustls crypto provider (required for TLS/HTTPS)
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with colored output for dev, JSON for production
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = EnvFilter::from_default_env()
        .add_directive("uassist=info".parse().unwrap());

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }

    let args = AppArgs::parse();
    let config = AppConfig::from_env().with_args(&args);

    if let Err(e) = run(args, config).await {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(args: AppArgs, config: AppConfig) -> AppResult<()> {
    let client = MlClient::new(config.ml.clone())?;

    let speech: Box<dyn SpeechSink> = if config.speech.enabled {
        match EngineSpeaker::new(config.speech.clone()) {
            Ok(speaker) => Box::new(speaker),
            Err(e) => {
                info!("Speech output unavailable: {}", e);
                Box::new(NullSink)
            }
        }
    } else {
        Box::new(NullSink)
    };

    let mut activity = ActivityLog::new(config.activity_limit);

    let lines = match args.command {
        AppCommand::NewsVerify {
            content,
            content_file,
            source,
        } => {
            let content = match (content, content_file) {
                (Some(content), _) => content,
                (None, Some(path)) => tokio::fs::read_to_string(path).await?,
                (None, None) => String::new(),
            };
            let mut session = ScreenSession::new();
            screens::news::run(
                &client,
                &mut session,
                &mut activity,
                NewsArticle::new(content, source),
            )
            .await?
        }
        AppCommand::ReadText { image } => {
            let capture = FileCapture::new(image);
            let mut session = ScreenSession::new();
            screens::text_reader::run(
                &client,
                speech.as_ref(),
                &mut session,
                &mut activity,
                &capture,
            )
            .await?
        }
        AppCommand::ClassifyWound { image } => {
            let capture = FileCapture::new(image);
            let mut session = ScreenSession::new();
            screens::wound::run(
                &client,
                speech.as_ref(),
                &mut session,
                &mut activity,
                &capture,
            )
            .await?
        }
        AppCommand::IdentifyObjects { image } => {
            let capture = FileCapture::new(image);
            let mut session = ScreenSession::new();
            screens::objects::run(
                &client,
                speech.as_ref(),
                &mut session,
                &mut activity,
                &capture,
            )
            .await?
        }
        AppCommand::Features => Feature::ALL
            .iter()
            .map(|feature| format!("{:<24}{}", feature.title(), feature.blurb()))
            .collect(),
    };

    for line in lines {
        println!("{}", line);
    }

    Ok(())
}
