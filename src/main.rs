use anyhow::Result;
use clap::Parser;
use cookiefinder::{config, llm, tui};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "cookiefinder")]
#[command(about = "Look up what a browser cookie is for")]
#[command(version)]
struct Args {
    /// Path to a config file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (ignore if missing)
    let _ = dotenvy::dotenv();

    // Initialize logging; the TUI owns the terminal so prefer a log file
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cookiefinder=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(log_writer()),
        )
        .init();

    let args = Args::parse();

    // Load configuration
    let config = config::load_config(args.config.as_deref())?;
    if config.llm.api_key.is_none() {
        tracing::warn!(
            "{} is not set; lookups will fail until it is",
            config.llm.api_key_env()
        );
    }

    let client = llm::create_client(&config)?;
    tracing::info!(
        "Using {} model {}",
        config.llm.provider,
        config.llm.model()
    );

    tui::run(&config, client.as_ref()).await
}

fn log_writer() -> BoxMakeWriter {
    let file = directories::ProjectDirs::from("", "", "cookiefinder").and_then(|dirs| {
        let dir = dirs.data_dir();
        std::fs::create_dir_all(dir).ok()?;
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join("cookiefinder.log"))
            .ok()
    });

    match file {
        Some(file) => BoxMakeWriter::new(Mutex::new(file)),
        None => BoxMakeWriter::new(std::io::stderr),
    }
}
