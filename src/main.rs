use anyhow::Result;
use clap::Parser;
use console::style;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use yt_whisper::cli::{Cli, Commands};
use yt_whisper::config::Config;
use yt_whisper::extractors;
use yt_whisper::output;
use yt_whisper::storage;
use yt_whisper::store::TranscriptStore;
use yt_whisper::transcribe::TranscriptionPipeline;
use yt_whisper::utils::{self, ToolStatus};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_filter = if cli.verbose {
        "yt_whisper=debug"
    } else {
        "yt_whisper=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // One-time legacy database migration, invoked explicitly at startup
    if storage::migrate_legacy_database()? {
        tracing::info!("Migrated legacy database into the application data directory");
    }

    let config = Config::load().await?;

    let db_path = match cli.db.or_else(|| config.storage.db_path.clone()) {
        Some(path) => path,
        None => storage::default_db_path()?,
    };
    let store = TranscriptStore::new(db_path);

    match cli.command {
        Commands::Transcribe { url, force } => {
            let missing = utils::check_dependencies(&config).await;
            if !missing.is_empty() {
                eprintln!("Warning: some external tools were not found:");
                for dep in &missing {
                    eprintln!("  - {}", dep);
                }
            }

            // Serve from the cache when this video was already transcribed
            if !force {
                if let Some(id) = extractors::extract_video_id(&url) {
                    if let Some(record) = store.get(&id)? {
                        tracing::info!("Found cached transcript for video ID: {}", id);
                        output::print_record(&record);
                        return Ok(());
                    }
                }
            }

            tracing::info!("Starting transcription for URL: {}", url);
            let pipeline = TranscriptionPipeline::new(&config);
            let record = pipeline.run(&url, force).await?;
            store.save(&record)?;
            output::print_record(&record);
        }

        Commands::Get { id } => match store.get(&id)? {
            Some(record) => output::print_record(&record),
            None => println!("No transcript found for video ID: {}", id),
        },

        Commands::List { limit } => {
            let records = store.list_recent(limit)?;
            output::print_recent(&records);
        }

        Commands::Config => {
            config.display();
        }

        Commands::Doctor => {
            print_tool_status("yt-dlp", &config.tools.yt_dlp_path).await;
            print_tool_status("whisper", &config.tools.whisper_path).await;
        }
    }

    Ok(())
}

async fn print_tool_status(name: &str, command: &str) {
    match utils::probe_tool(command).await {
        ToolStatus::Available => {
            println!("{} {} ({})", style("ok").green(), name, command);
        }
        ToolStatus::Missing => {
            println!(
                "{} {} ({}) - not installed",
                style("missing").red(),
                name,
                command
            );
        }
        ToolStatus::Failed(code) => {
            let code = code.map_or_else(|| "unknown".to_string(), |c| c.to_string());
            println!(
                "{} {} ({}) - version check exited with status {}",
                style("failed").yellow(),
                name,
                command,
                code
            );
        }
    }
}
