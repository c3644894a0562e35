mod commands;
mod render;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "moodmap")]
#[command(about = "Find places nearby that fit your mood")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve a place name to coordinates
    Resolve {
        /// Free-text search, e.g. "Paris" or "Ferry Building, San Francisco"
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
        #[arg(long)]
        json: bool,
    },
    /// List places for a mood around a point (default: configured centre)
    Discover {
        /// work, date, quick_bite, or budget (anything else means work)
        #[arg(long)]
        mood: String,
        #[arg(long, requires = "lng", allow_negative_numbers = true)]
        lat: Option<f64>,
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lng: Option<f64>,
        #[arg(long)]
        json: bool,
    },
    /// Search for a location, then list places for a mood around it
    Explore {
        /// Location to search for before discovering
        #[arg(long)]
        near: Option<String>,
        #[arg(long)]
        mood: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Count places for every mood around one location
    Survey {
        #[arg(long)]
        near: Option<String>,
        /// Maximum discovery requests in flight at once
        #[arg(long, default_value_t = 2)]
        concurrency: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = moodmap_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Resolve { query, json } => {
            commands::run_resolve(&config, &query.join(" "), json).await?;
        }
        Commands::Discover {
            mood,
            lat,
            lng,
            json,
        } => {
            commands::run_discover(&config, &mood, lat.zip(lng), json).await?;
        }
        Commands::Explore { near, mood, json } => {
            commands::run_explore(&config, near.as_deref(), mood.as_deref(), json).await?;
        }
        Commands::Survey { near, concurrency } => {
            commands::run_survey(&config, near.as_deref(), concurrency).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests;
