use clap::{Parser, Subcommand};
use quakemap_core::Timeframe;
use quakemap_search::SearchService;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "quakemap")]
#[command(about = "Search recent USGS earthquakes by place or country")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the full feed for a timeframe.
    Feed {
        #[arg(long, default_value = "day")]
        timeframe: Timeframe,
    },
    /// Search near a place, falling back to text matching if it cannot be geocoded.
    Search {
        query: String,
        /// Search radius in kilometres; defaults to `QUAKEMAP_DEFAULT_RADIUS_KM`.
        #[arg(long)]
        radius: Option<f64>,
        #[arg(long, default_value = "month")]
        timeframe: Timeframe,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Search by country name or a known alias.
    Country {
        query: String,
        #[arg(long, default_value = "month")]
        timeframe: Timeframe,
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = quakemap_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let lexicon = quakemap_core::load_lexicon(config.lexicon_path.as_deref())?;
    let service = SearchService::from_config(&config, lexicon)?;

    match cli.command {
        Commands::Feed { timeframe } => print_json(&service.fetch_all(timeframe).await?),
        Commands::Search {
            query,
            radius,
            timeframe,
            limit,
        } => {
            let radius_km = radius.unwrap_or(config.default_radius_km);
            let mut result = service
                .search_by_location(&query, radius_km, timeframe)
                .await?;
            if let Some(limit) = limit {
                result = result.truncate(limit);
            }
            print_json(&result)
        }
        Commands::Country {
            query,
            timeframe,
            limit,
        } => print_json(
            &service
                .search_by_country(&query, timeframe, limit)
                .await?,
        ),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests;
