//! kennel: sub-breed lookup CLI
//!
//! Looks up each breed through one memoizing source, so a breed named
//! twice on the command line is only fetched once.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kennel::{BreedSource, CachingBreedSource, Config, DogApiSource};

/// Kennel CLI
#[derive(Parser)]
#[command(name = "kennel")]
#[command(version = kennel::PKG_VERSION)]
#[command(about = "List dog sub-breeds from the dog.ceo API")]
struct Args {
    /// Path to configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// API base URL (overrides the config file)
    #[arg(long, env = "KENNEL_BASE_URL")]
    base_url: Option<String>,

    /// Request timeout in seconds (overrides the config file)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Print a single JSON document instead of one line per breed
    #[arg(long)]
    json: bool,

    /// Breeds to look up, in order
    #[arg(required = true)]
    breeds: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Initialise tracing (default: warn for CLI; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(base_url) = args.base_url {
        config.api.base_url = base_url;
    }
    if let Some(timeout_secs) = args.timeout_secs {
        config.api.timeout_secs = timeout_secs;
    }

    let source = CachingBreedSource::new(DogApiSource::from_config(&config.api)?);
    info!(
        base_url = %source.inner().base_url(),
        breeds = args.breeds.len(),
        "looking up breeds"
    );

    let mut results = BTreeMap::new();
    let mut errors = BTreeMap::new();
    for breed in &args.breeds {
        match source.lookup(breed).await {
            Ok(sub_breeds) => {
                if !args.json {
                    println!("{breed}: {}", format_sub_breeds(&sub_breeds));
                }
                results.insert(breed.clone(), sub_breeds);
            }
            Err(e) => {
                if !args.json {
                    println!("{breed}: error: {e}");
                }
                errors.insert(breed.clone(), e.to_string());
            }
        }
    }

    if args.json {
        let report = serde_json::json!({
            "results": results,
            "errors": errors,
            "calls_made": source.calls_made(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        eprintln!("upstream calls: {}", source.calls_made());
    }

    Ok(if errors.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn format_sub_breeds(sub_breeds: &[String]) -> String {
    if sub_breeds.is_empty() {
        "(no sub-breeds)".to_string()
    } else {
        sub_breeds.join(", ")
    }
}
