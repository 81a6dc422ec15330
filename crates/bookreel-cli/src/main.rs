mod extract;
mod profile;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "bookreel-cli")]
#[command(about = "Extract book listing metadata for carousel projects")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch one or more listing pages and print their book data as JSON
    Extract {
        /// Listing URLs (`https://ridero.ru/books/<slug>/`)
        #[arg(required = true)]
        urls: Vec<String>,

        /// Fail on the first fetch error instead of printing the placeholder record
        #[arg(long)]
        strict: bool,

        /// Maximum number of listing pages fetched at once
        #[arg(long, default_value_t = 4)]
        concurrency: usize,
    },
    /// Extract book data from a saved listing page
    Parse {
        /// Path to the saved HTML document
        file: PathBuf,

        /// Original page URL, used to resolve a relative cover image
        #[arg(long)]
        url: Option<String>,
    },
    /// Print the active extraction profile as YAML
    Profile,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = bookreel_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Extract {
            urls,
            strict,
            concurrency,
        }) => extract::run_extract(&config, &urls, strict, concurrency).await?,
        Some(Commands::Parse { file, url }) => {
            extract::run_parse(&config, &file, url.as_deref())?;
        }
        Some(Commands::Profile) => profile::run_profile(&config)?,
        None => println!("bookreel-cli: run with --help to list commands"),
    }

    Ok(())
}
