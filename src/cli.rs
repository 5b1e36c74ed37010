use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::info;
use rgenius::clients::errors::Result;
use rgenius::{Aggregator, Format, GeniusClient};

#[derive(Parser)]
#[command(name = "rgenius")]
#[command(version, about = "Look up artists on Genius", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up one row per search term
    Artists {
        /// Artist names to search for
        #[arg(required = true)]
        terms: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: Format,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Genius access token, defaults to GENIUS_ACCESS_TOKEN
        #[arg(long)]
        token: Option<String>,
    },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Artists {
            terms,
            format,
            output,
            token,
        } => {
            lookup_artists(&terms, format, output, token).await?;
        }
    }
    Ok(())
}

async fn lookup_artists(
    terms: &[String],
    format: Format,
    output: Option<PathBuf>,
    token: Option<String>,
) -> Result<()> {
    let client = GeniusClient::try_from_env(token)?;

    info!("Looking up {} artists on Genius ...", terms.len());
    let aggregator = Aggregator::new(client);
    let rows = aggregator.lookup_many(terms).await?;
    let found = rows.iter().filter(|r| r.artist_id.is_some()).count();

    match output {
        Some(path) => {
            format.write(&rows, BufWriter::new(File::create(&path)?))?;
            info!("Wrote {} rows to {}", rows.len(), path.display());
        }
        None => format.write(&rows, io::stdout().lock())?,
    }

    info!("Found {found} of {} artists", rows.len());
    Ok(())
}
