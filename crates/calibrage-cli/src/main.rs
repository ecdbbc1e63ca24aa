use anyhow::{Context, Result, bail};
use calibrage::{CatalogOptions, PaginationQuery, PaginationReport, constants};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "calib", about = "Editorial pagination estimator", version)]
struct Cli {
    /// Collection catalog (CSV)
    #[arg(short, long, global = true, default_value = constants::DEFAULT_CATALOG_FILE)]
    catalog: PathBuf,

    /// Catalog options file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Header of the collection name column
    #[arg(long, global = true)]
    collection_column: Option<String>,

    /// Header of the characters-per-page column
    #[arg(long, global = true)]
    density_column: Option<String>,

    /// Field delimiter of the catalog file
    #[arg(long, global = true)]
    delimiter: Option<char>,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the collections of the catalog
    Collections,

    /// Estimate the page count of a manuscript
    Estimate {
        /// Manuscript character count
        #[arg(
            short = 'n',
            long,
            value_parser = clap::value_parser!(u64).range(0..=constants::MAX_CHARACTER_COUNT)
        )]
        characters: u64,

        /// Collection name (defaults to the first one in the catalog)
        #[arg(long)]
        collection: Option<String>,

        /// Show collection density and theoretical page count
        #[arg(long)]
        details: bool,

        /// Print the result as JSON
        #[arg(long, conflicts_with = "details")]
        json: bool,
    },
}

impl Cli {
    async fn catalog_options(&self) -> Result<CatalogOptions> {
        let mut options = match &self.config {
            Some(path) => CatalogOptions::load(path)
                .await
                .with_context(|| format!("Unable to read options from '{}'", path.display()))?,
            None => CatalogOptions::default(),
        };

        if let Some(column) = &self.collection_column {
            options.collection_column = column.clone();
        }
        if let Some(column) = &self.density_column {
            options.density_column = column.clone();
        }
        if let Some(delimiter) = self.delimiter {
            options.delimiter = delimiter;
        }

        options.validate()?;
        Ok(options)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = cli.catalog_options().await?;
    let catalog = calibrage::load_catalog(&cli.catalog, &options)
        .await
        .with_context(|| format!("Unable to load '{}'", cli.catalog.display()))?;

    match cli.command {
        Commands::Collections => {
            for entry in &catalog {
                println!("{}\t{}", entry.name, entry.density.trunc() as u64);
            }
        }

        Commands::Estimate {
            characters,
            collection,
            details,
            json,
        } => {
            let entry = match &collection {
                Some(name) => match catalog.get(name.trim()) {
                    Some(entry) => entry,
                    None => bail!(
                        "Unknown collection '{}'. Available: {}",
                        name,
                        catalog.names().collect::<Vec<_>>().join(", ")
                    ),
                },
                None => catalog
                    .first()
                    .context("Catalog has no collections")?,
            };

            if json {
                let query = PaginationQuery::new(characters, entry.name.clone());
                let result = calibrage::estimate(&catalog, &query)?;
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }

            let report = PaginationReport::new(entry, characters)?;
            println!("{}", report.headline());
            if report.result.is_some() {
                println!("{}", report.collection_line());
            }
            if details {
                println!();
                for line in report.details() {
                    println!("  {}", line);
                }
            }
        }
    }

    Ok(())
}
