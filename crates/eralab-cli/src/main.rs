use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use eralab_infrastructure::EralabPaths;

mod commands;

#[derive(Parser)]
#[command(name = "eralab")]
#[command(about = "ERA-Lab research dataset catalog", long_about = None)]
struct Cli {
    /// Directory holding the catalog data (defaults to the user config dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog entries, optionally filtered by free text
    List {
        /// Case-insensitive match over title, category and authors
        #[arg(long, short)]
        query: Option<String>,
    },
    /// Add a new dataset entry, optionally attaching a file
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        authors: Option<String>,
        /// Publication year; non-numeric input is stored as absent
        #[arg(long)]
        year: Option<String>,
        #[arg(long)]
        summary: Option<String>,
        /// File to attach, stored inline in the catalog
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Show the details of one entry
    Show { id: String },
    /// Export the whole catalog as a JSON backup file
    Export {
        /// Output path (defaults to era_lab_repository_backup.json)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Replace the whole catalog from a JSON backup file
    Import { path: PathBuf },
    /// Reset the local catalog to the sample entries
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let paths = EralabPaths::new(cli.data_dir.as_deref())?;

    match cli.command {
        Commands::List { query } => commands::list::run(&paths, query.as_deref()).await?,
        Commands::Add {
            title,
            category,
            authors,
            year,
            summary,
            file,
        } => {
            commands::add::run(
                &paths,
                commands::add::AddArgs {
                    title,
                    category,
                    authors,
                    year,
                    summary,
                    file,
                },
            )
            .await?
        }
        Commands::Show { id } => commands::show::run(&paths, &id).await?,
        Commands::Export { out } => commands::snapshot::export(&paths, out.as_deref()).await?,
        Commands::Import { path } => commands::snapshot::import(&paths, &path).await?,
        Commands::Clear { yes } => commands::clear::run(&paths, yes).await?,
    }

    Ok(())
}
