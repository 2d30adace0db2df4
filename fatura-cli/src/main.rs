use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fatura_core::{Transaction, consolidate, render_report};
use tracing_subscriber::EnvFilter;

mod ingest;

#[derive(Parser, Debug)]
#[command(name = "fatura", version, about = "Credit-card statement consolidator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print monthly spend totals across every statement in a directory
    Report {
        /// Directory holding statement files (Nubank CSV/PDF, PicPay PDF)
        #[arg(long, default_value = "dados")]
        data_dir: PathBuf,
    },

    /// Merge every statement into one date-ordered CSV
    Consolidate {
        /// Directory holding statement files (Nubank CSV/PDF, PicPay PDF)
        #[arg(long, default_value = "dados")]
        data_dir: PathBuf,

        /// Output CSV path
        #[arg(long, default_value = "gastos_consolidados.csv")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Report { data_dir } => {
            let merged = ingest_merged(&data_dir)?;
            print!("{}", render_report(&merged));
        }

        Command::Consolidate { data_dir, out } => {
            let merged = ingest_merged(&data_dir)?;
            write_csv(&merged, &out)?;
            println!("Wrote {} records to {}", merged.len(), out.display());
        }
    }

    Ok(())
}

fn ingest_merged(data_dir: &Path) -> Result<Vec<Transaction>> {
    let batches = ingest::ingest_dir(data_dir)?;
    if batches.is_empty() {
        println!("No statement files found in {}", data_dir.display());
    }
    Ok(consolidate(batches))
}

fn write_csv(records: &[Transaction], path: &Path) -> Result<()> {
    let mut wtr =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}
