use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing::info;
use uuid::Uuid;
use wine_catalog::config::Config;
use wine_catalog::{interpret_file, logging, output};

#[derive(Parser)]
#[command(name = "wine-catalog")]
#[command(about = "Normalize a wine catalog CSV into a timestamped JSON document")]
#[command(version)]
struct Cli {
    /// Catalog file to import
    file: PathBuf,

    /// Directory for the JSON document (overrides config)
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Print the JSON document to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Emit compact JSON
    #[arg(long)]
    compact: bool,

    /// Explicit config file (skips the default search)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_with_file(path)?,
        None => Config::load()?,
    };
    if let Some(dir) = cli.out_dir {
        config.output.directory = dir;
    }
    let pretty = config.output.json_pretty && !cli.compact;

    let _guard = logging::init_logging(&config);

    let span = tracing::info_span!(
        "import",
        run_id = %Uuid::new_v4(),
        file = %cli.file.display()
    );
    let _enter = span.enter();

    let entry_time = Utc::now();
    let records = interpret_file(&cli.file, entry_time)
        .with_context(|| format!("failed to import {}", cli.file.display()))?;
    info!(records = records.len(), "catalog imported");

    if cli.stdout {
        println!("{}", output::to_json(&records, pretty)?);
        return Ok(());
    }

    let path = output::output_path(&config.output, entry_time);
    output::write_records(&path, &records, pretty, config.output.create_directory)?;
    println!("{}", path.display());

    Ok(())
}
