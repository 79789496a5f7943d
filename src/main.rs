use std::path::PathBuf;

use clap::Parser;
use regx_report::config::{DEFAULT_INPUT, DEFAULT_OUTPUT_DIR, ReportConfig};
use regx_report::pipeline;
use regx_report::{Result, ToolError};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_tracing()?;

    let config = cli.resolve();
    pipeline::generate_report(&config.input, &config.output)?;
    println!("File successfully created at: {}", config.output.display());
    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| ToolError::Logging(err.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Reshape a before/after metrics export into an annotated RegX comparison workbook."
)]
struct Cli {
    /// Metrics export to read (.csv, .xls or .xlsx).
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Directory receiving the dated report workbook.
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Explicit report path, overriding the dated name.
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn resolve(self) -> ReportConfig {
        match self.output {
            Some(output) => ReportConfig {
                input: self.input,
                output,
            },
            None => ReportConfig::for_today(self.input, &self.output_dir),
        }
    }
}
