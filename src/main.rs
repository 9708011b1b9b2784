use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use clap::Parser as ClapParser;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use lexan::config::{Config, OutputFormat};
use lexan::error::{LexanError, Result};
use lexan::report::Report;
use lexan::Lexer;

#[derive(ClapParser)]
#[command(author, version, about = "Lexical analyzer for begin/end block programs")]
struct Cli {
    /// Source file to scan
    file: PathBuf,
    /// Print every token as it is scanned
    #[arg(short, long)]
    verbose: bool,
    /// List the distinct identifiers
    #[arg(long)]
    ids: bool,
    /// List the distinct integer constants
    #[arg(long)]
    iconsts: bool,
    /// List the distinct real constants
    #[arg(long)]
    rconsts: bool,
    /// List the distinct string constants
    #[arg(long)]
    sconsts: bool,
    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
    /// Path to a JSON config file
    #[arg(short, long, env = "LEXAN_CONFIG")]
    config: Option<PathBuf>,
    /// Tracing filter, e.g. `lexan=trace`
    #[arg(long, env = "LEXAN_LOG")]
    log_level: Option<String>,
}

impl Cli {
    /// Flags only ever switch options on; the format flag replaces the file's.
    fn apply(&self, mut config: Config) -> Config {
        config.verbose |= self.verbose;
        config.ids |= self.ids;
        config.iconsts |= self.iconsts;
        config.rconsts |= self.rconsts;
        config.sconsts |= self.sconsts;
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(level) = &self.log_level {
            config.log_level = Some(level.clone());
        }
        config
    }
}

fn init_logging(filter: Option<&str>) -> Result<()> {
    let filter = EnvFilter::new(filter.unwrap_or("warn"));
    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| LexanError::Logging(e.to_string()))
}

fn scan_file(path: &Path) -> Result<Report> {
    let file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        info!(path = %path.display(), "empty input");
        return Ok(Report::default());
    }

    let mut lexer = Lexer::from_reader(file)?;
    let report = Report::collect(&mut lexer);
    debug!(lines = report.lines, tokens = report.tokens, "scan finished");
    Ok(report)
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.apply(Config::load(cli.config.as_deref())?);
    init_logging(config.log_level.as_deref())?;

    let report = scan_file(&cli.file)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match config.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &report.to_json(&config))?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            if config.verbose {
                report.write_tokens(&mut out)?;
            }
            if report.is_ok() {
                report.write_summary(&mut out, &config)?;
            }
        }
    }

    match &report.error {
        Some(item) => Err(LexanError::from_item(item)),
        None => Ok(()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
