use anyhow::Context;
use clap::Parser;
use lsclip::config::Config;
use lsclip::error::Error;
use lsclip::host;
use lsclip::transform::{BareCite, LineEnding};
use std::io::{Read, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Rewrite Learning Standards LaTeX into WeBWorK-ready PGML.
#[derive(Parser, Debug)]
#[command(name = "lsclip", version, about)]
struct Cli {
    /// Text to transform. Read from stdin when neither this nor --input is given.
    text: Option<String>,

    /// Read the text from a file.
    #[arg(short, long, conflicts_with = "text")]
    input: Option<PathBuf>,

    /// Keep the character that follows a bare \MathCite{key}.
    #[arg(long)]
    keep_cite_char: bool,

    /// End the header with LF instead of CRLF.
    #[arg(long)]
    lf: bool,

    /// Config file to use instead of the default location.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log each transformation step to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(cli: &Cli) -> lsclip::Result<String> {
    if let Some(text) = &cli.text {
        return Ok(text.clone());
    }

    if let Some(path) = &cli.input {
        return std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        });
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(Error::Stdin)?;
    Ok(buffer)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::resolve(cli.config.as_deref()).context("Failed to load config")?;
    let mut options = config.options();
    if cli.keep_cite_char {
        options.bare_cite = BareCite::Keep;
    }
    if cli.lf {
        options.line_ending = LineEnding::Lf;
    }

    let text = read_input(&cli).context("Failed to read input")?;
    info!(len = text.len(), ?options, "transforming");

    let output = host::run_macro_with(Some(&text), &options).into_trigger_text();

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write output")?;

    Ok(())
}
