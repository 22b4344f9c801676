//! Sparky — ducky script to Digispark sketch converter.
//!
//! # Usage
//!
//! ```text
//! sparky [OPTIONS] [INPUT]
//!
//! Arguments:
//!   [INPUT]  Ducky script to convert; omit or use `-` for standard input
//!
//! Options:
//!   -o, --output <PATH>        Save the sketch here instead of printing it
//!       --format <FORMAT>      Extension for an output path without one [ino, txt]
//!       --layout <TAG>         Keyboard layout tag written into the header
//!       --sketch-name <NAME>   Sketch name
//!       --strict               Reject unmapped characters, keys and delays
//!       --config <PATH>        Config file [env: SPARKY_CONFIG]
//! ```
//!
//! Flags override the config file, which overrides the built-in defaults.
//! Logs go to standard error so that the sketch on standard output can be
//! redirected.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sparky_cli::application::convert_script::ConvertScriptUseCase;
use sparky_cli::infrastructure::sketch_file::{read_script, SketchFormat};
use sparky_cli::infrastructure::storage::config::{load_config, read_config, AppConfig};
use sparky_core::FallbackPolicy;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Convert ducky script into an Arduino sketch for the Digispark.
#[derive(Debug, Parser)]
#[command(
    name = "sparky",
    about = "Convert ducky script into an Arduino (.ino) sketch for the Digispark",
    version
)]
struct Cli {
    /// Ducky script to convert.  Omit or pass `-` to read standard input.
    input: Option<PathBuf>,

    /// Save the sketch to this file instead of printing it.
    ///
    /// A path without an extension gets the extension of `--format`.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Extension used when `--output` has none.
    #[arg(long, value_enum)]
    format: Option<SketchFormat>,

    /// Keyboard layout tag written into the sketch header (e.g. US, DE, FR, GB).
    ///
    /// Cosmetic only: keycodes always follow the US layout.
    #[arg(long)]
    layout: Option<String>,

    /// Sketch name.
    #[arg(long)]
    sketch_name: Option<String>,

    /// Fail on unmapped characters, keys, modifiers and malformed delays
    /// instead of substituting defaults.
    #[arg(long)]
    strict: bool,

    /// Config file to use instead of the platform default.
    #[arg(long, env = "SPARKY_CONFIG")]
    config: Option<PathBuf>,
}

impl Cli {
    /// Loads the config file named by `--config`, or the default one.
    fn load_config(&self) -> anyhow::Result<AppConfig> {
        match &self.config {
            Some(path) => read_config(path)
                .with_context(|| format!("loading config file {}", path.display())),
            None => load_config().context("loading default config file"),
        }
    }

    /// Overlays the command-line flags on `config`.
    fn apply_to(&self, config: &mut AppConfig) {
        if let Some(layout) = &self.layout {
            config.translator.layout = layout.clone();
        }
        if let Some(name) = &self.sketch_name {
            config.translator.sketch_name = name.clone();
        }
        if self.strict {
            config.translator.fallback = FallbackPolicy::Strict;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = cli.load_config()?;
    cli.apply_to(&mut config);

    // `RUST_LOG` wins over the config file's log level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.output.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let script = read_script(cli.input.as_deref()).context("reading ducky script")?;
    let use_case = ConvertScriptUseCase::new(config.translator);

    match &cli.output {
        Some(path) => {
            use_case
                .convert_to_file(&script, path, config.output.format)
                .with_context(|| format!("converting to {}", path.display()))?;
        }
        None => {
            let sketch = use_case.convert(&script).context("converting script")?;
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{sketch}").context("writing sketch to standard output")?;
        }
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
