mod check;
mod completions;
mod generate;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use companion_manifest::{CONFIG_FILE, CompanionToml};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use tracing_subscriber::{EnvFilter, prelude::*};

use crate::ops::Settings;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for companion_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "companion")]
#[command(version)]
#[command(about = "Generate getter/setter companion types for annotated structs")]
pub(crate) struct Cli {
    /// Log pipeline progress (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        init_tracing(self.verbose);

        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Discover annotated structs and write their companions
    Generate(GenerateCommand),

    /// Discover and validate without writing anything
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Config and source selection shared by `generate` and `check`.
#[derive(Args)]
pub(crate) struct SourceArgs {
    /// Path to companion.toml (defaults to ./companion.toml; optional)
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Source directory to scan (overrides [generator].source)
    #[arg(short, long)]
    pub source: Option<PathBuf>,
}

impl SourceArgs {
    /// Load the config file and apply command-line overrides.
    pub fn settings(&self, output: Option<&PathBuf>) -> Settings {
        let file = CompanionToml::load_or_default(&self.config).unwrap_or_exit();
        let mut settings = Settings::from_file(&file);
        if let Some(source) = &self.source {
            settings.source = source.clone();
        }
        if let Some(output) = output {
            settings.output = output.clone();
        }
        settings
    }
}

/// `RUST_LOG` wins; otherwise `-v` picks the level.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
