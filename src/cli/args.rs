//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: Find hard-coded template text, optionally replace it with `$t()` calls
//! - `init`: Initialize a `.localizerc.json` configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Scan(args)) => args.common.verbose,
            Some(Command::Init(_)) | None => false,
        }
    }
}

/// Common arguments shared by commands that read configuration.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Configuration file (default: nearest .localizerc.json)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct ScanArgs {
    /// Directory to scan for template files
    pub path: PathBuf,

    /// Replace found text with $t() calls (dry-run unless --write is given)
    #[arg(long)]
    pub replace: bool,

    /// Apply replacements to files and write the locale file
    #[arg(long, requires = "replace")]
    pub write: bool,

    /// Locale JSON file to merge new keys into (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Maximum slug length in characters (overrides config file)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub max_slug: Option<u16>,

    /// Skip text made only of symbols and punctuation
    #[arg(long)]
    pub skip_symbols: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Parser)]
pub struct InitArgs {
    /// Directory to create the configuration file in
    #[arg(default_value = ".")]
    pub dir: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Find un-localized template text and optionally replace it
    Scan(ScanArgs),
    /// Initialize a new .localizerc.json configuration file
    Init(InitArgs),
}
