use std::{fs, path::Path};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::{args::InitArgs, exit_status::ExitStatus, report::SUCCESS_MARK};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write a default `.localizerc.json` into the target directory.
///
/// An existing config file is never overwritten.
pub fn init(args: InitArgs) -> Result<ExitStatus> {
    let config_path = args.dir.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        eprintln!(
            "{} {} already exists",
            "error:".bold().red(),
            config_path.display()
        );
        return Ok(ExitStatus::Error);
    }

    write_default_config(&config_path)?;
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", config_path.display()).green()
    );
    println!(
        "Run {} to find un-localized text.",
        "localize scan <PATH>".cyan()
    );

    Ok(ExitStatus::Success)
}

fn write_default_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }
    fs::write(path, format!("{}\n", default_config_json()?))
        .with_context(|| format!("Failed to write file: {}", path.display()))
}
