use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, anyhow, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".localizerc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_max_slug", alias = "maxSlugLength")]
    pub max_slug: usize,
    #[serde(default)]
    pub skip_symbol_only: bool,
    #[serde(default)]
    pub ignore_texts: Vec<String>,
}

fn default_ignores() -> Vec<String> {
    vec!["**/node_modules/**".to_string()]
}

fn default_extensions() -> Vec<String> {
    vec!["vue".to_string()]
}

fn default_output() -> String {
    "en.json".to_string()
}

fn default_max_slug() -> usize {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: default_ignores(),
            extensions: default_extensions(),
            output: default_output(),
            max_slug: default_max_slug(),
            skip_symbol_only: false,
            ignore_texts: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid glob patterns in `ignores`, an empty
    /// `extensions` list or a zero `maxSlug`.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
            }
        }

        if self.extensions.is_empty() {
            bail!("'extensions' must list at least one file extension");
        }

        if self.max_slug == 0 {
            bail!("'maxSlug' must be greater than 0");
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// The file the config came from, `None` when using defaults.
    pub source: Option<PathBuf>,
}

/// Load an explicit config file.
pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;
    let config: Config = serde_json::from_str(&content)
        .map_err(|e| anyhow!("Failed to parse config file {}: {}", path.display(), e))?;
    config.validate()?;
    Ok(config)
}

/// Load `explicit` when given, otherwise search upward from `start_dir`.
pub fn load_config(start_dir: &Path, explicit: Option<&Path>) -> Result<ConfigLoadResult> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_config_file(start_dir),
    };

    match path {
        Some(path) => {
            let config = load_config_file(&path)?;
            tracing::debug!(file = %path.display(), "loaded config");
            Ok(ConfigLoadResult {
                config,
                source: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            source: None,
        }),
    }
}
