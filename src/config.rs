use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::analyzer::node::DEFAULT_MANIFEST;

/// File name of the generated report when no output path is configured.
pub const DEFAULT_REPORT_NAME: &str = "list.json";

/// Root configuration structure, deserialized from `.vega-deps/config.toml`.
#[derive(Debug, Deserialize, PartialEq)]
pub struct Config {
    /// Directory to scan. Defaults to the working directory.
    ///
    /// A relative path is resolved against the directory that owns the
    /// config file (see [`load_config`]).
    #[serde(default)]
    pub root: Option<PathBuf>,
    /// Report destination. Defaults to `list.json` next to the executable.
    /// Relative paths resolve like `root`.
    #[serde(default)]
    pub output: Option<PathBuf>,
    /// Manifest file that marks a project directory.
    #[serde(default = "default_manifest")]
    pub manifest: String,
}

fn default_manifest() -> String {
    DEFAULT_MANIFEST.to_string()
}

impl Config {
    fn resolve_relative_to(mut self, base: &Path) -> Self {
        self.root = self.root.map(|p| base.join(p));
        self.output = self.output.map(|p| base.join(p));
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            root: None,
            output: None,
            manifest: default_manifest(),
        }
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<work_dir>/.vega-deps/config.toml`
/// 3. `~/.config/vega-deps/config.toml`
/// 4. Built-in [`Config::default`]
///
/// Relative `root` / `output` values resolve against the directory holding
/// the `--config` file, against `work_dir` for the local file, and against
/// the home directory for the global file.
pub fn load_config(work_dir: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        return Ok(read_config(path)?.resolve_relative_to(base));
    }

    let local_config = work_dir.join(".vega-deps").join("config.toml");
    if local_config.exists() {
        return Ok(read_config(&local_config)?.resolve_relative_to(work_dir));
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home.join(".config").join("vega-deps").join("config.toml");
        if home_config.exists() {
            return Ok(read_config(&home_config)?.resolve_relative_to(&home));
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("invalid config {}", path.display()))
}

/// `list.json` in the directory holding the running executable.
pub fn default_output_path() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("cannot locate the running executable")?;
    let dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(dir.join(DEFAULT_REPORT_NAME))
}
