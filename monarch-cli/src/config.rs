use anyhow::{Context, Result};
use monarch_ingest::ExtractOptions;
use monarch_ingest::parsers::DEFAULT_SUMMARY_WINDOW;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::state::{ensure_monarch_home, monarch_home};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub extract: ExtractSection,
    #[serde(default)]
    pub log: LogSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractSection {
    /// Characters after the ACCOUNT SUMMARY heading searched for summary fields
    #[serde(default = "default_summary_window")]
    pub summary_window: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogSection {
    /// tracing filter directive, used when RUST_LOG is unset
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_summary_window() -> usize {
    DEFAULT_SUMMARY_WINDOW
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for ExtractSection {
    fn default() -> Self {
        Self {
            summary_window: default_summary_window(),
        }
    }
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl Config {
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            summary_window: self.extract.summary_window,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(monarch_home()?.join("config.toml"))
}

pub fn parse_config(s: &str) -> Result<Config> {
    toml::from_str(s).context("parse config.toml")
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s)
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = ensure_monarch_home()?.join("config.toml");
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}
