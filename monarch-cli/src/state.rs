use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$MONARCH_HOME`, or `~/.monarch`.
pub fn monarch_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("MONARCH_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".monarch"))
}

pub fn ensure_monarch_home() -> Result<PathBuf> {
    let dir = monarch_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
