use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$MUTASI_HOME`, or `~/.mutasi`.
pub fn mutasi_home() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os("MUTASI_HOME").filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set (or set MUTASI_HOME)")?;
    Ok(PathBuf::from(home).join(".mutasi"))
}

pub fn ensure_mutasi_home() -> Result<PathBuf> {
    let dir = mutasi_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
