use anyhow::{Context, Result};
use mutasi_core::{IssuerVariant, SeparatorPolicy};
use mutasi_export::{ExportFormat, Labels};
use mutasi_ingest::{ExtractOptions, Extractor, Registry};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::state::{ensure_mutasi_home, mutasi_home};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub parse: ParseSection,
    #[serde(default)]
    pub export: ExportSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseSection {
    /// Classification order when several fingerprints match; unlisted issuers follow.
    #[serde(default)]
    pub priority: Vec<IssuerVariant>,
    /// Overrides every issuer's own separator policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_policy: Option<SeparatorPolicy>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportSection {
    #[serde(default)]
    pub format: ExportFormat,
    #[serde(default)]
    pub labels: Labels,
}

impl Default for ParseSection {
    fn default() -> Self {
        Self {
            priority: IssuerVariant::ALL.to_vec(),
            number_policy: None,
        }
    }
}

impl Config {
    pub fn extractor(&self) -> Result<Extractor> {
        let registry = Registry::with_priority(&self.parse.priority).context("build issuer registry")?;
        let options = ExtractOptions {
            number_policy: self.parse.number_policy,
        };
        Ok(Extractor::with_options(registry, options))
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(mutasi_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = ensure_mutasi_home()?.join("config.toml");
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

pub fn show_config() -> Result<()> {
    let p = config_path()?;
    let cfg = load_config()?;
    if p.exists() {
        println!("# {}", p.display());
    } else {
        println!("# {} (not found, showing defaults)", p.display());
    }
    print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_uses_defaults() {
        let cfg: Config = toml::from_str("[export]\nlabels = \"id\"\n").unwrap();
        assert_eq!(cfg.export.labels, Labels::Indonesian);
        assert_eq!(cfg.export.format, ExportFormat::Csv);
        assert_eq!(cfg.parse.priority, IssuerVariant::ALL.to_vec());
        assert_eq!(cfg.parse.number_policy, None);
    }

    #[test]
    fn test_parse_section() {
        let cfg: Config = toml::from_str(
            "[parse]\npriority = [\"jenius\", \"bni\"]\nnumber_policy = \"comma-decimal\"\n",
        )
        .unwrap();
        assert_eq!(cfg.parse.priority, vec![IssuerVariant::Jenius, IssuerVariant::Bni]);
        assert_eq!(cfg.parse.number_policy, Some(SeparatorPolicy::CommaDecimal));
        let ex = cfg.extractor().unwrap();
        assert_eq!(ex.registry().priority()[0], IssuerVariant::Jenius);
    }

    #[test]
    fn test_default_round_trips() {
        let s = toml::to_string_pretty(&Config::default()).unwrap();
        let back: Config = toml::from_str(&s).unwrap();
        assert_eq!(back.parse.priority.len(), IssuerVariant::ALL.len());
        assert_eq!(back.export.labels, Labels::English);
    }

    #[test]
    fn test_unknown_issuer_rejected() {
        assert!(toml::from_str::<Config>("[parse]\npriority = [\"bca\"]\n").is_err());
    }
}
