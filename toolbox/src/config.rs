use anyhow::{Context, Result};
use hunt_core::ReportConfig;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Deserialize, Clone)]
pub struct Config {
    pub report: Option<ReportConfig>,
}

impl Config {
    /// File values fill in the report options; a set CLI flag always wins.
    pub fn report_config(&self, mapping_flag: bool, statistics_flag: bool) -> ReportConfig {
        let file = self.report.unwrap_or_default();
        ReportConfig {
            mapping: mapping_flag || file.mapping,
            statistics: statistics_flag || file.statistics,
        }
    }
}

/// Load the given YAML file, or `./toolbox.yaml` when present. No file means defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let p = Path::new("toolbox.yaml");
            if !p.exists() {
                return Ok(Config::default());
            }
            p.to_path_buf()
        }
    };
    let s = fs::read_to_string(&path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg = serde_yaml::from_str(&s)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}
