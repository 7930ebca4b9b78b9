use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::config::{ensure_config_dir, get_config_path, Config};
use crate::scoring::{AssessmentRubric, DetectionWeights};

/// Write a config file carrying the shipped scoring policy, so users have
/// every tunable weight in front of them. Refuses to overwrite an existing
/// file. Returns the path written.
pub fn write_default_config(path: Option<PathBuf>) -> Result<PathBuf> {
    let config_path = match path {
        Some(p) => p,
        None => {
            ensure_config_dir()?;
            get_config_path()
        }
    };

    if config_path.exists() {
        anyhow::bail!(
            "Config file already exists at {}. Remove it first to re-init.",
            config_path.display()
        );
    }

    let config = Config {
        username: None,
        detection: Some(DetectionWeights::default()),
        rubric: Some(AssessmentRubric::default()),
    };

    let yaml =
        serde_saphyr::to_string(&config).context("Failed to serialize default config")?;
    let contents = format!(
        "# folio configuration. Every value shown is the shipped default;\n\
         # delete anything you don't want to override.\n{}",
        yaml
    );

    fs::write(&config_path, contents)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    Ok(config_path)
}
