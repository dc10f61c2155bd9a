// ─────────────────────────────────────────────────────────────────────
// Lepton Transport — Model Config
// © 2026 Lepton Transport contributors.
// License: GNU AGPL v3 or later
// ─────────────────────────────────────────────────────────────────────
use crate::error::{LeptonError, LeptonResult};
use crate::particle::Particle;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Physics model configuration.
/// Names the particle kind and the files the engine builds the model from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub particle: Particle,
    /// Material description file (MDF).
    pub mdf_path: PathBuf,
    /// Directory or file holding the energy-loss tables.
    pub dedx_path: PathBuf,
    /// Binary dump cache. When absent the model is always rebuilt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dump_path: Option<PathBuf>,
}

impl ModelConfig {
    pub fn new(
        particle: Particle,
        mdf_path: impl Into<PathBuf>,
        dedx_path: impl Into<PathBuf>,
    ) -> Self {
        ModelConfig {
            particle,
            mdf_path: mdf_path.into(),
            dedx_path: dedx_path.into(),
            dump_path: None,
        }
    }

    pub fn with_dump(mut self, dump_path: impl Into<PathBuf>) -> Self {
        self.dump_path = Some(dump_path.into());
        self
    }

    /// Load from JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> LeptonResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> LeptonResult<()> {
        if self.mdf_path.as_os_str().is_empty() {
            return Err(LeptonError::ConfigError(
                "mdf_path must not be empty".to_string(),
            ));
        }
        if self.dedx_path.as_os_str().is_empty() {
            return Err(LeptonError::ConfigError(
                "dedx_path must not be empty".to_string(),
            ));
        }
        if matches!(&self.dump_path, Some(p) if p.as_os_str().is_empty()) {
            return Err(LeptonError::ConfigError(
                "dump_path must not be empty when given".to_string(),
            ));
        }
        Ok(())
    }
}
