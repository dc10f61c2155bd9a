// ─────────────────────────────────────────────────────────────────────
// Lepton Transport — Particle Kind
// © 2026 Lepton Transport contributors.
// License: GNU AGPL v3 or later
// ─────────────────────────────────────────────────────────────────────
//! Charged lepton kinds understood by the transport engine.

use crate::constants::{MUON_CTAU, MUON_MASS, MUON_TAG, TAU_CTAU, TAU_MASS, TAU_TAG};
use crate::error::LeptonError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Particle kind a physics model is built for. Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Particle {
    Muon,
    Tau,
}

impl Particle {
    /// Tag passed to the native engine at creation time.
    pub fn native_tag(self) -> i32 {
        match self {
            Particle::Muon => MUON_TAG,
            Particle::Tau => TAU_TAG,
        }
    }

    pub fn from_native_tag(tag: i32) -> Option<Self> {
        match tag {
            MUON_TAG => Some(Particle::Muon),
            TAU_TAG => Some(Particle::Tau),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Particle::Muon => "muon",
            Particle::Tau => "tau",
        }
    }

    /// Rest mass [GeV/c^2].
    pub fn mass(self) -> f64 {
        match self {
            Particle::Muon => MUON_MASS,
            Particle::Tau => TAU_MASS,
        }
    }

    /// Proper decay length c*tau [m].
    pub fn ctau(self) -> f64 {
        match self {
            Particle::Muon => MUON_CTAU,
            Particle::Tau => TAU_CTAU,
        }
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Particle {
    type Err = LeptonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "muon" | "mu" => Ok(Particle::Muon),
            "tau" => Ok(Particle::Tau),
            other => Err(LeptonError::ConfigError(format!(
                "Unknown particle kind: {other}"
            ))),
        }
    }
}
