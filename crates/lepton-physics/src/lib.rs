// ─────────────────────────────────────────────────────────────────────
// Lepton Transport — Lepton Physics
// © 2026 Lepton Transport contributors.
// License: GNU AGPL v3 or later
// ─────────────────────────────────────────────────────────────────────
//! Owning wrapper around native muon/tau transport physics.
//!
//! A [`PhysicsModel`] holds exactly one engine handle, built either from a
//! material description file plus energy-loss tables or from a binary dump,
//! and releases it when dropped.

pub mod engine;
pub mod model;
#[cfg(all(feature = "pumas", unix))]
pub mod pumas;

pub use engine::PhysicsEngine;
pub use lepton_types::config::ModelConfig;
pub use lepton_types::error::{LeptonError, LeptonResult};
pub use lepton_types::particle::Particle;
pub use model::{Muon, MuonModel, ParticleModel, PhysicsModel, Tau, TauModel};
#[cfg(all(feature = "pumas", unix))]
pub use pumas::{Pumas, PumasMuonModel, PumasTauModel};
