// ─────────────────────────────────────────────────────────────────────
// Lepton Transport — Physics Engine Boundary
// © 2026 Lepton Transport contributors.
// License: GNU AGPL v3 or later
// ─────────────────────────────────────────────────────────────────────
//! The four primitive operations a transport engine provides.

use lepton_types::error::LeptonResult;
use lepton_types::particle::Particle;
use std::fs::File;
use std::path::Path;

/// Native transport engine.
///
/// `Physics` is the opaque handle the engine hands out. Whoever holds a
/// `Physics` value owns it and must pass it to [`PhysicsEngine::destroy`]
/// exactly once.
pub trait PhysicsEngine {
    type Physics;

    /// Build physics tables for `particle` from a material description
    /// file and its energy-loss tables.
    ///
    /// On failure no handle is allocated.
    fn create(particle: Particle, mdf_path: &Path, dedx_path: &Path)
        -> LeptonResult<Self::Physics>;

    /// Restore physics from a binary dump opened for reading.
    fn load(stream: &mut File) -> LeptonResult<Self::Physics>;

    /// Serialize physics into a stream opened for writing.
    fn dump(physics: &Self::Physics, stream: &mut File) -> LeptonResult<()>;

    /// Release the handle.
    fn destroy(physics: Self::Physics);
}
