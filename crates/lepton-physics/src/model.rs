// ─────────────────────────────────────────────────────────────────────
// Lepton Transport — Physics Model
// © 2026 Lepton Transport contributors.
// License: GNU AGPL v3 or later
// ─────────────────────────────────────────────────────────────────────
//! Resource-owning physics model for one lepton kind.
//!
//! Instances only come out of the factories, always own a live engine
//! handle, and release it on drop. Ownership moves with the value; there is
//! no way to duplicate it.

use crate::engine::PhysicsEngine;
use lepton_types::config::ModelConfig;
use lepton_types::error::{LeptonError, LeptonResult};
use lepton_types::particle::Particle;
use std::fmt;
use std::fs::File;
use std::marker::PhantomData;
use std::path::Path;

mod sealed {
    pub trait Sealed {}
}

/// Lepton kind a [`PhysicsModel`] is specialised for.
pub trait ParticleModel: sealed::Sealed {
    const PARTICLE: Particle;
}

/// Muon physics.
#[derive(Debug)]
pub enum Muon {}

/// Tau physics.
#[derive(Debug)]
pub enum Tau {}

impl sealed::Sealed for Muon {}
impl sealed::Sealed for Tau {}

impl ParticleModel for Muon {
    const PARTICLE: Particle = Particle::Muon;
}

impl ParticleModel for Tau {
    const PARTICLE: Particle = Particle::Tau;
}

/// Owner of one native physics handle.
///
/// Not `Clone`; the handle cannot be duplicated:
///
/// ```compile_fail
/// use lepton_physics::{LeptonResult, Muon, Particle, PhysicsEngine, PhysicsModel};
/// use std::fs::File;
/// use std::path::Path;
///
/// struct Null;
/// impl PhysicsEngine for Null {
///     type Physics = ();
///     fn create(_: Particle, _: &Path, _: &Path) -> LeptonResult<()> { Ok(()) }
///     fn load(_: &mut File) -> LeptonResult<()> { Ok(()) }
///     fn dump(_: &(), _: &mut File) -> LeptonResult<()> { Ok(()) }
///     fn destroy(_: ()) {}
/// }
///
/// fn require_clone<T: Clone>() {}
/// require_clone::<PhysicsModel<Muon, Null>>();
/// ```
///
/// A moved-from model cannot be touched again:
///
/// ```compile_fail
/// use lepton_physics::{LeptonResult, Muon, Particle, PhysicsEngine, PhysicsModel};
/// use std::fs::File;
/// use std::path::Path;
///
/// struct Null;
/// impl PhysicsEngine for Null {
///     type Physics = ();
///     fn create(_: Particle, _: &Path, _: &Path) -> LeptonResult<()> { Ok(()) }
///     fn load(_: &mut File) -> LeptonResult<()> { Ok(()) }
///     fn dump(_: &(), _: &mut File) -> LeptonResult<()> { Ok(()) }
///     fn destroy(_: ()) {}
/// }
///
/// let a = PhysicsModel::<Muon, Null>::load_from_mdf("a.xml", "dedx").unwrap();
/// let b = a;
/// let _ = a.particle();
/// ```
pub struct PhysicsModel<P: ParticleModel, E: PhysicsEngine> {
    particle: Particle,
    physics: Option<E::Physics>,
    _kind: PhantomData<P>,
}

pub type MuonModel<E> = PhysicsModel<Muon, E>;
pub type TauModel<E> = PhysicsModel<Tau, E>;

fn require_file(path: &Path) -> LeptonResult<()> {
    match path.try_exists() {
        Ok(true) => Ok(()),
        _ => {
            log::debug!("missing input {}", path.display());
            Err(LeptonError::MissingInput {
                path: path.to_path_buf(),
            })
        }
    }
}

fn open_failed(path: &Path, source: std::io::Error) -> LeptonError {
    log::error!("Failed to open {}", path.display());
    LeptonError::FileOpen {
        path: path.to_path_buf(),
        source,
    }
}

impl<P: ParticleModel, E: PhysicsEngine> PhysicsModel<P, E> {
    fn new() -> Self {
        PhysicsModel {
            particle: P::PARTICLE,
            physics: None,
            _kind: PhantomData,
        }
    }

    fn adopt(&mut self, physics: E::Physics) {
        self.release();
        self.physics = Some(physics);
    }

    /// Release the handle, if any. Safe to call repeatedly.
    fn release(&mut self) {
        if let Some(physics) = self.physics.take() {
            E::destroy(physics);
            log::debug!("released {} physics", self.particle);
        }
    }

    fn create_physics(&mut self, mdf_path: &Path, dedx_path: &Path) -> LeptonResult<()> {
        require_file(mdf_path)?;
        require_file(dedx_path)?;
        let physics = E::create(self.particle, mdf_path, dedx_path)?;
        self.adopt(physics);
        log::info!(
            "created {} physics from {} ({})",
            self.particle,
            mdf_path.display(),
            dedx_path.display()
        );
        Ok(())
    }

    fn load_physics(&mut self, dump_path: &Path) -> LeptonResult<()> {
        require_file(dump_path)?;
        let mut stream = File::open(dump_path).map_err(|e| open_failed(dump_path, e))?;
        let physics = E::load(&mut stream)?;
        self.adopt(physics);
        log::info!("loaded {} physics from {}", self.particle, dump_path.display());
        Ok(())
    }

    fn finish(self, status: LeptonResult<()>, source: &Path) -> Option<Self> {
        match status {
            Ok(()) => Some(self),
            Err(err) => {
                log::debug!(
                    "no {} physics from {}: {err}",
                    self.particle,
                    source.display()
                );
                None
            }
        }
    }

    /// Build physics from a material description file and its energy-loss
    /// tables. `None` if either file is missing or the engine fails.
    pub fn load_from_mdf(mdf_path: impl AsRef<Path>, dedx_path: impl AsRef<Path>) -> Option<Self> {
        let mdf_path = mdf_path.as_ref();
        let mut model = Self::new();
        let status = model.create_physics(mdf_path, dedx_path.as_ref());
        model.finish(status, mdf_path)
    }

    /// Restore physics from a binary dump written by [`Self::save_binary`].
    pub fn load_from_binary(dump_path: impl AsRef<Path>) -> Option<Self> {
        let dump_path = dump_path.as_ref();
        let mut model = Self::new();
        let status = model.load_physics(dump_path);
        model.finish(status, dump_path)
    }

    /// Load from `dump_path` when it holds a usable dump, otherwise build
    /// from the description files and write the dump for the next run.
    ///
    /// A dump that cannot be written does not fail the call.
    pub fn load_or_create(
        mdf_path: impl AsRef<Path>,
        dedx_path: impl AsRef<Path>,
        dump_path: impl AsRef<Path>,
    ) -> Option<Self> {
        let dump_path = dump_path.as_ref();
        if dump_path.exists() {
            if let Some(model) = Self::load_from_binary(dump_path) {
                return Some(model);
            }
            log::warn!(
                "rebuilding {} physics: unusable dump {}",
                P::PARTICLE,
                dump_path.display()
            );
        }
        let model = Self::load_from_mdf(mdf_path, dedx_path)?;
        if let Err(err) = model.save_binary(dump_path) {
            log::warn!("could not cache {} physics: {err}", model.particle);
        }
        Some(model)
    }

    /// Build from a [`ModelConfig`]. The configured particle must match `P`.
    pub fn from_config(config: &ModelConfig) -> Option<Self> {
        if let Err(err) = config.validate() {
            log::warn!("{err}");
            return None;
        }
        if config.particle != P::PARTICLE {
            log::warn!(
                "config is for {} but a {} model was requested",
                config.particle,
                P::PARTICLE
            );
            return None;
        }
        match &config.dump_path {
            Some(dump_path) => Self::load_or_create(&config.mdf_path, &config.dedx_path, dump_path),
            None => Self::load_from_mdf(&config.mdf_path, &config.dedx_path),
        }
    }

    /// Write the physics to `dump_path` as a binary dump, creating or
    /// truncating the file.
    pub fn save_binary(&self, dump_path: impl AsRef<Path>) -> LeptonResult<()> {
        let dump_path = dump_path.as_ref();
        let physics = self.physics.as_ref().ok_or(LeptonError::NoPhysics)?;
        let mut stream = File::create(dump_path).map_err(|e| open_failed(dump_path, e))?;
        E::dump(physics, &mut stream)?;
        log::info!("saved {} physics to {}", self.particle, dump_path.display());
        Ok(())
    }

    pub fn particle(&self) -> Particle {
        self.particle
    }

    /// The owned engine handle.
    pub fn physics(&self) -> Option<&E::Physics> {
        self.physics.as_ref()
    }
}

impl<P: ParticleModel, E: PhysicsEngine> Drop for PhysicsModel<P, E> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<P: ParticleModel, E: PhysicsEngine> fmt::Debug for PhysicsModel<P, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhysicsModel")
            .field("particle", &self.particle)
            .field("loaded", &self.physics.is_some())
            .finish()
    }
}
