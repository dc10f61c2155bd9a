// ─────────────────────────────────────────────────────────────────────
// Lepton Transport — PUMAS Engine
// © 2026 Lepton Transport contributors.
// License: GNU AGPL v3 or later
// ─────────────────────────────────────────────────────────────────────
//! Bindings to the native PUMAS library.
//!
//! Only the physics lifecycle entry points are bound. Streams are handed to
//! the library as C `FILE*` opened on a duplicate of the Rust file
//! descriptor, so the Rust `File` keeps its own lifetime. The C stream is
//! closed on every exit path.

use crate::engine::PhysicsEngine;
use crate::model::{MuonModel, TauModel};
use lepton_types::error::{LeptonError, LeptonResult};
use lepton_types::particle::Particle;
use std::ffi::{c_char, c_int, c_void, CStr, CString};
use std::fs::File;
use std::io;
use std::os::fd::AsRawFd;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;
use std::ptr::{self, NonNull};
use std::sync::Once;

const PUMAS_RETURN_SUCCESS: c_int = 0;

#[allow(non_camel_case_types)]
#[repr(C)]
struct pumas_physics {
    _private: [u8; 0],
}

#[allow(clippy::upper_case_acronyms)]
#[repr(C)]
struct FILE {
    _private: [u8; 0],
}

type PumasHandler = extern "C" fn(rc: c_int, caller: *const c_void, message: *const c_char);

#[link(name = "pumas")]
extern "C" {
    fn pumas_physics_create(
        physics: *mut *mut pumas_physics,
        particle: c_int,
        mdf_path: *const c_char,
        dedx_path: *const c_char,
        settings: *const c_void,
    ) -> c_int;
    fn pumas_physics_load(physics: *mut *mut pumas_physics, stream: *mut FILE) -> c_int;
    fn pumas_physics_dump(physics: *const pumas_physics, stream: *mut FILE) -> c_int;
    fn pumas_physics_destroy(physics: *mut *mut pumas_physics);
    fn pumas_error_handler_set(handler: Option<PumasHandler>);
}

extern "C" {
    fn dup(fd: c_int) -> c_int;
    fn close(fd: c_int) -> c_int;
    fn fdopen(fd: c_int, mode: *const c_char) -> *mut FILE;
    fn fclose(stream: *mut FILE) -> c_int;
}

/// Routes library error messages through `log`. The returned status code
/// still carries the failure.
extern "C" fn log_pumas_error(rc: c_int, _caller: *const c_void, message: *const c_char) {
    if message.is_null() {
        log::debug!("PUMAS error {rc}");
        return;
    }
    // SAFETY: PUMAS passes a NUL-terminated message valid for this call.
    let message = unsafe { CStr::from_ptr(message) }.to_string_lossy();
    log::debug!("PUMAS error {rc}: {message}");
}

fn install_error_handler() {
    static INSTALL: Once = Once::new();
    // SAFETY: the handler is a plain function valid for the program lifetime.
    INSTALL.call_once(|| unsafe { pumas_error_handler_set(Some(log_pumas_error)) });
}

fn check(operation: &'static str, code: c_int) -> LeptonResult<()> {
    if code == PUMAS_RETURN_SUCCESS {
        Ok(())
    } else {
        Err(LeptonError::Engine { operation, code })
    }
}

fn c_path(path: &Path) -> LeptonResult<CString> {
    CString::new(path.as_os_str().as_bytes())
        .map_err(|_| LeptonError::InvalidPath(format!("{} contains a NUL byte", path.display())))
}

/// C stream over a duplicated descriptor. Closed on drop when not closed
/// explicitly with [`CStream::close`].
struct CStream(NonNull<FILE>);

impl CStream {
    fn open(file: &File, mode: &CStr) -> LeptonResult<Self> {
        // SAFETY: `file` holds an open descriptor for the duration of the call.
        let fd = unsafe { dup(file.as_raw_fd()) };
        if fd < 0 {
            return Err(io::Error::last_os_error().into());
        }
        // SAFETY: `fd` is a fresh descriptor we own; `mode` is NUL-terminated.
        let stream = unsafe { fdopen(fd, mode.as_ptr()) };
        match NonNull::new(stream) {
            Some(stream) => Ok(CStream(stream)),
            None => {
                let err = io::Error::last_os_error();
                // SAFETY: fdopen failed, so `fd` is still ours to close.
                unsafe { close(fd) };
                Err(err.into())
            }
        }
    }

    fn as_ptr(&self) -> *mut FILE {
        self.0.as_ptr()
    }

    /// Flush and close, reporting write-back failures.
    fn close(self) -> LeptonResult<()> {
        let stream = self.0.as_ptr();
        std::mem::forget(self);
        // SAFETY: the guard is forgotten, so the stream is closed only here.
        if unsafe { fclose(stream) } != 0 {
            return Err(io::Error::last_os_error().into());
        }
        Ok(())
    }
}

impl Drop for CStream {
    fn drop(&mut self) {
        // SAFETY: the stream came from fdopen and `close` was not called.
        unsafe { fclose(self.0.as_ptr()) };
    }
}

/// Owned `pumas_physics` pointer. Not `Send`: the library gives no
/// thread-safety guarantee for a physics object.
#[derive(Debug)]
pub struct PumasPhysics(NonNull<pumas_physics>);

impl PumasPhysics {
    fn adopt(operation: &'static str, raw: *mut pumas_physics) -> LeptonResult<Self> {
        NonNull::new(raw)
            .map(PumasPhysics)
            .ok_or(LeptonError::EmptyHandle { operation })
    }
}

/// The PUMAS transport engine.
///
/// The first engine call installs a process-wide PUMAS error handler that
/// forwards library messages to `log` at debug level. It replaces any
/// handler the host application set through `pumas_error_handler_set`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pumas;

impl PhysicsEngine for Pumas {
    type Physics = PumasPhysics;

    fn create(particle: Particle, mdf_path: &Path, dedx_path: &Path) -> LeptonResult<PumasPhysics> {
        install_error_handler();
        let mdf = c_path(mdf_path)?;
        let dedx = c_path(dedx_path)?;
        let mut raw = ptr::null_mut();
        // SAFETY: both paths are NUL-terminated; null settings selects defaults.
        let code = unsafe {
            pumas_physics_create(
                &mut raw,
                particle.native_tag(),
                mdf.as_ptr(),
                dedx.as_ptr(),
                ptr::null(),
            )
        };
        check("create", code)?;
        PumasPhysics::adopt("create", raw)
    }

    fn load(stream: &mut File) -> LeptonResult<PumasPhysics> {
        install_error_handler();
        let stream = CStream::open(stream, c"rb")?;
        let mut raw = ptr::null_mut();
        // SAFETY: `stream` is a valid read stream until it drops below.
        let code = unsafe { pumas_physics_load(&mut raw, stream.as_ptr()) };
        drop(stream);
        check("load", code)?;
        PumasPhysics::adopt("load", raw)
    }

    fn dump(physics: &PumasPhysics, stream: &mut File) -> LeptonResult<()> {
        install_error_handler();
        let stream = CStream::open(stream, c"wb")?;
        // SAFETY: `physics` is live; `stream` is a valid write stream.
        let code = unsafe { pumas_physics_dump(physics.0.as_ptr(), stream.as_ptr()) };
        let closed = stream.close();
        check("dump", code)?;
        closed
    }

    fn destroy(physics: PumasPhysics) {
        let mut raw = physics.0.as_ptr();
        // SAFETY: `physics` was obtained from create/load and is consumed here.
        unsafe { pumas_physics_destroy(&mut raw) };
    }
}

pub type PumasMuonModel = MuonModel<Pumas>;
pub type PumasTauModel = TauModel<Pumas>;
