//! Mock transport engine for testing
//!
//! Keeps a per-thread registry of live handles so tests can detect leaks
//! and double releases. The "physics" is just the bytes of the material
//! description file; a dump is those bytes behind a small header.

use lepton_physics::{LeptonError, LeptonResult, Particle, PhysicsEngine};
use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

const DUMP_MAGIC: &[u8; 8] = b"LEPTDUMP";

/// Description files starting with this marker make creation fail.
pub const CORRUPT_MARKER: &[u8] = b"corrupt";

thread_local! {
    static LIVE: RefCell<HashSet<u64>> = RefCell::new(HashSet::new());
    static NEXT_ID: Cell<u64> = const { Cell::new(1) };
    static CREATE_CALLS: Cell<usize> = const { Cell::new(0) };
    static LOAD_CALLS: Cell<usize> = const { Cell::new(0) };
}

#[derive(Debug)]
pub struct MockPhysics {
    pub id: u64,
    pub particle: Particle,
    pub payload: Vec<u8>,
}

pub struct MockEngine;

fn allocate(particle: Particle, payload: Vec<u8>) -> MockPhysics {
    let id = NEXT_ID.with(|n| {
        let id = n.get();
        n.set(id + 1);
        id
    });
    LIVE.with(|live| live.borrow_mut().insert(id));
    MockPhysics {
        id,
        particle,
        payload,
    }
}

impl PhysicsEngine for MockEngine {
    type Physics = MockPhysics;

    fn create(particle: Particle, mdf_path: &Path, dedx_path: &Path) -> LeptonResult<MockPhysics> {
        CREATE_CALLS.with(|c| c.set(c.get() + 1));
        let payload = std::fs::read(mdf_path)?;
        if payload.starts_with(CORRUPT_MARKER) || !dedx_path.exists() {
            return Err(LeptonError::Engine {
                operation: "create",
                code: 3,
            });
        }
        Ok(allocate(particle, payload))
    }

    fn load(stream: &mut File) -> LeptonResult<MockPhysics> {
        LOAD_CALLS.with(|c| c.set(c.get() + 1));
        let mut bytes = Vec::new();
        stream.read_to_end(&mut bytes)?;
        let bad_dump = LeptonError::Engine {
            operation: "load",
            code: 4,
        };
        if bytes.len() <= DUMP_MAGIC.len() || &bytes[..DUMP_MAGIC.len()] != DUMP_MAGIC {
            return Err(bad_dump);
        }
        let particle = Particle::from_native_tag(i32::from(bytes[DUMP_MAGIC.len()])).ok_or(bad_dump)?;
        Ok(allocate(particle, bytes[DUMP_MAGIC.len() + 1..].to_vec()))
    }

    fn dump(physics: &MockPhysics, stream: &mut File) -> LeptonResult<()> {
        assert!(is_live(physics.id), "dump of released handle {}", physics.id);
        stream.write_all(DUMP_MAGIC)?;
        stream.write_all(&[physics.particle.native_tag() as u8])?;
        stream.write_all(&physics.payload)?;
        Ok(())
    }

    fn destroy(physics: MockPhysics) {
        let removed = LIVE.with(|live| live.borrow_mut().remove(&physics.id));
        assert!(removed, "handle {} released twice", physics.id);
    }
}

pub fn live_handles() -> usize {
    LIVE.with(|live| live.borrow().len())
}

pub fn is_live(id: u64) -> bool {
    LIVE.with(|live| live.borrow().contains(&id))
}

pub fn create_calls() -> usize {
    CREATE_CALLS.with(Cell::get)
}

pub fn load_calls() -> usize {
    LOAD_CALLS.with(Cell::get)
}
