// ─────────────────────────────────────────────────────────────────────
// Lepton Transport — Lepton Constants
// © 2026 Lepton Transport contributors.
// License: GNU AGPL v3 or later
// ─────────────────────────────────────────────────────────────────────
/// Muon rest mass (GeV/c^2), PDG.
pub const MUON_MASS: f64 = 0.10565839;

/// Muon proper decay length c*tau (m), PDG.
pub const MUON_CTAU: f64 = 658.654;

/// Tau rest mass (GeV/c^2), PDG.
pub const TAU_MASS: f64 = 1.77682;

/// Tau proper decay length c*tau (m), PDG.
pub const TAU_CTAU: f64 = 87.03e-06;

/// Native particle tag for muons.
pub const MUON_TAG: i32 = 0;

/// Native particle tag for taus.
pub const TAU_TAG: i32 = 1;
