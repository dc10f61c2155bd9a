// ─────────────────────────────────────────────────────────────────────
// Lepton Transport — Lepton Types
// © 2026 Lepton Transport contributors.
// License: GNU AGPL v3 or later
// ─────────────────────────────────────────────────────────────────────
pub mod config;
pub mod constants;
pub mod error;
pub mod particle;
