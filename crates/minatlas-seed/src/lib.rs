//! Seed data for minatlas.
//!
//! Fixed literal catalogs for the reference tables (roles, minerals,
//! countries, sites) and a deterministic generator for four years of
//! production statistics. Seeding is per-table and only touches tables that
//! are currently absent or empty, so re-running against a populated store is
//! a no-op.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod bootstrap;
pub mod catalog;
pub mod generate;

pub use bootstrap::{seed_all, SeedReport};
pub use generate::{generate_production_stats, stable_hash, END_YEAR, START_YEAR};
