//! Core domain model for minatlas.
//!
//! This crate defines the tabular record model for African mineral deposit
//! reference data (roles, users, minerals, countries, sites, production
//! statistics), the CSV-backed record store, reference-name resolution, and
//! the production aggregation queries consumed by presentation code.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod aggregate;
pub mod catalog;
pub mod error;
pub mod model;
pub mod resolve;
pub mod store;
pub mod trends;
pub mod users;

pub use error::{Error, Result};
