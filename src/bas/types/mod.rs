//! Foundational data structures, error types, and lookup tables.

pub mod error;
pub mod lookup;
pub mod models;
