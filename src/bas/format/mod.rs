//! Binary encoding layer for BAS data.
//!
//! # Module Organization
//!
//! - [`entry`]: One 32-byte sound entry
//! - [`animation`]: The 8-byte header followed by its entries
//!
//! # Architecture
//!
//! ```text
//! Buffer Structure:
//! ┌─────────────────┐
//! │  Header (8)     │ ← animation::decode_animation()
//! ├─────────────────┤
//! │  Entry 0 (32)   │ ← entry::decode_entry()
//! ├─────────────────┤
//! │  ...            │
//! ├─────────────────┤
//! │  Entry N-1 (32) │
//! └─────────────────┘
//! ```
//!
//! The same byte order applies to the header and every entry of a buffer.

pub mod animation;
pub mod entry;
