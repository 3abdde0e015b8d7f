//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies
//! (`serde`, `serde_json`, `bitflags`). Keep it lean: no I/O, networking, or
//! heavy logic—just data and simple helpers.

pub mod config;
pub mod constants;
pub mod content;
pub mod features;
pub mod registry;
pub mod theme;
