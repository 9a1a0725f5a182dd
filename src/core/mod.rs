//! Core data types and structures
//!
//! This module contains the module identity and record types used throughout
//! pom-graph, separated from the parsing and graph logic.

pub mod types;

pub use types::*;
