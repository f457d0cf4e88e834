//! Backends module - Filesystem traversal
//!
//! Provides:
//! - walk: Directory walking with walkdir

pub mod walk;
