//! Core module - Configuration, rules and the building blocks of a run
//!
//! This module provides:
//! - Run configuration with built-in defaults
//! - Replacement rules and their sequential application
//! - Path filtering (exclusion markers, extensions)
//! - UTF-8 file reading and writing
//! - Error taxonomy and run report
//! - Console rendering

pub mod config;
pub mod file_io;
pub mod model;
pub mod paths;
pub mod render;
pub mod rules;
