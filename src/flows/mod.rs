//! Flows module - End-to-end operations
//!
//! Provides:
//! - rebrand: Walk, filter, substitute and rewrite a tree

pub mod rebrand;
