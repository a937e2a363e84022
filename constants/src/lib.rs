//! Shared semantic class table and storage path conventions.
//!
//! Used by both the runtime tagging engine and the offline naming audit
//! so every consumer derives the same class from the same path.

/// Semantic class enumeration and the keyword lookup table.
pub mod class;

/// Canonical storage path layout and keyword extraction.
pub mod path;
