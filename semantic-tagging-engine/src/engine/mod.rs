//! Runtime tagging: stencil channel, scene sweep, and settings.

/// JSON-loaded runtime settings with loader plumbing.
pub mod settings;

/// Per-surface stencil annotation channel.
pub mod stencil;

/// Path classification and the scene sweep systems.
pub mod tagger;
