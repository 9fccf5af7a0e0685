//! Workspace umbrella crate: re-exports [`geosplit_core`] so the demos under
//! `demos/` can be run from the repository root.
pub use geosplit_core::*;
