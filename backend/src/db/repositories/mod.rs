//! Repository implementations module.
//!
//! This module contains the implementations of the `MovieRepository` trait:
//! - `local`: In-memory implementation; the catalog lives as long as the process
#[cfg(feature = "local-repo")]
pub mod local;

#[cfg(feature = "local-repo")]
pub use local::LocalRepository;
