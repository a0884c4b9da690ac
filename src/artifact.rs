//! Flat files handed to the DGE script
//!
//! Every job writes seven files named by concatenating a prefix with a fixed suffix. Files are
//! overwritten on every run and never read back by this crate.

/// Derive the seven artifact paths from a prefix
pub mod paths;
/// Write datasets and numeric matrices as plain text
pub mod write;

pub use paths::ArtifactPaths;
pub use write::{write_dataset, write_matrix};
