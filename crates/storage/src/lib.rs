//! Filesystem side of the pipeline: atomic writes, pre-overwrite snapshots,
//! and the all-or-nothing artifact write pass.

pub mod artifacts;
pub mod error;
pub mod fs;

pub use artifacts::{Artifact, WriteReport, write_all};
pub use error::Error;
pub use fs::{atomic_write, snapshot};
