//! # Storage Layer
//!
//! The [`StorageBackend`] trait is the seam between the repositories and
//! the medium the record files live on.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production file-based storage
//!   - One plain-text file per entity inside a single data directory
//!   - Full-file rewrites through a temp file, a `.bak` copy of the prior
//!     content, and an atomic rename
//! - [`mem_backend::MemBackend`]: in-memory storage for testing
//!   - No persistence, optional write-failure injection
//!
//! ## Storage Format
//!
//! For `FsBackend`:
//! ```text
//! <data dir>/
//! ├── rooms.txt        # one record per line, | delimited
//! ├── tenants.txt
//! ├── payments.txt
//! ├── rooms.txt.bak    # last-known-good copy, refreshed on every write
//! └── config.json      # presentation preferences
//! ```
//!
//! Writes replace a whole file at once; there is no append path and no
//! coordination across files. A tenant mutation that also touches a room is
//! two independent writes (see [`crate::occupancy`]).

use crate::error::Result;

pub mod fs_backend;
pub mod mem_backend;

pub trait StorageBackend {
    /// Read all trimmed, non-empty lines of a data file.
    /// A missing file reads as empty, never as an error.
    fn read_lines(&self, name: &str) -> Result<Vec<String>>;

    /// Replace the full contents of a data file with the given lines.
    /// MUST never leave the target half-written: either the call succeeds
    /// and the target equals exactly `lines`, or it fails and the target
    /// keeps (or is restored to) its prior content.
    fn write_lines(&mut self, name: &str, lines: &[String]) -> Result<()>;
}
