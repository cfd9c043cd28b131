//! Seed-file loading.
//!
//! The seed file is a JSON array of member records in the same camelCase
//! format the API serves. Ids in the file are trusted as-is. Any read or
//! parse failure rejects the whole file.

use crate::member::Member;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Failure to read or decode a seed file.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read seed file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse seed file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads and parses a seed file into member records, in file order.
pub fn read_seed_file(path: &Path) -> Result<Vec<Member>, SeedError> {
    let raw = fs::read(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let members: Vec<Member> = serde_json::from_slice(&raw).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = ?path, count = members.len(), "Parsed seed file");
    Ok(members)
}
