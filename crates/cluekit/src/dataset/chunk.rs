//! Splitting entry lists into fixed-size chunks.

use crate::error::{CluekitError, Result};

/// Split `entries` into consecutive chunks of `chunk_size`.
///
/// Yields `ceil(N / K)` chunks; only the last one may be shorter.
/// Concatenating the chunks reproduces the input.
pub fn chunk_entries<T: Clone>(entries: &[T], chunk_size: usize) -> Result<Vec<Vec<T>>> {
    if chunk_size == 0 {
        return Err(CluekitError::InvalidChunkSize);
    }
    Ok(entries.chunks(chunk_size).map(<[T]>::to_vec).collect())
}

/// File name of the `index`-th chunk (1-based).
pub fn chunk_file_name(index: usize) -> String {
    format!("batch_{index:03}.json")
}
