// SPDX-License-Identifier: MIT

//! Whole-file text reading with a size-based strategy.
//!
// Allow unsafe_code for memory-mapped I/O (required by memmap2).
// Safety justification:
// 1. File handle is valid (just opened)
// 2. We don't mutate the mapped memory
// 3. Stale data on concurrent modification only skews one search run
#![allow(unsafe_code)]
//!
//! Small targets are read straight into a `String`; large ones are
//! memory-mapped and validated as UTF-8 on access.

use std::fs::{self, File};
use std::io;
use std::path::Path;
use std::str::Utf8Error;

use memmap2::Mmap;

/// Files at or above this size are memory-mapped instead of read
/// directly.
const MMAP_THRESHOLD: u64 = 64 * 1024;

/// Content of a target file, either owned or memory-mapped.
pub enum FileContent {
    /// Small file read into memory. Already UTF-8 validated.
    Owned(String),
    /// Large file memory-mapped; validated on access.
    Mapped(Mmap),
}

impl FileContent {
    /// Reads `path` using the strategy its size calls for.
    pub fn read(path: &Path) -> io::Result<Self> {
        let size = fs::metadata(path)?.len();

        if size < MMAP_THRESHOLD {
            let content = fs::read_to_string(path)?;
            Ok(FileContent::Owned(content))
        } else {
            let file = File::open(path)?;
            // SAFETY: the handle was just opened, the mapping is never
            // written through, and a concurrently modified file at
            // worst yields stale text for this one scan.
            let mmap = unsafe { Mmap::map(&file)? };
            tracing::debug!(path = %path.display(), size, "memory-mapped target");
            Ok(FileContent::Mapped(mmap))
        }
    }

    /// Content as text. Errors when mapped bytes are not valid UTF-8.
    pub fn as_str(&self) -> Result<&str, Utf8Error> {
        match self {
            FileContent::Owned(s) => Ok(s),
            FileContent::Mapped(m) => std::str::from_utf8(m),
        }
    }
}

#[cfg(test)]
#[path = "file_reader_tests.rs"]
mod tests;
