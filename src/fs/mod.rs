//! File-system access used during resolution.
//!
//! Resolution only needs two primitives, so they sit behind a trait and the
//! resolver can run against disk or against an in-memory tree.

mod memory;

pub use memory::MemoryFileSystem;

use std::fs;
use std::io;
use std::path::Path;

pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Reads from the real file system
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}
