use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::util::{display_name, is_hidden};

/// One immediate entry of the target directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub path: PathBuf,
    pub name: String,
    /// Directory after following symlinks
    pub is_dir: bool,
}

impl DirectoryEntry {
    fn from_dir_entry(entry: fs::DirEntry) -> Self {
        let path = entry.path();
        let is_dir = path.is_dir();
        Self {
            name: display_name(&path),
            path,
            is_dir,
        }
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        is_hidden(&self.name)
    }

    /// Visible directories are the ones that get a report line
    #[inline]
    pub fn is_reportable(&self) -> bool {
        self.is_dir && !self.is_hidden()
    }
}

/// List the immediate entries of `dir` in filesystem order.
///
/// Opening the listing and each step of the iteration can fail
/// independently; callers decide whether to stop.
pub fn list_entries(dir: &Path) -> io::Result<impl Iterator<Item = io::Result<DirectoryEntry>>> {
    let read_dir = fs::read_dir(dir)?;
    Ok(read_dir.map(|entry| entry.map(DirectoryEntry::from_dir_entry)))
}
