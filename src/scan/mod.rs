//! Directory listing and size measurement
//!
//! - **entry**: immediate entries of the target directory
//! - **size**: recursive size of one subdirectory

mod entry;
mod size;

pub use entry::{DirectoryEntry, list_entries};
pub use size::{SizeCalculator, SizeResult, directory_size};
