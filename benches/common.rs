// Shared benchmark helpers
#![allow(dead_code)]

use std::fs;
use tempfile::TempDir;

/// Build a tree of `dirs` subdirectories, each `depth` levels deep with
/// `files_per_dir` small files per level
pub fn generate_tree(dirs: usize, depth: usize, files_per_dir: usize) -> TempDir {
    let root = TempDir::new().unwrap();
    for d in 0..dirs {
        let mut path = root.path().join(format!("dir_{}", d));
        for level in 0..depth {
            fs::create_dir_all(&path).unwrap();
            for f in 0..files_per_dir {
                fs::write(path.join(format!("file_{}.bin", f)), vec![0u8; 64 * (f + 1)]).unwrap();
            }
            path = path.join(format!("level_{}", level));
        }
    }
    root
}
