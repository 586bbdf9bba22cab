use std::path::Path;

/// Whether a file name marks a hidden entry (leading `.`)
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// The last component of a path as display text.
///
/// Falls back to the whole path when there is no final component
/// (e.g. `/` or a path ending in `..`). Non-UTF-8 bytes are replaced.
pub fn display_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}
