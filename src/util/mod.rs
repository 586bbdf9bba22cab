mod format;
mod path;

pub use format::{format_timestamp, human_readable_size};
pub use path::{display_name, is_hidden};
