use time::OffsetDateTime;
use time::macros::format_description;

/// Format a byte count as a human-readable string (bytes, KB, MB, GB)
///
/// Thresholds are inclusive, so exactly 1024 bytes is already "1.00 KB".
pub fn human_readable_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

/// Format a point in time as `YYYY-MM-DD HH:MM:SS`
pub fn format_timestamp(at: OffsetDateTime) -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    at.format(&format)
        .unwrap_or_else(|_| "0000-00-00 00:00:00".to_string())
}
