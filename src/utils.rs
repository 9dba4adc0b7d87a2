/*!
 * Utility functions for DirPrompt
 */

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const UNITS: [(u64, &str); 3] = [
        (1024 * 1024 * 1024, "GB"),
        (1024 * 1024, "MB"),
        (1024, "KB"),
    ];

    for (scale, unit) in UNITS {
        if size >= scale {
            return format!("{:.2} {}", size as f64 / scale as f64, unit);
        }
    }

    format!("{} bytes", size)
}
