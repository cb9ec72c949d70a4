const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// Human-readable size with binary units, e.g. `1.50 MB`. Plain bytes carry
/// no decimals.
pub fn human_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} {}", bytes, UNITS[0]);
    }

    let mut value = bytes as f64;
    let mut unit = UNITS[0];
    for next in &UNITS[1..] {
        if value < 1024.0 {
            break;
        }
        value /= 1024.0;
        unit = next;
    }

    format!("{:.2} {}", value, unit)
}

#[cfg(test)]
mod tests {
    use super::human_size;

    #[test]
    fn bytes_are_printed_without_decimals() {
        assert_eq!(human_size(0), "0 B");
        assert_eq!(human_size(1023), "1023 B");
    }

    #[test]
    fn larger_sizes_use_binary_units() {
        assert_eq!(human_size(1536), "1.50 KB");
        assert_eq!(human_size(50 * 1024 * 1024), "50.00 MB");
        assert_eq!(human_size(3 * 1024 * 1024 * 1024), "3.00 GB");
    }
}
