//! Display formatting for durations.

/// Formats a day count with the correct plural.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::format_duration;
///
/// assert_eq!(format_duration(1), "1 day");
/// assert_eq!(format_duration(5), "5 days");
/// ```
pub fn format_duration(days: u32) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_plural() {
        assert_eq!(format_duration(0), "0 days");
    }

    #[test]
    fn test_one_is_singular() {
        assert_eq!(format_duration(1), "1 day");
    }

    #[test]
    fn test_many_is_plural() {
        assert_eq!(format_duration(98), "98 days");
    }
}
