//! Digit formatting for elapsed milliseconds.

/// Formatted display text, split so the millisecond digits can be styled
/// independently of the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeParts {
    /// `hh:mm:ss.` or `mm:ss.` — hours appear only when nonzero. Ends with
    /// the literal period separating seconds from milliseconds.
    pub main: String,
    /// Always three zero-padded digits.
    pub millis: String,
}

impl TimeParts {
    /// Both runs joined into one string.
    pub fn joined(&self) -> String {
        format!("{}{}", self.main, self.millis)
    }
}

/// Decomposes `elapsed_ms` into display runs.
///
/// Truncating integer arithmetic only — `999` renders as `00:00.999`, never
/// rounded up to a second. Minutes and seconds are always two zero-padded
/// digits; the hours segment (two digits, colon suffix) is present only when
/// at least one full hour elapsed.
pub fn split_elapsed(elapsed_ms: u64) -> TimeParts {
    let millis = elapsed_ms % 1_000;
    let total_secs = elapsed_ms / 1_000;
    let secs = total_secs % 60;
    let total_mins = total_secs / 60;
    let mins = total_mins % 60;
    let hours = total_mins / 60;

    let main = if hours > 0 {
        format!("{hours:02}:{mins:02}:{secs:02}.")
    } else {
        format!("{mins:02}:{secs:02}.")
    };

    TimeParts { main, millis: format!("{millis:03}") }
}

/// One-string convenience over [`split_elapsed`].
pub fn format_elapsed(elapsed_ms: u64) -> String {
    split_elapsed(elapsed_ms).joined()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero() {
        assert_eq!(format_elapsed(0), "00:00.000");
    }

    #[test]
    fn sub_second_is_zero_padded() {
        assert_eq!(format_elapsed(999), "00:00.999");
        assert_eq!(format_elapsed(7), "00:00.007");
    }

    #[test]
    fn minutes_and_seconds() {
        assert_eq!(format_elapsed(61_234), "01:01.234");
    }

    #[test]
    fn hours_segment_appears_only_when_nonzero() {
        assert_eq!(format_elapsed(3_661_000), "01:01:01.000");
        assert_eq!(format_elapsed(3_600_000), "01:00:00.000");
        assert_eq!(format_elapsed(3_599_999), "59:59.999");
    }

    #[test]
    fn truncates_instead_of_rounding() {
        assert_eq!(format_elapsed(59_999), "00:59.999");
        assert_eq!(format_elapsed(60_000), "01:00.000");
    }

    #[test]
    fn hours_beyond_two_digits_keep_growing() {
        // 100 hours — the pad is a minimum width, not a cap.
        assert_eq!(format_elapsed(100 * 3_600_000), "100:00:00.000");
    }

    #[test]
    fn split_keeps_period_on_main_run() {
        let parts = split_elapsed(61_234);
        assert_eq!(parts.main, "01:01.");
        assert_eq!(parts.millis, "234");
    }
}
