// crates/gifcount-core/src/helpers/time.rs
//
// Duration formatting shared by the report writer and the summary panel.
// Both must agree byte-for-byte, so there is exactly one formatter.

/// Format a duration in seconds as `HH:MM:SS.ff`.
///
/// The value is rounded to whole hundredths first and split afterwards, so a
/// fraction that rounds up carries into the minutes (and hours) instead of
/// producing `60.00` in the seconds field. Hours are padded to two digits but
/// never truncated. Negative and non-finite input formats as zero.
///
/// ```
/// use gifcount_core::helpers::time::format_hms;
/// assert_eq!(format_hms(0.0),    "00:00:00.00");
/// assert_eq!(format_hms(3661.5), "01:01:01.50");
/// assert_eq!(format_hms(59.999), "00:01:00.00");
/// ```
pub fn format_hms(secs: f64) -> String {
    let secs = if secs.is_finite() && secs > 0.0 { secs } else { 0.0 };
    let hundredths = (secs * 100.0).round() as u64;
    let whole = hundredths / 100;
    let frac  = hundredths % 100;
    let h = whole / 3600;
    let m = (whole % 3600) / 60;
    let s = whole % 60;
    format!("{h:02}:{m:02}:{s:02}.{frac:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_all_zeroes() {
        assert_eq!(format_hms(0.0), "00:00:00.00");
    }

    #[test]
    fn seconds_field_is_zero_padded() {
        assert_eq!(format_hms(2.0), "00:00:02.00");
        assert_eq!(format_hms(1.5), "00:00:01.50");
    }

    #[test]
    fn rounding_carries_into_minutes_and_hours() {
        assert_eq!(format_hms(59.999),   "00:01:00.00");
        assert_eq!(format_hms(3599.996), "01:00:00.00");
    }

    #[test]
    fn sub_hundredth_is_rounded_not_truncated() {
        assert_eq!(format_hms(0.004), "00:00:00.00");
        assert_eq!(format_hms(0.006), "00:00:00.01");
    }

    #[test]
    fn hours_above_99_are_not_truncated() {
        assert_eq!(format_hms(100.0 * 3600.0 + 61.25), "100:01:01.25");
    }

    #[test]
    fn invalid_input_formats_as_zero() {
        assert_eq!(format_hms(-3.0),          "00:00:00.00");
        assert_eq!(format_hms(f64::NAN),      "00:00:00.00");
        assert_eq!(format_hms(f64::INFINITY), "00:00:00.00");
    }
}
