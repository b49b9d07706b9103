/// Watt-hours per kilowatt-hour.
const WH_PER_KWH: f64 = 1000.0;

/// Convert watt-hours to kilowatt-hours. No rounding happens here.
///
/// # Examples
///
/// ```
/// use report_core::formatting::to_kwh;
///
/// assert_eq!(to_kwh(1000), 1.0);
/// assert_eq!(to_kwh(250), 0.25);
/// assert_eq!(to_kwh(0), 0.0);
/// ```
pub fn to_kwh(value_wh: i128) -> f64 {
    value_wh as f64 / WH_PER_KWH
}

/// Format a kWh value with exactly two decimals and a decimal comma.
///
/// No thousands separator and no unit suffix; the caller appends the unit
/// where needed.
///
/// # Examples
///
/// ```
/// use report_core::formatting::format_kwh;
///
/// assert_eq!(format_kwh(1.0), "1,00");
/// assert_eq!(format_kwh(0.0), "0,00");
/// assert_eq!(format_kwh(12.345678), "12,35");
/// assert_eq!(format_kwh(-0.5), "-0,50");
/// ```
pub fn format_kwh(value_kwh: f64) -> String {
    format!("{:.2}", value_kwh).replace('.', ",")
}

/// Convenience wrapper: Wh in, formatted kWh string out.
pub fn format_wh_as_kwh(value_wh: i128) -> String {
    format_kwh(to_kwh(value_wh))
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── to_kwh ───────────────────────────────────────────────────────────────

    #[test]
    fn test_to_kwh_exact_thousand() {
        assert_eq!(to_kwh(1000), 1.0);
    }

    #[test]
    fn test_to_kwh_keeps_fraction() {
        assert_eq!(to_kwh(1), 0.001);
        assert_eq!(to_kwh(1234), 1.234);
    }

    #[test]
    fn test_to_kwh_negative() {
        assert_eq!(to_kwh(-2500), -2.5);
    }

    // ── format_kwh ───────────────────────────────────────────────────────────

    #[test]
    fn test_format_kwh_one() {
        assert_eq!(format_kwh(1.0), "1,00");
    }

    #[test]
    fn test_format_kwh_zero() {
        assert_eq!(format_kwh(0.0), "0,00");
    }

    #[test]
    fn test_format_kwh_rounds_to_two_places() {
        assert_eq!(format_kwh(0.204), "0,20");
        assert_eq!(format_kwh(0.206), "0,21");
        assert_eq!(format_kwh(9.999), "10,00");
    }

    #[test]
    fn test_format_kwh_no_thousands_separator() {
        assert_eq!(format_kwh(12345.6), "12345,60");
    }

    #[test]
    fn test_format_kwh_negative() {
        assert_eq!(format_kwh(-3.25), "-3,25");
    }

    // ── format_wh_as_kwh ─────────────────────────────────────────────────────

    #[test]
    fn test_format_wh_as_kwh() {
        assert_eq!(format_wh_as_kwh(200), "0,20");
        assert_eq!(format_wh_as_kwh(20), "0,02");
        assert_eq!(format_wh_as_kwh(15_432), "15,43");
    }

    #[test]
    fn test_format_wh_as_kwh_beyond_i64() {
        assert_eq!(format_wh_as_kwh(10_000_000_000_000_000_000), "10000000000000000,00");
    }
}
