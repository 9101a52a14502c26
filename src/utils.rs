use crate::types::partition::LongitudeConvention;

/// Rounds a coordinate to a whole degree the same way the table producer does
/// (half to even), so `10.5` becomes `10` and `11.5` becomes `12`.
///
/// `value` must be finite: `NaN` saturates to `0`. [`ArgoLookup::search`](crate::ArgoLookup::search)
/// rejects non-finite input before rounding.
///
/// # Examples
///
/// ```
/// use argo_lookup::round_degree;
///
/// assert_eq!(round_degree(10.4), 10);
/// assert_eq!(round_degree(-19.6), -20);
/// assert_eq!(round_degree(10.5), 10);
/// ```
pub fn round_degree(value: f64) -> i32 {
    value.round_ties_even() as i32
}

/// Maps any longitude into `[0, 360)`.
pub fn normalize_longitude(lon: f64) -> f64 {
    ((lon % 360.0) + 360.0) % 360.0
}

/// Rounded longitude as stored in a table using `convention`.
pub fn table_longitude(lon: f64, convention: LongitudeConvention) -> i32 {
    match convention {
        LongitudeConvention::Signed => round_degree(lon),
        LongitudeConvention::ZeroTo360 => round_degree(normalize_longitude(lon)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_longitude() {
        assert_eq!(normalize_longitude(-20.0), 340.0);
        assert_eq!(normalize_longitude(0.0), 0.0);
        assert_eq!(normalize_longitude(360.0), 0.0);
        assert_eq!(normalize_longitude(-720.5), 359.5);
    }

    #[test]
    fn test_table_longitude_conventions() {
        assert_eq!(table_longitude(-20.2, LongitudeConvention::Signed), -20);
        assert_eq!(table_longitude(-20.2, LongitudeConvention::ZeroTo360), 340);
        assert_eq!(table_longitude(15.0, LongitudeConvention::ZeroTo360), 15);
    }

    #[test]
    fn test_round_degree_ties_to_even() {
        assert_eq!(round_degree(0.5), 0);
        assert_eq!(round_degree(1.5), 2);
        assert_eq!(round_degree(-2.5), -2);
        assert_eq!(round_degree(-2.51), -3);
    }
}
