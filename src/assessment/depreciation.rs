use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Age-banded depreciation factor for a floor's building component.
///
/// Bands have inclusive upper bounds, first match wins. An absent or zero
/// construction year means no depreciation is applied.
pub fn depreciation_factor(construction_year: Option<i32>, current_year: i32) -> Decimal {
    let year = match construction_year {
        Some(y) if y != 0 => y,
        _ => return Decimal::ZERO,
    };
    let age = current_year - year;
    if age <= 5 {
        dec!(0)
    } else if age <= 10 {
        dec!(0.05)
    } else if age <= 20 {
        dec!(0.1)
    } else if age <= 30 {
        dec!(0.2)
    } else {
        dec!(0.3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURRENT: i32 = 2025;

    fn factor_for_age(age: i32) -> Decimal {
        depreciation_factor(Some(CURRENT - age), CURRENT)
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(factor_for_age(0), dec!(0));
        assert_eq!(factor_for_age(5), dec!(0));
        assert_eq!(factor_for_age(6), dec!(0.05));
        assert_eq!(factor_for_age(10), dec!(0.05));
        assert_eq!(factor_for_age(11), dec!(0.1));
        assert_eq!(factor_for_age(20), dec!(0.1));
        assert_eq!(factor_for_age(21), dec!(0.2));
        assert_eq!(factor_for_age(30), dec!(0.2));
        assert_eq!(factor_for_age(31), dec!(0.3));
        assert_eq!(factor_for_age(120), dec!(0.3));
    }

    #[test]
    fn absent_year_means_no_depreciation() {
        assert_eq!(depreciation_factor(None, CURRENT), dec!(0));
    }

    #[test]
    fn zero_year_means_no_depreciation() {
        assert_eq!(depreciation_factor(Some(0), CURRENT), dec!(0));
    }

    #[test]
    fn future_year_means_no_depreciation() {
        assert_eq!(depreciation_factor(Some(CURRENT + 3), CURRENT), dec!(0));
    }
}
