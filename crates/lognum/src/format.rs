//! Scientific and mixed (suffix) notation.
//!
//! Two human-readable renderings over [`LogNum`]: [`sci`] prints
//! `<mantissa>e<exponent>` with a thousands-grouped exponent, [`mix`]
//! prints a scaled number with a short-scale suffix (`1.23M`). Each falls
//! back to the other at its ceiling: `mix` hands values past the last
//! suffix tier to `sci`, and `sci` hands exponents too large to show
//! digit-by-digit back to `mix` applied to the stored log itself.
//!
//! Both share an adaptive-places rule near the 1..999 boundary: the
//! fractional digit count shrinks by one for each order of magnitude the
//! *rounded* rendering reaches, keeping the significant-digit count
//! roughly constant. Thresholds compare the rendering parsed back as a
//! number, not the raw value, so a value that rounds across a boundary is
//! treated as being on the far side of it.

use crate::value::LogNum;

/// Suffix table for mixed notation, indexed by thousands-group
/// (thousand, million, billion, … octillion).
///
/// Process-wide read-only state; group 0 carries no suffix.
pub const SUFFIXES: [&str; 10] = ["", "k", "M", "B", "T", "Qd", "Qt", "Sx", "Sp", "Oc"];

/// Stored-log ceiling for digit-by-digit scientific exponents
/// (the value `1e100000000000`). At or past it, the exponent itself is
/// rendered in mixed notation.
const SCI_EXP_LIMIT: f64 = 1e11;

/// Mixed-notation ceiling: the suffix table covers nine tiers, up to
/// `Oc` at `1e27..1e30`.
const MIX_LIMIT: f64 = 1e30;

/// Numeric value of a fixed rendering. `"1.23e45"` reads back fully,
/// the degenerate `"e<log>"` form reads back as NaN.
fn rendered(x: LogNum, places: usize) -> f64 {
    x.to_fixed(places).parse().unwrap_or(f64::NAN)
}

/// Format in scientific notation: `"2.50e500"`, `"1.00e1,234,567"`.
///
/// `places` is the fractional digit count below 1000 (reduced adaptively
/// as the value approaches the boundary), `places_over_e3` applies once
/// an exponent is shown. Overflow and invalid values format as the
/// literals `"Infinity"` / `"NaN"`.
pub fn sci(x: impl Into<LogNum>, places: usize, places_over_e3: usize) -> String {
    let x = x.into();
    if x.log10() == f64::INFINITY {
        return "Infinity".to_string();
    }
    if x.log10().is_nan() {
        return "NaN".to_string();
    }

    let mut places = places;
    if rendered(x, places) >= 1e1 {
        places = places.saturating_sub(1);
    }
    if rendered(x, places) >= 1e2 {
        places = places.saturating_sub(1);
    }
    if rendered(x, places) < 1e3 {
        return x.to_fixed(places);
    }

    if x < LogNum::from_log10(SCI_EXP_LIMIT) {
        let mantissa = format!("{:.*}", places_over_e3, x.mantissa());
        if mantissa.parse::<f64>().unwrap_or(f64::NAN) == 10.0 {
            // the mantissa rounded up a full decade; carry into the exponent
            format!(
                "{:.*}e{}",
                places_over_e3,
                1.0,
                group_thousands(x.exponent() + 1.0)
            )
        } else {
            format!("{}e{}", mantissa, group_thousands(x.exponent()))
        }
    } else {
        format!("e{}", mix(LogNum::new(x.log10()), 10))
    }
}

/// Format in mixed notation: `"999"`, `"1.23M"`, `"45.6Qd"`.
///
/// `places` is the fractional digit count at the bottom of each suffix
/// tier; it shrinks as the value approaches the next tier so the digit
/// total stays level. Values past the suffix table fall back to [`sci`].
pub fn mix(x: impl Into<LogNum>, places: usize) -> String {
    let x = x.into();
    if x.log10() == f64::NEG_INFINITY {
        return "0".to_string();
    }

    let base_places = places;
    let mut places = places;
    if rendered(x, places) >= 1e1 {
        places = places.saturating_sub(1);
    }
    if rendered(x, places) >= 1e2 {
        places = places.saturating_sub(1);
    }
    if rendered(x, places) < 1e3 {
        return x.to_fixed(places);
    }

    if rendered(x, places) < MIX_LIMIT {
        // values here are at least 1000 once rounded, so e >= 2
        let e = x.exponent() as i64;
        let e3 = (e / 3) as usize;
        let group_places = ((-e % 3) + base_places as i64).max(0) as usize;
        let scaled = x / LogNum::from_log10((e3 * 3) as f64);
        let fixed = scaled.to_fixed(group_places);
        if fixed == "1000" {
            // rounded into the next tier
            if let Some(suffix) = SUFFIXES.get(e3 + 1) {
                return format!("{:.*}{}", base_places, 1.0, suffix);
            }
            return sci(x, places, 2);
        }
        format!("{}{}", fixed, SUFFIXES[e3])
    } else {
        sci(x, places, 2)
    }
}

impl LogNum {
    /// [`sci`] with the conventional place counts (2 and 2).
    pub fn to_sci(&self) -> String {
        sci(*self, 2, 2)
    }

    /// [`mix`] with the conventional place count (2).
    pub fn to_mix(&self) -> String {
        mix(*self, 2)
    }
}

/// Thousands-group an exponent with commas: `123456` → `"123,456"`.
fn group_thousands(e: f64) -> String {
    let digits = (e as i64).to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sci_below_thousand() {
        assert_eq!(sci(5.0, 2, 2), "5.00");
        // adaptive places: one digit dropped per order of magnitude
        assert_eq!(sci(55.0, 2, 2), "55.0");
        assert_eq!(sci(555.0, 2, 2), "555");
        assert_eq!(sci(0.5, 2, 2), "0.50");
    }

    #[test]
    fn test_sci_exponent_form() {
        assert_eq!(sci(1000.0, 2, 2), "1.00e3");
        assert_eq!(sci(123_456.0, 2, 2), "1.23e5");
        assert_eq!(sci(LogNum::from("1e308"), 2, 2), "1.00e308");
        assert_eq!(sci(LogNum::from("2.5e500"), 2, 2), "2.50e500");
    }

    #[test]
    fn test_sci_mantissa_carry() {
        // 9.999 rounds to 10.00 at two places: carry into the exponent
        assert_eq!(sci(LogNum::from("9.999e5"), 2, 2), "1.00e6");
    }

    #[test]
    fn test_sci_exponent_grouping() {
        assert_eq!(sci(LogNum::from_log10(123_456.789), 2, 2), "6.15e123,456");
        // below 1000 the exponent is not grouped
        assert_eq!(sci(LogNum::from("1e999"), 2, 2), "1.00e999");
        assert_eq!(sci(LogNum::from("1e1000"), 2, 2), "1.00e1,000");
    }

    #[test]
    fn test_sci_specials() {
        assert_eq!(sci(LogNum::INFINITY, 2, 2), "Infinity");
        assert_eq!(sci(LogNum::NAN, 2, 2), "NaN");
        assert_eq!(sci(LogNum::ZERO, 2, 2), "0.00");
    }

    #[test]
    fn test_sci_astronomic_exponent() {
        // at the ceiling the exponent itself goes through mix
        let x = LogNum::from_log10(1e11);
        assert_eq!(sci(x, 2, 2), "e100.00000000B");
    }

    #[test]
    fn test_mix_below_thousand() {
        assert_eq!(mix(0.0, 2), "0");
        assert_eq!(mix(5.0, 2), "5.00");
        assert_eq!(mix(15.0, 2), "15.0");
        assert_eq!(mix(999.0, 2), "999");
    }

    #[test]
    fn test_mix_suffixes() {
        assert_eq!(mix(1000.0, 2), "1.00k");
        assert_eq!(mix(1234.0, 2), "1.23k");
        assert_eq!(mix(12_345.0, 2), "12.3k");
        assert_eq!(mix(123_456.0, 2), "123k");
        assert_eq!(mix(1_234_000.0, 2), "1.23M");
        assert_eq!(mix(LogNum::from("1e9"), 2), "1.00B");
        assert_eq!(mix(LogNum::from("1e12"), 2), "1.00T");
        assert_eq!(mix(LogNum::from("4.56e28"), 2), "45.6Oc");
    }

    #[test]
    fn test_mix_tier_carry() {
        // 999999 scaled into the k tier rounds to 1000: carried up to M
        assert_eq!(mix(999_999.0, 2), "1.00M");
    }

    #[test]
    fn test_mix_falls_back_to_sci() {
        assert_eq!(mix(LogNum::from("1e30"), 2), "1.00e30");
        assert_eq!(mix(LogNum::from("3e45"), 2), "3.00e45");
        assert_eq!(mix(LogNum::INFINITY, 2), "Infinity");
        assert_eq!(mix(LogNum::NAN, 2), "NaN");
    }

    #[test]
    fn test_convenience_methods() {
        assert_eq!(LogNum::new(1_234_000.0).to_mix(), "1.23M");
        assert_eq!(LogNum::from("1e308").to_sci(), "1.00e308");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(308.0), "308");
        assert_eq!(group_thousands(1000.0), "1,000");
        assert_eq!(group_thousands(123_456_789.0), "123,456,789");
    }
}
