use std::fmt;

/// Number of significant decimal digits an `f64` mantissa can carry.
///
/// Operands further apart than this many orders of magnitude cannot affect
/// each other's stored log; rounding at or above this scale is the identity.
pub(crate) const SIG_DIGITS: f64 = 15.0;

/// A sign-less extended-range number stored as its base-10 logarithm.
///
/// The stored log `l` represents the value `10^l`. Three sentinels share
/// the encoding: `l = -∞` is the value 0, `l = +∞` is overflow, and NaN
/// marks an invalid result (e.g. construction from a negative number) and
/// propagates through every operation.
///
/// **IMPORTANT**: This type does NOT implement `Eq` or `Hash` because it
/// wraps an `f64` and NaN != NaN. Equality and ordering scale both logs
/// by `1e-310` before comparing, which flushes sub-ulp log differences.
#[derive(Debug, Clone, Copy)]
pub struct LogNum {
    pub(crate) l: f64,
}

impl LogNum {
    /// The value 0 (`l = -∞`).
    pub const ZERO: Self = Self::from_log10(f64::NEG_INFINITY);
    /// The value 1 (`l = 0`).
    pub const ONE: Self = Self::from_log10(0.0);
    /// Overflow sentinel.
    pub const INFINITY: Self = Self::from_log10(f64::INFINITY);
    /// Invalid-result sentinel.
    pub const NAN: Self = Self::from_log10(f64::NAN);

    /// Create from a native value: `l = log10(value)`.
    ///
    /// 0 becomes [`LogNum::ZERO`]; negative input has no logarithmic
    /// representation and becomes [`LogNum::NAN`].
    pub fn new(value: f64) -> Self {
        Self { l: value.log10() }
    }

    /// Create directly from a stored base-10 log.
    ///
    /// This is how magnitudes too large to hold as a native number enter
    /// the system; the `"e500"` string form routes here.
    pub const fn from_log10(l: f64) -> Self {
        Self { l }
    }

    /// The stored base-10 logarithm.
    pub const fn log10(&self) -> f64 {
        self.l
    }

    /// Check if this is the value 0
    pub fn is_zero(&self) -> bool {
        self.l == f64::NEG_INFINITY
    }

    /// Check if this is the invalid-result sentinel
    pub fn is_nan(&self) -> bool {
        self.l.is_nan()
    }

    /// Check if this is the overflow sentinel
    pub fn is_infinite(&self) -> bool {
        self.l == f64::INFINITY
    }

    /// Check if this represents a finite value (0 included)
    pub fn is_finite(&self) -> bool {
        self.l != f64::INFINITY && !self.l.is_nan()
    }

    /// Decimal exponent of the represented value: `trunc(l)`, 0 for zero.
    pub fn exponent(&self) -> f64 {
        if self.l == f64::NEG_INFINITY {
            return 0.0;
        }
        let e = self.l.trunc();
        // normalize -0 so sub-unit values print "3.1e-1", not "3.1e-0"
        if e == 0.0 { 0.0 } else { e }
    }

    /// Mantissa of the represented value in `[1, 10)`: `10^(l - trunc(l))`,
    /// 0 for zero. Satisfies `value ≈ mantissa × 10^exponent`.
    pub fn mantissa(&self) -> f64 {
        if self.l == f64::NEG_INFINITY {
            return 0.0;
        }
        10f64.powf(self.l - self.l.trunc())
    }

    /// Round down to an integer.
    ///
    /// Identity at `l ≥ 15`: the value is already an integer to
    /// representable precision (and the sentinels pass through).
    pub fn floor(self) -> Self {
        if self.l < SIG_DIGITS {
            Self::new(self.to_number().floor())
        } else {
            self
        }
    }

    /// Round up to an integer. Identity at `l ≥ 15`.
    pub fn ceil(self) -> Self {
        if self.l < SIG_DIGITS {
            Self::new(self.to_number().ceil())
        } else {
            self
        }
    }

    /// Drop any fractional part. Identity at `l ≥ 15`.
    pub fn trunc(self) -> Self {
        if self.l < SIG_DIGITS {
            Self::new(self.to_number().trunc())
        } else {
            self
        }
    }

    /// Round to the nearest integer. Identity at `l ≥ 15`.
    pub fn round(self) -> Self {
        if self.l < SIG_DIGITS {
            Self::new(self.to_number().round())
        } else {
            self
        }
    }

    /// Format the represented value with `places` fractional digits.
    ///
    /// Values that round to 0 at that precision render as fixed-point
    /// zero; overflow renders `"Infinity"`. Past native fixed-point range
    /// the rendering degrades in two steps: `"<mantissa>e<exponent>"`
    /// while the log itself is still native (`21 ≤ l < 1e21`), then
    /// `"e<log>"` once even the log is astronomic.
    pub fn to_fixed(&self, places: usize) -> String {
        if self.l < -(places as f64) - 1.0 {
            return format!("{:.*}", places, 0.0);
        }
        if self.l == f64::INFINITY {
            return "Infinity".to_string();
        }
        if self.l >= 1e21 {
            return format!("e{}", self.l);
        }
        if self.l >= 21.0 {
            return format!("{:.*}e{}", places, self.mantissa(), self.exponent());
        }
        format!("{:.*}", places, self.to_number())
    }

    /// Convert back to a native number: `10^l`.
    ///
    /// Lossy escape hatch — overflows to `f64::INFINITY` past ~1e308.
    pub fn to_number(&self) -> f64 {
        10f64.powf(self.l)
    }
}

impl Default for LogNum {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Canonical round-trip form `"<mantissa>e<exponent>"`, re-parseable by
/// the constructor. NaN and overflow render as literals.
impl fmt::Display for LogNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.l.is_nan() {
            write!(f, "NaN")
        } else if self.l == f64::INFINITY {
            write!(f, "Infinity")
        } else {
            write!(f, "{}e{}", self.mantissa(), self.exponent())
        }
    }
}
