//! Validated sample counts.
//!
//! [`Iterations`] is the only way a count reaches the sampling kernel. Unsigned
//! integers convert infallibly; signed integers, floats and strings go through
//! `TryFrom`/`FromStr` and fail with [`SamplerError::InvalidArgument`] when the
//! value is negative or not a whole number.

use std::fmt;
use std::str::FromStr;

use crate::error::SamplerError;

const ARG: &str = "iterations";

// 2^64
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// A non-negative number of points to sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Iterations(u64);

impl Iterations {
    pub const ZERO: Iterations = Iterations(0);

    #[inline]
    pub const fn new(count: u64) -> Self {
        Iterations(count)
    }

    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Iterations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Iterations> for u64 {
    fn from(value: Iterations) -> Self {
        value.0
    }
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for Iterations {
            #[inline]
            fn from(value: $t) -> Self {
                Iterations(value as u64)
            }
        }
    )*};
}

from_unsigned!(u8, u16, u32, u64, usize);

macro_rules! try_from_signed {
    ($($t:ty),*) => {$(
        impl TryFrom<$t> for Iterations {
            type Error = SamplerError;

            fn try_from(value: $t) -> Result<Self, Self::Error> {
                u64::try_from(value).map(Iterations).map_err(|_| {
                    SamplerError::invalid(ARG, format!("must be non-negative, got {}", value))
                })
            }
        }
    )*};
}

try_from_signed!(i8, i16, i32, i64, isize);

impl TryFrom<f64> for Iterations {
    type Error = SamplerError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(SamplerError::invalid(
                ARG,
                format!("must be a finite integer, got {}", value),
            ));
        }
        if value < 0.0 {
            return Err(SamplerError::invalid(
                ARG,
                format!("must be non-negative, got {}", value),
            ));
        }
        if value.fract() != 0.0 {
            return Err(SamplerError::invalid(
                ARG,
                format!("must be an integer, got {}", value),
            ));
        }
        if value >= U64_LIMIT {
            return Err(SamplerError::invalid(
                ARG,
                format!("must not exceed {}, got {}", u64::MAX, value),
            ));
        }
        Ok(Iterations(value as u64))
    }
}

impl TryFrom<f32> for Iterations {
    type Error = SamplerError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Iterations::try_from(f64::from(value))
    }
}

impl FromStr for Iterations {
    type Err = SamplerError;

    /// Integer strings parse exactly; anything else follows the `f64` rules, so
    /// `"4.0"` is 4 while `"2.5"` is rejected rather than rounded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(count) = trimmed.parse::<u64>() {
            return Ok(Iterations(count));
        }
        if let Ok(signed) = trimmed.parse::<i128>() {
            return if signed == 0 {
                Ok(Iterations::ZERO)
            } else if signed < 0 {
                Err(SamplerError::invalid(
                    ARG,
                    format!("must be non-negative, got {}", signed),
                ))
            } else {
                Err(SamplerError::invalid(
                    ARG,
                    format!("must not exceed {}, got {}", u64::MAX, signed),
                ))
            };
        }
        match trimmed.parse::<f64>() {
            Ok(value) => Iterations::try_from(value),
            Err(_) => Err(SamplerError::invalid(
                ARG,
                format!("not a number: {:?}", s),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_invalid(result: Result<Iterations, SamplerError>) -> bool {
        matches!(
            result,
            Err(SamplerError::InvalidArgument { name: "iterations", .. })
        )
    }

    #[test]
    fn test_unsigned_conversions() {
        assert_eq!(Iterations::from(0_u8), Iterations::ZERO);
        assert_eq!(Iterations::from(7_usize).get(), 7);
        assert_eq!(Iterations::from(u64::MAX).get(), u64::MAX);
    }

    #[test]
    fn test_signed_conversions() {
        assert_eq!(Iterations::try_from(0_i32), Ok(Iterations::ZERO));
        assert_eq!(Iterations::try_from(12_i64), Ok(Iterations::new(12)));
        assert!(is_invalid(Iterations::try_from(-1_i32)));
        assert!(is_invalid(Iterations::try_from(i64::MIN)));
    }

    #[test]
    fn test_float_conversions() {
        assert_eq!(Iterations::try_from(5.0_f64), Ok(Iterations::new(5)));
        assert_eq!(Iterations::try_from(-0.0_f64), Ok(Iterations::ZERO));
        assert!(is_invalid(Iterations::try_from(2.5_f64)));
        assert!(is_invalid(Iterations::try_from(-1.0_f64)));
        assert!(is_invalid(Iterations::try_from(f64::NAN)));
        assert!(is_invalid(Iterations::try_from(f64::INFINITY)));
        assert!(is_invalid(Iterations::try_from(U64_LIMIT)));
        assert!(is_invalid(Iterations::try_from(0.5_f32)));
    }

    #[test]
    fn test_parse() {
        assert_eq!("1000".parse::<Iterations>(), Ok(Iterations::new(1000)));
        assert_eq!(" 3 ".parse::<Iterations>(), Ok(Iterations::new(3)));
        assert_eq!("-0".parse::<Iterations>(), Ok(Iterations::ZERO));
        assert!(is_invalid("-1".parse::<Iterations>()));
        assert!(is_invalid("2.5".parse::<Iterations>()));
        assert_eq!("4.0".parse::<Iterations>(), Ok(Iterations::new(4)));
        assert_eq!("4.0".parse::<Iterations>(), Iterations::try_from(4.0_f64));
        assert!(is_invalid("18446744073709551616".parse::<Iterations>()));
        assert!(is_invalid("many".parse::<Iterations>()));
        assert!(is_invalid("".parse::<Iterations>()));
    }

    #[test]
    fn test_parse_out_of_range_reports_limit() {
        let beyond_i128 = "9".repeat(45);
        for text in ["18446744073709551616", beyond_i128.as_str(), "1e30"] {
            match text.parse::<Iterations>() {
                Err(SamplerError::InvalidArgument { reason, .. }) => {
                    assert!(reason.starts_with("must not exceed"), "{}: {}", text, reason)
                }
                other => panic!("{} parsed as {:?}", text, other),
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Iterations::new(42).to_string(), "42");
    }
}
