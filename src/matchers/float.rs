use std::fmt::Debug;

use crate::MatchArg;

/// Two values are considered almost equal when they are no more than
/// this many representable numbers apart.
const MAX_ULPS: u64 = 4;

/// Floating-point type which can be compared by ULP distance.
pub trait UlpComparable: Copy + PartialEq + Debug {
    fn is_nan_value(self) -> bool;
    fn ulp_distance(self, other: Self) -> u64;
}

// Raw IEEE 754 bits are sign-magnitude, so they can't be subtracted
// directly. Remapping them to a monotonically ordered (biased) space
// makes the difference between two bit patterns equal to the number of
// representable values between them.

fn biased32(bits: u32) -> u32 {
    const SIGN_BIT: u32 = 1 << 31;
    if bits & SIGN_BIT != 0 {
        (!bits).wrapping_add(1)
    } else {
        bits | SIGN_BIT
    }
}

fn biased64(bits: u64) -> u64 {
    const SIGN_BIT: u64 = 1 << 63;
    if bits & SIGN_BIT != 0 {
        (!bits).wrapping_add(1)
    } else {
        bits | SIGN_BIT
    }
}

impl UlpComparable for f32 {
    fn is_nan_value(self) -> bool {
        self.is_nan()
    }
    fn ulp_distance(self, other: Self) -> u64 {
        let a = biased32(self.to_bits());
        let b = biased32(other.to_bits());
        u64::from(a.max(b) - a.min(b))
    }
}

impl UlpComparable for f64 {
    fn is_nan_value(self) -> bool {
        self.is_nan()
    }
    fn ulp_distance(self, other: Self) -> u64 {
        let a = biased64(self.to_bits());
        let b = biased64(other.to_bits());
        a.max(b) - a.min(b)
    }
}

/// This struct is created by the [`float_eq`] function. See its documentation for more.
///
/// [`float_eq`]: fn.float_eq.html
pub struct FloatEqMatchArg<F: UlpComparable>(F);
impl<F: UlpComparable> MatchArg<F> for FloatEqMatchArg<F> {
    fn matches(&self, arg: &F) -> Result<(), String> {
        if arg.is_nan_value() || self.0.is_nan_value() {
            Err(format!("{:?} is not approximately equal to {:?}", arg, self.0))
        } else if arg.ulp_distance(self.0) <= MAX_ULPS {
            Ok(())
        } else {
            Err(format!("{:?} is not approximately equal to {:?}", arg, self.0))
        }
    }

    fn describe(&self) -> String {
        format!("float_eq({:?})", self.0)
    }
}

/// Matches a floating-point value approximately equal to `value`
/// (within 4 ULPs). NaN is never approximately equal to anything,
/// not even to another NaN.
pub fn float_eq<F: UlpComparable>(value: F) -> FloatEqMatchArg<F> {
    FloatEqMatchArg(value)
}

/// This struct is created by the [`nan_sensitive_float_eq`] function.
/// See its documentation for more.
///
/// [`nan_sensitive_float_eq`]: fn.nan_sensitive_float_eq.html
pub struct NanSensitiveFloatEqMatchArg<F: UlpComparable>(F);
impl<F: UlpComparable> MatchArg<F> for NanSensitiveFloatEqMatchArg<F> {
    fn matches(&self, arg: &F) -> Result<(), String> {
        if arg.is_nan_value() && self.0.is_nan_value() {
            Ok(())
        } else if !arg.is_nan_value() && !self.0.is_nan_value()
            && arg.ulp_distance(self.0) <= MAX_ULPS
        {
            Ok(())
        } else {
            Err(format!("{:?} is not approximately equal to {:?}", arg, self.0))
        }
    }

    fn describe(&self) -> String {
        format!("nan_sensitive_float_eq({:?})", self.0)
    }
}

/// Same as [`float_eq`], except that two NaN values are considered
/// equal to each other.
///
/// [`float_eq`]: fn.float_eq.html
pub fn nan_sensitive_float_eq<F: UlpComparable>(value: F) -> NanSensitiveFloatEqMatchArg<F> {
    NanSensitiveFloatEqMatchArg(value)
}
