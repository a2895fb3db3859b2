//! Working-precision configuration and extended-precision numeric aliases.
//!
//! Purpose
//! - Centralize the decimal-digits → MPFR-bits mapping so every entry point
//!   takes an explicit `Prec` instead of relying on a process-wide precision.
//! - Provide the few complex helpers the solver needs (`cx_abs`, `cx_recip`)
//!   on top of `rug::Complex`.
//!
//! Independent solves may use independent precision; nothing here is global.

use std::cmp::Ordering;

use rug::float::Constant;
use rug::{Complex, Float};

/// Extended-precision real (MPFR-backed).
pub type Real = Float;
/// Extended-precision complex (MPC-backed).
pub type Cx = Complex;

/// Working precision in significant decimal digits.
///
/// The hypergeometric ratios and the digit-by-digit root search accumulate
/// error; double precision is not enough for high-digit-count roots, so all
/// numerics run on `rug` values created at `bits()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Prec {
    digits: u32,
}

impl Prec {
    /// Clamps below 10 digits; less gives the digit search no room to work.
    pub const fn new(digits: u32) -> Self {
        Self {
            digits: if digits < 10 { 10 } else { digits },
        }
    }

    #[inline]
    pub fn digits(self) -> u32 {
        self.digits
    }

    /// Mantissa bits for `digits` significant decimals, plus guard bits for
    /// the cancellation-prone hypergeometric transformations.
    #[inline]
    pub fn bits(self) -> u32 {
        (self.digits as f64 * std::f64::consts::LOG2_10).ceil() as u32 + 32
    }

    #[inline]
    pub fn real(self, v: f64) -> Real {
        Float::with_val(self.bits(), v)
    }

    #[inline]
    pub fn zero(self) -> Real {
        Float::new(self.bits())
    }

    #[inline]
    pub fn one(self) -> Real {
        Float::with_val(self.bits(), 1)
    }

    #[inline]
    pub fn pi(self) -> Real {
        Float::with_val(self.bits(), Constant::Pi)
    }

    /// `10^-digits`, the target relative tolerance at this precision.
    pub fn eps(self) -> Real {
        Float::with_val(self.bits(), Float::u_pow_u(10, self.digits)).recip()
    }

    #[inline]
    pub fn cx(self, re: f64, im: f64) -> Cx {
        Complex::with_val(self.bits(), (re, im))
    }
}

impl Default for Prec {
    fn default() -> Self {
        Self::new(30)
    }
}

/// |c| as a real at the precision of the operand.
#[inline]
pub fn cx_abs(c: &Cx) -> Real {
    Float::with_val(c.prec().0, c.abs_ref())
}

/// 1/c via conj(c)/|c|², at the precision of the operand.
pub fn cx_recip(c: &Cx) -> Cx {
    let norm = Float::with_val(c.prec().0, c.norm_ref());
    let mut out = c.clone().conj();
    out /= norm;
    out
}

/// Sign of a real: -1, 0 or +1; `None` for NaN.
#[inline]
pub(crate) fn sgn(x: &Real) -> Option<i8> {
    if x.is_nan() {
        return None;
    }
    Some(match x.cmp0() {
        Some(Ordering::Less) => -1,
        Some(Ordering::Greater) => 1,
        _ => 0,
    })
}
