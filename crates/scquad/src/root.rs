//! Digit-by-digit root solver for monotone functions on [0, ∞).
//!
//! Not classical bisection: the integer part of the root is unknown a priori,
//! so the solver first sweeps unit intervals for a sign change and then fixes
//! one decimal digit per refinement step. Base-10 bisection trades asymptotic
//! rate for an exact correspondence with a target count of significant decimal
//! digits, which is what the hypergeometric callers need to avoid amplifying
//! error. Cost: O(upper_bound + 9·digits) function evaluations.
//!
//! The fractional accumulator is numeric (`x += d·step`, `step /= 10`); no
//! digit strings are assembled. When no sign change shows up among digits
//! 0..8, the remaining `[x+9·step, x+10·step]` subinterval must bracket the
//! root for a monotone function; that is verified before digit 9 is accepted,
//! and a failed verification surfaces as `PrecisionExhausted` instead of a
//! silently wrong digit.

use rug::Float;

use crate::error::RootError;
use crate::num::{sgn, Prec, Real};

/// Search configuration for `find_root`.
#[derive(Clone, Copy, Debug)]
pub struct RootCfg {
    /// Absolute tolerance for the integer exact-hit shortcut.
    pub exact_tol: f64,
    /// Inclusive bound on the integer-part sweep.
    pub upper_bound: u32,
    /// Number of fractional decimal digits to fix.
    pub digits: u32,
}

impl Default for RootCfg {
    fn default() -> Self {
        Self {
            exact_tol: 1e-15,
            upper_bound: 1000,
            digits: 30,
        }
    }
}

/// Find the positive root of a continuous, monotone `f` with a single sign
/// change in `[0, upper_bound]`. Returns the lower end of the final
/// bracketing interval, i.e. the root truncated to `digits` decimals.
///
/// Deterministic: identical inputs yield bit-identical results.
pub fn find_root<F>(p: Prec, mut f: F, cfg: RootCfg) -> Result<Real, RootError>
where
    F: FnMut(&Real) -> Real,
{
    let bits = p.bits();

    // Integer-part sweep.
    let mut fl: u32 = 0;
    let mut lo_val = f(&p.zero());
    let lo_sign = loop {
        if fl >= cfg.upper_bound {
            return Err(RootError::NoSignChange {
                upper_bound: cfg.upper_bound,
            });
        }
        let s = sgn(&lo_val).ok_or(RootError::NonFinite { at: fl as f64 })?;
        let hi_val = f(&p.real((fl + 1) as f64));
        let hi_sign = sgn(&hi_val).ok_or(RootError::NonFinite {
            at: (fl + 1) as f64,
        })?;
        if hi_sign != s {
            break s;
        }
        fl += 1;
        lo_val = hi_val;
    };

    if lo_val.abs() < cfg.exact_tol {
        return Ok(p.real(fl as f64));
    }

    // Fractional refinement. `x` stays the lower bracket end and keeps the
    // sign `lo_sign` throughout.
    let mut x = p.real(fl as f64);
    let mut step = p.one();
    for pos in 0..cfg.digits {
        step /= 10u32;
        let mut advanced = false;
        for d in 1..=9u32 {
            let probe = &x + Float::with_val(bits, &step * d);
            let s = sgn(&f(&probe)).ok_or(RootError::NonFinite { at: probe.to_f64() })?;
            if s != lo_sign {
                // Root is in [x + (d-1)·step, x + d·step).
                if d > 1 {
                    x += Float::with_val(bits, &step * (d - 1));
                }
                advanced = true;
                break;
            }
        }
        if !advanced {
            // Digits 0..8 showed no change; confirm the last subinterval.
            let hi = &x + Float::with_val(bits, &step * 10u32);
            let s_hi = sgn(&f(&hi)).ok_or(RootError::NonFinite { at: hi.to_f64() })?;
            if s_hi == lo_sign {
                return Err(RootError::PrecisionExhausted { position: pos });
            }
            x += Float::with_val(bits, &step * 9u32);
        }
    }
    Ok(x)
}
