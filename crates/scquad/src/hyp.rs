//! Euler beta and Gauss hypergeometric ₂F₁ at working precision.
//!
//! Purpose
//! - Every closed-form angle/length relationship in the solver is a `B·₂F₁`
//!   expression; this module evaluates both over `rug::Float`.
//! - Arguments are real with `z ≤ 1`. Parameters are assumed to come from
//!   angle fractions in (0, 2), which keeps every series parameter `c` off
//!   the non-positive integers.
//!
//! Evaluation strategy
//! - `z = 0`: exactly 1.
//! - `0 < z ≤ 0.75`: defining series, stopped on the relative working epsilon.
//! - `z < 0`: Pfaff transformation `z → z/(z−1)` into (0, 1).
//! - `0.75 < z < 1`: linear `1−z` transformation; when `c−a−b` sits on an
//!   integer (only 0 is reachable from valid angles) the two-term formula
//!   degenerates and the digamma/log series (A&S 15.3.10) is used instead.
//! - `z = 1`: Gauss summation when `c−a−b > 0`, +∞ otherwise. The modulus
//!   function special-cases its `x = 0` endpoint, so the divergent branch is
//!   never load-bearing there.

use rug::ops::Pow;
use rug::Float;

use crate::num::{Prec, Real};

/// Split point between the defining series and the 1−z transformation.
const Z_SPLIT: f64 = 0.75;
/// Hard safety bound on series length; the epsilon stop triggers long before
/// this for any z admitted by the split above.
const MAX_TERMS: usize = 100_000;
/// `c−a−b` closer to an integer than this routes to the logarithmic branch.
const INT_TOL: f64 = 1e-8;

/// Euler beta via the gamma function. Arguments must be positive.
pub fn beta(p: Prec, a: &Real, b: &Real) -> Real {
    let ab = Float::with_val(p.bits(), a + b);
    a.clone().gamma() * b.clone().gamma() / ab.gamma()
}

/// Gauss hypergeometric ₂F₁(a, b; c; z) for real parameters and `z ≤ 1`.
pub fn hyp2f1(p: Prec, a: &Real, b: &Real, c: &Real, z: &Real) -> Real {
    debug_assert!(z.to_f64() <= 1.0 + 1e-15, "hyp2f1 argument beyond 1");
    match z.cmp0() {
        Some(std::cmp::Ordering::Equal) | None => p.one(),
        Some(std::cmp::Ordering::Less) => pfaff(p, a, b, c, z),
        Some(std::cmp::Ordering::Greater) => {
            if *z == 1u32 {
                gauss_at_one(p, a, b, c)
            } else {
                hyp2f1_unit(p, a, b, c, z)
            }
        }
    }
}

/// Dispatch for z in (0, 1).
fn hyp2f1_unit(p: Prec, a: &Real, b: &Real, c: &Real, z: &Real) -> Real {
    if z.to_f64() <= Z_SPLIT {
        series(p, a, b, c, z)
    } else {
        near_one(p, a, b, c, z)
    }
}

/// Defining series, valid and fast for |z| bounded away from 1.
fn series(p: Prec, a: &Real, b: &Real, c: &Real, z: &Real) -> Real {
    let bits = p.bits();
    let eps = p.eps();
    let mut term = Float::with_val(bits, 1);
    let mut sum = Float::with_val(bits, 1);
    for n in 0..MAX_TERMS {
        let nn = n as u32;
        let num = Float::with_val(bits, a + nn) * Float::with_val(bits, b + nn);
        let den = Float::with_val(bits, c + nn) * Float::with_val(bits, nn + 1);
        term *= num;
        term /= den;
        term *= z;
        if term.cmp0() == Some(std::cmp::Ordering::Equal) {
            // terminating case (a or b a non-positive integer)
            break;
        }
        sum += &term;
        let rel = term.clone().abs() / sum.clone().abs();
        if rel <= eps {
            break;
        }
    }
    sum
}

/// Pfaff: ₂F₁(a,b;c;z) = (1−z)^(−a) ₂F₁(a, c−b; c; z/(z−1)) for z < 0.
fn pfaff(p: Prec, a: &Real, b: &Real, c: &Real, z: &Real) -> Real {
    let bits = p.bits();
    let one_minus_z = Float::with_val(bits, 1 - z);
    let z_minus_one = Float::with_val(bits, z - 1);
    let w = Float::with_val(bits, z / &z_minus_one);
    let neg_a = Float::with_val(bits, -a);
    let prefac = Float::with_val(bits, (&one_minus_z).pow(&neg_a));
    let cb = Float::with_val(bits, c - b);
    // w in (0, 1); may still land in the near-one regime for large |z|.
    prefac * hyp2f1_unit(p, a, &cb, c, &w)
}

/// Gauss summation at z = 1; +∞ when the series diverges there.
fn gauss_at_one(p: Prec, a: &Real, b: &Real, c: &Real) -> Real {
    let bits = p.bits();
    let d = Float::with_val(bits, c - a) - b;
    if d.cmp0() != Some(std::cmp::Ordering::Greater) {
        return Float::with_val(bits, rug::float::Special::Infinity);
    }
    let ca = Float::with_val(bits, c - a);
    let cb = Float::with_val(bits, c - b);
    c.clone().gamma() * d.gamma() / (ca.gamma() * cb.gamma())
}

/// Linear 1−z transformation for z in (Z_SPLIT, 1).
fn near_one(p: Prec, a: &Real, b: &Real, c: &Real, z: &Real) -> Real {
    let bits = p.bits();
    let w = Float::with_val(bits, 1 - z);
    let d = Float::with_val(bits, c - a) - b;
    let d_round = d.to_f64().round();
    if (d.to_f64() - d_round).abs() <= INT_TOL {
        debug_assert!(
            d_round == 0.0,
            "integer c-a-b other than 0 is unreachable from valid angles"
        );
        return near_one_log(p, a, b, &w);
    }
    // A&S 15.3.6, c−a−b non-integer.
    let ca = Float::with_val(bits, c - a);
    let cb = Float::with_val(bits, c - b);
    let one_minus_d = Float::with_val(bits, 1 - &d);
    let one_plus_d = Float::with_val(bits, 1 + &d);
    let neg_d = Float::with_val(bits, -&d);
    let t1 = c.clone().gamma() * d.clone().gamma() / (ca.clone().gamma() * cb.clone().gamma())
        * series(p, a, b, &one_minus_d, &w);
    let t2 = Float::with_val(bits, (&w).pow(&d)) * c.clone().gamma() * neg_d.gamma()
        / (a.clone().gamma() * b.clone().gamma())
        * series(p, &ca, &cb, &one_plus_d, &w);
    t1 + t2
}

/// Logarithmic case c = a + b (A&S 15.3.10):
/// ₂F₁(a,b;a+b;1−w) = Γ(a+b)/(Γa·Γb) · Σ ((a)ₙ(b)ₙ/(n!)²)
///                     [2ψ(n+1) − ψ(a+n) − ψ(b+n) − ln w] wⁿ.
fn near_one_log(p: Prec, a: &Real, b: &Real, w: &Real) -> Real {
    let bits = p.bits();
    let eps = p.eps();
    let ln_w = w.clone().ln();
    let mut psi_a = a.clone().digamma();
    let mut psi_b = b.clone().digamma();
    let mut psi_n = Float::with_val(bits, 1).digamma();
    let mut poch = Float::with_val(bits, 1);
    let mut wn = Float::with_val(bits, 1);
    let mut sum = Float::new(bits);
    for n in 0..MAX_TERMS {
        let mut bracket = psi_n.clone();
        bracket *= 2;
        bracket -= &psi_a;
        bracket -= &psi_b;
        bracket -= &ln_w;
        let term = poch.clone() * wn.clone() * bracket;
        sum += &term;
        if n > 2 && term.abs() <= sum.clone().abs() * &eps {
            break;
        }
        let nn = n as u32;
        let a_n = Float::with_val(bits, a + nn);
        let b_n = Float::with_val(bits, b + nn);
        let n1 = Float::with_val(bits, nn + 1);
        poch *= &a_n;
        poch *= &b_n;
        poch /= n1.clone().square();
        wn *= w;
        psi_a += a_n.recip();
        psi_b += b_n.recip();
        psi_n += n1.recip();
    }
    let ab = Float::with_val(bits, a + b);
    ab.gamma() / (a.clone().gamma() * b.clone().gamma()) * sum
}
