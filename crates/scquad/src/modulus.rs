//! Generalized modulus function `phi` and the side-length family.
//!
//! `phi(x, τ1, τ2, τ3)` is a ratio of two `B·₂F₁` expressions, strictly
//! increasing in `x` on [0, ∞) for valid angle parameters; that monotonicity
//! is what the digit-by-digit root solver relies on. The side-length family
//! shares the same machinery scaled by powers of `θ`, `1+θ`, `1+θ+rθ` and is
//! used for vertex reconstruction and verification only.

use rug::ops::Pow;
use rug::Float;

use crate::geom::AngleParams;
use crate::hyp::{beta, hyp2f1};
use crate::num::{Prec, Real};

/// Generalized modulus: `B(τ2,τ3)·₂F₁(τ3, 1−τ1; τ2+τ3; x/(1+x))` over
/// `B(τ3,τ4)·₂F₁(τ3, 1−τ1; τ3+τ4; 1/(1+x))`, with `phi(0) = 0`.
pub fn phi(p: Prec, x: &Real, tau: &AngleParams) -> Real {
    if x.cmp0() != Some(std::cmp::Ordering::Greater) {
        return p.zero();
    }
    let bits = p.bits();
    let t4 = tau.tau4();
    let one_plus_x = Float::with_val(bits, 1 + x);
    let za = Float::with_val(bits, x / &one_plus_x);
    let zb = one_plus_x.recip();
    let b_arg = Float::with_val(bits, 1 - &tau.tau1);
    let c_num = Float::with_val(bits, &tau.tau2 + &tau.tau3);
    let c_den = Float::with_val(bits, &tau.tau3 + &t4);
    let num = beta(p, &tau.tau2, &tau.tau3) * hyp2f1(p, &tau.tau3, &b_arg, &c_num, &za);
    let den = beta(p, &tau.tau3, &t4) * hyp2f1(p, &tau.tau3, &b_arg, &c_den, &zb);
    num / den
}

/// Classical conformal modulus: `phi` at τ1=τ2=τ3=1/2, i.e. the elliptic
/// integral ratio `K(√(1−k²))/K(k)` with `k = 1/√(1+r)`.
pub fn conformal_modulus(p: Prec, r: &Real) -> Real {
    let tau = AngleParams::new(p, 0.5, 0.5, 0.5);
    phi(p, r, &tau)
}

/// `B(a,b)·₂F₁(a, 1−c; a+b; z)` — the building block shared by the four
/// side-length expressions.
fn hyp_pair(p: Prec, a: &Real, b: &Real, c: &Real, z: &Real) -> Real {
    let bits = p.bits();
    let snd = Float::with_val(bits, 1 - c);
    let ab = Float::with_val(bits, a + b);
    beta(p, a, b) * hyp2f1(p, a, &snd, &ab, z)
}

/// Common scale `θ^(−τ4) (1+θ)^(1−τ2) (1+θ+rθ)^(1−τ3)`.
fn side_scale(p: Prec, r: &Real, theta: &Real, tau: &AngleParams) -> Real {
    let bits = p.bits();
    let t4 = tau.tau4();
    let neg_t4 = Float::with_val(bits, -&t4);
    let e2 = Float::with_val(bits, 1 - &tau.tau2);
    let e3 = Float::with_val(bits, 1 - &tau.tau3);
    let one_plus = Float::with_val(bits, 1 + theta);
    let full = Float::with_val(bits, &one_plus + Float::with_val(bits, r * theta));
    Float::with_val(bits, theta.pow(&neg_t4))
        * Float::with_val(bits, (&one_plus).pow(&e2))
        * Float::with_val(bits, (&full).pow(&e3))
}

/// Physical side lengths `[l1, l2, l3, l4]` of the image quadrilateral for the
/// canonical parameter `r` (and auxiliary `theta`), up to the affine factor.
pub fn side_lengths(p: Prec, r: &Real, theta: &Real, tau: &AngleParams) -> [Real; 4] {
    let bits = p.bits();
    let t4 = tau.tau4();
    let scale = side_scale(p, r, theta, tau);
    let neg_r = Float::with_val(bits, -r);
    let neg_inv_r = Float::with_val(bits, r.recip_ref());
    let neg_inv_r = -neg_inv_r;

    let l1 = scale.clone() * hyp_pair(p, &t4, &tau.tau1, &tau.tau3, &neg_r);

    let e2 = Float::with_val(bits, &tau.tau3 - 1);
    let l2 = Float::with_val(bits, r.pow(&e2))
        * scale.clone()
        * hyp_pair(p, &tau.tau2, &tau.tau1, &tau.tau3, &neg_inv_r);

    let e3 = Float::with_val(bits, &tau.tau2 + &tau.tau3) - 1u32;
    let l3 = Float::with_val(bits, r.pow(&e3))
        * scale.clone()
        * hyp_pair(p, &tau.tau2, &tau.tau3, &tau.tau1, &neg_r);

    let e4 = Float::with_val(bits, -&t4);
    let l4 = Float::with_val(bits, r.pow(&e4))
        * scale
        * hyp_pair(p, &t4, &tau.tau3, &tau.tau1, &neg_inv_r);

    [l1, l2, l3, l4]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p() -> Prec {
        Prec::new(30)
    }

    #[test]
    fn phi_vanishes_at_zero() {
        let pr = p();
        let tau = AngleParams::new(pr, 0.5, 0.5, 0.5);
        assert_eq!(phi(pr, &pr.zero(), &tau).to_f64(), 0.0);
    }

    #[test]
    fn phi_fixes_one_for_symmetric_angles() {
        // For the family (1-a, a, 1-a) both B·2F1 expressions coincide at x=1.
        let pr = p();
        for &a in &[0.5, 0.3, 0.7] {
            let tau = AngleParams::new(pr, 1.0 - a, a, 1.0 - a);
            let v = phi(pr, &pr.one(), &tau);
            assert!((v.to_f64() - 1.0).abs() < 1e-25, "a = {a}");
        }
    }

    #[test]
    fn phi_strictly_increasing() {
        let pr = p();
        let grid = [0.25, 0.5, 1.0, 2.0, 4.0, 8.0];
        for tau in [
            AngleParams::new(pr, 0.5, 0.5, 0.5),
            AngleParams::new(pr, 0.6, 0.7, 0.4),
            AngleParams::new(pr, 0.9, 0.3, 0.5),
        ] {
            let mut prev = phi(pr, &pr.zero(), &tau);
            for &x in &grid {
                let v = phi(pr, &pr.real(x), &tau);
                assert!(v > prev, "not increasing at x = {x}");
                prev = v;
            }
        }
    }

    #[test]
    fn side_lengths_positive_and_square_symmetric() {
        let pr = p();
        let tau = AngleParams::new(pr, 0.5, 0.5, 0.5);
        let one = pr.one();
        let l = side_lengths(pr, &one, &one, &tau);
        for li in &l {
            assert!(li.cmp0() == Some(std::cmp::Ordering::Greater));
        }
        // r = 1 with square angles: opposite sides match.
        assert!(Float::with_val(pr.bits(), &l[0] - &l[2]).abs() < 1e-25);
        assert!(Float::with_val(pr.bits(), &l[1] - &l[3]).abs() < 1e-25);
    }
}
