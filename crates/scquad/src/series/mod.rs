//! Power-series engine: Taylor expansion of `phi` around x = 1 and the
//! coefficients of its functional inverse.
//!
//! Forward coefficients come from three coupled sequences: closed-form
//! `a(k)`, `b(k)` (gamma/beta/₂F₁(−1) expressions with the gamma ratios
//! rewritten as falling/rising products, which keeps integer τ1 pole-free),
//! the reciprocal-series recursion `c(k)` and the convolution `d(k)`. The
//! `c` recursion is computed bottom-up into a vector local to the call: each
//! `c(k)` reads every earlier entry, but nothing survives the call, so
//! changing angle parameters can never see stale values.
//!
//! Inverse coefficients follow the Lagrange-inversion-style formula indexed
//! by weighted integer partitions; enumeration is exponential in principle,
//! so callers keep the order ≲ 25.

#[cfg(test)]
mod tests;

use rug::ops::Pow;
use rug::Float;

use crate::geom::AngleParams;
use crate::hyp::{beta, hyp2f1};
use crate::num::{Prec, Real};

/// First `n` Taylor coefficients of `phi(·, τ)` around x = 1.
pub fn phi_series_coeffs(p: Prec, n: usize, tau: &AngleParams) -> Vec<Real> {
    if n == 0 {
        return Vec::new();
    }
    let bits = p.bits();
    let t4 = tau.tau4();
    let minus_one = p.real(-1.0);
    let c_a = Float::with_val(bits, &tau.tau2 + &tau.tau3);
    let c_b = Float::with_val(bits, &tau.tau3 + &t4);

    // a(k) = (1/k!)·(Γτ1/Γ(τ1−k))·(B(τ2+k,τ3)/B(τ2,τ3))·₂F₁(k+τ2, 1+k−τ1; k+τ2+τ3; −1)
    // b(k) = (1/k!)·(Γτ1/Γ(τ1−k))·₂F₁(τ4, 1+k−τ1; τ3+τ4; −1)
    // with Γτ1/Γ(τ1−k) = Π_{j=1..k}(τ1−j) and the beta ratio as rising factorials.
    let mut a = Vec::with_capacity(n);
    let mut b = Vec::with_capacity(n);
    let mut fall = p.one();
    let mut rise = p.one();
    let mut inv_fact = p.one();
    for k in 0..n {
        let kk = k as u32;
        if k > 0 {
            fall *= Float::with_val(bits, &tau.tau1 - kk);
            rise *= Float::with_val(bits, &tau.tau2 + (kk - 1))
                / Float::with_val(bits, &c_a + (kk - 1));
            inv_fact /= kk;
        }
        let shared = Float::with_val(bits, &inv_fact * &fall);
        let b_arg = Float::with_val(bits, kk + 1) - &tau.tau1;
        let a_fst = Float::with_val(bits, &tau.tau2 + kk);
        let a_c = Float::with_val(bits, &c_a + kk);
        a.push(
            shared.clone()
                * &rise
                * hyp2f1(p, &a_fst, &b_arg, &a_c, &minus_one),
        );
        b.push(shared * hyp2f1(p, &t4, &b_arg, &c_b, &minus_one));
    }

    // c(0) = 1/b(0); c(k) = −c(0)·Σ_{j=1..k} b(j)·c(k−j).
    let mut c: Vec<Real> = Vec::with_capacity(n);
    c.push(b[0].clone().recip());
    for k in 1..n {
        let mut acc = Float::new(bits);
        for j in 1..=k {
            acc += Float::with_val(bits, &b[j] * &c[k - j]);
        }
        c.push(-(c[0].clone() * acc));
    }

    // d(k) = Σ a(k−j)·c(j), scaled by B(τ2,τ3)/B(τ3,τ4).
    let scale = beta(p, &tau.tau2, &tau.tau3) / beta(p, &tau.tau3, &t4);
    (0..n)
        .map(|k| {
            let mut acc = Float::new(bits);
            for j in 0..=k {
                acc += Float::with_val(bits, &a[k - j] * &c[j]);
            }
            acc * &scale
        })
        .collect()
}

/// All k-tuples `(p1..pk)` of non-negative integers with `Σ i·pᵢ = n`.
pub fn partitions(n: u32, k: u32) -> Vec<Vec<u32>> {
    if k == 1 {
        return vec![vec![n]];
    }
    let mut out = Vec::new();
    for j in 0..=(n / k) {
        for mut head in partitions(n - k * j, k - 1) {
            head.push(j);
            out.push(head);
        }
    }
    out
}

/// Signed multinomial-like partition weight:
/// `λ(k) = (Σ(i+1)kᵢ)! / [(1+Σ i·kᵢ)! · Π kᵢ!]` with i counted from 1.
fn lam(p: Prec, ks: &[u32]) -> Real {
    let bits = p.bits();
    let a: u32 = ks.iter().enumerate().map(|(i, &k)| (i as u32 + 2) * k).sum();
    let b: u32 = 1 + ks
        .iter()
        .enumerate()
        .map(|(i, &k)| (i as u32 + 1) * k)
        .sum::<u32>();
    let mut v = Float::with_val(bits, Float::factorial(a));
    v /= Float::with_val(bits, Float::factorial(b));
    for &k in ks {
        if k > 1 {
            v /= Float::with_val(bits, Float::factorial(k));
        }
    }
    v
}

/// Coefficient `n` of the functional inverse of the series with forward
/// coefficients `phi_coeffs` (which must extend at least to index `n`).
pub fn psi_coeff(p: Prec, n: usize, phi_coeffs: &[Real]) -> Real {
    if n == 0 {
        return p.one();
    }
    if n == 1 {
        return phi_coeffs[1].clone().recip();
    }
    assert!(
        phi_coeffs.len() > n,
        "inverse coefficient {n} needs {} forward coefficients",
        n + 1
    );
    let bits = p.bits();
    let m = (n - 1) as u32;
    let a1 = &phi_coeffs[1];
    let mut sum = Float::new(bits);
    for ks in partitions(m, m) {
        let order: u32 = ks.iter().sum();
        let mut term = lam(p, &ks);
        if order % 2 == 1 {
            term = -term;
        }
        for (j, &k) in ks.iter().enumerate() {
            if k == 0 {
                continue;
            }
            let ratio = Float::with_val(bits, &phi_coeffs[j + 2] / a1);
            term *= Float::with_val(bits, (&ratio).pow(k));
        }
        sum += term;
    }
    sum / Float::with_val(bits, a1.pow(m + 1))
}

/// Horner evaluation of `Σ cₖ (x − center)^k`.
pub fn eval_series(p: Prec, coeffs: &[Real], x: &Real, center: &Real) -> Real {
    let bits = p.bits();
    let dx = Float::with_val(bits, x - center);
    let mut acc = Float::new(bits);
    for ck in coeffs.iter().rev() {
        acc *= &dx;
        acc += ck;
    }
    acc
}

/// Forward series evaluation around the natural expansion point x = 1.
pub fn phi_series(p: Prec, coeffs: &[Real], x: &Real) -> Real {
    eval_series(p, coeffs, x, &p.one())
}

/// Inverse series evaluation around `y0 = phi(1, ·)`, the forward constant
/// coefficient.
pub fn psi_series(p: Prec, coeffs: &[Real], y: &Real, y0: &Real) -> Real {
    eval_series(p, coeffs, y, y0)
}
