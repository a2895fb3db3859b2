//! Parameter assembly: from four vertices and angles to `(r, A, C)`.
//!
//! The canonical-domain parameter `r` comes from inverting the generalized
//! modulus against the side-length ratio `|w2−w3|/|w3−w4|`. `phi` is only
//! monotone for framings whose reference angle stays at or below π, so the
//! solver walks the four cyclic rotations of the vertex/angle tuple (fixed
//! array + start offset), skipping invalid ones and un-rotating the result
//! (`1/r` for odd rotation counts). `A` and `C` then follow from the
//! real-normalizing affine map and a single hypergeometric expression.
//!
//! `reconstruct_vertices`/`reconstruction_error` run the forward map and are
//! the primary correctness oracle: a correctly solved instance reproduces its
//! input vertices to near working precision.

use nalgebra::Vector2;
use rug::ops::Pow;
use rug::{Complex, Float};

use crate::error::{GeometryError, RootError, ScError};
use crate::geom::{self, AngleParams};
use crate::hyp::{beta, hyp2f1};
use crate::modulus::{phi, side_lengths};
use crate::num::{cx_abs, cx_recip, Cx, Prec, Real};
use crate::root::{find_root, RootCfg};

/// Conformal map parameters: cross-ratio-like invariant `r`, translation `A`,
/// scale+rotation `C` (always nonzero).
#[derive(Clone, Debug)]
pub struct ScParams {
    pub r: Real,
    pub a: Cx,
    pub c: Cx,
}

/// A solved quadrilateral: parameters plus the normalized inputs they belong to.
#[derive(Clone, Debug)]
pub struct Solution {
    pub params: ScParams,
    pub tau: AngleParams,
    pub vertices: [Vector2<f64>; 4],
}

/// Invert the generalized modulus over the four cyclic framings.
pub fn calc_r_invariant(
    p: Prec,
    w: &[Cx; 4],
    tau: &AngleParams,
    cfg: RootCfg,
) -> Result<Real, ScError> {
    let bits = p.bits();
    let taus = tau.as_array();
    for rot in 0..4usize {
        // phi is not monotone when the reference angle exceeds pi.
        if taus[rot] > 1.0 {
            continue;
        }
        let at = |k: usize| (rot + k) % 4;
        let d23 = Complex::with_val(bits, &w[at(1)] - &w[at(2)]);
        let d34 = Complex::with_val(bits, &w[at(2)] - &w[at(3)]);
        let phi0 = cx_abs(&d23) / cx_abs(&d34);
        let framed = AngleParams {
            tau1: taus[at(0)].clone(),
            tau2: taus[at(1)].clone(),
            tau3: taus[at(2)].clone(),
        };
        match find_root(p, |x| phi(p, x, &framed) - &phi0, cfg) {
            Ok(r) => {
                return Ok(if rot % 2 == 0 { r } else { r.recip() });
            }
            Err(RootError::NoSignChange { .. }) => continue,
            Err(e) => return Err(ScError::Root(e)),
        }
    }
    Err(ScError::Degenerate)
}

/// Full parameter solve for vertices already in clockwise order with angles
/// already extracted. `solve` wires the preprocessing in front.
pub fn calc_sc_params(
    p: Prec,
    verts: &[Vector2<f64>; 4],
    tau: &AngleParams,
    cfg: RootCfg,
) -> Result<ScParams, ScError> {
    let bits = p.bits();
    let w = geom::lift4(p, verts);

    let d14 = Complex::with_val(bits, &w[0] - &w[3]);
    let abs14 = cx_abs(&d14);
    if abs14.cmp0() != Some(std::cmp::Ordering::Greater) {
        return Err(GeometryError::CoincidentVertices { index: 3 }.into());
    }
    let cp = cx_recip(&d14) * &abs14;
    let mut ap = Complex::with_val(bits, &cp * &w[3]);
    ap = -ap;

    let r = calc_r_invariant(p, &w, tau, cfg)?;

    // Cpp = 2^(1-tau2)/|w1-w2| * (1 + 1/(1+r))^(1-tau3)
    //       * B(tau1,tau2) * 2F1(tau1, 1-tau3; tau1+tau2; 1/(1+r)).
    let abs12 = cx_abs(&Complex::with_val(bits, &w[0] - &w[1]));
    let z = Float::with_val(bits, 1 + &r).recip();
    let e2 = Float::with_val(bits, 1 - &tau.tau2);
    let e3 = Float::with_val(bits, 1 - &tau.tau3);
    let two = Float::with_val(bits, 2);
    let base = Float::with_val(bits, 1 + &z);
    let c12 = Float::with_val(bits, &tau.tau1 + &tau.tau2);
    let cpp = Float::with_val(bits, (&two).pow(&e2)) / abs12
        * Float::with_val(bits, (&base).pow(&e3))
        * beta(p, &tau.tau1, &tau.tau2)
        * hyp2f1(p, &tau.tau1, &e3, &c12, &z);

    let a = -(Complex::with_val(bits, &ap * cx_recip(&cp)));
    let c = cx_recip(&(cp * cpp));
    Ok(ScParams { r, a, c })
}

/// Forward map: rebuild the four vertices from `(A, C, r)`.
pub fn reconstruct_vertices(
    p: Prec,
    params: &ScParams,
    tau: &AngleParams,
    theta: &Real,
) -> [Cx; 4] {
    let bits = p.bits();
    let pi = p.pi();
    let rotate = |frac: Real| -> Cx {
        let ang = frac * &pi;
        Complex::with_val(bits, (ang.clone().cos(), ang.sin()))
    };
    let l = side_lengths(p, &params.r, theta, tau);

    let f2 = Float::with_val(bits, &tau.tau1 - 1);
    let f3 = Float::with_val(bits, &tau.tau1 + &tau.tau2) - 2u32;
    let f4 = Float::with_val(bits, &tau.tau1 + &tau.tau2) + &tau.tau3 - 3u32;
    let s2 = rotate(f2) * &l[1];
    let s3 = rotate(f3) * &l[2];
    let s4 = rotate(f4) * &l[3];

    let w1 = Complex::with_val(bits, (0, 0));
    let w2 = Complex::with_val(bits, &w1 + &s2);
    let w3 = Complex::with_val(bits, &w2 + &s3);
    let w4 = Complex::with_val(bits, &w3 + &s4);

    let place = |wi: &Cx| -> Cx {
        let shifted = Complex::with_val(bits, wi - &w4);
        Complex::with_val(bits, &params.a + (&params.c * shifted))
    };
    [place(&w1), place(&w2), place(&w3), place(&w4)]
}

/// Accumulated absolute vertex error of the forward map against the input.
pub fn reconstruction_error(
    p: Prec,
    verts: &[Vector2<f64>; 4],
    params: &ScParams,
    tau: &AngleParams,
) -> Real {
    let bits = p.bits();
    let w = geom::lift4(p, verts);
    let v = reconstruct_vertices(p, params, tau, &p.one());
    let mut acc = p.zero();
    for i in 0..4 {
        acc += cx_abs(&Complex::with_val(bits, &v[i] - &w[i]));
    }
    acc
}

/// Parameter-solving entry point: winding normalization, angle extraction,
/// then the `(r, A, C)` assembly.
pub fn solve(p: Prec, verts: [Vector2<f64>; 4], cfg: RootCfg) -> Result<Solution, ScError> {
    let verts = geom::make_clockwise(p, verts)?;
    let tau = geom::find_quad_angles(p, &verts)?;
    let params = calc_sc_params(p, &verts, &tau, cfg)?;
    Ok(Solution {
        params,
        tau,
        vertices: verts,
    })
}
