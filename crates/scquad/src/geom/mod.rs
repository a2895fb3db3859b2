//! Geometry preprocessing for quadrilaterals.
//!
//! Purpose
//! - Normalize vertex winding to the clockwise convention the canonical map
//!   assumes and extract interior angles as fractions of π.
//! - `AngleParams` keeps only τ1..τ3 and derives τ4 = 2 − (τ1+τ2+τ3), so the
//!   quadrilateral angle-sum invariant holds by construction.
//!
//! Vertices enter as `Vector2<f64>` plane points and are lifted to working
//! precision immediately; everything downstream stays in `rug` arithmetic.

pub mod rand;
#[cfg(test)]
mod tests;

use nalgebra::Vector2;
use rug::{Complex, Float};

use crate::error::GeometryError;
use crate::num::{cx_abs, cx_recip, Cx, Prec, Real};

/// Tolerance on |Σ τ − 2| accepted by `find_quad_angles`.
pub const ANGLE_SUM_TOL: f64 = 1e-8;

/// Interior angles divided by π, each in (0, 2). τ4 is always derived.
#[derive(Clone, Debug)]
pub struct AngleParams {
    pub tau1: Real,
    pub tau2: Real,
    pub tau3: Real,
}

impl AngleParams {
    pub fn new(p: Prec, tau1: f64, tau2: f64, tau3: f64) -> Self {
        debug_assert!(tau1 > 0.0 && tau1 < 2.0);
        debug_assert!(tau2 > 0.0 && tau2 < 2.0);
        debug_assert!(tau3 > 0.0 && tau3 < 2.0);
        Self {
            tau1: p.real(tau1),
            tau2: p.real(tau2),
            tau3: p.real(tau3),
        }
    }

    /// τ4 = 2 − (τ1+τ2+τ3); never stored independently.
    pub fn tau4(&self) -> Real {
        let bits = self.tau1.prec();
        Float::with_val(bits, 2) - &self.tau1 - &self.tau2 - &self.tau3
    }

    /// All four angle fractions, τ4 derived.
    pub fn as_array(&self) -> [Real; 4] {
        [
            self.tau1.clone(),
            self.tau2.clone(),
            self.tau3.clone(),
            self.tau4(),
        ]
    }
}

/// Lift a plane point to a working-precision complex number.
#[inline]
pub(crate) fn lift(p: Prec, v: Vector2<f64>) -> Cx {
    p.cx(v.x, v.y)
}

pub(crate) fn lift4(p: Prec, verts: &[Vector2<f64>; 4]) -> [Cx; 4] {
    [
        lift(p, verts[0]),
        lift(p, verts[1]),
        lift(p, verts[2]),
        lift(p, verts[3]),
    ]
}

/// Normalize the winding order to clockwise.
///
/// Applies the unique affine map sending w4 → 0 and w1 onto the positive real
/// direction (`Cp = |w1−w4|/(w1−w4)`, `Ap = −Cp·w4`); if the image of w2 lands
/// in the upper half plane the order is counter-clockwise and is reversed.
/// Idempotent: a clockwise list passes through unchanged.
pub fn make_clockwise(
    p: Prec,
    verts: [Vector2<f64>; 4],
) -> Result<[Vector2<f64>; 4], GeometryError> {
    let bits = p.bits();
    let w = lift4(p, &verts);
    let d14 = Complex::with_val(bits, &w[0] - &w[3]);
    if cx_abs(&d14).cmp0() != Some(std::cmp::Ordering::Greater) {
        return Err(GeometryError::CoincidentVertices { index: 3 });
    }
    let cp = cx_recip(&d14) * cx_abs(&d14);
    let mut ap = Complex::with_val(bits, &cp * &w[3]);
    ap = -ap;
    let img = ap + Complex::with_val(bits, &cp * &w[1]);
    if img.imag().cmp0() == Some(std::cmp::Ordering::Greater) {
        Ok([verts[3], verts[2], verts[1], verts[0]])
    } else {
        Ok(verts)
    }
}

/// Signed angle at `b` between the rays to `a` and to `c`, as a fraction of π
/// in (0, 2). `None` when either ray has zero length.
pub fn find_angle(p: Prec, a: &Cx, b: &Cx, c: &Cx) -> Option<Real> {
    let bits = p.bits();
    let v1 = Complex::with_val(bits, a - b);
    let v2 = Complex::with_val(bits, c - b);
    if cx_abs(&v1).cmp0() != Some(std::cmp::Ordering::Greater)
        || cx_abs(&v2).cmp0() != Some(std::cmp::Ordering::Greater)
    {
        return None;
    }
    let dot = Float::with_val(bits, v1.real() * v2.real()) + Float::with_val(bits, v1.imag() * v2.imag());
    let cross = Float::with_val(bits, v1.real() * v2.imag()) - Float::with_val(bits, v1.imag() * v2.real());
    let mut ang = cross.atan2(&dot) / p.pi();
    if ang.cmp0() != Some(std::cmp::Ordering::Greater) {
        ang += 2u32;
    }
    Some(ang)
}

/// Interior angles at all four vertices, with the Σ τ = 2 self-check.
pub fn find_quad_angles(
    p: Prec,
    verts: &[Vector2<f64>; 4],
) -> Result<AngleParams, GeometryError> {
    let w = lift4(p, verts);
    let mut tau: Vec<Real> = Vec::with_capacity(4);
    for i in 0..4 {
        let prev = &w[(i + 3) % 4];
        let next = &w[(i + 1) % 4];
        let ang = find_angle(p, prev, &w[i], next)
            .ok_or(GeometryError::CoincidentVertices { index: i })?;
        tau.push(ang);
    }
    let sum = Float::with_val(p.bits(), &tau[0] + &tau[1]) + &tau[2] + &tau[3];
    let dev = Float::with_val(p.bits(), &sum - 2u32).abs();
    if dev > ANGLE_SUM_TOL {
        return Err(GeometryError::AngleSum { sum: sum.to_f64() });
    }
    Ok(AngleParams {
        tau1: tau[0].clone(),
        tau2: tau[1].clone(),
        tau3: tau[2].clone(),
    })
}
