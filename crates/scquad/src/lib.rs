//! Schwarz–Christoffel parameter solver for quadrilaterals.
//!
//! Given four plane vertices, the solver finds the accessory parameters
//! `(r, A, C)` of the conformal map from the canonical domain onto the
//! quadrilateral: `r` by inverting the generalized modulus `phi` with a
//! digit-by-digit root search, `A` and `C` in closed form from beta and
//! Gauss hypergeometric values. A power-series engine expands `phi` around
//! x = 1 and inverts the expansion via partition-indexed coefficients.
//!
//! All numerics run in `rug` (MPFR) arbitrary precision; plane inputs enter
//! as `nalgebra` vectors and are lifted once at the boundary.

pub mod api;
pub mod error;
pub mod geom;
pub mod hyp;
pub mod modulus;
pub mod num;
pub mod params;
pub mod root;
pub mod series;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-exports so callers can write plane points and precision
// without reaching into submodules.
pub use nalgebra::Vector2 as Vec2;
pub use num::{Cx, Prec, Real};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{GeometryError, RootError, ScError};
    pub use crate::geom::rand::{draw_quad_radial, QuadCfg, ReplayToken};
    pub use crate::geom::{find_quad_angles, make_clockwise, AngleParams};
    pub use crate::modulus::{conformal_modulus, phi};
    pub use crate::num::{Cx, Prec, Real};
    pub use crate::params::{solve, ScParams, Solution};
    pub use crate::root::RootCfg;
    pub use nalgebra::Vector2 as Vec2;
}
