//! Curated flat API surface (UNSTABLE).
//!
//! Important
//! - This is not a stable public API. It is a convenience surface for
//!   project-internal code; breaking changes are allowed and expected.
//! - Prefer these re-exports for clarity and consistency across experiments.

// Geometry preprocessing
pub use crate::geom::{find_angle, find_quad_angles, make_clockwise, AngleParams, ANGLE_SUM_TOL};
// Random quadrilaterals
pub use crate::geom::rand::{draw_quad_radial, QuadCfg, ReplayToken};
// Special functions
pub use crate::hyp::{beta, hyp2f1};
// Modulus and root search
pub use crate::modulus::{conformal_modulus, phi, side_lengths};
pub use crate::root::{find_root, RootCfg};
// Parameter solve and verification
pub use crate::params::{
    calc_r_invariant, calc_sc_params, reconstruct_vertices, reconstruction_error, solve, ScParams,
    Solution,
};
// Series engine
pub use crate::series::{
    eval_series, partitions, phi_series, phi_series_coeffs, psi_coeff, psi_series,
};
// Numeric substrate
pub use crate::error::{GeometryError, RootError, ScError};
pub use crate::num::{cx_abs, cx_recip, Cx, Prec, Real};
