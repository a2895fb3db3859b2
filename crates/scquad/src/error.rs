//! Error taxonomy for the parameter solver.
//!
//! - `GeometryError`: malformed input (coincident vertices, broken angle-sum
//!   invariant). Fatal, never retried.
//! - `RootError`: the digit-by-digit search failed; `NoSignChange` is
//!   recoverable by raising the search bound.
//! - `ScError`: umbrella for the parameter solver, including the
//!   all-rotations-failed case.

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum GeometryError {
    /// Two vertices adjacent to the indexed one coincide; no angle exists.
    #[error("coincident vertices around index {index}")]
    CoincidentVertices { index: usize },
    /// Interior angles divided by pi must sum to 2 for a quadrilateral.
    #[error("interior angle sum {sum} deviates from 2 beyond 1e-8")]
    AngleSum { sum: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum RootError {
    /// Integer sweep exhausted without bracketing a root. The caller may
    /// retry with a larger bound.
    #[error("no sign change found in [0, {upper_bound}]")]
    NoSignChange { upper_bound: u32 },
    /// Fractional refinement could not confirm a bracketing subinterval at
    /// the given digit position. Distinct outcome rather than a silently
    /// accepted digit.
    #[error("digit search exhausted at fractional position {position}")]
    PrecisionExhausted { position: u32 },
    /// The target function produced NaN near the given abscissa.
    #[error("function value is not finite near x = {at}")]
    NonFinite { at: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ScError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error(transparent)]
    Root(#[from] RootError),
    /// All four cyclic rotations of the angle tuple failed to bracket a root.
    #[error("no rotation of the angle tuple admits a root; quadrilateral is degenerate")]
    Degenerate,
}
