//! Random simple quadrilaterals (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic sampler for test and bench inputs. Four base directions a
//!   quarter turn apart receive bounded angular and radial jitter; keeping the
//!   angular jitter below half the spacing preserves the angular order, so the
//!   polygon is always simple (a reflex vertex is possible and welcome).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct QuadCfg {
    /// Angular jitter as a fraction of the quarter-turn spacing. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`.
    pub radial_jitter: f64,
    /// Base radius of the sampled ring.
    pub base_radius: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}

impl Default for QuadCfg {
    fn default() -> Self {
        Self {
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn mixed(self) -> u64 {
        self.seed ^ self.index.wrapping_mul(0x9E37_79B9_7F4A_7C15)
    }
}

/// Draw one simple quadrilateral, counter-clockwise by construction.
pub fn draw_quad_radial(cfg: QuadCfg, token: ReplayToken) -> [Vector2<f64>; 4] {
    let mut rng = StdRng::seed_from_u64(token.mixed());
    let spacing = std::f64::consts::TAU / 4.0;
    let jitter = cfg.angle_jitter_frac.clamp(0.0, 0.49) * spacing;
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let mut out = [Vector2::zeros(); 4];
    for (k, v) in out.iter_mut().enumerate() {
        let ang = phase + k as f64 * spacing + rng.gen_range(-1.0..1.0) * jitter;
        let rad = cfg.base_radius * (1.0 + rng.gen_range(-1.0..1.0) * cfg.radial_jitter);
        *v = Vector2::new(rad * ang.cos(), rad * ang.sin());
    }
    out
}
