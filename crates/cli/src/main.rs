use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use scquad::prelude::*;
use scquad::series::{phi_series_coeffs, psi_coeff};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Schwarz-Christoffel quadrilateral parameter solver")]
struct Cmd {
    /// Significant decimal digits of working precision
    #[arg(long, default_value_t = 30)]
    digits: u32,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve for (r, A, C) from four vertices given as "x,y" pairs
    Solve {
        /// Four vertices, e.g. -- "-1,2" "7,5" "1,0" "0,0"
        #[arg(num_args = 4, allow_hyphen_values = true)]
        vertices: Vec<String>,
        /// Inclusive bound on the integer sweep of the root search
        #[arg(long, default_value_t = 1000)]
        upper_bound: u32,
    },
    /// Evaluate the conformal modulus at a canonical parameter r
    Modulus {
        r: f64,
        /// Optional angle fractions tau1 tau2 tau3 for the generalized modulus
        #[arg(long, num_args = 3)]
        tau: Option<Vec<f64>>,
    },
    /// Interior angles (as fractions of pi) of four vertices
    Angles {
        #[arg(num_args = 4, allow_hyphen_values = true)]
        vertices: Vec<String>,
    },
    /// Series coefficients of phi around x = 1 (or of its inverse)
    Series {
        #[arg(long, default_value_t = 8)]
        order: usize,
        #[arg(long, num_args = 3, default_values_t = [0.5, 0.5, 0.5])]
        tau: Vec<f64>,
        /// Emit inverse-series coefficients instead of forward ones
        #[arg(long)]
        inverse: bool,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let p = Prec::new(cmd.digits);
    match cmd.action {
        Action::Solve {
            vertices,
            upper_bound,
        } => run_solve(p, &vertices, upper_bound),
        Action::Modulus { r, tau } => run_modulus(p, r, tau.as_deref()),
        Action::Angles { vertices } => run_angles(p, &vertices),
        Action::Series {
            order,
            tau,
            inverse,
        } => run_series(p, order, &tau, inverse),
    }
}

fn parse_vertices(raw: &[String]) -> Result<[Vec2<f64>; 4]> {
    let mut out = [Vec2::zeros(); 4];
    for (i, s) in raw.iter().enumerate() {
        let (x, y) = s
            .split_once(',')
            .with_context(|| format!("vertex {i}: expected \"x,y\", got {s:?}"))?;
        out[i] = Vec2::new(
            x.trim().parse().with_context(|| format!("vertex {i}: bad x {x:?}"))?,
            y.trim().parse().with_context(|| format!("vertex {i}: bad y {y:?}"))?,
        );
    }
    Ok(out)
}

fn angle_params(p: Prec, tau: &[f64]) -> Result<AngleParams> {
    if tau.len() != 3 || tau.iter().any(|t| *t <= 0.0 || *t >= 2.0) {
        bail!("expected three angle fractions in (0, 2), got {tau:?}");
    }
    Ok(AngleParams::new(p, tau[0], tau[1], tau[2]))
}

fn run_solve(p: Prec, raw: &[String], upper_bound: u32) -> Result<()> {
    let verts = parse_vertices(raw)?;
    let cfg = RootCfg {
        upper_bound,
        digits: p.digits(),
        ..RootCfg::default()
    };
    tracing::info!(digits = p.digits(), upper_bound, "solve");
    let sol = solve(p, verts, cfg)?;
    let m = conformal_modulus(p, &sol.params.r);
    // High-precision values go out as strings; f64 would truncate them.
    let obj = serde_json::json!({
        "r": sol.params.r.to_string(),
        "a": [sol.params.a.real().to_string(), sol.params.a.imag().to_string()],
        "c": [sol.params.c.real().to_string(), sol.params.c.imag().to_string()],
        "conformal_modulus": m.to_string(),
        "tau": sol.tau.as_array().map(|t| t.to_f64()),
        "vertices_clockwise": sol.vertices.map(|v| [v.x, v.y]),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn run_modulus(p: Prec, r: f64, tau: Option<&[f64]>) -> Result<()> {
    if r < 0.0 {
        bail!("canonical parameter r must be non-negative, got {r}");
    }
    let x = p.real(r);
    let value = match tau {
        Some(t) => phi(p, &x, &angle_params(p, t)?),
        None => conformal_modulus(p, &x),
    };
    let obj = serde_json::json!({ "r": r, "modulus": value.to_string() });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn run_angles(p: Prec, raw: &[String]) -> Result<()> {
    let verts = parse_vertices(raw)?;
    let cw = make_clockwise(p, verts)?;
    let tau = find_quad_angles(p, &cw)?;
    let obj = serde_json::json!({
        "tau": tau.as_array().map(|t| t.to_f64()),
        "vertices_clockwise": cw.map(|v| [v.x, v.y]),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn run_series(p: Prec, order: usize, tau: &[f64], inverse: bool) -> Result<()> {
    let tau = angle_params(p, tau)?;
    tracing::info!(order, inverse, "series");
    // Inverse coefficients of order n need n+1 forward ones.
    let fwd = phi_series_coeffs(p, order + 1, &tau);
    let coeffs: Vec<String> = if inverse {
        (0..order).map(|n| psi_coeff(p, n, &fwd).to_string()).collect()
    } else {
        fwd.iter().take(order).map(|c| c.to_string()).collect()
    };
    let obj = serde_json::json!({
        "center": if inverse { fwd[0].to_string() } else { "1".to_string() },
        "coefficients": coeffs,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
