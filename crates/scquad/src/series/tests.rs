use super::*;
use crate::modulus::phi;
use rug::Float;

fn p() -> Prec {
    Prec::new(30)
}

fn rect_family() -> AngleParams {
    AngleParams::new(p(), 0.5, 0.5, 0.5)
}

#[test]
fn partition_enumeration_small_cases() {
    assert_eq!(partitions(3, 3), vec![vec![3, 0, 0], vec![1, 1, 0], vec![0, 0, 1]]);
    assert_eq!(partitions(2, 2), vec![vec![2, 0], vec![0, 1]]);
    assert_eq!(partitions(4, 1), vec![vec![4]]);
    // Every tuple satisfies the weighted-sum constraint.
    for ks in partitions(7, 7) {
        let w: u32 = ks.iter().enumerate().map(|(i, &k)| (i as u32 + 1) * k).sum();
        assert_eq!(w, 7);
    }
}

#[test]
fn zero_and_first_order() {
    let pr = p();
    let tau = rect_family();
    assert!(phi_series_coeffs(pr, 0, &tau).is_empty());
    let c = phi_series_coeffs(pr, 1, &tau);
    assert_eq!(c.len(), 1);
    let at_one = phi(pr, &pr.one(), &tau);
    assert!(Float::with_val(pr.bits(), &c[0] - &at_one).abs() < 1e-20);
}

#[test]
fn rectangle_family_matches_published_coefficients() {
    let pr = p();
    let c = phi_series_coeffs(pr, 4, &rect_family());
    let want = [1.0, 0.2284732905, -0.08813662302, 0.04827946003];
    for (ck, wk) in c.iter().zip(want) {
        assert!((ck.to_f64() - wk).abs() < 1e-9, "{ck} vs {wk}");
    }
}

#[test]
fn constant_term_is_phi_at_one_for_asymmetric_angles() {
    let pr = p();
    let tau = AngleParams::new(pr, 0.6, 0.7, 0.4);
    let c = phi_series_coeffs(pr, 2, &tau);
    let at_one = phi(pr, &pr.one(), &tau);
    assert!(Float::with_val(pr.bits(), &c[0] - &at_one).abs() < 1e-20);
    // First-order coefficient against a central difference of phi.
    let h = 1e-8;
    let up = phi(pr, &pr.real(1.0 + h), &tau);
    let dn = phi(pr, &pr.real(1.0 - h), &tau);
    let fd = Float::with_val(pr.bits(), &up - &dn) / (2.0 * h);
    assert!(
        Float::with_val(pr.bits(), &c[1] - &fd).abs() < 1e-9,
        "a1 {} vs finite difference {fd}",
        c[1]
    );
}

#[test]
fn truncated_series_approximates_phi() {
    let pr = p();
    let tau = rect_family();
    let coeffs = phi_series_coeffs(pr, 16, &tau);
    let x = pr.real(1.1);
    let exact = phi(pr, &x, &tau);
    let approx = phi_series(pr, &coeffs, &x);
    assert!(Float::with_val(pr.bits(), &approx - &exact).abs() < 1e-8);
}

#[test]
fn truncation_error_decreases_with_order() {
    let pr = p();
    let tau = rect_family();
    let coeffs = phi_series_coeffs(pr, 16, &tau);
    let x = pr.real(1.1);
    let exact = phi(pr, &x, &tau);
    let err = |n: usize| {
        let v = phi_series(pr, &coeffs[..n], &x);
        Float::with_val(pr.bits(), &v - &exact).abs()
    };
    let (e5, e10, e15) = (err(5), err(10), err(15));
    assert!(e5 > e10, "{e5} vs {e10}");
    assert!(e10 > e15, "{e10} vs {e15}");
}

#[test]
fn inverse_leading_coefficients() {
    let pr = p();
    let fwd = phi_series_coeffs(pr, 4, &rect_family());
    let psi0 = psi_coeff(pr, 0, &fwd);
    assert_eq!(psi0.to_f64(), 1.0);
    let psi1 = psi_coeff(pr, 1, &fwd);
    let prod = Float::with_val(pr.bits(), &psi1 * &fwd[1]);
    assert!(Float::with_val(pr.bits(), &prod - 1u32).abs() < 1e-25);
    assert!((psi1.to_f64() - 4.376879230452952).abs() < 1e-9);
}

#[test]
fn inverse_series_round_trips_through_phi() {
    let pr = p();
    let tau = rect_family();
    let fwd = phi_series_coeffs(pr, 16, &tau);
    let inv: Vec<Real> = (0..10).map(|n| psi_coeff(pr, n, &fwd)).collect();
    let y0 = fwd[0].clone();
    for &x in &[0.92, 1.0, 1.05, 1.1] {
        let xr = pr.real(x);
        let y = phi(pr, &xr, &tau);
        let back = psi_series(pr, &inv, &y, &y0);
        assert!(
            (back.to_f64() - x).abs() < 1e-6,
            "x = {x}, recovered {back}"
        );
    }
}
