// tests/transcendental_tests.rs
use approx::assert_abs_diff_eq;
use ga_kernel::algebras::{pga3, vga2, vga3};
use ga_kernel::transcendental::{ga_exp, ga_inv, ga_log, simple_exp, simple_log};
use ga_kernel::{AlgebraError, Metric, Multivector, Scalar};

const EPS: Scalar = 1e-12;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
struct Minkowski2;

impl Metric for Minkowski2 {
    const SIGNATURE: &'static [i8] = &[1, -1];
    const NAME: &'static str = "Cl(1,1)";
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
struct Euclid4;

impl Metric for Euclid4 {
    const SIGNATURE: &'static [i8] = &[1, 1, 1, 1];
    const NAME: &'static str = "Cl(4,0)";
}

fn series_exp<M: Metric>(v: &Multivector<M>) -> Multivector<M> {
    let mut term = Multivector::scalar(1.0);
    let mut sum = term.clone();
    for i in 1..40 {
        term = &term * v / i as Scalar;
        sum += &term;
    }
    sum
}

/// A screw axis that is neither a pure rotation nor a translation.
fn screw() -> pga3::Mv {
    pga3::bivector([0.3, -0.2, 0.7, 0.1, 0.5, -0.4])
}

#[test]
fn simple_inverse_with_mixed_signature() {
    let v = Multivector::<Minkowski2>::new(&[0b01, 0b10], &[2.0, 3.0]).unwrap();
    let inv = ga_inv(&v).unwrap();
    assert_abs_diff_eq!(&v * &inv, Multivector::scalar(1.0), epsilon = 1e-5);
    assert_abs_diff_eq!(&inv * &v, Multivector::scalar(1.0), epsilon = 1e-5);
}

#[test]
fn pga3_bivector_inverse() {
    let b = screw();
    assert_abs_diff_eq!(&b * ga_inv(&b).unwrap(), pga3::scalar(1.0), epsilon = EPS);
}

#[test]
fn log_undoes_exp_of_rotation_plane() {
    // log(exp(e12)) == e12 holds up to rounding of cos/acos
    let r = ga_exp(&vga2::e12()).unwrap();
    assert_abs_diff_eq!(r, vga2::even(1.0_f64.cos(), 1.0_f64.sin()), epsilon = EPS);
    assert_abs_diff_eq!(ga_log(&r).unwrap(), vga2::e12(), epsilon = EPS);
}

#[test]
fn parabolic_exp_is_exact() {
    let r = ga_exp(&pga3::e01()).unwrap();
    assert_eq!(r, 1.0 + pga3::e01() + 0.0 * pga3::e0123());
    assert_eq!(r.bases(), &[0b0000, 0b0011, 0b1111]);
}

#[test]
fn hyperbolic_branch() {
    // e12² = +1 when e2² = -1
    let b = Multivector::<Minkowski2>::new(&[0b11], &[0.5]).unwrap();
    let r = ga_exp(&b).unwrap();
    assert_abs_diff_eq!(r.scalar_part(), 0.5_f64.cosh(), epsilon = EPS);
    assert_abs_diff_eq!(r.project(0b11), 0.5_f64.sinh(), epsilon = EPS);
    assert_abs_diff_eq!(ga_log(&r).unwrap(), b, epsilon = EPS);

    // a Euclidean vector squares positive too
    let e = simple_exp(&vga3::e1());
    assert_abs_diff_eq!(e, 1.0_f64.cosh() + 1.0_f64.sinh() * vga3::e1(), epsilon = EPS);
}

#[test]
fn exp_of_nothing_is_one() {
    assert_eq!(ga_exp(&vga3::Mv::zero()), Ok(vga3::scalar(1.0)));
}

#[test]
fn pga3_exp_matches_power_series() {
    let b = screw();
    let closed = ga_exp(&b).unwrap();
    assert_abs_diff_eq!(closed, series_exp(&b), epsilon = EPS);
    // the screw has a nonzero pitch, so the motor carries a pseudoscalar part
    assert!(closed.project(0b1111).abs() > 1e-3);
}

#[test]
fn pga3_log_recovers_screw() {
    let b = screw();
    let motor = ga_exp(&b).unwrap();
    assert_abs_diff_eq!(ga_log(&motor).unwrap(), b, epsilon = EPS);
}

#[test]
fn pga3_log_of_translation() {
    let t = ga_exp(&(0.5 * pga3::e02())).unwrap();
    assert_eq!(ga_log(&t), Ok(0.5 * pga3::e02()));
}

#[test]
fn rotation_log_in_three_dimensions() {
    let plane = vga3::bivector(0.6, 0.0, 0.8);
    let r = ga_exp(&(&plane * 0.7)).unwrap();
    assert_abs_diff_eq!(ga_log(&r).unwrap(), plane * 0.7, epsilon = EPS);
}

#[test]
fn log_clamps_rounding_past_one() {
    let r = vga2::even(1.0 + Scalar::EPSILON, 1e-9);
    let b = simple_log(&r);
    assert!(b.coefficients().iter().all(|c| !c.is_nan()));
    assert_eq!(b.bases(), vga2::BIVECTOR);
}

#[test]
fn log_outside_the_domain_is_nan() {
    // -cosh(x) + sinh(x)·e12 is not reachable by exp in Cl(1,1)
    let r = Multivector::<Minkowski2>::new(&[0, 0b11], &[-(0.5_f64.cosh()), 0.5_f64.sinh()]).unwrap();
    let b = simple_log(&r);
    assert!(b.coefficients().iter().all(|c| c.is_nan()));

    // a scalar clearly past 1 on the circular branch
    let b = simple_log(&vga2::even(1.5, 0.1));
    assert!(b.coefficients().iter().all(|c| c.is_nan()));

    // within rounding of the edge of the hyperbolic branch
    let r = Multivector::<Minkowski2>::new(&[0, 0b11], &[1.0 - Scalar::EPSILON, 1e-9]).unwrap();
    assert_eq!(simple_log(&r), Multivector::new(&[0b11], &[0.0]).unwrap());
}

#[test]
fn mixed_grades_are_unsupported() {
    let even = vga3::even(1.0, 0.5, 0.0, 0.0);
    assert_eq!(
        ga_exp(&even),
        Err(AlgebraError::Unsupported { operation: "ga_exp", algebra: "VGA3", grades: vec![0, 2] })
    );
    assert!(matches!(ga_inv(&even), Err(AlgebraError::Unsupported { operation: "ga_inv", .. })));
}

#[test]
fn log_rejects_odd_grades() {
    assert!(matches!(
        ga_log(&vga3::vector(1.0, 0.0, 0.0)),
        Err(AlgebraError::Unsupported { operation: "ga_log", .. })
    ));
    assert!(ga_log(&(pga3::e() + pga3::e0())).is_err());
}

#[test]
fn four_dimensional_bivectors_need_pga() {
    let b = Multivector::<Euclid4>::new(&[0b0011, 0b1100], &[1.0, 2.0]).unwrap();
    assert!(matches!(ga_exp(&b), Err(AlgebraError::Unsupported { algebra: "Cl(4,0)", .. })));
    assert!(ga_inv(&b).is_err());
    assert!(ga_log(&(1.0 + &b)).is_err());
    // vectors and trivectors are still simple there
    assert!(ga_inv(&Multivector::<Euclid4>::blade(0b0111).unwrap()).is_ok());
}
