// tests/rotor_tests.rs
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use approx::assert_abs_diff_eq;
use ga_kernel::algebras::{pga2, pga3, vga2, vga3};
use ga_kernel::{AlgebraError, Rotor};

const EPS: f64 = 1e-12;

fn assert_point3(p: &pga3::Mv, expected: [f64; 3], epsilon: f64) {
    let coords = pga3::point_coords(p).expect("finite point");
    for (got, want) in coords.iter().zip(expected) {
        assert_abs_diff_eq!(*got, want, epsilon = epsilon);
    }
}

fn assert_point2(p: &pga2::Mv, expected: [f64; 2]) {
    let coords = pga2::point_coords(p).expect("finite point");
    assert_abs_diff_eq!(coords[0], expected[0], epsilon = EPS);
    assert_abs_diff_eq!(coords[1], expected[1], epsilon = EPS);
}

/// Unit rotation axis through (0, 1, 0) plus some ideal part: a screw.
fn screw_motor() -> Rotor<pga3::Pga3> {
    Rotor::from_bivector(&pga3::bivector([0.3, -0.2, 0.7, 0.1, 0.5, -0.4])).unwrap()
}

#[test]
fn euclidean_rotations_turn_e1_toward_e2() {
    assert_abs_diff_eq!(vga2::rotor(FRAC_PI_2).apply(&vga2::e1()), vga2::e2(), epsilon = EPS);
    // the plane does not need to be unit length
    let r = vga3::rotor(&(2.0 * vga3::e12()), FRAC_PI_2).unwrap();
    assert_abs_diff_eq!(r.apply(&vga3::e1()), vga3::e2(), epsilon = EPS);
    assert_abs_diff_eq!(r.apply(&vga3::e3()), vga3::e3(), epsilon = EPS);
}

#[test]
fn planar_motions() {
    assert_point2(&pga2::rotation(FRAC_PI_2).apply(&pga2::point(1.0, 0.0)), [0.0, 1.0]);
    assert_point2(&pga2::translator(1.0, 2.0).apply(&pga2::origin()), [1.0, 2.0]);
    assert_point2(&pga2::rotation_about(1.0, 1.0, FRAC_PI_2).apply(&pga2::point(2.0, 1.0)), [1.0, 2.0]);
    // directions ignore translation
    let dir = pga2::translator(5.0, 5.0).apply(&pga2::ideal_point(1.0, 0.0));
    assert_abs_diff_eq!(dir, pga2::ideal_point(1.0, 0.0), epsilon = EPS);
}

#[test]
fn spatial_motions() {
    assert_point3(&pga3::translator(1.0, 2.0, 3.0).apply(&pga3::origin()), [1.0, 2.0, 3.0], EPS);
    let turn = pga3::rotation(&pga3::e12(), FRAC_PI_2).unwrap();
    assert_point3(&turn.apply(&pga3::point(1.0, 0.0, 0.0)), [0.0, 1.0, 0.0], EPS);
    let turn = pga3::rotation(&pga3::e23(), FRAC_PI_2).unwrap();
    assert_point3(&turn.apply(&pga3::point(0.0, 1.0, 0.0)), [0.0, 0.0, 1.0], EPS);
}

#[test]
fn composition_applies_left_operand_first() {
    let turn = pga3::rotation(&pga3::e12(), FRAC_PI_2).unwrap();
    let shift = pga3::translator(1.0, 0.0, 0.0);

    // turn, then shift: the origin only moves with the shift
    assert_point3(&turn.then(&shift).apply(&pga3::origin()), [1.0, 0.0, 0.0], EPS);
    // shift, then turn: the shifted origin is carried around the z axis
    assert_point3(&shift.then(&turn).apply(&pga3::origin()), [0.0, 1.0, 0.0], EPS);

    let p = pga3::point(0.5, -1.0, 2.0);
    let screw = screw_motor();
    assert_abs_diff_eq!(
        screw.then(&turn).apply(&p),
        turn.apply(&screw.apply(&p)),
        epsilon = EPS
    );
    assert_eq!(&screw * &turn, screw.then(&turn));
    assert_eq!(screw.clone() * turn.clone(), screw.then(&turn));
}

#[test]
fn reverse_is_the_inverse_motion() {
    let screw = screw_motor();
    let p = pga3::point(0.5, -1.0, 2.0);
    assert_abs_diff_eq!(screw.reverse().apply(&screw.apply(&p)), p, epsilon = EPS);
    assert_abs_diff_eq!(screw.then(&screw.reverse()).into_multivector(), pga3::scalar(1.0), epsilon = EPS);
}

#[test]
fn long_chains_stay_normalized() {
    let step = pga3::rotation(&pga3::e12(), 0.001).unwrap();
    let mut r = Rotor::identity();
    for _ in 0..1000 {
        r = r.then(&step);
    }
    let norm = r.as_multivector() * r.as_multivector().reverse();
    assert_abs_diff_eq!(norm, pga3::scalar(1.0), epsilon = EPS);
    assert_point3(&r.apply(&pga3::point(1.0, 0.0, 0.0)), [1.0_f64.cos(), 1.0_f64.sin(), 0.0], 1e-9);

    let b = pga3::bivector([0.3, -0.2, 0.7, 0.1, 0.5, -0.4]);
    let step = Rotor::from_bivector(&(&b * 0.01)).unwrap();
    let mut r = Rotor::identity();
    for _ in 0..100 {
        r = r.then(&step);
    }
    let norm = r.as_multivector() * r.as_multivector().reverse();
    assert_abs_diff_eq!(norm, pga3::scalar(1.0), epsilon = EPS);
    let p = pga3::point(1.0, 2.0, 3.0);
    assert_abs_diff_eq!(r.apply(&p), screw_motor().apply(&p), epsilon = 1e-9);
}

#[test]
fn building_from_multivectors() {
    let r = Rotor::try_from(vga2::even(3.0, 4.0)).unwrap();
    assert_abs_diff_eq!(*r.as_ref(), vga2::even(0.6, 0.8), epsilon = EPS);
    assert_eq!(
        Rotor::try_from(vga3::e1() + vga3::e()),
        Err(AlgebraError::NotEven { grades: vec![0, 1] })
    );
    assert!(Rotor::from_bivector(&vga3::even(1.0, 1.0, 0.0, 0.0)).is_err());
    assert_eq!(Rotor::<vga3::Vga3>::default(), Rotor::identity());
}

#[test]
fn interpolating_rotations() {
    let quarter = vga3::rotor(&vga3::e12(), FRAC_PI_2).unwrap();
    let eighth = vga3::rotor(&vga3::e12(), FRAC_PI_4).unwrap();
    let half_way = Rotor::identity().interpolate(&quarter, 0.5).unwrap();
    assert_abs_diff_eq!(half_way.into_multivector(), eighth.into_multivector(), epsilon = EPS);
    assert_abs_diff_eq!(quarter.log().unwrap(), FRAC_PI_4 * vga3::e12(), epsilon = EPS);
}

#[test]
fn interpolating_motions() {
    let shift = pga3::translator(2.0, 0.0, 0.0);
    let half = Rotor::identity().interpolate(&shift, 0.5).unwrap();
    assert_point3(&half.apply(&pga3::origin()), [1.0, 0.0, 0.0], EPS);

    let from = pga3::rotation(&pga3::e23(), 0.3).unwrap();
    let to = screw_motor();
    let p = pga3::point(1.0, 2.0, 3.0);
    let start = from.interpolate(&to, 0.0).unwrap();
    let end = from.interpolate(&to, 1.0).unwrap();
    assert_abs_diff_eq!(start.apply(&p), from.apply(&p), epsilon = 1e-9);
    assert_abs_diff_eq!(end.apply(&p), to.apply(&p), epsilon = 1e-9);

    // two half steps of a screw make the whole screw
    let half = Rotor::identity().interpolate(&to, 0.5).unwrap();
    assert_abs_diff_eq!(half.then(&half).apply(&p), to.apply(&p), epsilon = 1e-9);
}

#[test]
fn batch_application() {
    let turn = vga2::rotor(FRAC_PI_2);
    let out = turn.apply_all(&[vga2::e1(), vga2::e2()]);
    assert_abs_diff_eq!(out[0], vga2::e2(), epsilon = EPS);
    assert_abs_diff_eq!(out[1], -vga2::e1(), epsilon = EPS);
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_batch_matches_serial() {
    let screw = screw_motor();
    let points: Vec<pga3::Mv> = (0..64).map(|i| pga3::point(i as f64, 1.0, -2.0)).collect();
    assert_eq!(screw.par_apply_all(&points), screw.apply_all(&points));
}

#[test]
fn display_shows_the_multivector() {
    assert_eq!(Rotor::<vga2::Vga2>::identity().to_string(), "1");
    assert_eq!(pga3::translator(2.0, 0.0, 0.0).to_string(), "1 + e01");
}
