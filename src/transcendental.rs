// src/transcendental.rs
//! Inverse, exponential and logarithm.
//!
//! Closed forms exist for *simple* multivectors, whose square is a scalar:
//! anything homogeneous of grade 0, 1, N−1 or N. The one non-simple case
//! supported is a bivector of 3D projective GA, handled by splitting it into
//! two commuting simple parts. Other operands are rejected.
//!
//! Every branch is chosen by the exact sign of a metric-accurate scalar. The
//! zero branch is the parabolic case (a pure translation in PGA) and is
//! compared with `== 0.0` on purpose: no tolerance is applied.

use crate::error::{AlgebraError, Result};
use crate::metric::Metric;
use crate::multivector::Multivector;
use crate::types::{grade, Scalar};

const PGA3_SIGNATURE: [i8; 4] = [0, 1, 1, 1];

/// Rounding error tolerated past the edge of the `acos`/`acosh` domains.
const DOMAIN_SLACK: Scalar = 16.0 * Scalar::EPSILON;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Simple,
    Pga3Bivector,
}

fn is_pga3<M: Metric>() -> bool {
    M::SIGNATURE == PGA3_SIGNATURE
}

fn shape<M: Metric>(v: &Multivector<M>) -> Option<Shape> {
    if v.is_empty() {
        return Some(Shape::Simple);
    }
    let n = M::DIM as u32;
    match v.homogeneous_grade()? {
        g if g <= 1 || g + 1 == n || g == n => Some(Shape::Simple),
        2 if is_pga3::<M>() => Some(Shape::Pga3Bivector),
        _ => None,
    }
}

fn unsupported<M: Metric>(operation: &'static str, v: &Multivector<M>) -> AlgebraError {
    let grades = v.grades();
    log::debug!("rejecting {operation} on {} operand of grades {grades:?}", M::NAME);
    AlgebraError::Unsupported { operation, algebra: M::NAME, grades }
}

fn pseudoscalar<M: Metric>(coeff: Scalar) -> Multivector<M> {
    Multivector::from_canonical(&[M::FULL_MASK], &[coeff])
}

/// Inverse of a simple multivector: `reverse(v) / norm2(v)`.
pub fn simple_inv<M: Metric>(v: &Multivector<M>) -> Multivector<M> {
    v.reverse() / v.norm2()
}

/// Inverse of a 3D PGA bivector.
///
/// `s = v·reverse(v)` has only a scalar and a pseudoscalar part; multiplying
/// by its conjugate `c = <s>₀ − <s>₄` leaves a pure scalar to divide by.
fn pga3_bivector_inv<M: Metric>(v: &Multivector<M>) -> Multivector<M> {
    let r = v.reverse();
    let s = v * &r;
    let c = Multivector::<M>::scalar(s.scalar_part()) - pseudoscalar(s.project(M::FULL_MASK));
    let denominator = (&s * &c).scalar_part();
    (&r * &c) / denominator
}

/// Multiplicative inverse.
///
/// Supported for simple operands and 3D PGA bivectors; anything else is
/// [`AlgebraError::Unsupported`].
pub fn ga_inv<M: Metric>(v: &Multivector<M>) -> Result<Multivector<M>> {
    match shape(v) {
        Some(Shape::Simple) => Ok(simple_inv(v)),
        Some(Shape::Pga3Bivector) => Ok(pga3_bivector_inv(v)),
        None => Err(unsupported("ga_inv", v)),
    }
}

/// Exponential of a multivector whose square is a scalar.
///
/// With `v2 = <v·v>₀`: `1 + v` when `v2 == 0`, the circular form
/// `cos √|v2| + sin √|v2| · v/√|v2|` when negative and the hyperbolic form
/// when positive. The operand is not checked for simplicity.
pub fn simple_exp<M: Metric>(v: &Multivector<M>) -> Multivector<M> {
    let v2 = (v * v).scalar_part();
    if v2 == 0.0 {
        return 1.0 + v;
    }
    let len = v2.abs().sqrt();
    let unit = v / len;
    if v2 < 0.0 {
        len.cos() + unit * len.sin()
    } else {
        len.cosh() + unit * len.sinh()
    }
}

/// Exponential of a 3D PGA bivector.
///
/// A pure ideal line squares to zero and exponentiates exactly to
/// `1 + v` (the pseudoscalar slot is kept, with coefficient zero, so the
/// result has the same basis set as a general motor's scalar/ideal part).
/// Otherwise `v` splits into the commuting simple parts
/// `b1 = (v ∧ v)·v⁻¹ / 2` and `b2 = v − b1`.
fn pga3_bivector_exp<M: Metric>(v: &Multivector<M>) -> Multivector<M> {
    if (v * v).scalar_part() == 0.0 {
        return 1.0 + v + pseudoscalar(0.0);
    }
    let b1 = (v ^ v) * pga3_bivector_inv(v) / 2.0;
    let b2 = v - &b1;
    simple_exp(&b1) * simple_exp(&b2)
}

/// Exponential.
///
/// Supported for simple operands and 3D PGA bivectors; anything else is
/// [`AlgebraError::Unsupported`].
pub fn ga_exp<M: Metric>(v: &Multivector<M>) -> Result<Multivector<M>> {
    match shape(v) {
        Some(Shape::Simple) => Ok(simple_exp(v)),
        Some(Shape::Pga3Bivector) => Ok(pga3_bivector_exp(v)),
        None => Err(unsupported("ga_exp", v)),
    }
}

/// Logarithm of a rotor whose bivector part is simple.
///
/// Returns the bivector `b` itself when `<b·b>₀ == 0`, otherwise the unit
/// bivector scaled by `acos` (negative square) or `acosh` (positive square)
/// of the scalar part.
///
/// A scalar within a few ulps (`16·ε`) outside the function's domain is
/// snapped onto its edge. Anything further out is not a rotor of this
/// shape and yields NaN coefficients.
pub fn simple_log<M: Metric>(r: &Multivector<M>) -> Multivector<M> {
    let b = r.grade_project(2);
    let b2 = (&b * &b).scalar_part();
    if b2 == 0.0 {
        return b;
    }
    let unit = b / b2.abs().sqrt();
    let s = r.scalar_part();
    if b2 > 0.0 {
        let s = if s < 1.0 && 1.0 - s <= DOMAIN_SLACK { 1.0 } else { s };
        unit * s.acosh()
    } else {
        let s = if s.abs() > 1.0 && s.abs() - 1.0 <= DOMAIN_SLACK { s.signum() } else { s };
        unit * s.acos()
    }
}

/// Logarithm of a 3D PGA motor.
///
/// The pseudoscalar part `s` of `r` encodes the screw pitch. Factoring
/// `r = r2 · r1` with `r1 = 1 + s·b⁻¹` (an ideal translation along the axis)
/// leaves `r2` a pure rotation, and the two logarithms commute.
fn pga3_motor_log<M: Metric>(r: &Multivector<M>) -> Multivector<M> {
    let b = r.grade_project(2);
    if (&b * &b).scalar_part() == 0.0 {
        return b;
    }
    let s = r.grade_project(4);
    let r1 = 1.0 + s * pga3_bivector_inv(&b);
    let r2 = r * r1.reverse();
    simple_log(&r1) + simple_log(&r2)
}

/// Logarithm of a rotor.
///
/// The operand must be even-graded, and either its bivector part is simple
/// or the algebra is 3D PGA; anything else is [`AlgebraError::Unsupported`].
pub fn ga_log<M: Metric>(r: &Multivector<M>) -> Result<Multivector<M>> {
    if r.bases().iter().any(|&b| grade(b) % 2 == 1) {
        return Err(unsupported("ga_log", r));
    }
    if is_pga3::<M>() {
        return Ok(pga3_motor_log(r));
    }
    match shape(&r.grade_project(2)) {
        Some(Shape::Simple) => Ok(simple_log(r)),
        _ => Err(unsupported("ga_log", r)),
    }
}
