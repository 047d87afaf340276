//! Three-dimensional projective geometric algebra, Cl(3,0,1).
//!
//! `e0` is the null (ideal) direction. Vectors are planes, bivectors are
//! lines, trivectors are points and even multivectors (motors) are rigid
//! motions. This is the one algebra whose bivectors are not always simple:
//! a general line is the sum of a rotation axis and a commuting ideal line.

use crate::error::Result;
use crate::metric::Metric;
use crate::multivector::Multivector;
use crate::rotor::Rotor;
use crate::transcendental::simple_exp;
use crate::types::{BasisIndex, Scalar};

/// `e0² = 0`, `e1² = e2² = e3² = 1`.
pub const METRIC: &[i8] = &[0, 1, 1, 1];

/// Metric marker for Cl(3,0,1).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pga3;

impl Metric for Pga3 {
    const SIGNATURE: &'static [i8] = METRIC;
    const NAME: &'static str = "PGA3";
    const FIRST_LABEL: u32 = 0;
}

/// Multivector of this algebra.
pub type Mv = Multivector<Pga3>;

pub const SCALAR: &[BasisIndex] = &[0b0000];
pub const VECTOR: &[BasisIndex] = &[0b0001, 0b0010, 0b0100, 0b1000];
/// `e01, e02, e12, e03, e13, e23`.
pub const BIVECTOR: &[BasisIndex] = &[0b0011, 0b0101, 0b0110, 0b1001, 0b1010, 0b1100];
/// `e012, e013, e023, e123`.
pub const TRIVECTOR: &[BasisIndex] = &[0b0111, 0b1011, 0b1101, 0b1110];
pub const QUADVECTOR: &[BasisIndex] = &[0b1111];
pub const EVEN: &[BasisIndex] = &[0b0000, 0b0011, 0b0101, 0b0110, 0b1001, 0b1010, 0b1100, 0b1111];
pub const FULL: &[BasisIndex] = &[
    0b0000, 0b0001, 0b0010, 0b0011, 0b0100, 0b0101, 0b0110, 0b0111, 0b1000, 0b1001, 0b1010, 0b1011, 0b1100, 0b1101,
    0b1110, 0b1111,
];

unit_blades! {
    e = 0b0000,
    e0 = 0b0001,
    e1 = 0b0010,
    e2 = 0b0100,
    e3 = 0b1000,
    e01 = 0b0011,
    e02 = 0b0101,
    e03 = 0b1001,
    e12 = 0b0110,
    e13 = 0b1010,
    e23 = 0b1100,
    e012 = 0b0111,
    e013 = 0b1011,
    e023 = 0b1101,
    e123 = 0b1110,
    e0123 = 0b1111,
}

permuted_blades! {
    e10 = -e01,
    e20 = -e02,
    e30 = -e03,
    e21 = -e12,
    e31 = -e13,
    e32 = -e23,
    e021 = -e012,
    e031 = -e013,
    e032 = -e023,
    e132 = -e123,
    e231 = e123,
    e312 = e123,
    e321 = -e123,
}

/// `s` on the scalar basis set.
pub fn scalar(s: Scalar) -> Mv {
    Mv::scalar(s)
}

/// `x0·e0 + x1·e1 + x2·e2 + x3·e3`.
pub fn vector(x0: Scalar, x1: Scalar, x2: Scalar, x3: Scalar) -> Mv {
    Mv::from_canonical(VECTOR, &[x0, x1, x2, x3])
}

/// Bivector with coefficients in [`BIVECTOR`] order.
pub fn bivector(coeffs: [Scalar; 6]) -> Mv {
    Mv::from_canonical(BIVECTOR, &coeffs)
}

/// Trivector with coefficients in [`TRIVECTOR`] order.
pub fn trivector(coeffs: [Scalar; 4]) -> Mv {
    Mv::from_canonical(TRIVECTOR, &coeffs)
}

/// Even multivector with coefficients in [`EVEN`] order.
pub fn even(coeffs: [Scalar; 8]) -> Mv {
    Mv::from_canonical(EVEN, &coeffs)
}

/// The plane `a·x + b·y + c·z + d = 0`.
pub fn plane(a: Scalar, b: Scalar, c: Scalar, d: Scalar) -> Mv {
    vector(d, a, b, c)
}

/// The point `(x, y, z)`: `e123 + x·e032 + y·e013 + z·e021`.
pub fn point(x: Scalar, y: Scalar, z: Scalar) -> Mv {
    trivector([-z, y, -x, 1.0])
}

/// The point at infinity in direction `(x, y, z)`.
pub fn ideal_point(x: Scalar, y: Scalar, z: Scalar) -> Mv {
    trivector([-z, y, -x, 0.0])
}

/// The origin.
pub fn origin() -> Mv {
    point(0.0, 0.0, 0.0)
}

/// Euclidean coordinates of a point, `None` for points at infinity.
pub fn point_coords(p: &Mv) -> Option<[Scalar; 3]> {
    let w = p.project(0b1110);
    if w == 0.0 {
        return None;
    }
    Some([-p.project(0b1101) / w, p.project(0b1011) / w, -p.project(0b0111) / w])
}

/// Rotor turning by `angle` radians about `line`, following the line's
/// orientation (`e12` turns the x axis toward the y axis).
pub fn rotation(line: &Mv, angle: Scalar) -> Result<Rotor<Pga3>> {
    Rotor::from_bivector(&(line.normalized() * (0.5 * angle)))
}

/// Rotor moving every point by `(x, y, z)`: `1 + ½(x·e01 + y·e02 + z·e03)`.
pub fn translator(x: Scalar, y: Scalar, z: Scalar) -> Rotor<Pga3> {
    let half = Mv::from_canonical(&[0b0011, 0b0101, 0b1001], &[0.5 * x, 0.5 * y, 0.5 * z]);
    Rotor::from_unit(simple_exp(&half))
}
