//! Two-dimensional projective geometric algebra, Cl(2,0,1).
//!
//! `e0` is the null (ideal) direction. Vectors are lines `a·e1 + b·e2 +
//! c·e0` (the line `ax + by + c = 0`), bivectors are points, and even
//! multivectors are rigid motions of the plane.

use crate::metric::Metric;
use crate::multivector::Multivector;
use crate::rotor::Rotor;
use crate::transcendental::simple_exp;
use crate::types::{BasisIndex, Scalar};

/// `e0² = 0`, `e1² = e2² = 1`.
pub const METRIC: &[i8] = &[0, 1, 1];

/// Metric marker for Cl(2,0,1).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pga2;

impl Metric for Pga2 {
    const SIGNATURE: &'static [i8] = METRIC;
    const NAME: &'static str = "PGA2";
    const FIRST_LABEL: u32 = 0;
}

/// Multivector of this algebra.
pub type Mv = Multivector<Pga2>;

pub const SCALAR: &[BasisIndex] = &[0b000];
pub const VECTOR: &[BasisIndex] = &[0b001, 0b010, 0b100];
pub const BIVECTOR: &[BasisIndex] = &[0b011, 0b101, 0b110];
pub const TRIVECTOR: &[BasisIndex] = &[0b111];
pub const EVEN: &[BasisIndex] = &[0b000, 0b011, 0b101, 0b110];
pub const FULL: &[BasisIndex] = &[0b000, 0b001, 0b010, 0b011, 0b100, 0b101, 0b110, 0b111];

unit_blades! {
    e = 0b000,
    e0 = 0b001,
    e1 = 0b010,
    e2 = 0b100,
    e01 = 0b011,
    e02 = 0b101,
    e12 = 0b110,
    e012 = 0b111,
}

permuted_blades! {
    e10 = -e01,
    e20 = -e02,
    e21 = -e12,
    e021 = -e012,
    e102 = -e012,
    e120 = e012,
    e201 = e012,
    e210 = -e012,
}

/// `s` on the scalar basis set.
pub fn scalar(s: Scalar) -> Mv {
    Mv::scalar(s)
}

/// `x0·e0 + x1·e1 + x2·e2`.
pub fn vector(x0: Scalar, x1: Scalar, x2: Scalar) -> Mv {
    Mv::from_canonical(VECTOR, &[x0, x1, x2])
}

/// `b01·e01 + b02·e02 + b12·e12`.
pub fn bivector(b01: Scalar, b02: Scalar, b12: Scalar) -> Mv {
    Mv::from_canonical(BIVECTOR, &[b01, b02, b12])
}

/// `s + b01·e01 + b02·e02 + b12·e12`.
pub fn even(s: Scalar, b01: Scalar, b02: Scalar, b12: Scalar) -> Mv {
    Mv::from_canonical(EVEN, &[s, b01, b02, b12])
}

/// The line `a·x + b·y + c = 0`.
pub fn line(a: Scalar, b: Scalar, c: Scalar) -> Mv {
    vector(c, a, b)
}

/// The point `(x, y)`: `e12 - x·e02 + y·e01`.
pub fn point(x: Scalar, y: Scalar) -> Mv {
    bivector(y, -x, 1.0)
}

/// The point at infinity in direction `(x, y)`.
pub fn ideal_point(x: Scalar, y: Scalar) -> Mv {
    bivector(y, -x, 0.0)
}

/// The origin.
pub fn origin() -> Mv {
    point(0.0, 0.0)
}

/// Euclidean coordinates of a point, `None` for points at infinity.
pub fn point_coords(p: &Mv) -> Option<[Scalar; 2]> {
    let w = p.project(0b110);
    if w == 0.0 {
        return None;
    }
    Some([-p.project(0b101) / w, p.project(0b011) / w])
}

/// Rotor turning about the origin by `angle` radians (counter-clockwise).
pub fn rotation(angle: Scalar) -> Rotor<Pga2> {
    Rotor::from_unit(simple_exp(&(e12() * (0.5 * angle))))
}

/// Rotor turning about the point `(x, y)` by `angle` radians.
pub fn rotation_about(x: Scalar, y: Scalar, angle: Scalar) -> Rotor<Pga2> {
    translator(-x, -y).then(&rotation(angle)).then(&translator(x, y))
}

/// Rotor moving every point by `(x, y)`: `1 + ½(x·e01 + y·e02)`.
pub fn translator(x: Scalar, y: Scalar) -> Rotor<Pga2> {
    let half = Mv::from_canonical(&[0b011, 0b101], &[0.5 * x, 0.5 * y]);
    Rotor::from_unit(simple_exp(&half))
}
