//! Three-dimensional Euclidean geometric algebra, Cl(3,0).

use crate::error::Result;
use crate::metric::Metric;
use crate::multivector::Multivector;
use crate::rotor::Rotor;
use crate::types::{BasisIndex, Scalar};

/// `e1² = e2² = e3² = 1`.
pub const METRIC: &[i8] = &[1, 1, 1];

/// Metric marker for Cl(3,0).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Vga3;

impl Metric for Vga3 {
    const SIGNATURE: &'static [i8] = METRIC;
    const NAME: &'static str = "VGA3";
}

/// Multivector of this algebra.
pub type Mv = Multivector<Vga3>;

pub const SCALAR: &[BasisIndex] = &[0b000];
pub const VECTOR: &[BasisIndex] = &[0b001, 0b010, 0b100];
pub const BIVECTOR: &[BasisIndex] = &[0b011, 0b101, 0b110];
pub const TRIVECTOR: &[BasisIndex] = &[0b111];
pub const EVEN: &[BasisIndex] = &[0b000, 0b011, 0b101, 0b110];
pub const FULL: &[BasisIndex] = &[0b000, 0b001, 0b010, 0b011, 0b100, 0b101, 0b110, 0b111];

unit_blades! {
    e = 0b000,
    e1 = 0b001,
    e2 = 0b010,
    e3 = 0b100,
    e12 = 0b011,
    e13 = 0b101,
    e23 = 0b110,
    e123 = 0b111,
}

permuted_blades! {
    e21 = -e12,
    e31 = -e13,
    e32 = -e23,
    e132 = -e123,
    e213 = -e123,
    e231 = e123,
    e312 = e123,
    e321 = -e123,
}

/// `s` on the scalar basis set.
pub fn scalar(s: Scalar) -> Mv {
    Mv::scalar(s)
}

/// `x·e1 + y·e2 + z·e3`.
pub fn vector(x: Scalar, y: Scalar, z: Scalar) -> Mv {
    Mv::from_canonical(VECTOR, &[x, y, z])
}

/// `xy·e12 + xz·e13 + yz·e23`.
pub fn bivector(xy: Scalar, xz: Scalar, yz: Scalar) -> Mv {
    Mv::from_canonical(BIVECTOR, &[xy, xz, yz])
}

/// `xyz·e123`.
pub fn trivector(xyz: Scalar) -> Mv {
    Mv::from_canonical(TRIVECTOR, &[xyz])
}

/// `s + xy·e12 + xz·e13 + yz·e23`.
pub fn even(s: Scalar, xy: Scalar, xz: Scalar, yz: Scalar) -> Mv {
    Mv::from_canonical(EVEN, &[s, xy, xz, yz])
}

/// Rotor turning by `angle` radians within `plane`, in the plane's own
/// orientation (`e12` turns `e1` toward `e2`).
pub fn rotor(plane: &Mv, angle: Scalar) -> Result<Rotor<Vga3>> {
    Rotor::from_bivector(&(plane.normalized() * (0.5 * angle)))
}
