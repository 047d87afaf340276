//! Two-dimensional Euclidean geometric algebra, Cl(2,0).
//!
//! Basis vectors `e1`, `e2`; the pseudoscalar `e12` squares to -1, so the
//! even subalgebra is the complex numbers and rotors are unit complex
//! numbers.

use crate::metric::Metric;
use crate::multivector::Multivector;
use crate::rotor::Rotor;
use crate::transcendental::simple_exp;
use crate::types::{BasisIndex, Scalar};

/// `e1² = e2² = 1`.
pub const METRIC: &[i8] = &[1, 1];

/// Metric marker for Cl(2,0).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Vga2;

impl Metric for Vga2 {
    const SIGNATURE: &'static [i8] = METRIC;
    const NAME: &'static str = "VGA2";
}

/// Multivector of this algebra.
pub type Mv = Multivector<Vga2>;

pub const SCALAR: &[BasisIndex] = &[0b00];
pub const VECTOR: &[BasisIndex] = &[0b01, 0b10];
pub const BIVECTOR: &[BasisIndex] = &[0b11];
pub const EVEN: &[BasisIndex] = &[0b00, 0b11];
pub const FULL: &[BasisIndex] = &[0b00, 0b01, 0b10, 0b11];

unit_blades! {
    e = 0b00,
    e1 = 0b01,
    e2 = 0b10,
    e12 = 0b11,
}

permuted_blades! {
    e21 = -e12,
}

/// `s` on the scalar basis set.
pub fn scalar(s: Scalar) -> Mv {
    Mv::scalar(s)
}

/// `x·e1 + y·e2`.
pub fn vector(x: Scalar, y: Scalar) -> Mv {
    Mv::from_canonical(VECTOR, &[x, y])
}

/// `xy·e12`.
pub fn bivector(xy: Scalar) -> Mv {
    Mv::from_canonical(BIVECTOR, &[xy])
}

/// `s + xy·e12`.
pub fn even(s: Scalar, xy: Scalar) -> Mv {
    Mv::from_canonical(EVEN, &[s, xy])
}

/// Rotor turning `e1` toward `e2` by `angle` radians.
pub fn rotor(angle: Scalar) -> Rotor<Vga2> {
    Rotor::from_unit(simple_exp(&bivector(0.5 * angle)))
}
