// src/convert.rs
//! Moving values between the concrete algebras.
//!
//! A *reinterpretation* keeps the geometric object (a vector stays the same
//! vector, a motion the same motion) and only relabels blades. An
//! *operation* changes the object, e.g. by projecting out a basis vector.
//! Each function says which one it is.
//!
//! Blade relabelling is monotone on the blades it keeps, so the result's
//! basis set stays canonical.

use crate::algebras::{pga2, pga3, vga2, vga3};
use crate::algebras::{pga2::Pga2, pga3::Pga3, vga2::Vga2, vga3::Vga3};
use crate::error::{AlgebraError, Result};
use crate::metric::Metric;
use crate::multivector::Multivector;
use crate::rotor::Rotor;
use crate::types::{BasisIndex, Scalar};

/// Relabels every term with `map`; terms mapped to `None` are dropped.
fn remap<S, T, F>(source: &Multivector<S>, map: F) -> Multivector<T>
where
    S: Metric,
    T: Metric,
    F: Fn(BasisIndex) -> Option<BasisIndex>,
{
    let mut terms: Vec<(BasisIndex, Scalar)> =
        source.terms().filter_map(|(b, c)| map(b).map(|target| (target, c))).collect();
    terms.sort_unstable_by_key(|&(b, _)| b);
    let (bases, coeffs) = terms.into_iter().unzip();
    Multivector::from_raw(bases, coeffs)
}

fn without_bit(bit: BasisIndex) -> impl Fn(BasisIndex) -> Option<BasisIndex> {
    move |b| (b & bit == 0).then_some(b)
}

/// Reinterpretation: the same object in the `z = 0` plane.
pub fn vga2_to_vga3(v: &vga2::Mv) -> vga3::Mv {
    remap(v, Some)
}

/// Operation: projects onto the xy-plane, dropping every `e3` term.
pub fn vga3_to_vga2(v: &vga3::Mv) -> vga2::Mv {
    remap(v, without_bit(0b100))
}

/// Reinterpretation: the Euclidean subalgebra, `e_i ↦ e_i`.
pub fn vga2_to_pga2(v: &vga2::Mv) -> pga2::Mv {
    remap(v, |b| Some(b << 1))
}

/// Reinterpretation: the Euclidean subalgebra, `e_i ↦ e_i`.
pub fn vga3_to_pga3(v: &vga3::Mv) -> pga3::Mv {
    remap(v, |b| Some(b << 1))
}

/// Operation: drops every term containing the ideal direction `e0`.
pub fn pga2_to_vga2(v: &pga2::Mv) -> vga2::Mv {
    remap(v, |b| (b & 1 == 0).then_some(b >> 1))
}

/// Operation: drops every term containing the ideal direction `e0`.
pub fn pga3_to_vga3(v: &pga3::Mv) -> vga3::Mv {
    remap(v, |b| (b & 1 == 0).then_some(b >> 1))
}

/// Reinterpretation: the same blades, read in 3D. Motions of the plane
/// become motions preserving `z`.
pub fn pga2_to_pga3(v: &pga2::Mv) -> pga3::Mv {
    remap(v, Some)
}

/// Operation: projects onto the xy-plane, dropping every `e3` term.
pub fn pga3_to_pga2(v: &pga3::Mv) -> pga2::Mv {
    remap(v, without_bit(0b1000))
}

/// Reinterpretation: a 2D point (bivector) as the 3D point in `z = 0`.
pub fn pga2_point_to_pga3(p: &pga2::Mv) -> pga3::Mv {
    pga2_to_pga3(p) ^ pga3::e3()
}

/// Operation: the line through `p` and the origin, `p ∨ origin`.
pub fn line_through_origin(p: &pga3::Mv) -> pga3::Mv {
    p & pga3::origin()
}

/// Reinterpretation: a rotation about the origin as the same PGA2 motion.
pub fn rotor_vga2_to_pga2(r: &Rotor<Vga2>) -> Rotor<Pga2> {
    Rotor::from_unit(vga2_to_pga2(r.as_multivector()))
}

/// Reinterpretation: a rotation about the origin as the same PGA3 motion.
pub fn rotor_vga3_to_pga3(r: &Rotor<Vga3>) -> Rotor<Pga3> {
    Rotor::from_unit(vga3_to_pga3(r.as_multivector()))
}

/// Reinterpretation: a planar motion as the 3D motion preserving `z`.
pub fn rotor_pga2_to_pga3(r: &Rotor<Pga2>) -> Rotor<Pga3> {
    Rotor::from_unit(pga2_to_pga3(r.as_multivector()))
}

/// Values that name a point of 3D space.
pub trait Pointlike {
    /// The point as a 3D PGA trivector on [`pga3::TRIVECTOR`].
    fn to_point3(&self) -> Result<pga3::Mv>;
}

fn not_pointlike<M: Metric>(v: &Multivector<M>) -> AlgebraError {
    let grades = v.grades();
    log::debug!("{} multivector of grades {grades:?} is not a point", M::NAME);
    AlgebraError::NotPointlike { algebra: M::NAME, grades }
}

/// A vector `x·e1 + y·e2` is the point `(x, y, 0)`.
impl Pointlike for vga2::Mv {
    fn to_point3(&self) -> Result<pga3::Mv> {
        match self.homogeneous_grade() {
            Some(1) => Ok(pga3::point(self.project(0b01), self.project(0b10), 0.0)),
            _ => Err(not_pointlike(self)),
        }
    }
}

/// A vector `x·e1 + y·e2 + z·e3` is the point `(x, y, z)`.
impl Pointlike for vga3::Mv {
    fn to_point3(&self) -> Result<pga3::Mv> {
        match self.homogeneous_grade() {
            Some(1) => Ok(pga3::point(self.project(0b001), self.project(0b010), self.project(0b100))),
            _ => Err(not_pointlike(self)),
        }
    }
}

/// Bivectors are points; vectors are read by their Euclidean coordinates.
impl Pointlike for pga2::Mv {
    fn to_point3(&self) -> Result<pga3::Mv> {
        match self.homogeneous_grade() {
            Some(1) => Ok(pga3::point(self.project(0b010), self.project(0b100), 0.0)),
            Some(2) => pga2_point_to_pga3(self).cast(pga3::TRIVECTOR),
            _ => Err(not_pointlike(self)),
        }
    }
}

/// Trivectors are points; vectors are read by their Euclidean coordinates.
impl Pointlike for pga3::Mv {
    fn to_point3(&self) -> Result<pga3::Mv> {
        match self.homogeneous_grade() {
            Some(1) => Ok(pga3::point(self.project(0b0010), self.project(0b0100), self.project(0b1000))),
            Some(3) => self.cast(pga3::TRIVECTOR),
            _ => Err(not_pointlike(self)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remap_keeps_bases_canonical() {
        let v = vga3::Mv::new(&[0b001, 0b011, 0b100, 0b101, 0b110], &[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let dropped = vga3_to_vga2(&v);
        assert_eq!(dropped.bases(), &[0b01, 0b11]);
        assert_eq!(dropped.coefficients(), &[1.0, 2.0]);
        let lifted = vga3_to_pga3(&v);
        assert_eq!(lifted.bases(), &[0b0010, 0b0110, 0b1000, 0b1010, 0b1100]);
    }
}
