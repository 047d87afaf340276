// src/types.rs
//! Numeric and index primitives shared by every module.

/// Coefficient type of every multivector.
#[cfg(feature = "f32")]
pub type Scalar = f32;
/// Coefficient type of every multivector.
#[cfg(not(feature = "f32"))]
pub type Scalar = f64;

/// Bitmask naming a basis blade: bit `i` set means basis vector `i` takes part.
pub type BasisIndex = u32;

/// Largest number of basis vectors an algebra may have.
pub const MAX_DIM: usize = 8;

/// Grade of a basis blade (number of participating basis vectors).
#[inline(always)]
pub const fn grade(index: BasisIndex) -> u32 {
    index.count_ones()
}
