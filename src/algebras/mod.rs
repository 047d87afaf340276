//! Concrete algebras: Euclidean (VGA) and projective (PGA) in 2D and 3D.
//!
//! Each module provides its metric marker type, an `Mv` alias, basis-set
//! constants for the usual multivector kinds, the named unit blades
//! together with their permuted aliases, and typed constructors.

pub mod pga2;
pub mod pga3;
pub mod vga2;
pub mod vga3;
