// src/prelude.rs
//! The “everything” import for ga_kernel.
//!
//! Brings in the value types, the transcendental functions and the
//! conversion trait with one glob:
//! ```rust
//! use ga_kernel::prelude::*;
//! ```
//! The concrete algebras stay behind their module paths (`algebras::pga3`,
//! …) because each defines the same constructor names.

// core data types
pub use crate::error::{AlgebraError, Result};
pub use crate::metric::Metric;
pub use crate::multivector::Multivector;
pub use crate::rotor::Rotor;
pub use crate::types::{BasisIndex, Scalar};

// algebras
pub use crate::algebras::{pga2::Pga2, pga3::Pga3, vga2::Vga2, vga3::Vga3};

// operations
pub use crate::convert::Pointlike;
pub use crate::products::Product;
pub use crate::transcendental::{ga_exp, ga_inv, ga_log};
