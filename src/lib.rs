//! # ga_kernel Quickstart
//!
//! ```rust
//! use ga_kernel::prelude::*;
//! use ga_kernel::algebras::pga3;
//!
//! // Turn the point (1, 0, 0) a quarter turn about the z axis, then lift it by 2.
//! let motion = pga3::rotation(&pga3::e12(), std::f64::consts::FRAC_PI_2)
//!     .unwrap()
//!     .then(&pga3::translator(0.0, 0.0, 2.0));
//! let moved = motion.apply(&pga3::point(1.0, 0.0, 0.0));
//!
//! // Should end up at (0, 1, 2)
//! const EPS: f64 = 1e-12;
//! let [x, y, z] = pga3::point_coords(&moved).unwrap();
//! assert!(x.abs() < EPS);
//! assert!((y - 1.0).abs() < EPS);
//! assert!((z - 2.0).abs() < EPS);
//! ```
//!
#![doc = include_str!("../README.md")]

#[macro_use]
mod macros;

// Core modules
pub mod blade_set;
pub mod error;
pub mod metric;
pub mod multivector;
pub mod products;
pub mod sign;
pub mod types;

// Functions of multivectors
pub mod rotor;
pub mod transcendental;

// Concrete algebras and the maps between them
pub mod algebras;
pub mod convert;

pub mod prelude;

// --- Public API exports ---

pub use error::{AlgebraError, Result};
pub use metric::Metric;
pub use multivector::Multivector;
pub use products::Product;
pub use rotor::Rotor;
pub use transcendental::{ga_exp, ga_inv, ga_log, simple_exp, simple_inv, simple_log};
pub use types::{BasisIndex, Scalar};
