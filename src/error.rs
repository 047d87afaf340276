// src/error.rs
//! Error types for structural mismatches and unsupported invocations.
//!
//! Arithmetic never fails. Only building a multivector from a malformed
//! basis list, converting between incompatible basis sets, or asking the
//! transcendental functions for a case they do not cover is rejected.

use crate::types::BasisIndex;

/// Errors raised by the algebra engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlgebraError {
    /// Basis list is not strictly ascending (unsorted or duplicated).
    #[error("basis list is not strictly ascending at position {position}: {previous:#b} then {next:#b}")]
    NonCanonicalBasis {
        position: usize,
        previous: BasisIndex,
        next: BasisIndex,
    },
    /// Basis and coefficient lists differ in length.
    #[error("{bases} basis indices but {coefficients} coefficients")]
    LengthMismatch { bases: usize, coefficients: usize },
    /// Basis index uses a bit beyond the algebra's dimension.
    #[error("basis index {index:#b} does not exist in a {dim}-dimensional algebra")]
    BasisOutOfRange { index: BasisIndex, dim: usize },
    /// Source basis set is not contained in the target basis set.
    #[error("basis {missing:#b} is not part of the target basis set")]
    NotSubset { missing: BasisIndex },
    /// A reference blade must carry exactly one nonzero basis component.
    #[error("reference blade must have exactly one nonzero term, found {terms}")]
    NotABlade { terms: usize },
    /// Transcendental function called on an operand it does not support.
    #[error("{operation} is not supported for operands of grades {grades:?} in {algebra}")]
    Unsupported {
        operation: &'static str,
        algebra: &'static str,
        grades: Vec<u32>,
    },
    /// Rotors are restricted to even grades.
    #[error("rotor must be even-graded, found grades {grades:?}")]
    NotEven { grades: Vec<u32> },
    /// Multivector cannot be read as a point.
    #[error("{algebra} multivector of grades {grades:?} is not pointlike")]
    NotPointlike {
        algebra: &'static str,
        grades: Vec<u32>,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AlgebraError>;
