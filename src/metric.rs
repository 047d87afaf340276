// src/metric.rs
//! Type-level metric signatures.
//!
//! An algebra is identified by a zero-sized marker type implementing
//! [`Metric`]. Because the metric lives in the type system, multivectors of
//! different algebras cannot be combined, and a malformed signature is
//! rejected when the crate using it is compiled.

use std::fmt::Debug;
use std::hash::Hash;

use crate::sign::blade_product_sign;
use crate::types::{BasisIndex, MAX_DIM};

/// Metric signature of a Clifford algebra: `SIGNATURE[i]` is `e_i · e_i`.
///
/// ```
/// use ga_kernel::Metric;
///
/// #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
/// struct Spacetime2;
///
/// impl Metric for Spacetime2 {
///     const SIGNATURE: &'static [i8] = &[1, -1];
///     const NAME: &'static str = "Cl(1,1)";
/// }
///
/// assert_eq!(Spacetime2::DIM, 2);
/// assert_eq!(Spacetime2::FULL_MASK, 0b11);
/// ```
pub trait Metric: Debug + Clone + Copy + Default + PartialEq + Eq + Hash + Send + Sync + 'static {
    /// One entry per basis vector, each in {-1, 0, 1}.
    const SIGNATURE: &'static [i8];

    /// Human-readable algebra name used in diagnostics.
    const NAME: &'static str;

    /// Label of basis vector 0 when printing blades (`e1` vs `e0`).
    const FIRST_LABEL: u32 = 1;

    /// Number of basis vectors.
    const DIM: usize = Self::SIGNATURE.len();

    /// Basis index of the pseudoscalar.
    const FULL_MASK: BasisIndex = full_mask(Self::SIGNATURE.len());

    /// Sign of `I * I` for the pseudoscalar `I`; 0 in degenerate metrics.
    const PSEUDOSCALAR_SQUARE: i8 =
        blade_product_sign(Self::SIGNATURE, full_mask(Self::SIGNATURE.len()), full_mask(Self::SIGNATURE.len()));

    /// Evaluated whenever a multivector of this algebra is built; fails the
    /// build for an invalid signature.
    #[doc(hidden)]
    const VALID: () = check_signature(Self::SIGNATURE);
}

/// Bitmask with the low `dim` bits set.
pub const fn full_mask(dim: usize) -> BasisIndex {
    if dim == 0 {
        0
    } else {
        (1 << dim) - 1
    }
}

const fn check_signature(signature: &[i8]) {
    assert!(signature.len() <= MAX_DIM, "metric signature exceeds MAX_DIM basis vectors");
    let mut i = 0;
    while i < signature.len() {
        assert!(
            signature[i] >= -1 && signature[i] <= 1,
            "metric signature entries must be -1, 0 or 1"
        );
        i += 1;
    }
}

/// Writes the name of basis blade `index` (`1`, `e1`, `e12`, `e0123`, …).
pub(crate) fn write_blade_name<M: Metric>(f: &mut impl std::fmt::Write, index: BasisIndex) -> std::fmt::Result {
    if index == 0 {
        return f.write_str("1");
    }
    f.write_char('e')?;
    for bit in 0..M::DIM {
        if (index >> bit) & 1 == 1 {
            write!(f, "{}", M::FIRST_LABEL + bit as u32)?;
        }
    }
    Ok(())
}

/// Name of basis blade `index` in algebra `M`.
pub fn blade_name<M: Metric>(index: BasisIndex) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_blade_name::<M>(&mut out, index);
    out
}
