// src/sign.rs
//! Sign/parity engine.
//!
//! Pure integer functions on blade bitmasks. Blades are products of basis
//! vectors in ascending order, so multiplying two blades means counting the
//! transpositions needed to restore that order, then collapsing every
//! repeated basis vector through the metric. No floating point is involved.

use crate::types::BasisIndex;

/// Sign of the basis blade product `e_b1 * e_b2` in `metric`: -1, 0 or +1.
///
/// The resulting blade is always `b1 ^ b2`. The scan walks the bit
/// positions upwards keeping the parity of the `b1` vectors that still lie
/// ahead of the current position; every `b2` vector has to be moved past
/// exactly those. A basis vector present in both operands collapses to its
/// metric entry, and a null direction annihilates the whole product.
pub const fn blade_product_sign(metric: &[i8], b1: BasisIndex, b2: BasisIndex) -> i8 {
    let mut ahead = b1.count_ones() & 1;
    let mut negative = 0u32;
    let mut bit = 0;
    while bit < metric.len() {
        let in_b1 = (b1 >> bit) & 1;
        let in_b2 = (b2 >> bit) & 1;
        ahead ^= in_b1;
        if in_b2 == 1 {
            negative ^= ahead;
            if in_b1 == 1 {
                match metric[bit] {
                    0 => return 0,
                    -1 => negative ^= 1,
                    _ => {}
                }
            }
        }
        bit += 1;
    }
    if negative == 1 {
        -1
    } else {
        1
    }
}

/// Sign taken by the dual of basis blade `basis` in a `dim`-dimensional
/// algebra.
///
/// The dual of `e_A` is `dual_sign · e_{A^full}`, where the sign is the
/// parity of ordering `e_A e_Ā` canonically, so `e_A ∧ dual(e_A)` is the
/// positive pseudoscalar.
pub const fn dual_sign(dim: usize, basis: BasisIndex) -> i8 {
    let mut complement_behind = 0u32;
    let mut negative = 0u32;
    let mut bit = 0;
    while bit < dim {
        if (basis >> bit) & 1 == 1 {
            negative ^= complement_behind;
        } else {
            complement_behind ^= 1;
        }
        bit += 1;
    }
    if negative == 1 {
        -1
    } else {
        1
    }
}

/// `(-1)^⌊k/2⌋` for a blade of grade `k`.
#[inline(always)]
pub const fn reverse_sign(basis: BasisIndex) -> i8 {
    if (basis.count_ones() / 2) & 1 == 1 {
        -1
    } else {
        1
    }
}

/// `(-1)^k` for a blade of grade `k`.
#[inline(always)]
pub const fn involute_sign(basis: BasisIndex) -> i8 {
    if basis.count_ones() & 1 == 1 {
        -1
    } else {
        1
    }
}

/// Sign of the Clifford conjugate (reverse composed with involution).
#[inline(always)]
pub const fn conjugate_sign(basis: BasisIndex) -> i8 {
    reverse_sign(basis) * involute_sign(basis)
}
