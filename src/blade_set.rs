// src/blade_set.rs
//! Blade-set algebra: deducing which basis blades an operation produces.
//!
//! A blade set is a strictly ascending list of basis indices. Sums take the
//! union of their operands' sets; products take every `b1 ^ b2` whose pair
//! passes the product's inclusion predicate.

use smallvec::SmallVec;

use crate::error::{AlgebraError, Result};
use crate::types::{grade, BasisIndex};

/// Inline capacity: the 16 blades of a 4-dimensional algebra.
pub const INLINE_BLADES: usize = 16;

/// Strictly ascending list of basis indices.
pub type BladeSet = SmallVec<[BasisIndex; INLINE_BLADES]>;

/// Checks that `bases` is strictly ascending and fits in `dim` basis vectors.
pub fn validate(bases: &[BasisIndex], dim: usize) -> Result<()> {
    let limit: u64 = 1 << dim;
    if let Some(&index) = bases.iter().find(|&&b| u64::from(b) >= limit) {
        return Err(AlgebraError::BasisOutOfRange { index, dim });
    }
    match bases.windows(2).position(|w| w[0] >= w[1]) {
        Some(position) => Err(AlgebraError::NonCanonicalBasis {
            position: position + 1,
            previous: bases[position],
            next: bases[position + 1],
        }),
        None => Ok(()),
    }
}

/// Sorted union of two canonical blade sets.
pub fn union(a: &[BasisIndex], b: &[BasisIndex]) -> BladeSet {
    let mut out = BladeSet::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => {
                out.push(a[i]);
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                out.push(b[j]);
                j += 1;
            }
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    out
}

/// Output set of a product: sorted, deduplicated `b1 ^ b2` over every pair
/// accepted by `include`.
pub fn product<F>(a: &[BasisIndex], b: &[BasisIndex], include: F) -> BladeSet
where
    F: Fn(BasisIndex, BasisIndex) -> bool,
{
    let mut out = BladeSet::new();
    for &b1 in a {
        for &b2 in b {
            if include(b1, b2) {
                out.push(b1 ^ b2);
            }
        }
    }
    out.sort_unstable();
    out.dedup();
    out
}

/// Members of `bases` with the given grade.
pub fn of_grade(bases: &[BasisIndex], k: u32) -> BladeSet {
    bases.iter().copied().filter(|&b| grade(b) == k).collect()
}

/// First member of `sub` missing from `sup`, if any.
pub fn missing_from(sub: &[BasisIndex], sup: &[BasisIndex]) -> Option<BasisIndex> {
    sub.iter().copied().find(|b| sup.binary_search(b).is_err())
}

/// Whether every member of `sub` is in `sup`.
pub fn is_subset(sub: &[BasisIndex], sup: &[BasisIndex]) -> bool {
    missing_from(sub, sup).is_none()
}

/// Distinct grades present, ascending.
pub fn grades(bases: &[BasisIndex]) -> Vec<u32> {
    let mut out: Vec<u32> = bases.iter().map(|&b| grade(b)).collect();
    out.sort_unstable();
    out.dedup();
    out
}

/// The common grade of every member, or `None` for mixed or empty sets.
pub fn homogeneous_grade(bases: &[BasisIndex]) -> Option<u32> {
    let first = grade(*bases.first()?);
    bases.iter().all(|&b| grade(b) == first).then_some(first)
}

/// Every basis index of grade `k` in a `dim`-dimensional algebra, ascending.
pub fn all_of_grade(dim: usize, k: u32) -> BladeSet {
    (0..(1 as BasisIndex) << dim).filter(|&b| grade(b) == k).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_unsorted_and_duplicates() {
        assert!(validate(&[0, 1, 2, 3], 2).is_ok());
        assert_eq!(
            validate(&[0, 2, 1], 2),
            Err(AlgebraError::NonCanonicalBasis { position: 2, previous: 2, next: 1 })
        );
        assert!(matches!(validate(&[1, 1], 2), Err(AlgebraError::NonCanonicalBasis { .. })));
        assert_eq!(
            validate(&[0, 4], 2),
            Err(AlgebraError::BasisOutOfRange { index: 4, dim: 2 })
        );
    }

    #[test]
    fn union_merges_sorted() {
        assert_eq!(union(&[0, 3, 5], &[1, 3, 6]).as_slice(), &[0, 1, 3, 5, 6]);
        assert_eq!(union(&[], &[2]).as_slice(), &[2]);
    }

    #[test]
    fn outer_product_set_of_vectors() {
        let vectors = [0b001, 0b010, 0b100];
        let out = product(&vectors, &vectors, |a, b| a & b == 0);
        assert_eq!(out.as_slice(), &[0b011, 0b101, 0b110]);
    }

    #[test]
    fn geometric_product_set_of_vectors() {
        let vectors = [0b01, 0b10];
        let out = product(&vectors, &vectors, |_, _| true);
        assert_eq!(out.as_slice(), &[0, 0b11]);
    }

    #[test]
    fn grade_queries() {
        let bases = [0, 0b01, 0b10, 0b11];
        assert_eq!(of_grade(&bases, 1).as_slice(), &[0b01, 0b10]);
        assert_eq!(grades(&bases), vec![0, 1, 2]);
        assert_eq!(homogeneous_grade(&[0b01, 0b10]), Some(1));
        assert_eq!(homogeneous_grade(&bases), None);
        assert_eq!(homogeneous_grade(&[]), None);
        assert_eq!(all_of_grade(4, 2).len(), 6);
        assert!(is_subset(&[1, 2], &bases));
        assert_eq!(missing_from(&[1, 4], &bases), Some(4));
    }
}
