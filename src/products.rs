// src/products.rs
//! Product engine.
//!
//! Every non-additive product is the same double loop over the operands'
//! terms, differing only in which blade pairs take part. The output basis
//! set is deduced from the pairs that pass, independent of the coefficient
//! values, so a pair annihilated by a null metric direction still reserves
//! its slot (with coefficient zero).

use std::ops::{BitAnd, BitOr, BitXor, Mul, MulAssign, Shl, Shr};

use crate::blade_set;
use crate::metric::Metric;
use crate::multivector::{Coefficients, Multivector};
use crate::sign::blade_product_sign;
use crate::types::{BasisIndex, Scalar};

/// The predicate-driven products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Product {
    /// `a * b`: every pair.
    Geometric,
    /// `a ^ b`: disjoint blades.
    Outer,
    /// `a | b`: one blade contained in the other.
    Inner,
    /// `a << b`: left blade contained in the right.
    LeftContraction,
    /// `a >> b`: right blade contained in the left.
    RightContraction,
}

impl Product {
    /// Whether the blade pair `(b1, b2)` contributes to this product.
    #[inline(always)]
    pub fn includes(self, b1: BasisIndex, b2: BasisIndex) -> bool {
        let common = b1 & b2;
        match self {
            Product::Geometric => true,
            Product::Outer => common == 0,
            Product::Inner => common == b1 || common == b2,
            Product::LeftContraction => common == b1,
            Product::RightContraction => common == b2,
        }
    }
}

/// Computes `kind` of `a` and `b`.
///
/// An empty operand absorbs the product. Otherwise the coefficient at `k`
/// is the sum over passing pairs with `b1 ^ b2 == k` of
/// `sign(b1, b2) · a[b1] · b[b2]`.
pub fn product<M: Metric>(kind: Product, a: &Multivector<M>, b: &Multivector<M>) -> Multivector<M> {
    if a.is_empty() || b.is_empty() {
        return Multivector::zero();
    }
    let bases = blade_set::product(a.bases(), b.bases(), |b1, b2| kind.includes(b1, b2));
    let mut coeffs: Coefficients = smallvec::smallvec![0.0; bases.len()];
    for (b1, c1) in a.terms() {
        for (b2, c2) in b.terms() {
            if !kind.includes(b1, b2) {
                continue;
            }
            let sign = blade_product_sign(M::SIGNATURE, b1, b2);
            if sign == 0 {
                continue;
            }
            // The deduced set contains every passing b1 ^ b2.
            if let Ok(slot) = bases.binary_search(&(b1 ^ b2)) {
                coeffs[slot] += Scalar::from(sign) * c1 * c2;
            }
        }
    }
    Multivector::from_raw(bases, coeffs)
}

/// Regressive product `dual(dual(a) ^ dual(b))`.
pub fn regressive<M: Metric>(a: &Multivector<M>, b: &Multivector<M>) -> Multivector<M> {
    product(Product::Outer, &a.dual(), &b.dual()).dual()
}

impl<M: Metric> Multivector<M> {
    /// Geometric product.
    pub fn gp(&self, rhs: &Self) -> Self {
        product(Product::Geometric, self, rhs)
    }

    /// Outer (wedge) product.
    pub fn outer(&self, rhs: &Self) -> Self {
        product(Product::Outer, self, rhs)
    }

    /// Symmetric inner product.
    pub fn inner(&self, rhs: &Self) -> Self {
        product(Product::Inner, self, rhs)
    }

    /// Left contraction `self ⌋ rhs`.
    pub fn left_contraction(&self, rhs: &Self) -> Self {
        product(Product::LeftContraction, self, rhs)
    }

    /// Right contraction `self ⌊ rhs`.
    pub fn right_contraction(&self, rhs: &Self) -> Self {
        product(Product::RightContraction, self, rhs)
    }

    /// Regressive (vee) product.
    pub fn regressive(&self, rhs: &Self) -> Self {
        regressive(self, rhs)
    }

    /// Applies `versor` to `self` as `reverse(versor) · self · versor`.
    pub fn sandwich(&self, versor: &Self) -> Self {
        versor.reverse().gp(self).gp(versor)
    }
}

impl<'a, 'b, M: Metric> Mul<&'b Multivector<M>> for &'a Multivector<M> {
    type Output = Multivector<M>;
    fn mul(self, rhs: &'b Multivector<M>) -> Multivector<M> {
        product(Product::Geometric, self, rhs)
    }
}

impl<'a, 'b, M: Metric> BitXor<&'b Multivector<M>> for &'a Multivector<M> {
    type Output = Multivector<M>;
    fn bitxor(self, rhs: &'b Multivector<M>) -> Multivector<M> {
        product(Product::Outer, self, rhs)
    }
}

impl<'a, 'b, M: Metric> BitOr<&'b Multivector<M>> for &'a Multivector<M> {
    type Output = Multivector<M>;
    fn bitor(self, rhs: &'b Multivector<M>) -> Multivector<M> {
        product(Product::Inner, self, rhs)
    }
}

impl<'a, 'b, M: Metric> Shl<&'b Multivector<M>> for &'a Multivector<M> {
    type Output = Multivector<M>;
    fn shl(self, rhs: &'b Multivector<M>) -> Multivector<M> {
        product(Product::LeftContraction, self, rhs)
    }
}

impl<'a, 'b, M: Metric> Shr<&'b Multivector<M>> for &'a Multivector<M> {
    type Output = Multivector<M>;
    fn shr(self, rhs: &'b Multivector<M>) -> Multivector<M> {
        product(Product::RightContraction, self, rhs)
    }
}

impl<'a, 'b, M: Metric> BitAnd<&'b Multivector<M>> for &'a Multivector<M> {
    type Output = Multivector<M>;
    fn bitand(self, rhs: &'b Multivector<M>) -> Multivector<M> {
        regressive(self, rhs)
    }
}

forward_binop!(Mul, mul);
forward_binop!(BitXor, bitxor);
forward_binop!(BitOr, bitor);
forward_binop!(Shl, shl);
forward_binop!(Shr, shr);
forward_binop!(BitAnd, bitand);

forward_assign!(MulAssign, mul_assign, Mul, mul);
