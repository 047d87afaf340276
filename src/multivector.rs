// src/multivector.rs
//! Sparse multivectors over a fixed metric.
//!
//! A multivector stores one coefficient per basis blade of its *basis set*,
//! a strictly ascending list of blade bitmasks. Blades outside the set have
//! coefficient zero. The basis set plays the role of the multivector's type:
//! products deduce it from their operands, sums take the union, and a value
//! can be re-expressed in any superset with [`Multivector::cast`].

use std::fmt;
use std::iter::Sum;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};
use smallvec::SmallVec;

use crate::blade_set::{self, BladeSet, INLINE_BLADES};
use crate::error::{AlgebraError, Result};
use crate::metric::{write_blade_name, Metric};
use crate::sign::{conjugate_sign, dual_sign, involute_sign, reverse_sign};
use crate::types::{grade, BasisIndex, Scalar};

/// Coefficient storage, parallel to the basis set.
pub type Coefficients = SmallVec<[Scalar; INLINE_BLADES]>;

/// A multivector of the algebra `M`.
///
/// Equality is structural: two multivectors are equal when their basis sets
/// and coefficients are equal, so `1 + e01` and `1 + e01 + 0·e0123` differ.
/// Use the [`approx`] traits to compare values irrespective of basis set.
#[derive(Clone, PartialEq)]
pub struct Multivector<M: Metric> {
    bases: BladeSet,
    coeffs: Coefficients,
    metric: PhantomData<M>,
}

impl<M: Metric> Multivector<M> {
    /// Builds from an already canonical basis set. Callers guarantee the
    /// invariant; it is only re-checked in debug builds.
    pub(crate) fn from_raw(bases: BladeSet, coeffs: Coefficients) -> Self {
        let () = M::VALID;
        debug_assert_eq!(bases.len(), coeffs.len());
        debug_assert!(blade_set::validate(&bases, M::DIM).is_ok());
        Self { bases, coeffs, metric: PhantomData }
    }

    /// Builds from basis constants known to be canonical.
    pub(crate) fn from_canonical(bases: &[BasisIndex], coeffs: &[Scalar]) -> Self {
        Self::from_raw(BladeSet::from_slice(bases), Coefficients::from_slice(coeffs))
    }

    /// The zero multivector: an empty basis set.
    pub fn zero() -> Self {
        Self::from_raw(BladeSet::new(), Coefficients::new())
    }

    /// A pure scalar on the basis set `{1}`.
    pub fn scalar(value: Scalar) -> Self {
        Self::from_canonical(&[0], &[value])
    }

    /// Builds a multivector from a basis list and matching coefficients.
    ///
    /// The basis list must be strictly ascending and every index must exist
    /// in the algebra.
    pub fn new(bases: &[BasisIndex], coeffs: &[Scalar]) -> Result<Self> {
        if bases.len() != coeffs.len() {
            return Err(AlgebraError::LengthMismatch { bases: bases.len(), coefficients: coeffs.len() });
        }
        blade_set::validate(bases, M::DIM)?;
        Ok(Self::from_canonical(bases, coeffs))
    }

    /// Builds from `(basis, coefficient)` pairs in any order. Repeated
    /// bases are rejected rather than summed.
    pub fn from_terms<I>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = (BasisIndex, Scalar)>,
    {
        let mut terms: SmallVec<[(BasisIndex, Scalar); INLINE_BLADES]> = terms.into_iter().collect();
        terms.sort_unstable_by_key(|&(b, _)| b);
        let bases: BladeSet = terms.iter().map(|&(b, _)| b).collect();
        blade_set::validate(&bases, M::DIM)?;
        let coeffs = terms.iter().map(|&(_, c)| c).collect();
        Ok(Self::from_raw(bases, coeffs))
    }

    /// Unit basis blade `index`.
    pub fn blade(index: BasisIndex) -> Result<Self> {
        Self::new(&[index], &[1.0])
    }

    /// Zero coefficients on the given basis set.
    pub fn zeros_on(bases: &[BasisIndex]) -> Result<Self> {
        blade_set::validate(bases, M::DIM)?;
        Ok(Self::from_raw(BladeSet::from_slice(bases), smallvec::smallvec![0.0; bases.len()]))
    }

    /// Re-expresses `self` on a superset basis set, filling absent blades
    /// with zero.
    pub fn cast(&self, target: &[BasisIndex]) -> Result<Self> {
        blade_set::validate(target, M::DIM)?;
        if let Some(missing) = blade_set::missing_from(&self.bases, target) {
            log::debug!("cannot cast {} multivector: {missing:#b} missing from target", M::NAME);
            return Err(AlgebraError::NotSubset { missing });
        }
        let coeffs = target.iter().map(|&b| self.project(b)).collect();
        Ok(Self::from_raw(BladeSet::from_slice(target), coeffs))
    }

    /// Basis set, strictly ascending.
    pub fn bases(&self) -> &[BasisIndex] {
        &self.bases
    }

    /// Coefficients, parallel to [`bases`](Self::bases).
    pub fn coefficients(&self) -> &[Scalar] {
        &self.coeffs
    }

    /// Mutable coefficients; the basis set itself cannot be changed.
    pub fn coefficients_mut(&mut self) -> &mut [Scalar] {
        &mut self.coeffs
    }

    /// `(basis, coefficient)` pairs in ascending basis order.
    pub fn terms(&self) -> impl DoubleEndedIterator<Item = (BasisIndex, Scalar)> + ExactSizeIterator + '_ {
        self.bases.iter().copied().zip(self.coeffs.iter().copied())
    }

    /// Size of the basis set.
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    /// Whether the basis set is empty.
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// Whether every coefficient is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0.0)
    }

    /// Distinct grades of the basis set, ascending.
    pub fn grades(&self) -> Vec<u32> {
        blade_set::grades(&self.bases)
    }

    /// Grade shared by every basis, if the basis set is homogeneous.
    pub fn homogeneous_grade(&self) -> Option<u32> {
        blade_set::homogeneous_grade(&self.bases)
    }

    /// Coefficient of basis `index`; zero when absent.
    pub fn project(&self, index: BasisIndex) -> Scalar {
        match self.bases.binary_search(&index) {
            Ok(i) => self.coeffs[i],
            Err(_) => 0.0,
        }
    }

    /// Grade-0 coefficient.
    pub fn scalar_part(&self) -> Scalar {
        self.project(0)
    }

    /// `project(reference.basis) / reference.coefficient`.
    ///
    /// `reference` must have exactly one nonzero term; zero-coefficient
    /// slots in its basis set are ignored.
    pub fn blade_project(&self, reference: &Self) -> Result<Scalar> {
        let mut nonzero = reference.terms().filter(|&(_, c)| c != 0.0);
        match (nonzero.next(), nonzero.next()) {
            (Some((basis, coeff)), None) => Ok(self.project(basis) / coeff),
            _ => {
                let terms = reference.coeffs.iter().filter(|&&c| c != 0.0).count();
                Err(AlgebraError::NotABlade { terms })
            }
        }
    }

    /// Grade-`k` part, on the grade-`k` subset of the basis set.
    pub fn grade_project(&self, k: u32) -> Self {
        self.filter(|b| grade(b) == k)
    }

    /// Even-grade part.
    pub fn even(&self) -> Self {
        self.filter(|b| grade(b) % 2 == 0)
    }

    /// Odd-grade part.
    pub fn odd(&self) -> Self {
        self.filter(|b| grade(b) % 2 == 1)
    }

    /// Copy with exactly-zero terms removed from the basis set.
    pub fn prune(&self) -> Self {
        let (bases, coeffs) = self.terms().filter(|&(_, c)| c != 0.0).unzip();
        Self::from_raw(bases, coeffs)
    }

    fn filter(&self, keep: impl Fn(BasisIndex) -> bool) -> Self {
        let (bases, coeffs) = self.terms().filter(|&(b, _)| keep(b)).unzip();
        Self::from_raw(bases, coeffs)
    }

    fn map_signs(&self, sign: impl Fn(BasisIndex) -> i8) -> Self {
        let coeffs = self.terms().map(|(b, c)| Scalar::from(sign(b)) * c).collect();
        Self::from_raw(self.bases.clone(), coeffs)
    }

    /// Reverse: `(-1)^⌊k/2⌋` on every grade-`k` blade.
    pub fn reverse(&self) -> Self {
        self.map_signs(reverse_sign)
    }

    /// Grade involution: `(-1)^k` on every grade-`k` blade.
    pub fn involute(&self) -> Self {
        self.map_signs(involute_sign)
    }

    /// Clifford conjugate: reverse of the involution.
    pub fn conjugate(&self) -> Self {
        self.map_signs(conjugate_sign)
    }

    /// Dual: `e_A ↦ dual_sign(A) · e_{A^full}`.
    ///
    /// XOR with the full mask maps ascending indices to descending ones, so
    /// the basis set is rebuilt by walking the terms backwards.
    pub fn dual(&self) -> Self {
        let (bases, coeffs) = self
            .terms()
            .rev()
            .map(|(b, c)| (b ^ M::FULL_MASK, Scalar::from(dual_sign(M::DIM, b)) * c))
            .unzip();
        Self::from_raw(bases, coeffs)
    }

    /// Inverse of [`dual`](Self::dual), equal to three applications of it.
    ///
    /// `dual∘dual` multiplies `e_A` by `(-1)^{k(N-k)}`, so `dual³(e_Ā)` comes
    /// back to `e_A` with the sign `dual` gives `e_A`. That is the single
    /// lookup `dual_sign(Ā ^ full)` below.
    pub fn undual(&self) -> Self {
        let (bases, coeffs) = self
            .terms()
            .rev()
            .map(|(b, c)| {
                let target = b ^ M::FULL_MASK;
                (target, Scalar::from(dual_sign(M::DIM, target)) * c)
            })
            .unzip();
        Self::from_raw(bases, coeffs)
    }

    /// `<self · reverse(self)>₀`, signed by the metric.
    pub fn norm2(&self) -> Scalar {
        (self * &self.reverse()).scalar_part()
    }

    /// `sqrt(|norm2|)`.
    pub fn norm(&self) -> Scalar {
        self.norm2().abs().sqrt()
    }

    /// `self / norm()`.
    pub fn normalized(&self) -> Self {
        self / self.norm()
    }

    /// Union-merge of two basis sets, combining matched coefficients with
    /// `op` (absent side reads as zero).
    fn merge(&self, rhs: &Self, op: impl Fn(Scalar, Scalar) -> Scalar) -> Self {
        let bases = blade_set::union(&self.bases, &rhs.bases);
        let coeffs = bases.iter().map(|&b| op(self.project(b), rhs.project(b))).collect();
        Self::from_raw(bases, coeffs)
    }

    fn combine_in_place(&mut self, rhs: &Self, op: impl Fn(Scalar, Scalar) -> Scalar) {
        if self.bases == rhs.bases {
            for (a, &b) in self.coeffs.iter_mut().zip(rhs.coeffs.iter()) {
                *a = op(*a, b);
            }
        } else {
            *self = self.merge(rhs, op);
        }
    }
}

impl<M: Metric> Default for Multivector<M> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<M: Metric> From<Scalar> for Multivector<M> {
    fn from(value: Scalar) -> Self {
        Self::scalar(value)
    }
}

// Addition and subtraction.

impl<'a, M: Metric> AddAssign<&'a Multivector<M>> for Multivector<M> {
    fn add_assign(&mut self, rhs: &'a Multivector<M>) {
        self.combine_in_place(rhs, |a, b| a + b);
    }
}

impl<M: Metric> AddAssign<Multivector<M>> for Multivector<M> {
    fn add_assign(&mut self, rhs: Multivector<M>) {
        *self += &rhs;
    }
}

impl<'a, M: Metric> SubAssign<&'a Multivector<M>> for Multivector<M> {
    fn sub_assign(&mut self, rhs: &'a Multivector<M>) {
        self.combine_in_place(rhs, |a, b| a - b);
    }
}

impl<M: Metric> SubAssign<Multivector<M>> for Multivector<M> {
    fn sub_assign(&mut self, rhs: Multivector<M>) {
        *self -= &rhs;
    }
}

impl<'a, 'b, M: Metric> Add<&'b Multivector<M>> for &'a Multivector<M> {
    type Output = Multivector<M>;
    fn add(self, rhs: &'b Multivector<M>) -> Multivector<M> {
        let mut out = self.clone();
        out += rhs;
        out
    }
}

impl<'a, 'b, M: Metric> Sub<&'b Multivector<M>> for &'a Multivector<M> {
    type Output = Multivector<M>;
    fn sub(self, rhs: &'b Multivector<M>) -> Multivector<M> {
        let mut out = self.clone();
        out -= rhs;
        out
    }
}

impl<M: Metric> Add for Multivector<M> {
    type Output = Multivector<M>;
    fn add(mut self, rhs: Multivector<M>) -> Multivector<M> {
        self += &rhs;
        self
    }
}

impl<'a, M: Metric> Add<&'a Multivector<M>> for Multivector<M> {
    type Output = Multivector<M>;
    fn add(mut self, rhs: &'a Multivector<M>) -> Multivector<M> {
        self += rhs;
        self
    }
}

impl<'a, M: Metric> Add<Multivector<M>> for &'a Multivector<M> {
    type Output = Multivector<M>;
    fn add(self, rhs: Multivector<M>) -> Multivector<M> {
        self + &rhs
    }
}

impl<M: Metric> Sub for Multivector<M> {
    type Output = Multivector<M>;
    fn sub(mut self, rhs: Multivector<M>) -> Multivector<M> {
        self -= &rhs;
        self
    }
}

impl<'a, M: Metric> Sub<&'a Multivector<M>> for Multivector<M> {
    type Output = Multivector<M>;
    fn sub(mut self, rhs: &'a Multivector<M>) -> Multivector<M> {
        self -= rhs;
        self
    }
}

impl<'a, M: Metric> Sub<Multivector<M>> for &'a Multivector<M> {
    type Output = Multivector<M>;
    fn sub(self, rhs: Multivector<M>) -> Multivector<M> {
        self - &rhs
    }
}

// A bare scalar takes part in sums as the basis set {1}.

impl<M: Metric> Add<Scalar> for Multivector<M> {
    type Output = Multivector<M>;
    fn add(self, rhs: Scalar) -> Multivector<M> {
        self + Multivector::scalar(rhs)
    }
}

impl<'a, M: Metric> Add<Scalar> for &'a Multivector<M> {
    type Output = Multivector<M>;
    fn add(self, rhs: Scalar) -> Multivector<M> {
        self + Multivector::scalar(rhs)
    }
}

impl<M: Metric> Add<Multivector<M>> for Scalar {
    type Output = Multivector<M>;
    fn add(self, rhs: Multivector<M>) -> Multivector<M> {
        Multivector::scalar(self) + rhs
    }
}

impl<'a, M: Metric> Add<&'a Multivector<M>> for Scalar {
    type Output = Multivector<M>;
    fn add(self, rhs: &'a Multivector<M>) -> Multivector<M> {
        Multivector::scalar(self) + rhs
    }
}

impl<M: Metric> Sub<Scalar> for Multivector<M> {
    type Output = Multivector<M>;
    fn sub(self, rhs: Scalar) -> Multivector<M> {
        self - Multivector::scalar(rhs)
    }
}

impl<'a, M: Metric> Sub<Scalar> for &'a Multivector<M> {
    type Output = Multivector<M>;
    fn sub(self, rhs: Scalar) -> Multivector<M> {
        self - Multivector::scalar(rhs)
    }
}

impl<M: Metric> Sub<Multivector<M>> for Scalar {
    type Output = Multivector<M>;
    fn sub(self, rhs: Multivector<M>) -> Multivector<M> {
        Multivector::scalar(self) - rhs
    }
}

// Negation and scaling.

impl<'a, M: Metric> Neg for &'a Multivector<M> {
    type Output = Multivector<M>;
    fn neg(self) -> Multivector<M> {
        self * -1.0
    }
}

impl<M: Metric> Neg for Multivector<M> {
    type Output = Multivector<M>;
    fn neg(mut self) -> Multivector<M> {
        self *= -1.0;
        self
    }
}

impl<M: Metric> MulAssign<Scalar> for Multivector<M> {
    fn mul_assign(&mut self, rhs: Scalar) {
        for c in self.coeffs.iter_mut() {
            *c *= rhs;
        }
    }
}

impl<M: Metric> DivAssign<Scalar> for Multivector<M> {
    fn div_assign(&mut self, rhs: Scalar) {
        for c in self.coeffs.iter_mut() {
            *c /= rhs;
        }
    }
}

impl<'a, M: Metric> Mul<Scalar> for &'a Multivector<M> {
    type Output = Multivector<M>;
    fn mul(self, rhs: Scalar) -> Multivector<M> {
        let mut out = self.clone();
        out *= rhs;
        out
    }
}

impl<M: Metric> Mul<Scalar> for Multivector<M> {
    type Output = Multivector<M>;
    fn mul(mut self, rhs: Scalar) -> Multivector<M> {
        self *= rhs;
        self
    }
}

impl<M: Metric> Mul<Multivector<M>> for Scalar {
    type Output = Multivector<M>;
    fn mul(self, rhs: Multivector<M>) -> Multivector<M> {
        rhs * self
    }
}

impl<'a, M: Metric> Mul<&'a Multivector<M>> for Scalar {
    type Output = Multivector<M>;
    fn mul(self, rhs: &'a Multivector<M>) -> Multivector<M> {
        rhs * self
    }
}

impl<'a, M: Metric> Div<Scalar> for &'a Multivector<M> {
    type Output = Multivector<M>;
    fn div(self, rhs: Scalar) -> Multivector<M> {
        let mut out = self.clone();
        out /= rhs;
        out
    }
}

impl<M: Metric> Div<Scalar> for Multivector<M> {
    type Output = Multivector<M>;
    fn div(mut self, rhs: Scalar) -> Multivector<M> {
        self /= rhs;
        self
    }
}

impl<M: Metric> Sum for Multivector<M> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, mv| acc + mv)
    }
}

impl<'a, M: Metric> Sum<&'a Multivector<M>> for Multivector<M> {
    fn sum<I: Iterator<Item = &'a Multivector<M>>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, mv| acc + mv)
    }
}

impl<M: Metric> num_traits::Zero for Multivector<M> {
    fn zero() -> Self {
        Multivector::zero()
    }

    fn is_zero(&self) -> bool {
        Multivector::is_zero(self)
    }
}

impl<M: Metric> num_traits::One for Multivector<M> {
    fn one() -> Self {
        Multivector::scalar(1.0)
    }
}

// Approximate comparison ignores the basis set: absent blades read as zero.

impl<M: Metric> AbsDiffEq for Multivector<M> {
    type Epsilon = Scalar;

    fn default_epsilon() -> Scalar {
        Scalar::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Scalar) -> bool {
        blade_set::union(&self.bases, &other.bases)
            .iter()
            .all(|&b| self.project(b).abs_diff_eq(&other.project(b), epsilon))
    }
}

impl<M: Metric> RelativeEq for Multivector<M> {
    fn default_max_relative() -> Scalar {
        Scalar::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Scalar, max_relative: Scalar) -> bool {
        blade_set::union(&self.bases, &other.bases)
            .iter()
            .all(|&b| self.project(b).relative_eq(&other.project(b), epsilon, max_relative))
    }
}

/// Signed terms in ascending basis order: `-3 + 3e1 + e12 - e3`.
///
/// Zero terms are skipped, a unit coefficient is not printed in front of a
/// blade, and a multivector without nonzero terms prints as `0`. A
/// precision (`{:.3}`) applies to every printed coefficient.
impl<M: Metric> fmt::Display for Multivector<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (basis, coeff) in self.terms().filter(|&(_, c)| c != 0.0) {
            let magnitude = coeff.abs();
            match (first, coeff < 0.0) {
                (true, true) => f.write_str("-")?,
                (true, false) => {}
                (false, true) => f.write_str(" - ")?,
                (false, false) => f.write_str(" + ")?,
            }
            first = false;
            if basis == 0 || magnitude != 1.0 {
                match f.precision() {
                    Some(p) => write!(f, "{magnitude:.p$}")?,
                    None => write!(f, "{magnitude}")?,
                }
            }
            if basis != 0 {
                write_blade_name::<M>(f, basis)?;
            }
        }
        if first {
            f.write_str("0")?;
        }
        Ok(())
    }
}

impl<M: Metric> fmt::Debug for Multivector<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Blade<M>(BasisIndex, PhantomData<M>);
        impl<M: Metric> fmt::Debug for Blade<M> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write_blade_name::<M>(f, self.0)
            }
        }

        write!(f, "Multivector<{}> ", M::NAME)?;
        f.debug_map()
            .entries(self.terms().map(|(b, c)| (Blade::<M>(b, PhantomData), c)))
            .finish()
    }
}
