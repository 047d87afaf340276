// src/rotor.rs
//! Rotors: normalized even multivectors acting by the sandwich product.
//!
//! A rotor `R` moves `A` to `reverse(R)·A·R`, and "apply `A`, then `B`" is
//! the product `A·B`. Every composition is followed by a renormalization so
//! that long chains of motions do not drift away from `R·reverse(R) = 1`.

use std::fmt;
use std::ops::Mul;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{AlgebraError, Result};
use crate::metric::Metric;
use crate::multivector::Multivector;
use crate::transcendental::{ga_exp, ga_log};
use crate::types::{grade, Scalar};

/// A normalized even-graded multivector of the algebra `M`.
#[derive(Clone, PartialEq, Debug)]
pub struct Rotor<M: Metric>(Multivector<M>);

impl<M: Metric> Rotor<M> {
    /// The rotor that leaves everything in place.
    pub fn identity() -> Self {
        Rotor(Multivector::scalar(1.0))
    }

    /// Wraps a value already known to be even and normalized.
    pub(crate) fn from_unit(inner: Multivector<M>) -> Self {
        Rotor(inner)
    }

    /// Accepts an even-graded multivector and renormalizes it.
    pub fn from_multivector(inner: Multivector<M>) -> Result<Self> {
        if inner.bases().iter().any(|&b| grade(b) % 2 == 1) {
            let grades = inner.grades();
            log::debug!("rejecting {} rotor of grades {grades:?}", M::NAME);
            return Err(AlgebraError::NotEven { grades });
        }
        Ok(Rotor(inner).renormalized())
    }

    /// `exp(bivector)`, renormalized.
    ///
    /// Any operand accepted by [`ga_exp`] whose exponential is even works;
    /// in practice a bivector (half the rotation angle times the unit
    /// plane or line).
    pub fn from_bivector(bivector: &Multivector<M>) -> Result<Self> {
        Self::from_multivector(ga_exp(bivector)?)
    }

    /// The underlying even multivector.
    pub fn as_multivector(&self) -> &Multivector<M> {
        &self.0
    }

    /// Unwraps into the underlying even multivector.
    pub fn into_multivector(self) -> Multivector<M> {
        self.0
    }

    /// `reverse(R)·a·R`.
    pub fn apply(&self, a: &Multivector<M>) -> Multivector<M> {
        a.sandwich(&self.0)
    }

    /// [`apply`](Self::apply) to each item, in order.
    pub fn apply_all(&self, items: &[Multivector<M>]) -> Vec<Multivector<M>> {
        items.iter().map(|a| self.apply(a)).collect()
    }

    /// [`apply_all`](Self::apply_all) spread over the rayon pool.
    #[cfg(feature = "parallel")]
    pub fn par_apply_all(&self, items: &[Multivector<M>]) -> Vec<Multivector<M>> {
        items.par_iter().map(|a| self.apply(a)).collect()
    }

    /// The motion `self` followed by `next`: `self · next`, renormalized.
    pub fn then(&self, next: &Self) -> Self {
        Rotor(&self.0 * &next.0).renormalized()
    }

    /// The inverse motion.
    pub fn reverse(&self) -> Self {
        Rotor(self.0.reverse())
    }

    /// Rescales so that `R·reverse(R) = 1`.
    ///
    /// `n = R·reverse(R)` is divided out by `sqrt(|<n>₀|)`. In even
    /// dimensions with a degenerate pseudoscalar `I` the product can also
    /// pick up a `p·I` term; since `I² = 0` and `I` commutes with even
    /// elements, multiplying by `1 − (p / 2<n>₀)·I` cancels it exactly.
    /// A null rotor (`<n>₀ == 0`) cannot be normalized and is returned as is.
    pub fn renormalized(&self) -> Self {
        let n = &self.0 * &self.0.reverse();
        let s = n.scalar_part();
        let p = n.project(M::FULL_MASK);
        log::trace!("renormalizing {} rotor: scalar drift {:e}, ideal drift {:e}", M::NAME, s - 1.0, p);
        if s == 0.0 {
            log::debug!("cannot renormalize null {} rotor", M::NAME);
            return self.clone();
        }
        let mut out = &self.0 / s.abs().sqrt();
        if M::PSEUDOSCALAR_SQUARE == 0 && M::DIM % 2 == 0 && p != 0.0 {
            let correction = Multivector::<M>::from_canonical(&[0, M::FULL_MASK], &[1.0, -p / (2.0 * s)]);
            out = out * correction;
        }
        Rotor(out)
    }

    /// Logarithm: the bivector whose exponential is this rotor.
    pub fn log(&self) -> Result<Multivector<M>> {
        ga_log(&self.0)
    }

    /// The motion a fraction `t` of the way from `self` to `to`:
    /// `self · exp(t · log(reverse(self) · to))`.
    pub fn interpolate(&self, to: &Self, t: Scalar) -> Result<Self> {
        let delta = self.reverse().then(to).log()?;
        Ok(self.then(&Self::from_bivector(&(delta * t))?))
    }
}

impl<M: Metric> Default for Rotor<M> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<M: Metric> TryFrom<Multivector<M>> for Rotor<M> {
    type Error = AlgebraError;

    fn try_from(inner: Multivector<M>) -> Result<Self> {
        Self::from_multivector(inner)
    }
}

impl<M: Metric> From<Rotor<M>> for Multivector<M> {
    fn from(rotor: Rotor<M>) -> Self {
        rotor.0
    }
}

impl<M: Metric> AsRef<Multivector<M>> for Rotor<M> {
    fn as_ref(&self) -> &Multivector<M> {
        &self.0
    }
}

/// Composition, same as [`Rotor::then`].
impl<'a, 'b, M: Metric> Mul<&'b Rotor<M>> for &'a Rotor<M> {
    type Output = Rotor<M>;
    fn mul(self, rhs: &'b Rotor<M>) -> Rotor<M> {
        self.then(rhs)
    }
}

impl<M: Metric> Mul for Rotor<M> {
    type Output = Rotor<M>;
    fn mul(self, rhs: Rotor<M>) -> Rotor<M> {
        self.then(&rhs)
    }
}

impl<M: Metric> fmt::Display for Rotor<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
