//! The coefficient-type seam of the polynomial engine.
//!
//! A [`Polynomial`](crate::poly::Polynomial) is generic over its coefficient type. The
//! [`Coefficient`] trait captures exactly what the engine needs: exact ring arithmetic, a gcd for
//! integral types (the [`content`](crate::gcd::content) family refuses non-integral
//! coefficients), and conversions used by the root finder. It is implemented for
//! [`rug::Integer`], [`rug::Rational`] and `f64`.

use rug::ops::Pow;
use rug::{Integer, Rational};
use std::fmt::{Debug, Display};

/// A polynomial coefficient.
///
/// Arithmetic goes through explicit methods rather than operator bounds so that implementations
/// can use `rug`'s borrowing operators without intermediate clones.
pub trait Coefficient: Clone + PartialEq + Debug + Display {
    /// Name of the coefficient type, reported by
    /// [`Polynomial::dtype`](crate::poly::Polynomial::dtype).
    const DTYPE: &'static str;

    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if the value is the additive identity.
    fn is_zero(&self) -> bool;

    /// `self + other`.
    fn add(&self, other: &Self) -> Self;

    /// `self * other`.
    fn mul(&self, other: &Self) -> Self;

    /// `-self`.
    fn neg(&self) -> Self;

    /// `self` raised to a non-negative integer power.
    fn pow_u32(&self, exp: u32) -> Self;

    /// The greatest common divisor of two values, or `None` if the type is not integral.
    fn gcd(&self, other: &Self) -> Option<Self>;

    /// `self / other`, where the caller guarantees the division is exact and `other` is nonzero.
    fn div_exact(&self, other: &Self) -> Self;

    /// The value as an exact rational, if the type can represent it exactly.
    fn as_rational(&self) -> Option<Rational>;

    /// The value rounded to an `f64`, for the numerical root delegate.
    fn to_f64(&self) -> f64;
}

impl Coefficient for Integer {
    const DTYPE: &'static str = "integer";

    fn zero() -> Self {
        Integer::new()
    }

    fn one() -> Self {
        Integer::from(1)
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }

    fn add(&self, other: &Self) -> Self {
        Integer::from(self + other)
    }

    fn mul(&self, other: &Self) -> Self {
        Integer::from(self * other)
    }

    fn neg(&self) -> Self {
        Integer::from(-self)
    }

    fn pow_u32(&self, exp: u32) -> Self {
        Integer::from(self.pow(exp))
    }

    fn gcd(&self, other: &Self) -> Option<Self> {
        Some(Integer::from(self.gcd_ref(other)))
    }

    fn div_exact(&self, other: &Self) -> Self {
        Integer::from(self.div_exact_ref(other))
    }

    fn as_rational(&self) -> Option<Rational> {
        Some(Rational::from(self))
    }

    fn to_f64(&self) -> f64 {
        Integer::to_f64(self)
    }
}

impl Coefficient for Rational {
    const DTYPE: &'static str = "rational";

    fn zero() -> Self {
        Rational::new()
    }

    fn one() -> Self {
        Rational::from(1)
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }

    fn add(&self, other: &Self) -> Self {
        Rational::from(self + other)
    }

    fn mul(&self, other: &Self) -> Self {
        Rational::from(self * other)
    }

    fn neg(&self) -> Self {
        Rational::from(-self)
    }

    fn pow_u32(&self, exp: u32) -> Self {
        Rational::from(self.pow(exp as i32))
    }

    fn gcd(&self, _other: &Self) -> Option<Self> {
        None
    }

    fn div_exact(&self, other: &Self) -> Self {
        Rational::from(self / other)
    }

    fn as_rational(&self) -> Option<Rational> {
        Some(self.clone())
    }

    fn to_f64(&self) -> f64 {
        Rational::to_f64(self)
    }
}

impl Coefficient for f64 {
    const DTYPE: &'static str = "f64";

    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn is_zero(&self) -> bool {
        *self == 0.0
    }

    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn mul(&self, other: &Self) -> Self {
        self * other
    }

    fn neg(&self) -> Self {
        -self
    }

    fn pow_u32(&self, exp: u32) -> Self {
        self.powi(exp as i32)
    }

    fn gcd(&self, _other: &Self) -> Option<Self> {
        None
    }

    fn div_exact(&self, other: &Self) -> Self {
        self / other
    }

    fn as_rational(&self) -> Option<Rational> {
        None
    }

    fn to_f64(&self) -> f64 {
        *self
    }
}
