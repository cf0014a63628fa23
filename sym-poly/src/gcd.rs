//! Content, primitive part, and monomial factoring for integer polynomials.
//!
//! The *content* of a polynomial is the greatest common divisor of its coefficients; dividing by
//! it gives the *primitive part*. [`factor_monomial`] pulls out the largest monomial factor, the
//! per-variable minimum exponents scaled by the content. All of these require an integral
//! coefficient type and fail with [`PolyError::NonIntegerCoefficient`] otherwise.

use crate::coeff::Coefficient;
use crate::error::PolyError;
use crate::poly::{Evaluated, Polynomial};
use ndarray::{ArrayD, IxDyn};

/// The greatest common divisor of all coefficients, always non-negative.
///
/// The content of the zero polynomial is 0.
pub fn content<T: Coefficient>(poly: &Polynomial<T>) -> Result<T, PolyError> {
    let mut acc = T::zero();
    for (_, coef) in poly.support() {
        acc = acc.gcd(coef).ok_or(PolyError::NonIntegerCoefficient(T::DTYPE))?;
    }
    // still probe the type for an empty support, so rational zero fails like rational anything
    if poly.is_zero() && T::zero().gcd(&T::zero()).is_none() {
        return Err(PolyError::NonIntegerCoefficient(T::DTYPE));
    }
    Ok(acc)
}

/// The polynomial divided by its [`content`].
///
/// The primitive part of the zero polynomial is the zero polynomial.
pub fn primitive_part<T: Coefficient>(poly: &Polynomial<T>) -> Result<Polynomial<T>, PolyError> {
    Ok(primitive_part_content(poly)?.0)
}

/// Both the primitive part and the content, computing the content once.
pub fn primitive_part_content<T: Coefficient>(
    poly: &Polynomial<T>,
) -> Result<(Polynomial<T>, T), PolyError> {
    let cont = content(poly)?;
    if cont.is_zero() {
        return Ok((Polynomial::zero(), cont));
    }
    let array = poly.array().mapv(|coef| coef.div_exact(&cont));
    Ok((Polynomial::canonical(poly.vars().to_vec(), array), cont))
}

/// A variable argument to [`isolate_variable`]: either a plain name or a polynomial that *is* a
/// variable (degree 1, single variable, root 0).
#[derive(Debug, Clone, Copy)]
pub enum VarRef<'a, T: Coefficient> {
    /// A variable name.
    Name(&'a str),

    /// A degree-1 single-variable polynomial standing for its variable.
    Poly(&'a Polynomial<T>),
}

impl<'a, T: Coefficient> From<&'a str> for VarRef<'a, T> {
    fn from(name: &'a str) -> Self {
        VarRef::Name(name)
    }
}

impl<'a, T: Coefficient> From<&'a Polynomial<T>> for VarRef<'a, T> {
    fn from(poly: &'a Polynomial<T>) -> Self {
        VarRef::Poly(poly)
    }
}

impl<'a, T: Coefficient> VarRef<'a, T> {
    /// The variable's name. A polynomial argument must be exactly `0 + 1*v` for a single
    /// variable `v`; anything else fails with [`PolyError::InvalidVariable`].
    fn name(self) -> Result<&'a str, PolyError> {
        match self {
            VarRef::Name(name) => Ok(name),
            VarRef::Poly(poly) => {
                let [var] = poly.vars() else {
                    return Err(PolyError::InvalidVariable(poly.to_string()));
                };
                let expected: &[usize] = &[2];
                if poly.array().shape() != expected
                    || !poly.array()[IxDyn(&[0])].is_zero()
                    || poly.array()[IxDyn(&[1])] != T::one()
                {
                    return Err(PolyError::InvalidVariable(poly.to_string()));
                }
                Ok(var)
            },
        }
    }
}

/// Projects the polynomial onto a single variable by evaluating every other variable at 1.
///
/// If `var` doesn't occur in the polynomial, every variable is evaluated and the result is
/// constant.
pub fn isolate_variable<'a, T: Coefficient + 'a>(
    poly: &Polynomial<T>,
    var: impl Into<VarRef<'a, T>>,
) -> Result<Polynomial<T>, PolyError> {
    let name = var.into().name()?;
    let bindings: Vec<(&str, T)> = poly.vars()
        .iter()
        .filter(|v| v.as_str() != name)
        .map(|v| (v.as_str(), T::one()))
        .collect();
    Ok(match poly.eval(&bindings) {
        Evaluated::Poly(projected) => projected,
        Evaluated::Value(value) => Polynomial::constant(value),
    })
}

/// Splits the polynomial into `(monomial, remainder)` with `monomial * remainder == poly`.
///
/// The monomial carries, per variable, the minimum exponent occurring in the support, scaled by
/// the [`content`]; the remainder is the polynomial shifted down by those exponents and divided
/// by the content. The zero polynomial has no monomial factor and fails with
/// [`PolyError::UnsupportedOperation`].
pub fn factor_monomial<T: Coefficient>(
    poly: &Polynomial<T>,
) -> Result<(Polynomial<T>, Polynomial<T>), PolyError> {
    let cont = content(poly)?;
    if cont.is_zero() {
        return Err(PolyError::UnsupportedOperation(
            "the zero polynomial has no monomial factor",
        ));
    }

    let support = poly.support();
    let rank = poly.vars().len();
    let mut exps = vec![usize::MAX; rank];
    for (idx, _) in &support {
        for axis in 0..rank {
            exps[axis] = exps[axis].min(idx[axis]);
        }
    }

    let mono_shape: Vec<usize> = exps.iter().map(|&e| e + 1).collect();
    let mut mono = ArrayD::from_elem(IxDyn(&mono_shape), T::zero());
    mono[IxDyn(&exps)] = cont.clone();

    let deflated_shape: Vec<usize> = poly.array()
        .shape()
        .iter()
        .zip(&exps)
        .map(|(extent, &e)| extent - e)
        .collect();
    let mut deflated = ArrayD::from_elem(IxDyn(&deflated_shape), T::zero());
    for (idx, coef) in support {
        let shifted: Vec<usize> = idx.iter().zip(&exps).map(|(&i, &e)| i - e).collect();
        deflated[IxDyn(&shifted)] = coef.div_exact(&cont);
    }

    Ok((
        Polynomial::canonical(poly.vars().to_vec(), mono),
        Polynomial::canonical(poly.vars().to_vec(), deflated),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poly::{symbol, symbols};
    use pretty_assertions::assert_eq;
    use rug::{Integer, Rational};

    fn int(n: i64) -> Integer {
        Integer::from(n)
    }

    #[test]
    fn content_is_positive_gcd() {
        // 6x² - 9x + 12
        let x = symbol::<Integer>("x");
        let p = x.pow(2).unwrap() * int(6) - x * int(9) + int(12);
        assert_eq!(content(&p), Ok(int(3)));
    }

    #[test]
    fn content_of_zero_is_zero() {
        assert_eq!(content(&Polynomial::<Integer>::zero()), Ok(int(0)));
    }

    #[test]
    fn content_requires_integers() {
        let p = symbol::<Rational>("x");
        assert_eq!(content(&p), Err(PolyError::NonIntegerCoefficient("rational")));
        assert_eq!(
            content(&Polynomial::<f64>::zero()),
            Err(PolyError::NonIntegerCoefficient("f64")),
        );
    }

    #[test]
    fn primitive_round_trip() {
        let x = symbol::<Integer>("x");
        let p = x.pow(2).unwrap() * int(4) + x * int(-6) + int(10);
        let (prim, cont) = primitive_part_content(&p).unwrap();
        assert_eq!(cont, int(2));
        assert_eq!(prim.clone() * cont, p);
        assert_eq!(content(&prim), Ok(int(1)));
    }

    #[test]
    fn primitive_part_of_zero() {
        let zero = Polynomial::<Integer>::zero();
        assert_eq!(primitive_part(&zero), Ok(Polynomial::zero()));
    }

    #[test]
    fn isolate_by_name() {
        let [x, y, z]: [_; 3] = symbols::<Integer>("x y z").try_into().unwrap();
        // 2x²yz + 3xy + 5z → evaluated at y=z=1: 2x² + 3x + 5
        let p = x.pow(2).unwrap() * y.clone() * z.clone() * int(2) + x * y * int(3) + z * int(5);
        let isolated = isolate_variable(&p, "x").unwrap();
        let x = symbol::<Integer>("x");
        assert_eq!(isolated, x.pow(2).unwrap() * int(2) + x * int(3) + int(5));
    }

    #[test]
    fn isolate_by_variable_polynomial() {
        let [x, y]: [_; 2] = symbols::<Integer>("x y").try_into().unwrap();
        let p = x.clone() * y * int(4);
        assert_eq!(
            isolate_variable(&p, &x),
            Ok(symbol::<Integer>("x") * int(4)),
        );
    }

    #[test]
    fn isolate_of_absent_variable_is_constant() {
        let [x, y]: [_; 2] = symbols::<Integer>("x y").try_into().unwrap();
        let p = x * int(2) + y * int(3);
        assert_eq!(isolate_variable(&p, "t"), Ok(Polynomial::constant(int(5))));
    }

    #[test]
    fn isolate_rejects_malformed_variable() {
        let x = symbol::<Integer>("x");
        let not_a_var = x.clone() * int(2);
        assert!(matches!(
            isolate_variable(&x, &not_a_var),
            Err(PolyError::InvalidVariable(_)),
        ));
        let shifted = symbol::<Integer>("y") + int(1);
        assert!(matches!(
            isolate_variable(&x, &shifted),
            Err(PolyError::InvalidVariable(_)),
        ));
    }

    #[test]
    fn monomial_factor_round_trip() {
        // 6x³y + 4x²y² = 2x²y * (3x + 2y)
        let [x, y]: [_; 2] = symbols::<Integer>("x y").try_into().unwrap();
        let p = x.pow(3).unwrap() * y.clone() * int(6) + x.pow(2).unwrap() * y.pow(2).unwrap() * int(4);
        let (mono, rest) = factor_monomial(&p).unwrap();
        assert_eq!(mono, x.pow(2).unwrap() * y.clone() * int(2));
        assert_eq!(rest, x * int(3) + y * int(2));
        assert_eq!(mono * rest, p);
    }

    #[test]
    fn monomial_factor_of_primitive_constant_term() {
        // no common variable factor, content 1: monomial is the constant 1
        let x = symbol::<Integer>("x");
        let p = x.clone() + int(1);
        let (mono, rest) = factor_monomial(&p).unwrap();
        assert_eq!(mono, Polynomial::constant(int(1)));
        assert_eq!(rest, x + int(1));
    }

    #[test]
    fn monomial_factor_of_zero_is_an_error() {
        assert!(matches!(
            factor_monomial(&Polynomial::<Integer>::zero()),
            Err(PolyError::UnsupportedOperation(_)),
        ));
    }
}
