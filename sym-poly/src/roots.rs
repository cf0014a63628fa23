//! Root finding for univariate polynomials.
//!
//! Degree-1 polynomials over an exactly-representable coefficient type are solved symbolically;
//! everything else is delegated to the eigenvalues of the companion matrix, which yields the
//! roots as floating-point complex numbers.

use crate::coeff::Coefficient;
use crate::error::PolyError;
use crate::poly::Polynomial;
use nalgebra::DMatrix;
use num_complex::Complex64;
use rug::Rational;

/// A root of a univariate polynomial.
#[derive(Debug, Clone, PartialEq)]
pub enum Root {
    /// An exact rational root, found symbolically.
    Exact(Rational),

    /// A numerically approximated (possibly complex) root.
    Numeric(Complex64),
}

impl<T: Coefficient> Polynomial<T> {
    /// Computes all roots of the polynomial, with multiplicity.
    ///
    /// A polynomial in more than one variable fails with [`PolyError::MultivariateRoots`]. A
    /// constant polynomial has no roots. The linear case `kx + c` produces the exact root
    /// `-c/k` when the coefficients convert to rationals; every other case goes through the
    /// companion matrix of the monic polynomial and comes back as [`Root::Numeric`] values,
    /// sorted by real part and then imaginary part.
    ///
    /// ```
    /// use rug::{Integer, Rational};
    /// use sym_poly::{symbol, Root};
    ///
    /// let x = symbol::<Integer>("x");
    /// let roots = (x * Integer::from(2) + Integer::from(3)).roots().unwrap();
    /// assert_eq!(roots, [Root::Exact(Rational::from((-3, 2)))]);
    /// ```
    pub fn roots(&self) -> Result<Vec<Root>, PolyError> {
        if self.vars().len() > 1 {
            return Err(PolyError::MultivariateRoots(self.vars().len()));
        }
        if self.vars().is_empty() {
            return Ok(Vec::new());
        }

        let coeffs: Vec<&T> = self.array().iter().collect();
        let deg = coeffs.len() - 1;

        if deg == 1 {
            if let (Some(c), Some(k)) = (coeffs[0].as_rational(), coeffs[1].as_rational()) {
                return Ok(vec![Root::Exact(-Rational::from(c / k))]);
            }
        }

        // companion matrix of the monic polynomial
        let lead = coeffs[deg].to_f64();
        let mut companion = DMatrix::<f64>::zeros(deg, deg);
        for row in 1..deg {
            companion[(row, row - 1)] = 1.0;
        }
        for row in 0..deg {
            companion[(row, deg - 1)] = -coeffs[row].to_f64() / lead;
        }

        let mut roots: Vec<Root> = companion
            .complex_eigenvalues()
            .iter()
            .map(|v| Root::Numeric(Complex64::new(v.re, v.im)))
            .collect();
        roots.sort_by(|a, b| match (a, b) {
            (Root::Numeric(x), Root::Numeric(y)) => {
                x.re.total_cmp(&y.re).then(x.im.total_cmp(&y.im))
            },
            _ => std::cmp::Ordering::Equal,
        });
        Ok(roots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poly::symbol;
    use approx::assert_relative_eq;
    use rug::Integer;

    fn int(n: i64) -> Integer {
        Integer::from(n)
    }

    fn numeric(roots: &[Root]) -> Vec<Complex64> {
        roots.iter()
            .map(|r| match r {
                Root::Numeric(v) => *v,
                Root::Exact(q) => panic!("expected a numeric root, got {}", q),
            })
            .collect()
    }

    #[test]
    fn multivariate_is_an_error() {
        let p = symbol::<Integer>("x") + symbol::<Integer>("y");
        assert_eq!(p.roots(), Err(PolyError::MultivariateRoots(2)));
    }

    #[test]
    fn constants_have_no_roots() {
        assert_eq!(Polynomial::constant(int(7)).roots(), Ok(Vec::new()));
        assert_eq!(Polynomial::<Integer>::zero().roots(), Ok(Vec::new()));
    }

    #[test]
    fn linear_root_is_exact() {
        let p = symbol::<Integer>("x") * int(2) + int(3);
        assert_eq!(p.roots(), Ok(vec![Root::Exact(Rational::from((-3, 2)))]));
    }

    #[test]
    fn linear_f64_root_is_numeric() {
        let p = symbol::<f64>("x") * 2.0 + 3.0;
        let roots = numeric(&p.roots().unwrap());
        assert_eq!(roots.len(), 1);
        assert_relative_eq!(roots[0].re, -1.5, epsilon = 1e-9);
        assert_relative_eq!(roots[0].im, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn quadratic_real_roots() {
        // x² - 1
        let p = symbol::<Integer>("x").pow(2).unwrap() - int(1);
        let roots = numeric(&p.roots().unwrap());
        assert_eq!(roots.len(), 2);
        assert_relative_eq!(roots[0].re, -1.0, epsilon = 1e-9);
        assert_relative_eq!(roots[1].re, 1.0, epsilon = 1e-9);
        assert_relative_eq!(roots[0].im, 0.0, epsilon = 1e-9);
        assert_relative_eq!(roots[1].im, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn quadratic_complex_roots() {
        // x² + 1 has roots ±i
        let p = symbol::<Integer>("x").pow(2).unwrap() + int(1);
        let roots = numeric(&p.roots().unwrap());
        assert_eq!(roots.len(), 2);
        assert_relative_eq!(roots[0].re, 0.0, epsilon = 1e-9);
        assert_relative_eq!(roots[0].im, -1.0, epsilon = 1e-9);
        assert_relative_eq!(roots[1].im, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn cubic_with_repeated_factor() {
        // (x - 1)²(x + 2) = x³ - 3x + 2
        let x = symbol::<Integer>("x");
        let p = x.pow(3).unwrap() - symbol::<Integer>("x") * int(3) + int(2);
        let roots = numeric(&p.roots().unwrap());
        assert_eq!(roots.len(), 3);
        assert_relative_eq!(roots[0].re, -2.0, epsilon = 1e-6);
        assert_relative_eq!(roots[1].re, 1.0, epsilon = 1e-6);
        assert_relative_eq!(roots[2].re, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn non_monic_leading_coefficient() {
        // 2x² - 8 has roots ±2
        let p = symbol::<Integer>("x").pow(2).unwrap() * int(2) - int(8);
        let roots = numeric(&p.roots().unwrap());
        assert_relative_eq!(roots[0].re, -2.0, epsilon = 1e-9);
        assert_relative_eq!(roots[1].re, 2.0, epsilon = 1e-9);
    }
}
