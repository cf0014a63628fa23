//! Dense multivariate polynomials with exact coefficients.
//!
//! Polynomials are stored as dense n-dimensional coefficient arrays ([`ndarray::ArrayD`]), one
//! axis per variable, and kept in a trimmed canonical form. Coefficients are generic over the
//! [`Coefficient`] trait, implemented for [`rug::Integer`], [`rug::Rational`] and `f64`.
//!
//! ```
//! use rug::Integer;
//! use sym_poly::{symbols, Evaluated};
//!
//! let [x, y]: [_; 2] = symbols::<Integer>("x y").try_into().unwrap();
//! let p = (x + y).pow(2).unwrap();
//! assert_eq!(p.to_string(), "x² + 2xy + y²");
//! assert_eq!(p.deg(), 2);
//! assert_eq!(
//!     p.eval(&[("x", Integer::from(1)), ("y", Integer::from(2))]),
//!     Evaluated::Value(Integer::from(9)),
//! );
//! ```
//!
//! The [`gcd`] module adds content and primitive-part operations for integer coefficients, and
//! [`Polynomial::roots`](poly::Polynomial::roots) finds univariate roots, exactly in the linear
//! case and through companion-matrix eigenvalues otherwise.

pub mod coeff;
pub mod error;
pub mod gcd;
pub mod poly;
pub mod roots;

pub use coeff::Coefficient;
pub use error::PolyError;
pub use gcd::{content, factor_monomial, isolate_variable, primitive_part, primitive_part_content, VarRef};
pub use poly::{symbol, symbols, Evaluated, Polynomial};
pub use roots::Root;
