//! Dense multivariate polynomials.
//!
//! A [`Polynomial`] stores its coefficients in a dense n-dimensional [`ArrayD`], one axis per
//! variable: axis `i` indexes the exponent of `vars[i]`, so `array[[e0, e1, ...]]` is the
//! coefficient of the monomial `vars[0]^e0 * vars[1]^e1 * ...`.
//!
//! # Canonical trimmed form
//!
//! Every constructor and operation maintains the *trimmed* canonical form:
//!
//! - the array's rank equals the number of variables;
//! - no axis has a trailing all-zero slice (the extent along each axis is exactly the largest
//!   nonzero exponent plus one);
//! - every listed variable actually occurs: an axis whose only support sits at exponent 0 is
//!   projected away along with its variable;
//! - the zero polynomial is the rank-0 array holding a single zero, with no variables.
//!
//! Canonical form is what makes derived equality meaningful: two polynomials are `==` iff they
//! have the same variables and the same trimmed coefficient array.
//!
//! # Combining different variable sets
//!
//! Binary operations first *normalize* the two operands: the variable sets are unioned and
//! sorted, and both coefficient arrays are embedded into zero-filled arrays over the union, with
//! each operand broadcast at exponent 0 along the variables it lacks. Addition is then
//! elementwise; multiplication is the full discrete convolution of the two arrays, which is the
//! standard multivariate polynomial product.

use crate::coeff::Coefficient;
use crate::error::PolyError;
use ndarray::{ArrayD, Dimension, IxDyn, Zip};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A dense multivariate polynomial with coefficients of type `T`.
///
/// See the [module-level documentation](self) for the storage layout and canonical form.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial<T: Coefficient> {
    vars: Vec<String>,
    array: ArrayD<T>,
}

/// Creates the degree-1 polynomial `0 + 1*name` in the variable `name`.
pub fn symbol<T: Coefficient>(name: &str) -> Polynomial<T> {
    Polynomial {
        vars: vec![name.to_string()],
        array: ndarray::arr1(&[T::zero(), T::one()]).into_dyn(),
    }
}

/// Creates one symbol per name in a space- or comma-delimited string.
///
/// ```
/// use rug::Integer;
/// use sym_poly::symbols;
///
/// let xyz = symbols::<Integer>("x y, z");
/// assert_eq!(xyz.len(), 3);
/// assert_eq!(xyz[2].vars(), ["z"]);
/// ```
pub fn symbols<T: Coefficient>(names: &str) -> Vec<Polynomial<T>> {
    names.replace(',', " ")
        .split_whitespace()
        .map(symbol)
        .collect()
}

/// The result of [`Polynomial::eval`]: a scalar if every variable was bound, otherwise a
/// lower-rank polynomial over the remaining variables.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluated<T: Coefficient> {
    /// Every variable was bound; this is the value.
    Value(T),

    /// Some variables remain free.
    Poly(Polynomial<T>),
}

impl<T: Coefficient> Polynomial<T> {
    /// Creates a polynomial over the given variables from a dense coefficient array.
    ///
    /// The array's rank must equal the number of variables, and the variable names must be
    /// distinct; the result is reduced to canonical trimmed form.
    pub fn new(vars: Vec<String>, array: ArrayD<T>) -> Result<Self, PolyError> {
        if array.ndim() != vars.len() {
            return Err(PolyError::DimensionMismatch {
                rank: array.ndim(),
                vars: vars.len(),
            });
        }
        if let Some(dup) = vars.iter().enumerate().find_map(|(i, v)| {
            vars[..i].contains(v).then(|| v.clone())
        }) {
            return Err(PolyError::DuplicateVariable(dup));
        }
        Ok(Self::canonical(vars, array))
    }

    /// The zero polynomial.
    pub fn zero() -> Self {
        Self {
            vars: Vec::new(),
            array: ArrayD::from_elem(IxDyn(&[]), T::zero()),
        }
    }

    /// A constant polynomial.
    pub fn constant(value: T) -> Self {
        Self::canonical(Vec::new(), ArrayD::from_elem(IxDyn(&[]), value))
    }

    /// Reduces `(vars, array)` to canonical trimmed form.
    ///
    /// Rebuilds the array from its support: trailing zero slices are dropped by sizing each axis
    /// to the largest occupied exponent, and axes with no exponent above 0 are projected away
    /// together with their variable.
    pub(crate) fn canonical(vars: Vec<String>, array: ArrayD<T>) -> Self {
        let support: Vec<(Vec<usize>, T)> = Self::support_of(&array)
            .into_iter()
            .map(|(idx, coef)| (idx, coef.clone()))
            .collect();
        if support.is_empty() {
            return Self::zero();
        }

        let rank = array.ndim();
        let mut extents = vec![1usize; rank];
        for (idx, _) in &support {
            for axis in 0..rank {
                extents[axis] = extents[axis].max(idx[axis] + 1);
            }
        }

        let keep: Vec<usize> = (0..rank).filter(|&axis| extents[axis] > 1).collect();
        let kept_vars = keep.iter().map(|&axis| vars[axis].clone()).collect();
        let shape: Vec<usize> = keep.iter().map(|&axis| extents[axis]).collect();

        let mut out = ArrayD::from_elem(IxDyn(&shape), T::zero());
        for (idx, coef) in support {
            let new_idx: Vec<usize> = keep.iter().map(|&axis| idx[axis]).collect();
            out[IxDyn(&new_idx)] = coef;
        }
        Self { vars: kept_vars, array: out }
    }

    /// The variables of the polynomial, in axis order.
    pub fn vars(&self) -> &[String] {
        &self.vars
    }

    /// The dense coefficient array.
    pub fn array(&self) -> &ArrayD<T> {
        &self.array
    }

    /// Name of the coefficient type.
    pub fn dtype(&self) -> &'static str {
        T::DTYPE
    }

    /// Returns true if this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.vars.is_empty() && self.array[IxDyn(&[])].is_zero()
    }

    /// The total degree: the largest exponent sum over all nonzero coefficients, or 0 for the
    /// zero polynomial.
    pub fn deg(&self) -> usize {
        self.support()
            .iter()
            .map(|(idx, _)| idx.iter().sum())
            .max()
            .unwrap_or(0)
    }

    /// The indices and values of all nonzero coefficients, in row-major order.
    pub(crate) fn support(&self) -> Vec<(Vec<usize>, &T)> {
        Self::support_of(&self.array)
    }

    fn support_of(array: &ArrayD<T>) -> Vec<(Vec<usize>, &T)> {
        array.indexed_iter()
            .filter(|(_, coef)| !coef.is_zero())
            .map(|(idx, coef)| (idx.slice().to_vec(), coef))
            .collect()
    }

    /// The extent of the axis belonging to `var`, or 1 if the polynomial doesn't use it.
    fn extent_of(&self, var: &str) -> usize {
        self.vars.iter()
            .position(|v| v == var)
            .map(|axis| self.array.shape()[axis])
            .unwrap_or(1)
    }

    /// Embeds the polynomial's coefficients into a zero-filled array over the variable union
    /// `vars`, broadcasting at exponent 0 along variables it lacks.
    fn embed(&self, vars: &[String], shape: &[usize]) -> ArrayD<T> {
        let positions: Vec<usize> = self.vars.iter()
            .map(|v| {
                vars.iter()
                    .position(|u| u == v)
                    .expect("the union contains every operand variable")
            })
            .collect();

        let mut out = ArrayD::from_elem(IxDyn(shape), T::zero());
        for (idx, coef) in self.support() {
            let mut full = vec![0usize; vars.len()];
            for (axis, &pos) in positions.iter().enumerate() {
                full[pos] = idx[axis];
            }
            out[IxDyn(&full)] = coef.clone();
        }
        out
    }

    /// Combines the variables of two polynomials and makes their arrays compatible: the sorted
    /// union of the variable sets, and both arrays embedded over it with per-axis extents taken
    /// as the elementwise maximum.
    fn normalize(a: &Self, b: &Self) -> (Vec<String>, ArrayD<T>, ArrayD<T>) {
        let mut vars: Vec<String> = a.vars.iter().chain(b.vars.iter()).cloned().collect();
        vars.sort();
        vars.dedup();

        let shape: Vec<usize> = vars.iter()
            .map(|v| a.extent_of(v).max(b.extent_of(v)))
            .collect();

        let a_normal = a.embed(&vars, &shape);
        let b_normal = b.embed(&vars, &shape);
        (vars, a_normal, b_normal)
    }

    /// Raises the polynomial to a non-negative integer power by repeated squaring.
    ///
    /// A negative exponent fails with [`PolyError::UnsupportedOperation`]: rational polynomials
    /// are not supported.
    pub fn pow(&self, exp: i64) -> Result<Self, PolyError> {
        if exp < 0 {
            return Err(PolyError::UnsupportedOperation(
                "negative polynomial powers are not supported",
            ));
        }
        Ok(match exp {
            0 => Self::constant(T::one()),
            1 => self.clone(),
            n if n % 2 == 1 => self.clone() * self.pow(n - 1)?,
            n => (self.clone() * self.clone()).pow(n / 2)?,
        })
    }

    /// Polynomial division is not supported; rational polynomials are out of scope. Always fails
    /// with [`PolyError::UnsupportedOperation`].
    pub fn div(&self, _divisor: &Self) -> Result<Self, PolyError> {
        Err(PolyError::UnsupportedOperation(
            "polynomial division is not supported",
        ))
    }

    /// Evaluates the polynomial with the given variable bindings.
    ///
    /// Bound variables are substituted; unbound variables stay symbolic. If every variable is
    /// bound the result is a scalar, otherwise a lower-rank polynomial over the free variables.
    /// Bindings for variables the polynomial doesn't use are ignored.
    ///
    /// ```
    /// use rug::Integer;
    /// use sym_poly::{symbols, Evaluated};
    ///
    /// let [x, y]: [_; 2] = symbols::<Integer>("x y").try_into().unwrap();
    /// let p = x.pow(2).unwrap() + y.clone();
    ///
    /// let at_x = p.eval(&[("x", Integer::from(3))]);
    /// assert_eq!(at_x, Evaluated::Poly(y + Integer::from(9)));
    ///
    /// let squared = x.pow(2).unwrap();
    /// assert_eq!(squared.eval(&[("x", Integer::from(3))]), Evaluated::Value(Integer::from(9)));
    /// ```
    pub fn eval(&self, bindings: &[(&str, T)]) -> Evaluated<T> {
        let bound: Vec<Option<&T>> = self.vars.iter()
            .map(|v| {
                bindings.iter()
                    .find(|(name, _)| name == v)
                    .map(|(_, value)| value)
            })
            .collect();
        let free_axes: Vec<usize> = (0..self.vars.len())
            .filter(|&axis| bound[axis].is_none())
            .collect();

        // coefficient times the bound variables' powers
        let term_value = |idx: &[usize], coef: &T| -> T {
            let mut value = coef.clone();
            for (axis, binding) in bound.iter().enumerate() {
                if let Some(base) = binding {
                    if idx[axis] > 0 {
                        value = value.mul(&base.pow_u32(idx[axis] as u32));
                    }
                }
            }
            value
        };

        if free_axes.is_empty() {
            let mut total = T::zero();
            for (idx, coef) in self.support() {
                total = total.add(&term_value(&idx, coef));
            }
            return Evaluated::Value(total);
        }

        let free_vars: Vec<String> = free_axes.iter().map(|&axis| self.vars[axis].clone()).collect();
        let shape: Vec<usize> = free_axes.iter().map(|&axis| self.array.shape()[axis]).collect();
        let mut out = ArrayD::from_elem(IxDyn(&shape), T::zero());
        for (idx, coef) in self.support() {
            let free_idx: Vec<usize> = free_axes.iter().map(|&axis| idx[axis]).collect();
            let updated = out[IxDyn(&free_idx)].add(&term_value(&idx, coef));
            out[IxDyn(&free_idx)] = updated;
        }
        Evaluated::Poly(Self::canonical(free_vars, out))
    }
}

/// Adds two polynomials: normalize, then add the coefficient arrays elementwise.
impl<T: Coefficient> Add for Polynomial<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let (vars, a, b) = Self::normalize(&self, &rhs);
        let sum = Zip::from(&a).and(&b).map_collect(|x, y| x.add(y));
        Self::canonical(vars, sum)
    }
}

/// Adds a scalar to the polynomial's constant term.
impl<T: Coefficient> Add<T> for Polynomial<T> {
    type Output = Self;

    fn add(self, rhs: T) -> Self {
        let mut array = self.array;
        let origin = vec![0usize; array.ndim()];
        let updated = array[IxDyn(&origin)].add(&rhs);
        array[IxDyn(&origin)] = updated;
        Self::canonical(self.vars, array)
    }
}

impl<T: Coefficient> Sub for Polynomial<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl<T: Coefficient> Sub<T> for Polynomial<T> {
    type Output = Self;

    fn sub(self, rhs: T) -> Self {
        self + rhs.neg()
    }
}

/// Negates every coefficient.
impl<T: Coefficient> Neg for Polynomial<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            vars: self.vars,
            array: self.array.mapv(|coef| coef.neg()),
        }
    }
}

/// Multiplies two polynomials: normalize, then take the full discrete convolution of the two
/// coefficient arrays. The output extent along each axis is `a + b - 1`.
impl<T: Coefficient> Mul for Polynomial<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        if self.is_zero() || rhs.is_zero() {
            return Self::zero();
        }

        let (vars, a, b) = Self::normalize(&self, &rhs);
        let out_shape: Vec<usize> = a.shape().iter()
            .zip(b.shape())
            .map(|(x, y)| x + y - 1)
            .collect();

        let mut out = ArrayD::from_elem(IxDyn(&out_shape), T::zero());
        let a_support = Self::support_of(&a);
        let b_support = Self::support_of(&b);
        for (ia, va) in &a_support {
            for (ib, vb) in &b_support {
                let idx: Vec<usize> = ia.iter().zip(ib).map(|(x, y)| x + y).collect();
                let updated = out[IxDyn(&idx)].add(&va.mul(vb));
                out[IxDyn(&idx)] = updated;
            }
        }
        Self::canonical(vars, out)
    }
}

/// Multiplies every coefficient by a scalar.
impl<T: Coefficient> Mul<T> for Polynomial<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::canonical(self.vars, self.array.mapv(|coef| coef.mul(&rhs)))
    }
}

const SUPERSCRIPTS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

fn power_str(var: &str, exp: usize) -> String {
    match exp {
        0 => String::new(),
        1 => var.to_string(),
        _ => {
            let sup: String = exp.to_string()
                .bytes()
                .map(|digit| SUPERSCRIPTS[(digit - b'0') as usize])
                .collect();
            format!("{}{}", var, sup)
        },
    }
}

/// Renders the polynomial with terms in descending exponent order, superscript digits for
/// exponents above 1, and unit coefficients omitted: `x² + 2x + 1`.
impl<T: Coefficient> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut support = self.support();
        if support.is_empty() {
            return write!(f, "0");
        }
        support.reverse();

        for (i, (idx, coef)) in support.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            let power: String = self.vars.iter()
                .zip(idx)
                .map(|(var, &exp)| power_str(var, exp))
                .collect();
            if **coef == T::one() && !power.is_empty() {
                write!(f, "{}", power)?;
            } else {
                write!(f, "{}{}", coef, power)?;
            }
        }
        Ok(())
    }
}
