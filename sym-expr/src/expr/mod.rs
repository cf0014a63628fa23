//! Immutable n-ary expression trees with canonical construction.
//!
//! An expression is a tree of [`Expr`] nodes: exact numbers ([`Expr::Num`]), variables
//! ([`Expr::Var`]), and n-ary operator nodes ([`Expr::Op`]). Operator nodes **flatten** on
//! construction: `x + (y + z)` is a single [`OpKind::Add`] node with three children, never a
//! nested pair of sums. The same holds for multiplication. This keeps every term / factor of an
//! operation at the same level of the tree, which is what the rewrite rules in
//! [`crate::transforms`] and the solver in [`crate::solve`] rely on.
//!
//! # Canonical operator set
//!
//! Constructed trees only ever contain [`OpKind::Add`], [`OpKind::Mul`] and [`OpKind::Pow`]
//! nodes. Subtraction, division and negation are construction rules rather than node kinds:
//!
//! - `a - b` builds `a + (-1)*b`
//! - `a / b` builds `a * b^-1`
//! - `-a` builds `(-1)*a`
//!
//! # Structural equality
//!
//! The [`PartialEq`] implementation for [`Expr`] is **structural**: two expressions are equal iff
//! they have the same shape, operator kinds and leaf values, in the same order. It says nothing
//! about mathematical equality (`x + 1` and `1 + x` are structurally distinct). The rewrite rules
//! and tests use structural equality; the *relation-building* equality operation is
//! [`Expr::equals`], which returns a [`Relation`](crate::relation::Relation) and must never be
//! confused with `==`.

mod iter;

pub use iter::ExprIter;

use crate::error::ExprError;
use crate::relation::{RelOp, Relation};
use rug::Rational;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

/// The kind of an n-ary operator node.
///
/// This is the static dispatch table for everything symbol-related: textual symbol, rendering
/// precedence, identity element and the numeric fold used when combining exact numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    /// N-ary addition.
    Add,

    /// N-ary multiplication.
    Mul,

    /// Exponentiation. Always constructed with exactly two arguments, base and exponent.
    Pow,
}

impl OpKind {
    /// The textual symbol of the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Mul => "*",
            Self::Pow => "**",
        }
    }

    /// Rendering precedence. A child operator node is parenthesized iff its precedence is
    /// strictly lower than its parent's.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Add => 0,
            Self::Mul => 1,
            Self::Pow => 3,
        }
    }

    /// The identity element of the operator. A zero-argument node renders as this value.
    pub fn identity(self) -> Rational {
        match self {
            Self::Add => Rational::new(),
            Self::Mul | Self::Pow => Rational::from(1),
        }
    }

    /// Folds two exact numbers with this operator. Only meaningful for [`OpKind::Add`] and
    /// [`OpKind::Mul`]; exponentiation of numbers is kept symbolic.
    pub(crate) fn combine(self, lhs: Rational, rhs: &Rational) -> Rational {
        match self {
            Self::Add => lhs + rhs,
            Self::Mul => lhs * rhs,
            Self::Pow => unreachable!("numeric folding is only defined for `+` and `*`"),
        }
    }

    /// The string used to join rendered arguments.
    fn separator(self) -> &'static str {
        match self {
            Self::Add => " + ",
            Self::Mul => "*",
            Self::Pow => "**",
        }
    }
}

impl FromStr for OpKind {
    type Err = ExprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "*" => Ok(Self::Mul),
            "**" => Ok(Self::Pow),
            other => Err(ExprError::UnsupportedSymbol(other.to_string())),
        }
    }
}

/// An n-ary operator node: an operator kind applied to an ordered sequence of arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Op {
    /// The operator applied to the arguments.
    pub kind: OpKind,

    /// The arguments, in construction order.
    pub args: Vec<Expr>,
}

/// A symbolic expression.
///
/// See the [module-level documentation](self) for the canonicalization rules applied at
/// construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An exact rational number, such as `2` or `-3/4`.
    Num(Rational),

    /// A variable, such as `x` or `y`.
    Var(String),

    /// An n-ary operator applied to arguments.
    Op(Op),
}

/// Creates a variable expression with the given name.
pub fn var(name: impl Into<String>) -> Expr {
    Expr::Var(name.into())
}

/// Creates an exact numeric expression.
pub fn num(value: impl Into<Rational>) -> Expr {
    Expr::Num(value.into())
}

impl From<i64> for Expr {
    fn from(n: i64) -> Self {
        Self::Num(Rational::from(n))
    }
}

impl From<rug::Integer> for Expr {
    fn from(n: rug::Integer) -> Self {
        Self::Num(Rational::from(n))
    }
}

impl From<Rational> for Expr {
    fn from(n: Rational) -> Self {
        Self::Num(n)
    }
}

impl From<&str> for Expr {
    fn from(name: &str) -> Self {
        Self::Var(name.to_string())
    }
}

impl From<String> for Expr {
    fn from(name: String) -> Self {
        Self::Var(name)
    }
}

/// Builds a flattened n-ary node for `+` or `*`.
///
/// If either operand is already a node of the same kind, its arguments are spliced into one list
/// instead of nesting, preserving argument order. Two numeric operands fold into a single number.
fn nary(kind: OpKind, lhs: Expr, rhs: Expr) -> Expr {
    match (lhs, rhs) {
        (Expr::Num(a), Expr::Num(b)) => Expr::Num(kind.combine(a, &b)),
        (Expr::Op(mut op), rhs) if op.kind == kind => {
            match rhs {
                Expr::Op(other) if other.kind == kind => op.args.extend(other.args),
                other => op.args.push(other),
            }
            Expr::Op(op)
        },
        (lhs, Expr::Op(mut op)) if op.kind == kind => {
            op.args.insert(0, lhs);
            Expr::Op(op)
        },
        (lhs, rhs) => Expr::Op(Op { kind, args: vec![lhs, rhs] }),
    }
}

impl Expr {
    /// If the expression is a number, returns a reference to it.
    pub fn as_num(&self) -> Option<&Rational> {
        match self {
            Self::Num(n) => Some(n),
            _ => None,
        }
    }

    /// Returns true if the expression is a number.
    pub fn is_num(&self) -> bool {
        matches!(self, Self::Num(_))
    }

    /// If the expression is a variable, returns its name.
    pub fn as_var(&self) -> Option<&str> {
        match self {
            Self::Var(name) => Some(name),
            _ => None,
        }
    }

    /// Raises the expression to a power.
    ///
    /// If the base is itself a power, the exponents are multiplied instead of nesting:
    /// `(a**b)**c` becomes `a**(b*c)`.
    pub fn pow(self, exp: impl Into<Expr>) -> Expr {
        let exp = exp.into();
        match self {
            Expr::Op(mut op) if op.kind == OpKind::Pow => {
                let inner_exp = op.args.pop().unwrap_or_else(|| Expr::Num(OpKind::Pow.identity()));
                let base = op.args.pop().unwrap_or_else(|| Expr::Num(OpKind::Pow.identity()));
                Expr::Op(Op { kind: OpKind::Pow, args: vec![base, inner_exp * exp] })
            },
            base => Expr::Op(Op { kind: OpKind::Pow, args: vec![base, exp] }),
        }
    }

    /// Trivially downgrades the expression into a simpler form.
    ///
    /// Rewrites can leave an operator node with zero or one argument. A zero-argument node
    /// becomes its identity element, a one-argument node becomes the argument itself.
    pub(crate) fn downgrade(self) -> Self {
        match self {
            Self::Op(op) if op.args.is_empty() => Self::Num(op.kind.identity()),
            Self::Op(mut op) if op.args.len() == 1 => op.args.remove(0),
            other => other,
        }
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }

    /// Returns true if the variable with the given name occurs anywhere in the expression.
    ///
    /// Callers of [`solve`](crate::solve::solve) use this to check whether an unsolved remainder
    /// still mentions the variable being isolated.
    pub fn contains_var(&self, name: &str) -> bool {
        self.post_order_iter()
            .any(|expr| matches!(expr, Expr::Var(var) if var == name))
    }

    /// Builds the relation `self < other`.
    pub fn lt(self, other: impl Into<Expr>) -> Relation {
        Relation::compare(RelOp::Lt, self, other.into())
    }

    /// Builds the relation `self <= other`.
    pub fn le(self, other: impl Into<Expr>) -> Relation {
        Relation::compare(RelOp::Le, self, other.into())
    }

    /// Builds the relation `self == other`.
    ///
    /// This is the relation-building equality operation, not structural equality; use `==` to
    /// compare expressions for structural equality.
    pub fn equals(self, other: impl Into<Expr>) -> Relation {
        Relation::compare(RelOp::Eq, self, other.into())
    }

    /// Builds the relation `self != other`.
    pub fn not_equals(self, other: impl Into<Expr>) -> Relation {
        Relation::compare(RelOp::Ne, self, other.into())
    }

    /// Builds the relation `self > other`.
    pub fn gt(self, other: impl Into<Expr>) -> Relation {
        Relation::compare(RelOp::Gt, self, other.into())
    }

    /// Builds the relation `self >= other`.
    pub fn ge(self, other: impl Into<Expr>) -> Relation {
        Relation::compare(RelOp::Ge, self, other.into())
    }
}

/// Adds two expressions, flattening sums into one n-ary node and folding numeric operands.
impl<T: Into<Expr>> Add<T> for Expr {
    type Output = Expr;

    fn add(self, rhs: T) -> Expr {
        nary(OpKind::Add, self, rhs.into())
    }
}

/// Subtracts an expression by adding its negation: `a - b = a + (-1)*b`.
impl<T: Into<Expr>> Sub<T> for Expr {
    type Output = Expr;

    fn sub(self, rhs: T) -> Expr {
        self + (-rhs.into())
    }
}

/// Multiplies two expressions, flattening products into one n-ary node and folding numeric
/// operands.
impl<T: Into<Expr>> Mul<T> for Expr {
    type Output = Expr;

    fn mul(self, rhs: T) -> Expr {
        nary(OpKind::Mul, self, rhs.into())
    }
}

/// Divides two expressions: `a / b = a * b^-1`. A nonzero numeric divisor folds to its exact
/// reciprocal, so the result is a product with a numeric factor rather than a symbolic power.
impl<T: Into<Expr>> Div<T> for Expr {
    type Output = Expr;

    fn div(self, rhs: T) -> Expr {
        match (self, rhs.into()) {
            (lhs, Expr::Num(b)) if b != 0 => lhs * Expr::Num(Rational::from(b.recip_ref())),
            (lhs, rhs) => lhs * rhs.pow(Expr::from(-1)),
        }
    }
}

/// Negates an expression: numbers negate in place, everything else becomes `(-1)*a`.
impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        match self {
            Expr::Num(n) => Expr::Num(-n),
            expr => Expr::from(-1) * expr,
        }
    }
}

impl Add<Expr> for i64 {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        Expr::from(self) + rhs
    }
}

impl Sub<Expr> for i64 {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        Expr::from(self) - rhs
    }
}

impl Mul<Expr> for i64 {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        Expr::from(self) * rhs
    }
}

impl Div<Expr> for i64 {
    type Output = Expr;

    fn div(self, rhs: Expr) -> Expr {
        Expr::from(self) / rhs
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{}", n),
            Self::Var(name) => write!(f, "{}", name),
            Self::Op(op) => {
                if op.args.is_empty() {
                    return write!(f, "{}", op.kind.identity());
                }
                for (i, arg) in op.args.iter().enumerate() {
                    if i > 0 {
                        write!(f, "{}", op.kind.separator())?;
                    }
                    let parenthesize = matches!(
                        arg,
                        Self::Op(child) if child.kind.precedence() < op.kind.precedence()
                    );
                    if parenthesize {
                        write!(f, "({})", arg)?;
                    } else {
                        write!(f, "{}", arg)?;
                    }
                }
                Ok(())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn add_flattens() {
        let expr = var("x") + var("y") + var("z");
        assert_eq!(expr, Expr::Op(Op {
            kind: OpKind::Add,
            args: vec![var("x"), var("y"), var("z")],
        }));
    }

    #[test]
    fn add_flattens_right_operand() {
        let lhs = var("a") + var("b");
        let rhs = var("c") + var("d");
        let expr = lhs + rhs;
        assert_eq!(expr, Expr::Op(Op {
            kind: OpKind::Add,
            args: vec![var("a"), var("b"), var("c"), var("d")],
        }));
    }

    #[test]
    fn no_nested_sums_or_products() {
        let expr = (var("a") + var("b")) * (var("x") * var("y") * 3) + (var("c") + var("d"));
        for node in expr.post_order_iter() {
            if let Expr::Op(op) = node {
                for arg in &op.args {
                    if let Expr::Op(child) = arg {
                        if matches!(op.kind, OpKind::Add | OpKind::Mul) {
                            assert_ne!(child.kind, op.kind, "nested {:?} in {}", op.kind, expr);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn numeric_operands_fold() {
        assert_eq!(Expr::from(2) + Expr::from(3), Expr::from(5));
        assert_eq!(Expr::from(2) * Expr::from(3), Expr::from(6));
        assert_eq!(Expr::from(3) / Expr::from(2), num(Rational::from((3, 2))));
    }

    #[test]
    fn pow_of_pow_multiplies_exponents() {
        let expr = var("a").pow(var("b")).pow(var("c"));
        assert_eq!(expr, Expr::Op(Op {
            kind: OpKind::Pow,
            args: vec![var("a"), var("b") * var("c")],
        }));
    }

    #[test]
    fn sub_builds_negated_sum() {
        let expr = var("x") - var("y");
        assert_eq!(expr, var("x") + Expr::from(-1) * var("y"));
    }

    #[test]
    fn div_builds_reciprocal_product() {
        let expr = var("x") / var("y");
        assert_eq!(expr, var("x") * var("y").pow(Expr::from(-1)));
    }

    #[test]
    fn neg_folds_numbers() {
        assert_eq!(-Expr::from(4), Expr::from(-4));
        assert_eq!(-var("x"), Expr::from(-1) * var("x"));
    }

    #[test]
    fn fmt_precedence() {
        let expr = var("x") + var("y") * 2;
        assert_eq!(expr.to_string(), "x + y*2");

        let expr = (var("x") + 1) * 2;
        assert_eq!(expr.to_string(), "(x + 1)*2");

        let expr = (var("x") + var("y")).pow(2);
        assert_eq!(expr.to_string(), "(x + y)**2");
    }

    #[test]
    fn structural_equality_is_ordered() {
        assert_eq!(var("x") + 1, var("x") + 1);
        assert_ne!(var("x") + 1, Expr::from(1) + var("x"));
    }

    #[test]
    fn contains_var_finds_nested_occurrences() {
        let expr = (var("x") + 1) * var("y").pow(2);
        assert!(expr.contains_var("x"));
        assert!(expr.contains_var("y"));
        assert!(!expr.contains_var("z"));
    }

    #[test]
    fn op_kind_from_str() {
        assert_eq!("+".parse::<OpKind>(), Ok(OpKind::Add));
        assert_eq!("**".parse::<OpKind>(), Ok(OpKind::Pow));
        assert_eq!(
            "%".parse::<OpKind>(),
            Err(crate::error::ExprError::UnsupportedSymbol("%".to_string())),
        );
    }
}
