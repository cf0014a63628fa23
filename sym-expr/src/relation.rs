//! Comparisons and logical combinations of expressions.
//!
//! A [`Relation`] is a comparison of two expressions (`x + 1 < y`) or a logical combination of
//! two relations (`(x < y) & (y < z)`). Relations are **not** expressions: arithmetic applied to
//! a relation distributes onto both sides and returns a new relation, and comparing two relations
//! is not representable at all (there is no such API).

use crate::error::ExprError;
use crate::expr::Expr;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

/// The symbol of a relation: a comparison or a logical connective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelOp {
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `&`
    And,
    /// `|`
    Or,
    /// `^`
    Xor,
}

impl RelOp {
    /// The textual symbol of the relation.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::And => "&",
            Self::Or => "|",
            Self::Xor => "^",
        }
    }

    /// Returns true if this is a logical connective (`&`, `|`, `^`) rather than a comparison.
    pub fn is_logical(self) -> bool {
        matches!(self, Self::And | Self::Or | Self::Xor)
    }

    /// The inverse of a comparison symbol, from the fixed table `< ↔ >=`, `<= ↔ >`, `== ↔ !=`.
    ///
    /// Logical connectives have no entry in the table (their inversion rewrites the whole
    /// relation, see [`Relation::invert`]) and fail with
    /// [`ExprError::UnsupportedSymbol`].
    pub fn inverse(self) -> Result<Self, ExprError> {
        match self {
            Self::Lt => Ok(Self::Ge),
            Self::Le => Ok(Self::Gt),
            Self::Eq => Ok(Self::Ne),
            Self::Ne => Ok(Self::Eq),
            Self::Gt => Ok(Self::Le),
            Self::Ge => Ok(Self::Lt),
            other => Err(ExprError::UnsupportedSymbol(other.symbol().to_string())),
        }
    }
}

impl FromStr for RelOp {
    type Err = ExprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "<" => Ok(Self::Lt),
            "<=" => Ok(Self::Le),
            "==" => Ok(Self::Eq),
            "!=" => Ok(Self::Ne),
            ">" => Ok(Self::Gt),
            ">=" => Ok(Self::Ge),
            "&" => Ok(Self::And),
            "|" => Ok(Self::Or),
            "^" => Ok(Self::Xor),
            other => Err(ExprError::UnsupportedSymbol(other.to_string())),
        }
    }
}

/// One side of a relation: an expression for comparisons, a nested relation for logical
/// connectives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelSide {
    /// An expression side, used by comparison relations.
    Expr(Expr),

    /// A relation side, used by logical relations.
    Relation(Box<Relation>),
}

impl RelSide {
    /// If this side is an expression, returns a reference to it.
    pub fn as_expr(&self) -> Option<&Expr> {
        match self {
            Self::Expr(expr) => Some(expr),
            Self::Relation(_) => None,
        }
    }

    /// If this side is a relation, returns a reference to it.
    pub fn as_relation(&self) -> Option<&Relation> {
        match self {
            Self::Expr(_) => None,
            Self::Relation(rel) => Some(rel),
        }
    }

    fn map_exprs(self, f: &impl Fn(Expr) -> Expr) -> Self {
        match self {
            Self::Expr(expr) => Self::Expr(f(expr)),
            Self::Relation(rel) => Self::Relation(Box::new(rel.map_exprs(f))),
        }
    }

    fn invert(&self) -> Result<Self, ExprError> {
        match self {
            Self::Expr(_) => Err(ExprError::UnsupportedOperation(
                "cannot invert a bare expression side",
            )),
            Self::Relation(rel) => Ok(Self::Relation(Box::new(rel.invert()?))),
        }
    }
}

impl From<Expr> for RelSide {
    fn from(expr: Expr) -> Self {
        Self::Expr(expr)
    }
}

impl From<Relation> for RelSide {
    fn from(rel: Relation) -> Self {
        Self::Relation(Box::new(rel))
    }
}

/// A comparison of two expressions, or a logical combination of two relations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    /// The relation symbol.
    pub op: RelOp,

    /// The left side.
    pub lhs: RelSide,

    /// The right side.
    pub rhs: RelSide,
}

impl Relation {
    /// Creates a relation, checking that the sides fit the symbol: comparisons take expression
    /// sides, logical connectives take relation sides.
    pub fn new(op: RelOp, lhs: RelSide, rhs: RelSide) -> Result<Self, ExprError> {
        let sides_are_exprs = matches!(
            (&lhs, &rhs),
            (RelSide::Expr(_), RelSide::Expr(_))
        );
        let sides_are_relations = matches!(
            (&lhs, &rhs),
            (RelSide::Relation(_), RelSide::Relation(_))
        );

        if op.is_logical() && !sides_are_relations {
            return Err(ExprError::UnsupportedOperation(
                "logical connectives combine two relations",
            ));
        }
        if !op.is_logical() && !sides_are_exprs {
            return Err(ExprError::UnsupportedOperation(
                "comparisons relate two expressions",
            ));
        }

        Ok(Self { op, lhs, rhs })
    }

    /// Builds a comparison relation over two expressions.
    pub(crate) fn compare(op: RelOp, lhs: Expr, rhs: Expr) -> Self {
        Self { op, lhs: RelSide::Expr(lhs), rhs: RelSide::Expr(rhs) }
    }

    fn logical(op: RelOp, lhs: Relation, rhs: Relation) -> Self {
        Self {
            op,
            lhs: RelSide::Relation(Box::new(lhs)),
            rhs: RelSide::Relation(Box::new(rhs)),
        }
    }

    /// Combines two relations with `&`.
    pub fn and(self, other: Relation) -> Relation {
        Self::logical(RelOp::And, self, other)
    }

    /// Combines two relations with `|`.
    pub fn or(self, other: Relation) -> Relation {
        Self::logical(RelOp::Or, self, other)
    }

    /// Combines two relations with `^`.
    pub fn xor(self, other: Relation) -> Relation {
        Self::logical(RelOp::Xor, self, other)
    }

    /// Returns the logical negation of the relation.
    ///
    /// Comparison symbols invert through the fixed table (`< ↔ >=`, `<= ↔ >`, `== ↔ !=`);
    /// `&` and `|` invert by De Morgan's laws with both sides inverted; `a ^ b` inverts to
    /// `(a & b) | (!a & !b)`.
    pub fn invert(&self) -> Result<Relation, ExprError> {
        match self.op {
            RelOp::And | RelOp::Or => {
                let op = if self.op == RelOp::And { RelOp::Or } else { RelOp::And };
                Ok(Relation {
                    op,
                    lhs: self.lhs.invert()?,
                    rhs: self.rhs.invert()?,
                })
            },
            RelOp::Xor => {
                let (lhs, rhs) = match (self.lhs.as_relation(), self.rhs.as_relation()) {
                    (Some(lhs), Some(rhs)) => (lhs, rhs),
                    _ => return Err(ExprError::UnsupportedOperation(
                        "`^` combines two relations",
                    )),
                };
                let both = lhs.clone().and(rhs.clone());
                let neither = lhs.invert()?.and(rhs.invert()?);
                Ok(both.or(neither))
            },
            op => Ok(Relation {
                op: op.inverse()?,
                lhs: self.lhs.clone(),
                rhs: self.rhs.clone(),
            }),
        }
    }

    /// Applies a pure expression rewrite to every expression side, recursing through logical
    /// nodes. The relation symbol is preserved.
    pub fn map_exprs(self, f: &impl Fn(Expr) -> Expr) -> Relation {
        Relation {
            op: self.op,
            lhs: self.lhs.map_exprs(f),
            rhs: self.rhs.map_exprs(f),
        }
    }

    /// Raises both sides to a power.
    pub fn pow(self, exp: impl Into<Expr>) -> Relation {
        let exp = exp.into();
        self.map_exprs(&|side| side.pow(exp.clone()))
    }
}

/// Adds an expression to both sides of the relation.
impl<T: Into<Expr>> Add<T> for Relation {
    type Output = Relation;

    fn add(self, rhs: T) -> Relation {
        let rhs = rhs.into();
        self.map_exprs(&|side| side + rhs.clone())
    }
}

/// Subtracts an expression from both sides of the relation.
impl<T: Into<Expr>> Sub<T> for Relation {
    type Output = Relation;

    fn sub(self, rhs: T) -> Relation {
        let rhs = rhs.into();
        self.map_exprs(&|side| side - rhs.clone())
    }
}

/// Multiplies both sides of the relation by an expression.
impl<T: Into<Expr>> Mul<T> for Relation {
    type Output = Relation;

    fn mul(self, rhs: T) -> Relation {
        let rhs = rhs.into();
        self.map_exprs(&|side| side * rhs.clone())
    }
}

/// Divides both sides of the relation by an expression.
impl<T: Into<Expr>> Div<T> for Relation {
    type Output = Relation;

    fn div(self, rhs: T) -> Relation {
        let rhs = rhs.into();
        self.map_exprs(&|side| side / rhs.clone())
    }
}

/// Negates both sides of the relation.
impl Neg for Relation {
    type Output = Relation;

    fn neg(self) -> Relation {
        self.map_exprs(&|side| -side)
    }
}

impl Add<Relation> for i64 {
    type Output = Relation;

    fn add(self, rhs: Relation) -> Relation {
        rhs.map_exprs(&|side| Expr::from(self) + side)
    }
}

impl Sub<Relation> for i64 {
    type Output = Relation;

    fn sub(self, rhs: Relation) -> Relation {
        rhs.map_exprs(&|side| Expr::from(self) - side)
    }
}

impl Mul<Relation> for i64 {
    type Output = Relation;

    fn mul(self, rhs: Relation) -> Relation {
        rhs.map_exprs(&|side| Expr::from(self) * side)
    }
}

impl fmt::Display for RelSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expr(expr) => write!(f, "{}", expr),
            Self::Relation(rel) => write!(f, "({})", rel),
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.op.symbol(), self.rhs)
    }
}

#[cfg(test)]
mod tests {
    use crate::expr::var;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn comparison_builds_relation() {
        let rel = var("x").lt(var("y"));
        assert_eq!(rel.op, RelOp::Lt);
        assert_eq!(rel.to_string(), "x < y");
    }

    #[test]
    fn arithmetic_distributes_over_both_sides() {
        let rel = var("x").equals(var("y")) + 3;
        assert_eq!(rel, (var("x") + 3).equals(var("y") + 3));

        let rel = var("x").lt(var("y")) * 2;
        assert_eq!(rel, (var("x") * 2).lt(var("y") * 2));

        let rel = 1 - var("x").ge(var("y"));
        assert_eq!(rel, (1 - var("x")).ge(1 - var("y")));
    }

    #[test]
    fn arithmetic_recurses_through_logical_nodes() {
        let rel = var("a").lt(var("b")).and(var("c").lt(var("d"))) + 1;
        assert_eq!(
            rel,
            (var("a") + 1).lt(var("b") + 1).and((var("c") + 1).lt(var("d") + 1)),
        );
    }

    #[test]
    fn invert_comparisons() {
        assert_eq!(var("x").lt(1).invert(), Ok(var("x").ge(1)));
        assert_eq!(var("x").le(1).invert(), Ok(var("x").gt(1)));
        assert_eq!(var("x").equals(1).invert(), Ok(var("x").not_equals(1)));
        assert_eq!(var("x").ge(1).invert(), Ok(var("x").lt(1)));
    }

    #[test]
    fn invert_is_an_involution_on_comparisons() {
        let rel = (var("x") + 2).le(var("y"));
        assert_eq!(rel.invert().and_then(|r| r.invert()), Ok(rel));
    }

    #[test]
    fn invert_logical_de_morgan() {
        let rel = var("a").lt(1).and(var("b").lt(2));
        assert_eq!(
            rel.invert(),
            Ok(var("a").ge(1).or(var("b").ge(2))),
        );
    }

    #[test]
    fn invert_xor_expands() {
        let a = var("a").lt(1);
        let b = var("b").lt(2);
        let rel = a.clone().xor(b.clone());
        let expected = a.clone().and(b.clone())
            .or(a.invert().unwrap().and(b.invert().unwrap()));
        assert_eq!(rel.invert(), Ok(expected));
    }

    #[test]
    fn logical_inverse_has_no_table_entry() {
        assert_eq!(
            RelOp::And.inverse(),
            Err(ExprError::UnsupportedSymbol("&".to_string())),
        );
    }

    #[test]
    fn new_rejects_mismatched_sides() {
        let cmp = var("a").lt(1);
        assert!(Relation::new(RelOp::And, RelSide::Expr(var("x")), RelSide::Expr(var("y"))).is_err());
        assert!(Relation::new(RelOp::Lt, cmp.clone().into(), cmp.into()).is_err());
    }

    #[test]
    fn rel_op_from_str() {
        assert_eq!("<=".parse::<RelOp>(), Ok(RelOp::Le));
        assert_eq!("^".parse::<RelOp>(), Ok(RelOp::Xor));
        assert_eq!(
            "~".parse::<RelOp>(),
            Err(ExprError::UnsupportedSymbol("~".to_string())),
        );
    }

    #[test]
    fn fmt_logical() {
        let rel = var("x").lt(var("y")).and(var("y").lt(var("z")));
        assert_eq!(rel.to_string(), "(x < y) & (y < z)");
    }
}
