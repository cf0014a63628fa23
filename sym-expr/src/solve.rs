//! Isolation of a single variable from a linear equation.
//!
//! The solver peels the outermost operator of an expression one layer at a time, applying the
//! inverse operation to the target value, until it reaches the bare variable. Only linear
//! peeling is supported: sums and products with a numeric part, and negation (which is a product
//! by -1 in canonical form). Anything else, including equations where the variable occurs more
//! than once, is returned as [`Solution::Unsolved`] rather than attempting general solving.

use crate::error::ExprError;
use crate::expr::{Expr, Op, OpKind};
use crate::relation::{RelOp, Relation};
use crate::transforms::collect;
use rug::Rational;

/// The outcome of a [`solve`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Solution {
    /// The variable was fully isolated; this is its value.
    Value(Rational),

    /// Peeling stopped before reaching a bare variable.
    ///
    /// `expr` is the remaining expression and `target` the accumulated value; the original
    /// equation is equivalent to `expr == target`. Callers should check
    /// [`Expr::contains_var`] on `expr` to see whether the variable is still buried in it.
    Unsolved {
        /// The expression that could not be reduced further.
        expr: Expr,

        /// The accumulated target value at the point peeling stopped.
        target: Rational,
    },
}

/// Solves the equation `expr == target` for the single free variable of `expr`.
///
/// ```
/// use rug::Rational;
/// use sym_expr::{solve, var, Solution};
///
/// // 3x + 5 == 11
/// let expr = var("x") * 3 + 5;
/// assert_eq!(solve(&expr, Rational::from(11)), Solution::Value(Rational::from(2)));
/// ```
pub fn solve(expr: &Expr, target: Rational) -> Solution {
    match expr {
        Expr::Var(_) => Solution::Value(target),
        Expr::Op(op) if matches!(op.kind, OpKind::Add | OpKind::Mul) => {
            let collected = collect(expr);
            match collected {
                Expr::Op(inner) if inner.kind == op.kind => {
                    peel_numeric_tail(inner, target)
                },
                // the node collapsed into something simpler (a bare variable, a number, ...)
                other => solve(&other, target),
            }
        },
        _ => Solution::Unsolved { expr: expr.clone(), target },
    }
}

/// Strips the trailing numeric term produced by [`collect`] and recurses into what remains.
fn peel_numeric_tail(op: Op, target: Rational) -> Solution {
    let Some(Expr::Num(tail)) = op.args.last() else {
        // no numeric part left to strip; several non-numeric terms remain
        return Solution::Unsolved { expr: Expr::Op(op), target };
    };

    let new_target = match op.kind {
        OpKind::Add => target - tail,
        OpKind::Mul if *tail != 0 => target / tail,
        _ => return Solution::Unsolved { expr: Expr::Op(op), target },
    };

    let mut args = op.args;
    args.pop();
    let rest = Expr::Op(Op { kind: op.kind, args }).downgrade();
    solve(&rest, new_target)
}

/// Solves a relation of the form `expr == value` for the single free variable of `expr`.
///
/// The relation must be a simple `==` comparison with a numeric side; everything else fails with
/// [`ExprError::UnsupportedOperation`].
pub fn solve_relation(rel: &Relation) -> Result<Solution, ExprError> {
    if rel.op != RelOp::Eq {
        return Err(ExprError::UnsupportedOperation(
            "only `==` relations can be solved",
        ));
    }

    let (lhs, rhs) = match (rel.lhs.as_expr(), rel.rhs.as_expr()) {
        (Some(lhs), Some(rhs)) => (lhs, rhs),
        _ => return Err(ExprError::UnsupportedOperation(
            "only relations between expressions can be solved",
        )),
    };

    match (lhs.as_num(), rhs.as_num()) {
        (_, Some(value)) => Ok(solve(lhs, value.clone())),
        (Some(value), _) => Ok(solve(rhs, value.clone())),
        _ => Err(ExprError::UnsupportedOperation(
            "one side of the equation must be numeric",
        )),
    }
}
