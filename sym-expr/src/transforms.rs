//! Pure rewrite rules that turn an expression into an equivalent expression.
//!
//! Each transform is a function from `&Expr` to a fresh `Expr`. They are single-pass and
//! shallow: [`collect`] folds the numeric arguments of one node, [`distribute`] expands one
//! product over one sum. Reaching a fully collected or fully expanded form is the caller's job,
//! by re-applying the transform to subexpressions.

use crate::expr::{Expr, Op, OpKind};
use rug::Rational;

/// Folds the numeric arguments of a sum or product into a single trailing number.
///
/// For `+` and `*` nodes, the arguments are partitioned into numeric and non-numeric parts; the
/// numeric ones are folded with the node's own operator and appended after the non-numeric
/// arguments. A fold result equal to the operator's identity (0 for `+`, 1 for `*`) is dropped
/// entirely, and a node left with a single argument collapses to that argument. A product whose
/// numeric fold is exactly 0 short-circuits to the number 0.
///
/// Everything that is not a sum or product passes through unchanged. Applying `collect` twice
/// yields the same result as applying it once.
pub fn collect(expr: &Expr) -> Expr {
    let Expr::Op(op) = expr else {
        return expr.clone();
    };
    if !matches!(op.kind, OpKind::Add | OpKind::Mul) {
        return expr.clone();
    }

    let mut args = Vec::with_capacity(op.args.len());
    let mut total = op.kind.identity();
    for arg in &op.args {
        match arg.as_num() {
            Some(n) => total = op.kind.combine(total, n),
            None => args.push(arg.clone()),
        }
    }

    if op.kind == OpKind::Mul && total == 0 {
        return Expr::Num(Rational::new());
    }

    if total != op.kind.identity() {
        args.push(Expr::Num(total));
    }
    Expr::Op(Op { kind: op.kind, args }).downgrade()
}

/// Applies a left- or right-distribution over the first sum found in a product, e.g.:
///
/// ```text
/// a * (b + c)  ->  a*b + a*c
/// (b + c) * a  ->  a*b + a*c
/// ```
///
/// Only products containing exactly one sum argument are rewritten. The "coefficient" is the
/// single argument adjacent to the sum: the argument immediately before it, or immediately after
/// when the sum comes first. The distributed sum replaces the removed pair at the lower of their
/// two positions; if nothing else remains, it is returned bare. Products with zero or several sum
/// arguments, and non-product nodes, are returned unchanged.
///
/// For products of three or more factors with non-sum factors on both sides of the sum, only the
/// single nearest neighbor is distributed; this is a known limitation, not silently generalized.
pub fn distribute(expr: &Expr) -> Expr {
    let Expr::Op(op) = expr else {
        return expr.clone();
    };
    if op.kind != OpKind::Mul || op.args.len() < 2 {
        return expr.clone();
    }

    let mut sums = op.args.iter().enumerate().filter_map(|(i, arg)| {
        match arg {
            Expr::Op(child) if child.kind == OpKind::Add => Some(i),
            _ => None,
        }
    });
    let (sum_idx, extra_sum) = (sums.next(), sums.next());
    let Some(sum_idx) = sum_idx else {
        return expr.clone();
    };
    if extra_sum.is_some() {
        return expr.clone();
    }

    let coef_idx = if sum_idx == 0 { 1 } else { sum_idx - 1 };
    let coef = &op.args[coef_idx];
    let Expr::Op(sum) = &op.args[sum_idx] else {
        unreachable!("sum index points at an `Add` node");
    };

    let distributed = Expr::Op(Op {
        kind: OpKind::Add,
        args: sum.args.iter()
            .map(|term| coef.clone() * term.clone())
            .collect(),
    });

    let mut args: Vec<Expr> = op.args.iter()
        .enumerate()
        .filter(|(i, _)| *i != sum_idx && *i != coef_idx)
        .map(|(_, arg)| arg.clone())
        .collect();
    if args.is_empty() {
        return distributed;
    }

    args.insert(sum_idx.min(coef_idx), distributed);
    Expr::Op(Op { kind: OpKind::Mul, args })
}

#[cfg(test)]
mod tests {
    use crate::expr::var;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn collect_folds_numeric_terms() {
        let expr = var("x") + 2 + var("y") + 3;
        assert_eq!(collect(&expr), var("x") + var("y") + 5);
    }

    #[test]
    fn collect_drops_identity_fold() {
        let expr = var("x") + 2 + var("y") + -2;
        assert_eq!(collect(&expr), var("x") + var("y"));

        let expr = var("x") * 2 * var("y") * Expr::Num(rug::Rational::from((1, 2)));
        assert_eq!(collect(&expr), var("x") * var("y"));
    }

    #[test]
    fn collect_degree_one_collapse() {
        let expr = var("x") + 3 + -3;
        assert_eq!(collect(&expr), var("x"));
    }

    #[test]
    fn collect_zero_product_short_circuits() {
        let expr = var("x") * 0 * var("y");
        assert_eq!(collect(&expr), Expr::from(0));
    }

    #[test]
    fn collect_passes_through_other_nodes() {
        let expr = var("x").pow(2);
        assert_eq!(collect(&expr), expr);
        assert_eq!(collect(&var("x")), var("x"));
    }

    #[test]
    fn collect_is_idempotent() {
        let exprs = [
            var("x") + 2 + var("y") + 3,
            var("x") * 4 * var("y"),
            var("x") * 0,
            var("x") + var("y"),
            (var("x") + 1) * 2 * 3,
        ];
        for expr in exprs {
            let once = collect(&expr);
            assert_eq!(collect(&once), once);
        }
    }

    #[test]
    fn distribute_left_coefficient() {
        // a * (b + c) -> a*b + a*c
        let expr = var("a") * (var("b") + var("c"));
        assert_eq!(
            distribute(&expr),
            var("a") * var("b") + var("a") * var("c"),
        );
    }

    #[test]
    fn distribute_sum_first_takes_right_coefficient() {
        // (b + c) * a -> a*b + a*c
        let expr = (var("b") + var("c")) * var("a");
        assert_eq!(
            distribute(&expr),
            var("a") * var("b") + var("a") * var("c"),
        );
    }

    #[test]
    fn distribute_reinserts_into_larger_product() {
        // x * a * (b + c) * y keeps x and y as factors around the expanded sum
        let expr = var("x") * var("a") * (var("b") + var("c")) * var("y");
        let expanded = var("a") * var("b") + var("a") * var("c");
        assert_eq!(
            distribute(&expr),
            Expr::Op(Op {
                kind: OpKind::Mul,
                args: vec![var("x"), expanded, var("y")],
            }),
        );
    }

    #[test]
    fn distribute_ignores_products_without_exactly_one_sum() {
        let no_sum = var("a") * var("b");
        assert_eq!(distribute(&no_sum), no_sum);

        let two_sums = (var("a") + 1) * (var("b") + 2);
        assert_eq!(distribute(&two_sums), two_sums);

        let not_a_product = var("a") + var("b");
        assert_eq!(distribute(&not_a_product), not_a_product);
    }
}
