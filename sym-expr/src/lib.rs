//! Immutable symbolic expression trees, relations over them, and a linear equation solver.
//!
//! The crate is built around three layers:
//!
//! - [`expr`] — the [`Expr`] tree itself: exact rational leaves ([`rug::Rational`]), variables,
//!   and n-ary operator nodes that flatten associatively at construction time. Arithmetic on
//!   expressions goes through the standard operator traits; `-`, `/` and negation canonicalize
//!   into `+`, `*` and `**` so rewrites only ever deal with three operator kinds.
//! - [`relation`] — [`Relation`]s: comparisons of two expressions and logical combinations of
//!   two relations. Arithmetic distributes over both sides; relations are not expressions.
//! - [`transforms`] and [`solve`] — pure rewrite rules ([`collect`], [`distribute`]) and the
//!   single-variable linear solver built on top of them.
//!
//! ```
//! use rug::Rational;
//! use sym_expr::{solve, var, Solution};
//!
//! let x = var("x");
//! let equation = x * 3 + 5;
//! assert_eq!(solve(&equation, Rational::from(11)), Solution::Value(Rational::from(2)));
//! ```

pub mod error;
pub mod expr;
pub mod relation;
pub mod solve;
pub mod transforms;

pub use error::ExprError;
pub use expr::{num, var, Expr, ExprIter, Op, OpKind};
pub use relation::{RelOp, RelSide, Relation};
pub use solve::{solve, solve_relation, Solution};
pub use transforms::{collect, distribute};
