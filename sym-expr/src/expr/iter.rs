use super::Expr;

/// An iterator that iteratively traverses the tree of expressions in left-to-right post-order
/// (i.e. depth-first).
///
/// This iterator is created by [`Expr::post_order_iter`].
pub struct ExprIter<'a> {
    stack: Vec<&'a Expr>,
    last_visited: Option<&'a Expr>,
}

impl<'a> ExprIter<'a> {
    /// Creates a new iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn new(expr: &'a Expr) -> Self {
        Self {
            stack: vec![expr],
            last_visited: None,
        }
    }

    /// Pops the current expression in the stack and marks it as the last visited expression.
    fn visit(&mut self) -> Option<&'a Expr> {
        self.last_visited = Some(self.stack.pop()?);
        self.last_visited
    }

    /// Returns true if the given expression matches the last visited expression.
    fn is_last_visited(&self, expr: &'a Expr) -> bool {
        match self.last_visited {
            Some(last_visited) => std::ptr::eq(last_visited, expr),
            None => false,
        }
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let expr = self.stack.last()?;
            match expr {
                Expr::Num(_) | Expr::Var(_) => return self.visit(),
                Expr::Op(op) => {
                    match op.args.last() {
                        None => return self.visit(),
                        Some(last) if self.is_last_visited(last) => return self.visit(),
                        _ => {},
                    }
                    for arg in op.args.iter().rev() {
                        self.stack.push(arg);
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::expr::var;
    use pretty_assertions::assert_eq;

    #[test]
    fn post_order_visits_leaves_before_parents() {
        let expr = (var("x") + 1) * var("y");
        let rendered: Vec<String> = expr.post_order_iter().map(|e| e.to_string()).collect();
        assert_eq!(rendered, vec!["x", "1", "x + 1", "y", "(x + 1)*y"]);
    }
}
