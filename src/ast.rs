//! Expression tree for algebraic formulas
//!
//! The tree is immutable: every transformation (differentiation,
//! simplification, evaluation) builds new nodes. Children are held in
//! `Arc`, so subtrees may be shared structurally across different trees.

use std::sync::Arc;

use rustc_hash::FxHashSet;

/// An algebraic expression over integer constants and named variables.
///
/// Equality and hashing are structural; the derived `Debug` form prints
/// the variant names and owned children literally, e.g.
/// `Add(Var("x"), Num(3))`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// Named variable (e.g. "x")
    Var(String),

    /// Integer constant
    Num(i64),

    /// Addition
    Add(Arc<Expr>, Arc<Expr>),

    /// Subtraction
    Sub(Arc<Expr>, Arc<Expr>),

    /// Multiplication
    Mul(Arc<Expr>, Arc<Expr>),

    /// Division
    Div(Arc<Expr>, Arc<Expr>),
}

/// The kind of a binary node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    /// Rendering precedence: `Mul`/`Div` bind tighter (1) than
    /// `Add`/`Sub` (2). Used only by the renderer.
    pub fn precedence(self) -> u8 {
        match self {
            BinOp::Mul | BinOp::Div => 1,
            BinOp::Add | BinOp::Sub => 2,
        }
    }

    /// The infix character for this operator.
    pub fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
        }
    }

    /// Map an operator token back to its kind.
    pub fn from_token(token: &str) -> Option<BinOp> {
        match token {
            "+" => Some(BinOp::Add),
            "-" => Some(BinOp::Sub),
            "*" => Some(BinOp::Mul),
            "/" => Some(BinOp::Div),
            _ => None,
        }
    }
}

impl Expr {
    // Convenience constructors

    /// Create a variable expression
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Var(name.into())
    }

    /// Create an integer constant expression
    pub fn num(value: i64) -> Self {
        Expr::Num(value)
    }

    /// Create a binary node of the given kind.
    ///
    /// Operands accept anything promotable to an expression: an `Expr`,
    /// an `i64` (becomes `Num`), or a string/`Symbol` (becomes `Var`).
    pub fn binary(op: BinOp, left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        let left = Arc::new(left.into());
        let right = Arc::new(right.into());
        match op {
            BinOp::Add => Expr::Add(left, right),
            BinOp::Sub => Expr::Sub(left, right),
            BinOp::Mul => Expr::Mul(left, right),
            BinOp::Div => Expr::Div(left, right),
        }
    }

    /// Create an addition expression
    pub fn add_expr(left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        Expr::binary(BinOp::Add, left, right)
    }

    /// Create a subtraction expression
    pub fn sub_expr(left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        Expr::binary(BinOp::Sub, left, right)
    }

    /// Create a multiplication expression
    pub fn mul_expr(left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        Expr::binary(BinOp::Mul, left, right)
    }

    /// Create a division expression
    pub fn div_expr(left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        Expr::binary(BinOp::Div, left, right)
    }

    // Accessor methods

    /// Return the value if this node is a constant
    pub fn as_num(&self) -> Option<i64> {
        match self {
            Expr::Num(n) => Some(*n),
            _ => None,
        }
    }

    /// Decompose a binary node into its kind and children.
    /// Returns `None` for `Var` and `Num`.
    pub fn parts(&self) -> Option<(BinOp, &Expr, &Expr)> {
        match self {
            Expr::Var(_) | Expr::Num(_) => None,
            Expr::Add(l, r) => Some((BinOp::Add, l, r)),
            Expr::Sub(l, r) => Some((BinOp::Sub, l, r)),
            Expr::Mul(l, r) => Some((BinOp::Mul, l, r)),
            Expr::Div(l, r) => Some((BinOp::Div, l, r)),
        }
    }

    /// Rendering precedence of this node; `None` for leaves, which never
    /// need parenthesization as standalone terms.
    pub fn precedence(&self) -> Option<u8> {
        self.parts().map(|(op, _, _)| op.precedence())
    }

    // Analysis methods

    /// Count the total number of nodes in the tree
    pub fn node_count(&self) -> usize {
        match self.parts() {
            None => 1,
            Some((_, l, r)) => 1 + l.node_count() + r.node_count(),
        }
    }

    /// Check if the expression contains a specific variable
    pub fn contains_var(&self, var: &str) -> bool {
        match self {
            Expr::Num(_) => false,
            Expr::Var(name) => name == var,
            Expr::Add(l, r) | Expr::Sub(l, r) | Expr::Mul(l, r) | Expr::Div(l, r) => {
                l.contains_var(var) || r.contains_var(var)
            }
        }
    }

    /// Collect the names of all variables in the expression
    pub fn variables(&self) -> FxHashSet<String> {
        let mut vars = FxHashSet::default();
        self.collect_variables(&mut vars);
        vars
    }

    fn collect_variables(&self, vars: &mut FxHashSet<String>) {
        match self {
            Expr::Num(_) => {}
            Expr::Var(name) => {
                vars.insert(name.clone());
            }
            Expr::Add(l, r) | Expr::Sub(l, r) | Expr::Mul(l, r) | Expr::Div(l, r) => {
                l.collect_variables(vars);
                r.collect_variables(vars);
            }
        }
    }
}

// Literal promotion: raw numbers and names coerce into leaf nodes at the
// boundary of every constructor and composition operator.

impl From<i64> for Expr {
    fn from(n: i64) -> Self {
        Expr::Num(n)
    }
}

impl From<&str> for Expr {
    fn from(name: &str) -> Self {
        Expr::Var(name.to_string())
    }
}

impl From<String> for Expr {
    fn from(name: String) -> Self {
        Expr::Var(name)
    }
}
