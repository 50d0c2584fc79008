//! Small symbolic-algebra engine
//!
//! Parses fully-parenthesized infix arithmetic over integer constants
//! and named variables into an immutable expression tree, and offers
//! three pure transformations on it:
//!
//! - symbolic differentiation ([`derivative`])
//! - algebraic simplification with constant folding ([`simplify`])
//! - numeric/partial evaluation ([`Expr::evaluate`])
//!
//! plus a renderer that reproduces a minimally-parenthesized textual
//! form (the `Display` impl / [`render`]).
//!
//! # Parsing and transforming
//! ```
//! use symalg::{derivative, parse, render, simplify};
//!
//! let expr = parse("(x * (x + 1))").unwrap();
//! let d = simplify(&derivative(&expr, "x"));
//! assert_eq!(render(&d), "x + x + 1");
//! ```
//!
//! # Building trees programmatically
//! ```
//! use symalg::{sym, Bindings, Value};
//!
//! let x = sym("x");
//! let expr = x.clone() * x + 1;
//!
//! let mut vars = Bindings::default();
//! vars.insert("x", 3);
//! assert_eq!(expr.evaluate(&vars), Value::Num(10));
//! ```
//!
//! Trees are immutable after construction; every transformation builds
//! new nodes, so shared subtrees may be read from multiple threads
//! without synchronization.

mod ast;
mod differentiation;
mod display;
mod error;
mod evaluator;
mod parser;
mod simplification;
mod symbol;

#[cfg(test)]
mod tests;

// Re-export key types for easier usage
pub use ast::{BinOp, Expr};
pub use differentiation::derivative;
pub use display::render;
pub use error::ParseError;
pub use evaluator::{evaluate, Bindings, Value};
pub use parser::{parse, tokenize};
pub use simplification::simplify;
pub use symbol::{sym, Symbol};
