//! End-to-end tests exercising the public API across modules:
//! parse -> differentiate -> simplify -> render/evaluate.

use pretty_assertions::assert_eq;

use crate::{derivative, parse, render, simplify, sym, tokenize, Bindings, Expr, Value};

#[test]
fn tokenize_fused_negative_literal() {
    assert_eq!(
        tokenize("(x * (-3 + 2))"),
        ["(", "x", "*", "(", "-3", "+", "2", ")", ")"]
    );
}

#[test]
fn parse_then_render_minimal_parens() {
    let expr = parse("((x + 1) * 2)").unwrap();
    assert_eq!(render(&expr), "(x + 1) * 2");

    let expr = parse("(a - (b - c))").unwrap();
    assert_eq!(render(&expr), "a - (b - c)");

    let expr = parse("((a - b) - c)").unwrap();
    assert_eq!(render(&expr), "a - b - c");
}

#[test]
fn derivative_of_square_simplifies_to_sum() {
    let expr = parse("(x * x)").unwrap();
    let d = simplify(&derivative(&expr, "x"));
    assert_eq!(d, parse("(x + x)").unwrap());
}

#[test]
fn derivative_base_cases() {
    assert_eq!(derivative(&Expr::num(5), "x"), Expr::num(0));
    assert_eq!(derivative(&Expr::var("y"), "x"), Expr::num(0));
    assert_eq!(derivative(&Expr::var("x"), "x"), Expr::num(1));
}

#[test]
fn quotient_rule_end_to_end() {
    // d/dx (x / y) = (y * 1 - x * 0) / (y * y), simplifying to y / (y * y)
    let expr = parse("(x / y)").unwrap();
    let d = simplify(&derivative(&expr, "x"));
    assert_eq!(d, Expr::div_expr("y", Expr::mul_expr("y", "y")));
}

#[test]
fn simplify_identities() {
    let x = sym("x");
    assert_eq!(simplify(&(x.clone() + 0)), x.to_expr());
    assert_eq!(simplify(&(1 * x.clone())), x.to_expr());
    assert_eq!(simplify(&(x.clone() / 1)), x.to_expr());
    assert_eq!(simplify(&(0 * x.clone())), Expr::num(0));

    // Asymmetric by design: 0 - x stays put
    let zero_minus_x = 0 - x.clone();
    assert_eq!(simplify(&zero_minus_x), zero_minus_x);
}

#[test]
fn simplify_constant_folding() {
    assert_eq!(simplify(&(Expr::num(2) + Expr::num(3))), Expr::num(5));
    assert_eq!(
        simplify(&parse("((2 * 3) + (10 / 5))").unwrap()),
        Expr::num(8)
    );
}

#[test]
fn evaluate_full_binding() {
    let mut vars = Bindings::default();
    vars.insert("x", 3);
    let result = parse("(x * 2)").unwrap().evaluate(&vars);
    assert_eq!(result, Value::Num(6));
}

#[test]
fn evaluate_partial_binding() {
    let mut vars = Bindings::default();
    vars.insert("x", 3);
    let result = parse("(x + y)").unwrap().evaluate(&vars);
    assert_eq!(result, Value::Expr(Expr::add_expr(3, "y")));
}

#[test]
fn evaluate_programmatic_tree() {
    // Mixing parsed and hand-built trees through the composition operators
    let x = sym("x");
    let expr = (x.clone() * x) + parse("(y - 1)").unwrap();

    let mut vars = Bindings::default();
    vars.insert("x", 2);
    vars.insert("y", 10);
    assert_eq!(expr.evaluate(&vars), Value::Num(13));
}

#[test]
fn transformations_do_not_mutate_input() {
    let expr = parse("((x + 0) * (x + 0))").unwrap();
    let before = expr.clone();

    let _ = derivative(&expr, "x");
    let _ = simplify(&expr);
    let _ = expr.evaluate(&Bindings::default());
    let _ = render(&expr);

    assert_eq!(expr, before);
}

#[test]
fn derivative_then_simplify_larger_expression() {
    // d/dx (x * (x + 1)) = x * (1 + 0) + (x + 1) * 1  ->  x + (x + 1)
    let expr = parse("(x * (x + 1))").unwrap();
    let d = simplify(&derivative(&expr, "x"));
    assert_eq!(d, Expr::add_expr("x", Expr::add_expr("x", 1)));
    assert_eq!(render(&d), "x + x + 1");
}
