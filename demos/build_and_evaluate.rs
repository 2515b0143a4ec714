//! Build an expression tree programmatically and evaluate it.

use mathexpr_rs::{Expr, evaluate, format};

fn main() {
    // (2 + 3) * 4 - 1 / 8
    let expr = Expr::subtraction(
        Expr::multiplication(
            Expr::addition(Expr::number(2.0), Expr::number(3.0)),
            Expr::number(4.0),
        ),
        Expr::division(Expr::number(1.0), Expr::number(8.0)),
    );

    println!("Expression: {}", format(&expr));
    match evaluate(&expr) {
        Ok(value) => println!("Result: {value}"),
        Err(e) => println!("Evaluation error: {e}"),
    }

    // Modulo is only reachable through the builder API.
    let remainder = Expr::modulo(Expr::number(17.0), Expr::number(5.0));
    println!("Expression: {}", format(&remainder));
    match evaluate(&remainder) {
        Ok(value) => println!("Result: {value}"),
        Err(e) => println!("Evaluation error: {e}"),
    }
}
