//! Demonstrate error handling for invalid expression input.

fn main() {
    // Character the lexer does not recognize
    match mathexpr_rs::eval_str("2 & 3") {
        Ok(_) => println!("Evaluated OK (unexpected)"),
        Err(mathexpr_rs::Error::Lex(e)) => {
            println!("Lex error: {e}");
            println!("  Kind: {:?}", e.kind);
            println!("  Position: {}", e.position);
        }
        Err(e) => println!("Other error: {e}"),
    }

    println!();

    // Unclosed parenthesis
    match mathexpr_rs::eval_str("(2 + 3") {
        Ok(_) => println!("Evaluated OK (unexpected)"),
        Err(mathexpr_rs::Error::Parse(e)) => {
            println!("Parse error: {e}");
            println!("  Kind: {:?}", e.kind);
            println!("  Position: {}", e.position);
        }
        Err(e) => println!("Other error: {e}"),
    }

    println!();

    // Modulo by zero on a programmatically built tree
    let expr = mathexpr_rs::Expr::modulo(
        mathexpr_rs::Expr::number(5.0),
        mathexpr_rs::Expr::number(0.0),
    );
    match mathexpr_rs::evaluate(&expr) {
        Ok(_) => println!("Evaluated OK (unexpected)"),
        Err(e) => println!("Evaluation error: {e}"),
    }
}
