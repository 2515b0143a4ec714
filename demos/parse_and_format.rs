//! Parse an expression string and re-format it.

fn main() {
    let input = "2*3+4";

    let expr = mathexpr_rs::parse_str(input).expect("parse failed");

    println!("Input: {input}");
    println!("Tree: {expr:?}");

    // The formatter makes the grammar's right-associative grouping
    // explicit.
    let output = mathexpr_rs::format(&expr);
    println!("Formatted: {output}");

    let value = mathexpr_rs::evaluate(&expr).expect("evaluate failed");
    println!("Result: {value}");
}
