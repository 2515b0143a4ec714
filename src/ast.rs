/// Expression tree node.
///
/// Built bottom-up by the parser. Each non-leaf node exclusively owns
/// its children, so a tree drops as a unit and partially built
/// subtrees on error paths are released automatically.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numeric leaf.
    Number(f64),
    /// `+expr`
    UnaryPlus(Box<Expr>),
    /// `-expr`
    UnaryMinus(Box<Expr>),
    /// `left + right`
    Addition(Box<Expr>, Box<Expr>),
    /// `left - right`
    Subtraction(Box<Expr>, Box<Expr>),
    /// `left * right`
    Multiplication(Box<Expr>, Box<Expr>),
    /// `left / right` (IEEE-754 double division)
    Division(Box<Expr>, Box<Expr>),
    /// `left % right` (unsigned 64-bit integer remainder)
    Modulo(Box<Expr>, Box<Expr>),
}
