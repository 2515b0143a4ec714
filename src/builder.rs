use crate::ast::Expr;

impl Expr {
    /// Create a numeric leaf.
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// Create a unary plus node.
    #[must_use]
    pub fn unary_plus(operand: Self) -> Self {
        Self::UnaryPlus(Box::new(operand))
    }

    /// Create a unary minus node.
    #[must_use]
    pub fn unary_minus(operand: Self) -> Self {
        Self::UnaryMinus(Box::new(operand))
    }

    /// Create an addition node.
    #[must_use]
    pub fn addition(left: Self, right: Self) -> Self {
        Self::Addition(Box::new(left), Box::new(right))
    }

    /// Create a subtraction node.
    #[must_use]
    pub fn subtraction(left: Self, right: Self) -> Self {
        Self::Subtraction(Box::new(left), Box::new(right))
    }

    /// Create a multiplication node.
    #[must_use]
    pub fn multiplication(left: Self, right: Self) -> Self {
        Self::Multiplication(Box::new(left), Box::new(right))
    }

    /// Create a division node.
    #[must_use]
    pub fn division(left: Self, right: Self) -> Self {
        Self::Division(Box::new(left), Box::new(right))
    }

    /// Create a modulo node.
    ///
    /// The grammar never produces this node; it exists for trees built
    /// programmatically.
    #[must_use]
    pub fn modulo(left: Self, right: Self) -> Self {
        Self::Modulo(Box::new(left), Box::new(right))
    }
}
