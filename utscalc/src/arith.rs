//! Binary operators and their results

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Symbol shown in the expression trace and on the keypad.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Overflow is not an error: it yields an infinite value.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, ArithmeticError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide if rhs == 0.0 => Err(ArithmeticError::DivisionByZero),
            Self::Divide => Ok(lhs / rhs),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(Operator::Add.apply(12.0, 7.0), Ok(19.0));
        assert_eq!(Operator::Subtract.apply(3.0, 10.0), Ok(-7.0));
        assert_eq!(Operator::Multiply.apply(5.0, 4.0), Ok(20.0));
        assert_eq!(Operator::Divide.apply(9.0, 4.0), Ok(2.25));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(Operator::Divide.apply(5.0, 0.0), Err(ArithmeticError::DivisionByZero));
        assert_eq!(Operator::Divide.apply(0.0, -0.0), Err(ArithmeticError::DivisionByZero));
    }

    #[test]
    fn test_overflow_is_infinite() {
        assert_eq!(Operator::Multiply.apply(1e308, 10.0), Ok(f64::INFINITY));
        assert_eq!(Operator::Add.apply(f64::MAX, f64::MAX), Ok(f64::INFINITY));
        assert_eq!(Operator::Subtract.apply(-f64::MAX, f64::MAX), Ok(f64::NEG_INFINITY));
    }

    #[test]
    fn test_symbols() {
        let symbols: Vec<String> = Operator::ALL.iter().map(|op| op.to_string()).collect();
        assert_eq!(symbols, ["+", "-", "×", "÷"]);
    }
}
