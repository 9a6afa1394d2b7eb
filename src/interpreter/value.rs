use std::fmt;

use crate::{
    ast::{BinaryOperator, LiteralValue},
    error::RuntimeError,
    interpreter::evaluator::EvalResult,
    util::num::i64_to_f64_checked,
};

/// A runtime value: a 64-bit signed integer or a double-precision real.
///
/// Integer arithmetic is checked and reports [`RuntimeError::Overflow`]
/// rather than wrapping. Mixing an integer with a real promotes the integer
/// to a real first; promotion fails with [`RuntimeError::LiteralTooLarge`]
/// when the integer's magnitude cannot be held exactly in an `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A whole number.
    Integer(i64),
    /// A real number.
    Real(f64),
}

impl From<LiteralValue> for Value {
    fn from(literal: LiteralValue) -> Self {
        match literal {
            LiteralValue::Integer(value) => Self::Integer(value),
            LiteralValue::Real(value) => Self::Real(value),
        }
    }
}

impl Value {
    /// Converts the value to a real number.
    ///
    /// # Errors
    /// Returns [`RuntimeError::LiteralTooLarge`] for integers whose
    /// magnitude exceeds what an `f64` can represent exactly.
    pub fn as_real(self) -> EvalResult<f64> {
        match self {
            Self::Integer(value) => i64_to_f64_checked(value, RuntimeError::LiteralTooLarge),
            Self::Real(value) => Ok(value),
        }
    }

    /// Applies a binary arithmetic operator to two values.
    ///
    /// Addition, subtraction, and multiplication stay in the integer domain
    /// when both operands are integers and promote to reals otherwise.
    /// `div` truncates toward zero; on mixed or real operands it divides in
    /// the real domain and truncates the quotient. `/` always produces a
    /// real.
    ///
    /// # Errors
    /// Returns [`RuntimeError::DivisionByZero`] for a zero divisor,
    /// [`RuntimeError::Overflow`] when an integer result does not fit in an
    /// `i64`, and [`RuntimeError::LiteralTooLarge`] when promotion to real
    /// loses the operand.
    ///
    /// # Examples
    /// ```
    /// use pascaline::{ast::BinaryOperator, interpreter::value::Value};
    ///
    /// let quotient = Value::apply_binary(
    ///     BinaryOperator::IntegerDiv,
    ///     Value::Integer(7),
    ///     Value::Integer(2),
    /// );
    /// assert_eq!(quotient, Ok(Value::Integer(3)));
    ///
    /// let ratio = Value::apply_binary(
    ///     BinaryOperator::FloatDiv,
    ///     Value::Integer(7),
    ///     Value::Integer(2),
    /// );
    /// assert_eq!(ratio, Ok(Value::Real(3.5)));
    /// ```
    pub fn apply_binary(op: BinaryOperator, left: Self, right: Self) -> EvalResult<Self> {
        match op {
            BinaryOperator::Plus => Self::add(left, right),
            BinaryOperator::Minus => Self::sub(left, right),
            BinaryOperator::Mul => Self::mul(left, right),
            BinaryOperator::IntegerDiv => Self::int_div(left, right),
            BinaryOperator::FloatDiv => Self::float_div(left, right),
        }
    }

    /// Negates the value.
    ///
    /// # Errors
    /// Returns [`RuntimeError::Overflow`] when negating `i64::MIN`.
    pub fn negated(self) -> EvalResult<Self> {
        match self {
            Self::Integer(value) => value
                .checked_neg()
                .map(Self::Integer)
                .ok_or(RuntimeError::Overflow),
            Self::Real(value) => Ok(Self::Real(-value)),
        }
    }

    fn add(left: Self, right: Self) -> EvalResult<Self> {
        match (left, right) {
            (Self::Integer(l), Self::Integer(r)) => l
                .checked_add(r)
                .map(Self::Integer)
                .ok_or(RuntimeError::Overflow),
            _ => Ok(Self::Real(left.as_real()? + right.as_real()?)),
        }
    }

    fn sub(left: Self, right: Self) -> EvalResult<Self> {
        match (left, right) {
            (Self::Integer(l), Self::Integer(r)) => l
                .checked_sub(r)
                .map(Self::Integer)
                .ok_or(RuntimeError::Overflow),
            _ => Ok(Self::Real(left.as_real()? - right.as_real()?)),
        }
    }

    fn mul(left: Self, right: Self) -> EvalResult<Self> {
        match (left, right) {
            (Self::Integer(l), Self::Integer(r)) => l
                .checked_mul(r)
                .map(Self::Integer)
                .ok_or(RuntimeError::Overflow),
            _ => Ok(Self::Real(left.as_real()? * right.as_real()?)),
        }
    }

    fn int_div(left: Self, right: Self) -> EvalResult<Self> {
        match (left, right) {
            (Self::Integer(l), Self::Integer(r)) => {
                if r == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                l.checked_div(r).map(Self::Integer).ok_or(RuntimeError::Overflow)
            },
            _ => {
                let divisor = right.as_real()?;
                if divisor == 0.0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                Ok(Self::Real((left.as_real()? / divisor).trunc()))
            },
        }
    }

    fn float_div(left: Self, right: Self) -> EvalResult<Self> {
        let divisor = right.as_real()?;
        if divisor == 0.0 {
            return Err(RuntimeError::DivisionByZero);
        }
        Ok(Self::Real(left.as_real()? / divisor))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Real(value) => write!(f, "{value}"),
        }
    }
}
