use std::{cmp::Ordering, fmt::Display};

use crate::lexer::prelude::Token;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Integer {
        value: i64
    },
    Real {
        value: f64
    },
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer { value } => write!(f, "{value}"),
            // keep the decimal point on whole reals: `5.0`, not `5`
            Value::Real { value } if value.is_finite() && value.fract() == 0.0 => write!(f, "{value:.1}"),
            Value::Real { value } => write!(f, "{value}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    DivisionByZero,
    IntegerOverflow,
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Integer { .. } => ValueType::Integer,
            Self::Real { .. } => ValueType::Real,
        }
    }

    pub fn as_real(&self) -> f64 {
        match *self {
            Self::Integer { value } => value as f64,
            Self::Real { value } => value,
        }
    }

    pub fn is_zero(&self) -> bool {
        match *self {
            Self::Integer { value } => value == 0,
            Self::Real { value } => value == 0.0,
        }
    }

    pub fn add(self, rhs: Value) -> Result<Value, ArithmeticError> {
        self.arithmetic(rhs, i64::checked_add, |a, b| a + b)
    }

    pub fn sub(self, rhs: Value) -> Result<Value, ArithmeticError> {
        self.arithmetic(rhs, i64::checked_sub, |a, b| a - b)
    }

    pub fn mul(self, rhs: Value) -> Result<Value, ArithmeticError> {
        self.arithmetic(rhs, i64::checked_mul, |a, b| a * b)
    }

    /// `DIV`: truncating division, the result is always an integer.
    pub fn int_div(self, rhs: Value) -> Result<Value, ArithmeticError> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }

        match (self, rhs) {
            (Value::Integer { value: a }, Value::Integer { value: b }) => a.checked_div(b)
                .map(|value| Value::Integer { value })
                .ok_or(ArithmeticError::IntegerOverflow),
            _ => {
                let quotient = (self.as_real() / rhs.as_real()).trunc();

                if !quotient.is_finite() || quotient < i64::MIN as f64 || quotient >= i64::MAX as f64 {
                    return Err(ArithmeticError::IntegerOverflow);
                }

                Ok(Value::Integer { value: quotient as i64 })
            }
        }
    }

    /// `/`: the result is always a real.
    pub fn real_div(self, rhs: Value) -> Result<Value, ArithmeticError> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }

        Ok(Value::Real { value: self.as_real() / rhs.as_real() })
    }

    /// `%`: floored modulo, the result takes the sign of the divisor.
    pub fn modulo(self, rhs: Value) -> Result<Value, ArithmeticError> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }

        match (self, rhs) {
            (Value::Integer { value: a }, Value::Integer { value: b }) => {
                let rem = a.wrapping_rem(b);

                let value = if rem != 0 && (rem < 0) != (b < 0) {
                    rem.checked_add(b).ok_or(ArithmeticError::IntegerOverflow)?
                } else {
                    rem
                };

                Ok(Value::Integer { value })
            },
            _ => {
                let (a, b) = (self.as_real(), rhs.as_real());
                let rem = a % b;

                let value = if rem != 0.0 && (rem < 0.0) != (b < 0.0) {
                    rem + b
                } else {
                    rem
                };

                Ok(Value::Real { value })
            }
        }
    }

    pub fn neg(self) -> Result<Value, ArithmeticError> {
        match self {
            Value::Integer { value } => value.checked_neg()
                .map(|value| Value::Integer { value })
                .ok_or(ArithmeticError::IntegerOverflow),
            Value::Real { value } => Ok(Value::Real { value: -value }),
        }
    }

    /// Numeric ordering, integers and reals compare by value.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Integer { value: a }, Value::Integer { value: b }) => Some(a.cmp(b)),
            _ => self.as_real().partial_cmp(&other.as_real()),
        }
    }

    fn arithmetic(
        self,
        rhs: Value,
        int_op: fn(i64, i64) -> Option<i64>,
        real_op: fn(f64, f64) -> f64,
    ) -> Result<Value, ArithmeticError> {
        match (self, rhs) {
            (Value::Integer { value: a }, Value::Integer { value: b }) => int_op(a, b)
                .map(|value| Value::Integer { value })
                .ok_or(ArithmeticError::IntegerOverflow),
            _ => Ok(Value::Real { value: real_op(self.as_real(), rhs.as_real()) }),
        }
    }
}

/// Declared type of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Integer,
    Real,
}

impl Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueType::Integer => write!(f, "INTEGER"),
            ValueType::Real => write!(f, "REAL"),
        }
    }
}

impl TryFrom<&Token> for ValueType {
    type Error = ();

    fn try_from(value: &Token) -> Result<Self, Self::Error> {
        match value {
            Token::Integer => Ok(ValueType::Integer),
            Token::Real => Ok(ValueType::Real),
            _ => Err(())
        }
    }
}
