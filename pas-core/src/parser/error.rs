use crate::{
    environment::prelude::{ArithmeticError, ValueType},
    lexer::prelude::{LexicalError, Token},
    utils::prelude::SrcSpan
};

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorType {
    UnexpectedToken {
        token: Token,
        expected: Vec<String>,
    },
    DuplicateDeclaration {
        variable: String,
        first: SrcSpan,
    },
    UndeclaredVariable {
        variable: String,
    },
    UnassignedVariable {
        variable: String,
    },
    TypeMismatch {
        variable: String,
        expected: ValueType,
        got: ValueType,
    },
    DivisionByZero,
    IntegerOverflow,
    LexError { error: LexicalError },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub error: ParseErrorType,
    pub span: SrcSpan
}

impl ParseError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match &self.error {
            ParseErrorType::UnexpectedToken { token, expected } => {
                let messages = std::iter::once(format!("Found {}, expected one of: ", token.describe()))
                    .chain(expected.iter().map(|s| format!("- {s}")))
                    .collect();

                ("Not expected this", messages)
            },
            ParseErrorType::DuplicateDeclaration { variable, .. } => (
                "Duplicate declaration",
                vec![format!("Variable `{variable}` is declared more than once.")]
            ),
            ParseErrorType::UndeclaredVariable { variable } => (
                "Variable not declared",
                vec![format!("Variable `{variable}` is not declared before assignment.")]
            ),
            ParseErrorType::UnassignedVariable { variable } => (
                "Variable has no value",
                vec![format!("Variable `{variable}` is used before any value is assigned to it.")]
            ),
            ParseErrorType::TypeMismatch { variable, expected, got } => (
                "Type mismatch",
                vec![format!("Variable `{variable}` is declared `{expected}`, but the value is `{got}`.")]
            ),
            ParseErrorType::DivisionByZero => ("Division by zero", vec![]),
            ParseErrorType::IntegerOverflow => (
                "Integer overflow",
                vec![format!("The result does not fit in the range {}..={}", i64::MIN, i64::MAX)]
            ),
            ParseErrorType::LexError { error } => error.details()
        }
    }
}

impl From<LexicalError> for ParseError {
    fn from(error: LexicalError) -> Self {
        Self {
            span: error.location,
            error: ParseErrorType::LexError { error },
        }
    }
}

impl From<ArithmeticError> for ParseErrorType {
    fn from(error: ArithmeticError) -> Self {
        match error {
            ArithmeticError::DivisionByZero => ParseErrorType::DivisionByZero,
            ArithmeticError::IntegerOverflow => ParseErrorType::IntegerOverflow,
        }
    }
}

pub fn parse_error<T>(error: ParseErrorType, span: SrcSpan) -> Result<T, ParseError> {
    Err(ParseError { error, span })
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Warning {
    UnusedVariable {
        location: SrcSpan,
        variable: String,
    },
    UnterminatedComment {
        location: SrcSpan
    },
    UnreachableCode {
        location: SrcSpan
    }
}

impl Warning {
    pub fn location(&self) -> SrcSpan {
        match self {
            Warning::UnusedVariable { location, .. }
            | Warning::UnterminatedComment { location }
            | Warning::UnreachableCode { location } => *location
        }
    }
}
