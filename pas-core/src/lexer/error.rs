use crate::utils::prelude::SrcSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalErrorType {
    UnrecognizedCharacter { ch: char },
    IntegerOutOfRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexicalError {
    pub error: LexicalErrorType,
    pub location: SrcSpan,
}

impl LexicalError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match self.error {
            LexicalErrorType::UnrecognizedCharacter { ch } => (
                "Unrecognized character",
                vec![format!("`{}` can not be recognized by the scanner", ch.escape_debug())],
            ),
            LexicalErrorType::IntegerOutOfRange => (
                "Integer literal is too large",
                vec![format!("Integers must fit in the range {}..={}", i64::MIN, i64::MAX)],
            ),
        }
    }
}
