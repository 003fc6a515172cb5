use std::path::PathBuf;

use termcolor::Buffer;
use thiserror::Error;

use crate::parser::prelude::{ParseError, ParseErrorType};
use super::{
    diagnostic::{Diagnostic, Label, Level, Location},
    src_span::SrcSpan,
};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("failed to compile source code")]
    Parse {
        path: PathBuf,
        src: String,
        error: ParseError
    },
    #[error("IO operation failed: {err}")]
    StdIo {
        err: std::io::ErrorKind
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::StdIo { err: err.kind() }
    }
}

impl Error {
    pub fn pretty_string(&self) -> String {
        let mut nocolor = Buffer::no_color();
        self.pretty(&mut nocolor);
        String::from_utf8(nocolor.into_inner()).expect("Error printing produced invalid utf8")
    }

    pub fn pretty(&self, buf: &mut Buffer) {
        use std::io::Write;

        for diagnostic in self.to_diagnostics() {
            diagnostic.write(buf);
            writeln!(buf).expect("write new line diagnostic");
        }
    }

    pub fn to_diagnostics(&self) -> Vec<Diagnostic> {
        match self {
            Error::Parse { path, src, error } => {
                let (label, extra) = error.details();
                let text = extra.join("\n");

                let title = match &error.error {
                    ParseErrorType::UnexpectedToken { .. } => "Syntax error",
                    ParseErrorType::LexError { .. } => "Lexical error",
                    ParseErrorType::DivisionByZero
                    | ParseErrorType::IntegerOverflow => "Evaluation error",
                    _ => "Semantic error",
                };

                let extra_labels = match &error.error {
                    ParseErrorType::DuplicateDeclaration { first, .. } => vec![Label {
                        text: Some("First declared here".into()),
                        span: *first,
                    }],
                    _ => vec![],
                };

                // end of input has an empty span, point at the last character instead
                let span = if error.span.start == error.span.end && error.span.end as usize >= src.len() {
                    let end = src.len() as u32;
                    SrcSpan::from(end.saturating_sub(1), end)
                } else {
                    error.span
                };

                vec![Diagnostic {
                    title: title.into(),
                    text,
                    level: Level::Error,
                    location: Some(Location {
                        src,
                        path: path.clone(),
                        label: Label {
                            text: Some(label.to_string()),
                            span,
                        },
                        extra_labels,
                    }),
                }]
            },
            Error::StdIo { err } => {
                vec![Diagnostic {
                    title: "Standard IO error".into(),
                    text: format!("{err}"),
                    level: Level::Error,
                    location: None,
                }]
            }
        }
    }
}
