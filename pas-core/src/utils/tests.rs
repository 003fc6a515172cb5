use std::{path::PathBuf, rc::Rc};

use crate::parser::prelude::{parse_module, ParseErrorType, Warning as CompileWarning};

use super::prelude::{
    Error, Level, SourceWarningEmitter, SrcSpan, VectorWarningEmitterIO, Warning, WarningEmitter
};

fn parse_failure(src: &str) -> Error {
    match parse_module(src) {
        Ok(compiled) => panic!("expected an error, compiled {:?}", compiled.render()),
        Err(error) => Error::Parse {
            path: PathBuf::from("test.pas"),
            src: src.to_string(),
            error
        }
    }
}

#[test]
fn test_src_span() {
    let span = SrcSpan::from(4, 7);

    assert_eq!("4..7", span.to_string());
    assert_eq!(SrcSpan { start: 4, end: 7 }, span);
    assert!(SrcSpan::from(1, 2) < span);
}

#[test]
fn test_syntax_error_pretty() {
    let error = parse_failure("PROGRAM p; BEGIN END");
    let output = error.pretty_string();

    assert!(output.contains("Syntax error"), "{output}");
    assert!(output.contains("test.pas"), "{output}");
    assert!(output.contains("Not expected this"), "{output}");
    assert!(output.contains("Found end of input"), "{output}");
}

#[test]
fn test_error_titles() {
    let cases = [
        ("PROGRAM p; BEGIN a := 1 END.", "Semantic error"),
        ("PROGRAM p; VAR a : INTEGER; BEGIN a := 1 DIV 0 END.", "Evaluation error"),
        ("PROGRAM p; BEGIN ? END.", "Lexical error"),
    ];

    for (src, title) in cases {
        let error = parse_failure(src);
        let diagnostics = error.to_diagnostics();

        assert_eq!(1, diagnostics.len());
        assert_eq!(title, diagnostics[0].title);
        assert_eq!(Level::Error, diagnostics[0].level);
    }
}

#[test]
fn test_duplicate_declaration_labels() {
    let error = parse_failure("PROGRAM p; VAR a, a : INTEGER; BEGIN END.");

    let Error::Parse { error: parse_error, .. } = &error else {
        panic!("expected a parse error");
    };
    assert!(matches!(parse_error.error, ParseErrorType::DuplicateDeclaration { .. }));

    let diagnostics = error.to_diagnostics();
    let location = diagnostics[0].location.as_ref().expect("parse errors carry a location");

    assert_eq!(1, location.extra_labels.len());
    assert_eq!(SrcSpan::from(15, 16), location.extra_labels[0].span);
    assert!(error.pretty_string().contains("First declared here"));
}

#[test]
fn test_io_error() {
    let error = Error::from(std::io::Error::from(std::io::ErrorKind::NotFound));
    let diagnostics = error.to_diagnostics();

    assert_eq!(Error::StdIo { err: std::io::ErrorKind::NotFound }, error);
    assert_eq!("Standard IO error", diagnostics[0].title);
    assert!(diagnostics[0].location.is_none());
    assert!(error.pretty_string().contains("Standard IO error"));
}

#[test]
fn test_warning_emitters() {
    let io = VectorWarningEmitterIO::new();
    let emitter = SourceWarningEmitter::new(
        PathBuf::from("test.pas"),
        "PROGRAM p; VAR a : INTEGER; BEGIN END.".to_string(),
        WarningEmitter::new(Rc::new(io.clone()))
    );

    emitter.emit(CompileWarning::UnusedVariable {
        location: SrcSpan::from(15, 16),
        variable: "a".into(),
    });

    assert_eq!(1, emitter.count());

    let warnings = io.take();
    assert_eq!(1, warnings.len());
    assert!(io.take().is_empty());

    let output = warnings[0].pretty_string();
    assert!(output.contains("Unused variable `a`"), "{output}");
    assert!(output.contains("never assigned"), "{output}");

    let Warning::Compile { warning, .. } = &warnings[0];
    assert_eq!(SrcSpan::from(15, 16), warning.location());
}

#[test]
fn test_null_emitter_counts() {
    let emitter = WarningEmitter::null();

    emitter.emit(Warning::Compile {
        path: PathBuf::from("test.pas"),
        src: String::new(),
        warning: CompileWarning::UnreachableCode { location: SrcSpan::default() },
    });

    assert_eq!(1, emitter.count());
}
