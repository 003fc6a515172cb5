use std::{path::PathBuf, rc::Rc};

use crate::{
    environment::prelude::Value,
    parser::prelude::{ParseErrorType, Warning as CompileWarning},
    utils::prelude::{Error, NullWarningEmitterIO, VectorWarningEmitterIO, Warning}
};

use super::{compile, compile_from_stream, compile_source};

const PROGRAM: &str = "PROGRAM demo;
VAR
    a, unused : INTEGER;
BEGIN
    a := 2 * (3 + 4)
END.
";

struct TempSource {
    path: PathBuf,
}

impl TempSource {
    fn new(name: &str, src: &str) -> Self {
        let path = std::env::temp_dir().join(format!("pas-core-{}-{name}.pas", std::process::id()));
        std::fs::write(&path, src).expect("write temporary source");

        Self { path }
    }
}

impl Drop for TempSource {
    fn drop(&mut self) {
        _ = std::fs::remove_file(&self.path);
    }
}

#[test]
fn test_compile_source() {
    let io = VectorWarningEmitterIO::new();
    let compiled = compile_source(PathBuf::from("demo.pas"), PROGRAM.to_string(), Rc::new(io.clone()))
        .expect("program compiles");

    assert_eq!("demo", compiled.name);
    assert_eq!(Some(&Value::Integer { value: 14 }), compiled.environment.get("a"));
    assert_eq!("< MOV a 14 >", compiled.render().last().expect("instructions emitted"));

    let warnings = io.take();
    assert_eq!(1, warnings.len());

    let Warning::Compile { path, warning, .. } = &warnings[0];
    assert_eq!(&PathBuf::from("demo.pas"), path);
    assert!(matches!(warning, CompileWarning::UnusedVariable { variable, .. } if variable == "unused"));
}

#[test]
fn test_warnings_render_with_source() {
    let io = VectorWarningEmitterIO::new();
    let src = "PROGRAM p; VAR a : INTEGER; BEGIN END. done";

    assert!(compile_source(PathBuf::from("<rcpl>"), src.to_string(), Rc::new(io.clone())).is_ok());

    let output = io.take().iter()
        .map(|warning| warning.pretty_string())
        .collect::<String>();

    assert!(output.contains("Unused variable `a`"), "{output}");
    assert!(output.contains("Unreachable code"), "{output}");
    assert!(output.contains("<rcpl>"), "{output}");
    assert!(!output.contains("UnusedVariable"), "{output}");
}

#[test]
fn test_compile_file() {
    let source = TempSource::new("file", PROGRAM);

    let from_file = compile(source.path.clone(), Rc::new(NullWarningEmitterIO))
        .expect("file compiles");
    let from_stream = compile_from_stream(source.path.clone(), Rc::new(NullWarningEmitterIO))
        .expect("stream compiles");

    assert_eq!(from_file, from_stream);
}

#[test]
fn test_stream_positions_are_bytes() {
    let src = "PROGRAM p; { ünïcödé } VAR a : INTEGER; BEGIN a := b END.";
    let source = TempSource::new("unicode", src);

    let Err(Error::Parse { error, src: read, .. }) = compile_from_stream(source.path.clone(), Rc::new(NullWarningEmitterIO)) else {
        panic!("expected a parse error");
    };

    assert_eq!(src, read);
    assert!(matches!(error.error, ParseErrorType::UnassignedVariable { .. }));
    assert_eq!("b", &src[error.span.start as usize..error.span.end as usize]);
}

#[test]
fn test_parse_error_keeps_source() {
    let src = "PROGRAM p; BEGIN x := 1 END.";
    let result = compile_source(PathBuf::from("bad.pas"), src.to_string(), Rc::new(NullWarningEmitterIO));

    match result {
        Err(Error::Parse { path, src: kept, error }) => {
            assert_eq!(PathBuf::from("bad.pas"), path);
            assert_eq!(src, kept);
            assert!(matches!(error.error, ParseErrorType::UndeclaredVariable { .. }));
        },
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn test_missing_file() {
    let path = std::env::temp_dir().join("pas-core-does-not-exist.pas");

    assert_eq!(
        Err(Error::StdIo { err: std::io::ErrorKind::NotFound }),
        compile(path.clone(), Rc::new(NullWarningEmitterIO))
    );
    assert_eq!(
        Err(Error::StdIo { err: std::io::ErrorKind::NotFound }),
        compile_from_stream(path, Rc::new(NullWarningEmitterIO))
    );
}
