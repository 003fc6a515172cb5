use std::{path::PathBuf, rc::Rc};

use utf8_chars::BufReadCharsExt;

use crate::{
    parser::prelude::{parse_module, parse_module_from_stream, Compiled},
    utils::prelude::{Error, SourceWarningEmitter, WarningEmitter, WarningEmitterIO}
};

/// Compiles a source file read in one piece.
pub fn compile(
    path: PathBuf,
    warnings: Rc<dyn WarningEmitterIO>,
) -> Result<Compiled, Error> {
    let src = std::fs::read_to_string(&path)?;

    compile_source(path, src, warnings)
}

/// Compiles an in-memory source. `path` is only used in diagnostics.
pub fn compile_source(
    path: PathBuf,
    src: String,
    warnings: Rc<dyn WarningEmitterIO>,
) -> Result<Compiled, Error> {
    match parse_module(&src) {
        Ok(compiled) => {
            emit_warnings(&compiled, path, src, warnings);
            Ok(compiled)
        },
        Err(error) => Err(Error::Parse { path, src, error })
    }
}

/// Compiles a source file decoded on the fly from a buffered reader.
pub fn compile_from_stream(
    path: PathBuf,
    warnings: Rc<dyn WarningEmitterIO>,
) -> Result<Compiled, Error> {
    let file = std::fs::File::open(&path)?;
    let file_size = file.metadata()?.len() as usize;

    let mut src = String::with_capacity(file_size);
    let mut io_error = None;
    let mut reader = std::io::BufReader::new(file);

    let parsed = {
        let stream = reader.chars()
            .map_while(|c| match c {
                Ok(c) => {
                    src.push(c);
                    Some(c)
                },
                Err(err) => {
                    io_error = Some(err);
                    None
                }
            });

        parse_module_from_stream(stream)
    };

    if let Some(err) = io_error {
        return Err(err.into());
    }

    match parsed {
        Ok(compiled) => {
            emit_warnings(&compiled, path, src, warnings);
            Ok(compiled)
        },
        Err(error) => Err(Error::Parse { path, src, error })
    }
}

fn emit_warnings(
    compiled: &Compiled,
    path: PathBuf,
    src: String,
    warnings: Rc<dyn WarningEmitterIO>,
) {
    let emitter = SourceWarningEmitter::new(path, src, WarningEmitter::new(warnings));

    for warning in &compiled.warnings {
        emitter.emit(warning.clone());
    }
}

#[cfg(test)]
mod tests;
