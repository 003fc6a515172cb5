mod cli;
mod rcpl;
mod rlpl;

use std::{path::PathBuf, rc::Rc};

use clap::Parser;
use cli::{
    print_compiled, print_compiling, print_interrupted, print_tables, print_written
};
use pas_core::{
    compiler::compile_from_stream,
    utils::prelude::{Error, Warning, WarningEmitterIO}
};

#[derive(Parser)]
enum Command {
    /// Compiles a program and writes its instruction list as JSON
    Compile {
        /// Path of source file
        path: PathBuf,
        /// Path of the instruction list [default: <source name>.json]
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Do not write the instruction list
        #[arg(short, long, default_value_t = false)]
        no_output: bool,
        /// Print symbol and memory tables
        #[arg(short, long, default_value_t = false)]
        show_tables: bool
    },
    /// Runs Read Lex Print Loop
    Rlpl,
    /// Runs Read Compile Print Loop
    Rcpl
}

fn main() {
    if let Err(err) = ctrlc::set_handler(|| {
        print_interrupted();
        std::process::exit(130);
    }) {
        eprintln!("Failed to install Ctrl-C handler: {err}");
    }

    let result = match Command::parse() {
        Command::Compile { path, output, no_output, show_tables } => {
            compile(path, output, no_output, show_tables)
        },
        Command::Rlpl => rlpl::start().map_err(Error::from),
        Command::Rcpl => rcpl::start().map_err(Error::from),
    };

    if let Err(err) = result {
        let buf_writer = cli::stderr_buffer_writer();
        let mut buf = buf_writer.buffer();

        err.pretty(&mut buf);
        buf_writer
            .print(&buf)
            .expect("Writing error to stderr");

        std::process::exit(1);
    }
}

fn compile(
    path: PathBuf,
    output: Option<PathBuf>,
    no_output: bool,
    show_tables: bool,
) -> Result<(), Error> {
    let warning_emitter = Rc::new(ConsoleWarningEmitter);

    print_compiling(&path.display().to_string());
    let start = std::time::Instant::now();

    let compiled = compile_from_stream(path.clone(), warning_emitter)?;

    print_compiled(std::time::Instant::now() - start);

    if show_tables {
        print_tables(&compiled.environment);
    }

    if !no_output {
        let output = match output {
            Some(output) => output,
            None => path.file_name()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(&compiled.name))
                .with_extension("json")
        };

        let json = serde_json::to_string_pretty(&compiled.render())
            .map_err(std::io::Error::from)?;

        std::fs::write(&output, json)?;
        print_written(&output.display().to_string());
    }

    Ok(())
}

#[derive(Debug, Clone, Copy)]
pub struct ConsoleWarningEmitter;

impl WarningEmitterIO for ConsoleWarningEmitter {
    fn emit_warning(&self, warning: Warning) {
        let buffer_writer = crate::cli::stderr_buffer_writer();
        let mut buffer = buffer_writer.buffer();
        warning.pretty(&mut buffer);
        buffer_writer
            .print(&buffer)
            .expect("Writing warning to stderr");
    }
}
