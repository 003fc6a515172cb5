use std::{io::Write, path::PathBuf, rc::Rc};

use pas_core::compiler::compile_source;

use crate::{cli::{print_tables, stderr_buffer_writer}, ConsoleWarningEmitter};

const PROMPT: &str = "pas> ";

/// Each line is compiled as a whole program, e.g.
/// `PROGRAM p; VAR a : INTEGER; BEGIN a := 2 + 3 * 4 END.`
pub fn start() -> std::io::Result<()> {
	let stdin = std::io::stdin();

	loop {
		let mut input = String::new();

		print!("{PROMPT}");
		std::io::stdout().flush()?;

		if stdin.read_line(&mut input)? == 0 {
			return Ok(());
		}

		match input.trim_end_matches(['\n', '\r']) {
			"" => {},
			".exit" => return Ok(()),
			line => match compile_source(PathBuf::from("<rcpl>"), line.to_string(), Rc::new(ConsoleWarningEmitter)) {
				Ok(compiled) => {
					for instruction in compiled.render() {
						println!("{instruction}");
					}

					print_tables(&compiled.environment);
				},
				Err(err) => {
					let buf_writer = stderr_buffer_writer();
					let mut buf = buf_writer.buffer();

					err.pretty(&mut buf);
					buf_writer.print(&buf)?;
				}
			}
		}
	}
}
