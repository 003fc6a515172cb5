use std::io::Write;

use pas_core::lexer::prelude::{Lexer, Token};

const PROMPT: &str = "lex> ";

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
			line => {
				let mut lexer = Lexer::from_source(line);

				loop {
					match lexer.next_token() {
						Ok((_, Token::Eof, _)) => {
							println!("{:?}", Token::Eof);
							break;
						},
						Ok((start, token, end)) => println!("{token:?} [{start}..{end}]"),
						Err(err) => {
							let (message, details) = err.details();

							println!("[at {}] Lexical error: {message}", err.location);
							if !details.is_empty() {
								println!("{}", details.join("\n"));
							}
							break;
						}
					}
				}
			}
		}
	}
}
