use super::error::{LexicalError, LexicalErrorType};
use super::token::{str_to_keyword, Token};
use crate::utils::prelude::SrcSpan;

pub type Spanned = (u32, Token, u32);
pub type LexResult = std::result::Result<Spanned, LexicalError>;

/// Scanner over a fully buffered source. The buffer is kept so that the
/// cursor can be moved back with [`Lexer::seek`].
#[derive(Debug, Clone)]
pub struct Lexer {
	chars: Vec<(u32, char)>,
	cursor: usize,
	end: u32,

	unterminated_comment: Option<SrcSpan>,
}

impl Lexer {
	pub fn new(input: impl Iterator<Item = (u32, char)>) -> Self {
		let chars = input.collect::<Vec<(u32, char)>>();
		let end = chars.last()
			.map(|(pos, ch)| pos + ch.len_utf8() as u32)
			.unwrap_or(0);

		Self {
			chars,
			cursor: 0,
			end,
			unterminated_comment: None,
		}
	}

	pub fn from_source(src: &str) -> Self {
		Self::new(src.char_indices().map(|(i, c)| (i as u32, c)))
	}

	/// Byte offset of the character under the cursor.
	pub fn offset(&self) -> u32 {
		match self.chars.get(self.cursor) {
			Some((pos, _)) => *pos,
			None => self.end,
		}
	}

	pub fn end(&self) -> u32 {
		self.end
	}

	pub fn peek_char(&self) -> Option<char> {
		self.chars.get(self.cursor + 1).map(|(_, ch)| *ch)
	}

	/// Character offset of the character under the cursor.
	pub fn cursor(&self) -> u32 {
		self.cursor as u32
	}

	/// Character offset of the character starting at byte `offset`. Offsets
	/// inside a multi-byte character map to the next character.
	pub fn char_offset(&self, offset: u32) -> u32 {
		self.chars.partition_point(|(pos, _)| *pos < offset) as u32
	}

	/// Moves the cursor to the character offset `position`, at most to the
	/// end of input.
	pub fn seek(&mut self, position: u32) {
		self.cursor = (position as usize).min(self.chars.len());
	}

	pub fn unterminated_comment(&self) -> Option<SrcSpan> {
		self.unterminated_comment
	}

	pub fn next_token(&mut self) -> LexResult {
		loop {
			let ch = match self.ch() {
				Some(ch) => ch,
				None => return Ok((self.end, Token::Eof, self.end)),
			};

			let span = match ch {
				'{' => {
					self.skip_comment();
					continue;
				},
				ch if ch.is_whitespace() => {
					self.next_char();
					continue;
				},
				'0'..='9' => return self.lex_number(),
				ch if ch.is_alphabetic() => return Ok(self.lex_ident()),
				'+' => self.eat_one_char(Token::Plus),
				'-' => self.eat_one_char(Token::Minus),
				'*' => self.eat_one_char(Token::Mult),
				'/' => self.eat_one_char(Token::FDiv),
				'%' => self.eat_one_char(Token::Mod),
				'(' => self.eat_one_char(Token::LParen),
				')' => self.eat_one_char(Token::RParen),
				'.' => self.eat_one_char(Token::Dot),
				',' => self.eat_one_char(Token::Comma),
				';' => self.eat_one_char(Token::Semicolon),
				'=' => self.eat_one_char(Token::Equal),
				':' => match self.peek_char() {
					Some('=') => self.eat_two_chars(Token::Assign),
					_ => self.eat_one_char(Token::Colon),
				},
				'<' => match self.peek_char() {
					Some('>') => self.eat_two_chars(Token::NotEqual),
					Some('=') => self.eat_two_chars(Token::LessEqual),
					_ => self.eat_one_char(Token::Less),
				},
				'>' => match self.peek_char() {
					Some('=') => self.eat_two_chars(Token::GreaterEqual),
					_ => self.eat_one_char(Token::Greater),
				},
				ch => {
					let start = self.offset();
					let end = start + ch.len_utf8() as u32;

					return Err(LexicalError {
						error: LexicalErrorType::UnrecognizedCharacter { ch },
						location: SrcSpan::from(start, end),
					});
				}
			};

			return Ok(span);
		}
	}

	fn ch(&self) -> Option<char> {
		self.chars.get(self.cursor).map(|(_, ch)| *ch)
	}

	fn next_char(&mut self) -> Option<char> {
		let ch = self.ch();

		if self.cursor < self.chars.len() {
			self.cursor += 1;
		}

		ch
	}

	fn eat_one_char(&mut self, token: Token) -> Spanned {
		let start_pos = self.offset();
		self.next_char();

		(start_pos, token, self.offset())
	}

	fn eat_two_chars(&mut self, token: Token) -> Spanned {
		let start_pos = self.offset();
		self.next_char();
		self.next_char();

		(start_pos, token, self.offset())
	}

	fn lex_ident(&mut self) -> Spanned {
		let start_pos = self.offset();
		let mut ident = String::new();

		while let Some(ch) = self.ch().filter(|ch| ch.is_alphanumeric()) {
			ident.push(ch);
			self.next_char();
		}

		let token = match str_to_keyword(&ident) {
			Some(keyword) => keyword,
			None => Token::Ident(ident),
		};

		(start_pos, token, self.offset())
	}

	fn lex_number(&mut self) -> LexResult {
		let start_pos = self.offset();
		let mut value = String::new();

		self.take_digits(&mut value);

		let is_real = self.ch() == Some('.')
			&& matches!(self.peek_char(), Some(ch) if ch.is_ascii_digit());

		let token = if is_real {
			value.push('.');
			self.next_char();
			self.take_digits(&mut value);

			// digits '.' digits always parses
			Token::RealConst(value.parse::<f64>().unwrap_or_default())
		} else {
			match value.parse::<i64>() {
				Ok(value) => Token::IntConst(value),
				Err(_) => return Err(LexicalError {
					error: LexicalErrorType::IntegerOutOfRange,
					location: SrcSpan::from(start_pos, self.offset()),
				}),
			}
		};

		Ok((start_pos, token, self.offset()))
	}

	fn take_digits(&mut self, value: &mut String) {
		while let Some(ch) = self.ch().filter(|ch| ch.is_ascii_digit()) {
			value.push(ch);
			self.next_char();
		}
	}

	fn skip_comment(&mut self) {
		let start_pos = self.offset();

		self.next_char(); // skip `{`

		while let Some(ch) = self.next_char() {
			if ch == '}' {
				return;
			}
		}

		self.unterminated_comment = Some(SrcSpan::from(start_pos, self.end));
	}
}

impl Iterator for Lexer {
	type Item = LexResult;

	fn next(&mut self) -> Option<Self::Item> {
		Some(self.next_token())
	}
}
