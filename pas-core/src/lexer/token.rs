use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // <буква>{<буква>|<цифра>}
    Ident(String),
    // {/ <цифра> /}
    IntConst(i64),
    // {/ <цифра> /}.{/ <цифра> /}
    RealConst(f64),

    // Операции группы сложения
    Plus, // +
    Minus, // -

    // Операции группы умножения
    Mult, // *
    Div, // DIV
    FDiv, // /
    Mod, // %

    // Операции группы отношения
    Equal, // =
    NotEqual, // <>
    Less, // <
    LessEqual, // <=
    Greater, // >
    GreaterEqual, // >=

    // Операция присваивания
    Assign, // :=

    // Ключевые слова
    Program,
    Var,
    Begin,
    End,
    Repeat,
    Until,
    Break,
    Continue,

    // Типы данных
    Integer,
    Real,
    Boolean,

    // Прочие разделители
    Dot, // .
    Comma, // ,
    Colon, // :
    Semicolon, // ;
    LParen, // (
    RParen, // )

    Eof,
}

pub fn str_to_keyword(word: &str) -> Option<Token> {
    Some(match word {
        "PROGRAM" => Token::Program,
        "VAR" => Token::Var,
        "BEGIN" => Token::Begin,
        "END" => Token::End,
        "REPEAT" => Token::Repeat,
        "UNTIL" => Token::Until,
        "BREAK" => Token::Break,
        "CONTINUE" => Token::Continue,

        "INTEGER" => Token::Integer,
        "REAL" => Token::Real,
        "BOOLEAN" => Token::Boolean,

        "DIV" => Token::Div,

        _ => return None,
    })
}

impl Token {
    pub fn is_reserved_word(&self) -> bool {
        matches!(
            self,
            Token::Program
                | Token::Var
                | Token::Begin
                | Token::End
                | Token::Repeat
                | Token::Until
                | Token::Break
                | Token::Continue
                | Token::Integer
                | Token::Real
                | Token::Boolean
                | Token::Div
        )
    }

    /// Source text of the token. End of input has none.
    pub fn as_literal(&self) -> Option<String> {
        Some(match self {
            Token::Ident(value) => value.clone(),
            Token::IntConst(value) => value.to_string(),
            Token::RealConst(value) => format!("{value:?}"),

            Token::Plus => "+".to_string(),
            Token::Minus => "-".to_string(),
            Token::Mult => "*".to_string(),
            Token::Div => "DIV".to_string(),
            Token::FDiv => "/".to_string(),
            Token::Mod => "%".to_string(),

            Token::Equal => "=".to_string(),
            Token::NotEqual => "<>".to_string(),
            Token::Less => "<".to_string(),
            Token::LessEqual => "<=".to_string(),
            Token::Greater => ">".to_string(),
            Token::GreaterEqual => ">=".to_string(),

            Token::Assign => ":=".to_string(),

            Token::Program => "PROGRAM".to_string(),
            Token::Var => "VAR".to_string(),
            Token::Begin => "BEGIN".to_string(),
            Token::End => "END".to_string(),
            Token::Repeat => "REPEAT".to_string(),
            Token::Until => "UNTIL".to_string(),
            Token::Break => "BREAK".to_string(),
            Token::Continue => "CONTINUE".to_string(),
            Token::Integer => "INTEGER".to_string(),
            Token::Real => "REAL".to_string(),
            Token::Boolean => "BOOLEAN".to_string(),

            Token::Dot => ".".to_string(),
            Token::Comma => ",".to_string(),
            Token::Colon => ":".to_string(),
            Token::Semicolon => ";".to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),

            Token::Eof => return None,
        })
    }

    /// How the token is named in "expected ..." messages.
    pub fn describe(&self) -> String {
        match self {
            Token::Ident(_) => "an identifier".to_string(),
            Token::IntConst(_) => "an integer".to_string(),
            Token::RealConst(_) => "a real".to_string(),
            Token::Eof => "end of input".to_string(),
            _ if self.is_reserved_word() => format!("the keyword `{self}`"),
            _ => format!("`{self}`"),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.as_literal() {
            Some(literal) => write!(f, "{literal}"),
            None => write!(f, "EOF"),
        }
    }
}
