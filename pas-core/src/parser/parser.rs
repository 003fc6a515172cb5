use std::cmp::Ordering;

use crate::{
    codegen::prelude::{Codegen, Instruction, Opcode},
    environment::prelude::{AssignError, Environment, Value, ValueType},
    lexer::prelude::{Lexer, Spanned, Token},
    utils::prelude::SrcSpan
};
use super::error::{parse_error, ParseError, ParseErrorType, Warning};

/// Result of one successful compilation.
#[derive(Debug, Clone, PartialEq)]
pub struct Compiled {
    pub name: String,
    pub environment: Environment,
    pub instructions: Vec<Instruction>,
    pub warnings: Vec<Warning>,
}

impl Compiled {
    pub fn render(&self) -> Vec<String> {
        self.instructions.iter()
            .map(|instruction| instruction.to_string())
            .collect()
    }
}

/// Recursive descent parser that evaluates and emits code while it
/// recognizes the program. Every production either succeeds or aborts the
/// whole compilation.
pub struct Parser {
    pub current_token: Spanned,
    pub env: Environment,
    pub code: Codegen,

    previous_end: u32,
    warnings: Vec<Warning>,
    lexer: Lexer,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Result<Self, ParseError> {
        let current_token = lexer.next_token()?;

        Ok(Self {
            current_token,
            env: Environment::new(),
            code: Codegen::new(),

            previous_end: 0,
            warnings: vec![],
            lexer,
        })
    }

    pub fn step(&mut self) -> Result<(), ParseError> {
        let next = self.lexer.next_token()?;

        self.previous_end = self.current_token.2;
        self.current_token = next;

        Ok(())
    }

    /// program -> PROGRAM <ident> ; <declarations> <compound> .
    pub fn parse(mut self) -> Result<Compiled, ParseError> {
        self.expect_one(Token::Program)?;
        let (_, name, _) = self.expect_ident()?;
        self.expect_one(Token::Semicolon)?;

        self.declarations()?;
        self.compound_statement()?;
        self.expect_one(Token::Dot)?;

        if self.current_token.1 != Token::Eof {
            self.warnings.push(Warning::UnreachableCode {
                location: SrcSpan::from(self.current_token.0, self.lexer.end())
            });
        }

        if let Some(location) = self.lexer.unterminated_comment() {
            self.warnings.push(Warning::UnterminatedComment { location });
        }

        for (variable, location) in self.env.unassigned() {
            self.warnings.push(Warning::UnusedVariable {
                location,
                variable: variable.to_string(),
            });
        }

        self.warnings.sort_by_key(|warning| warning.location().start);

        Ok(Compiled {
            name,
            environment: self.env,
            instructions: self.code.into_instructions(),
            warnings: self.warnings,
        })
    }

    pub fn expect_one(&mut self, token: Token) -> Result<(u32, u32), ParseError> {
        if self.current_token.1 == token {
            let (start, end) = (self.current_token.0, self.current_token.2);
            self.step()?;

            Ok((start, end))
        } else {
            self.unexpected(vec![token.to_string()])
        }
    }

    pub fn expect_ident(&mut self) -> Result<(u32, String, u32), ParseError> {
        match &self.current_token {
            (start, Token::Ident(value), end) => {
                let ident = (*start, value.clone(), *end);
                self.step()?;

                Ok(ident)
            },
            _ => self.unexpected(vec!["identifier".to_string()])
        }
    }

    fn unexpected<T>(&self, expected: Vec<String>) -> Result<T, ParseError> {
        let (start, token, end) = self.current_token.clone();

        parse_error(
            ParseErrorType::UnexpectedToken { token, expected },
            SrcSpan { start, end }
        )
    }

    // declarations -> [ VAR <ident> {, <ident>} : <type> ; { <ident> {, <ident>} : <type> ; } ]
    fn declarations(&mut self) -> Result<(), ParseError> {
        if self.current_token.1 != Token::Var {
            return Ok(());
        }

        self.expect_one(Token::Var)?;

        loop {
            self.declaration_group()?;
            self.expect_one(Token::Semicolon)?;

            if !matches!(self.current_token.1, Token::Ident(_)) {
                return Ok(());
            }
        }
    }

    fn declaration_group(&mut self) -> Result<(), ParseError> {
        let (start, name, end) = self.expect_ident()?;
        let mut names = vec![(name, SrcSpan { start, end })];

        while self.current_token.1 == Token::Comma {
            self.step()?;

            let (start, name, end) = self.expect_ident()?;
            names.push((name, SrcSpan { start, end }));
        }

        self.expect_one(Token::Colon)?;
        let value_type = self.type_declaration()?;

        for (name, location) in names {
            if let Err(first) = self.env.declare(name.clone(), value_type, location) {
                return parse_error(
                    ParseErrorType::DuplicateDeclaration {
                        variable: name,
                        first: first.location,
                    },
                    location
                );
            }

            self.code.declare(&name, value_type);
        }

        Ok(())
    }

    // type -> INTEGER | REAL
    fn type_declaration(&mut self) -> Result<ValueType, ParseError> {
        match ValueType::try_from(&self.current_token.1) {
            Ok(value_type) => {
                self.step()?;
                Ok(value_type)
            },
            Err(_) => self.unexpected(vec![
                Token::Integer.to_string(),
                Token::Real.to_string(),
            ])
        }
    }

    // compound -> BEGIN <statement> {; <statement>} END
    fn compound_statement(&mut self) -> Result<(), ParseError> {
        self.expect_one(Token::Begin)?;
        self.statement_list()?;
        self.expect_one(Token::End)?;

        Ok(())
    }

    fn statement_list(&mut self) -> Result<(), ParseError> {
        self.statement()?;

        while self.current_token.1 == Token::Semicolon {
            self.step()?;
            self.statement()?;
        }

        Ok(())
    }

    // statement -> <compound> | <assignment> | <repeat> | <empty>
    fn statement(&mut self) -> Result<(), ParseError> {
        match self.current_token.1 {
            Token::Begin => self.compound_statement(),
            Token::Ident(_) => self.assignment(),
            Token::Repeat => self.repeat_statement(),
            _ => Ok(())
        }
    }

    // assignment -> <ident> := <expression>
    fn assignment(&mut self) -> Result<(), ParseError> {
        let (start, name, end) = self.expect_ident()?;
        self.expect_one(Token::Assign)?;

        let value_start = self.current_token.0;
        let value = self.expression()?;

        match self.env.assign(&name, value) {
            Ok(()) => {
                self.code.move_value(&name, value);
                Ok(())
            },
            Err(AssignError::Undeclared) => parse_error(
                ParseErrorType::UndeclaredVariable { variable: name },
                SrcSpan { start, end }
            ),
            Err(AssignError::TypeMismatch { expected, got }) => parse_error(
                ParseErrorType::TypeMismatch { variable: name, expected, got },
                SrcSpan::from(value_start, self.previous_end)
            ),
        }
    }

    /// The body is executed by re-scanning it from the `REPEAT` keyword until
    /// the condition holds. Each pass emits its instructions again. The loop
    /// address is the character offset of `REPEAT`.
    fn repeat_statement(&mut self) -> Result<(), ParseError> {
        let address = self.lexer.char_offset(self.current_token.0);
        self.code.mark_loop(address);

        loop {
            self.expect_one(Token::Repeat)?;
            self.statement_list()?;
            self.expect_one(Token::Until)?;

            if self.comparison(address)? {
                return Ok(());
            }

            self.lexer.seek(address);
            self.step()?;
        }
    }

    // comparison -> <expression> (>= | > | <= | < | = | <>) <expression>
    fn comparison(&mut self, address: u32) -> Result<bool, ParseError> {
        let left = self.expression()?;

        let operator = self.current_token.1.clone();
        let opcode = match Opcode::jump_for(&operator) {
            Some(opcode) => opcode,
            None => return self.unexpected(
                [Token::GreaterEqual, Token::Greater, Token::LessEqual, Token::Less, Token::Equal, Token::NotEqual]
                    .iter()
                    .map(|token| token.to_string())
                    .collect()
            )
        };

        self.code.jump(opcode, address);
        self.step()?;

        let right = self.expression()?;
        let ordering = left.compare(&right);

        Ok(match operator {
            Token::GreaterEqual => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
            Token::Greater => ordering == Some(Ordering::Greater),
            Token::LessEqual => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
            Token::Less => ordering == Some(Ordering::Less),
            Token::Equal => ordering == Some(Ordering::Equal),
            _ => ordering != Some(Ordering::Equal),
        })
    }

    // expression -> <term> {(+ | -) <term>}
    fn expression(&mut self) -> Result<Value, ParseError> {
        let mut result = self.term()?;

        while matches!(self.current_token.1, Token::Plus | Token::Minus) {
            result = self.binary_operation(result, Self::term)?;
        }

        Ok(result)
    }

    // term -> <factor> {(* | DIV | / | %) <factor>}
    fn term(&mut self) -> Result<Value, ParseError> {
        let mut result = self.factor()?;

        while matches!(self.current_token.1, Token::Mult | Token::Div | Token::FDiv | Token::Mod) {
            result = self.binary_operation(result, Self::factor)?;
        }

        Ok(result)
    }

    fn binary_operation(
        &mut self,
        left: Value,
        operand: fn(&mut Self) -> Result<Value, ParseError>,
    ) -> Result<Value, ParseError> {
        let (start, operator, end) = self.current_token.clone();
        let opcode = match Opcode::arithmetic_for(&operator) {
            Some(opcode) => opcode,
            None => return self.unexpected(vec!["operator".to_string()])
        };

        self.step()?;
        let right = operand(self)?;

        self.code.arithmetic(opcode, left, right);

        let result = match opcode {
            Opcode::Add => left.add(right),
            Opcode::Sub => left.sub(right),
            Opcode::Mul => left.mul(right),
            Opcode::Div => left.int_div(right),
            Opcode::Fdiv => left.real_div(right),
            _ => left.modulo(right),
        };

        result.or_else(|error| parse_error(error.into(), SrcSpan { start, end }))
    }

    // factor -> (+ | -) <expression> | <number> | ( <expression> ) | <ident>
    fn factor(&mut self) -> Result<Value, ParseError> {
        let (start, token, end) = self.current_token.clone();

        match token {
            // unary signs apply to a whole expression, not a single factor
            Token::Plus => {
                self.step()?;
                self.expression()
            },
            Token::Minus => {
                self.step()?;
                let value = self.expression()?;
                self.code.negate(value);

                value.neg().or_else(|error| parse_error(error.into(), SrcSpan { start, end }))
            },
            Token::IntConst(value) => {
                let value = Value::Integer { value };
                self.code.push_immediate(value);
                self.step()?;

                Ok(value)
            },
            Token::RealConst(value) => {
                let value = Value::Real { value };
                self.code.push_immediate(value);
                self.step()?;

                Ok(value)
            },
            Token::LParen => {
                self.step()?;
                let value = self.expression()?;
                self.expect_one(Token::RParen)?;

                Ok(value)
            },
            Token::Ident(name) => {
                self.code.push_variable(&name);
                self.step()?;

                match self.env.get(&name) {
                    Some(value) => Ok(*value),
                    None => parse_error(
                        ParseErrorType::UnassignedVariable { variable: name },
                        SrcSpan { start, end }
                    )
                }
            },
            _ => self.unexpected(vec![
                "identifier".to_string(),
                "number".to_string(),
                Token::LParen.to_string(),
                Token::Plus.to_string(),
                Token::Minus.to_string(),
            ])
        }
    }
}

pub fn parse_module(src: &str) -> Result<Compiled, ParseError> {
    let parser = Parser::new(Lexer::from_source(src))?;

    parser.parse()
}

pub fn parse_module_from_stream(stream: impl Iterator<Item = char>) -> Result<Compiled, ParseError> {
    let lexer = Lexer::new(stream
        .scan(0, |pos, c| {
            *pos += c.len_utf8() as u32;
            Some((*pos - c.len_utf8() as u32, c))
        })
    );

    Parser::new(lexer)?.parse()
}
