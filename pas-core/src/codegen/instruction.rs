use std::fmt::Display;

use crate::{environment::prelude::{Value, ValueType}, lexer::prelude::Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    // one operand
    Pushi,
    Push,
    Neg,
    Jge,
    Jg,
    Jle,
    Jl,
    Je,
    Jne,

    // two operands
    Add,
    Sub,
    Mul,
    Div,
    Fdiv,
    Mod,
    Mov,
}

impl Opcode {
    /// Conditional jump marker for a comparison token.
    pub fn jump_for(token: &Token) -> Option<Opcode> {
        Some(match token {
            Token::GreaterEqual => Opcode::Jge,
            Token::Greater => Opcode::Jg,
            Token::LessEqual => Opcode::Jle,
            Token::Less => Opcode::Jl,
            Token::Equal => Opcode::Je,
            Token::NotEqual => Opcode::Jne,
            _ => return None,
        })
    }

    /// Arithmetic instruction for an additive or multiplicative operator.
    pub fn arithmetic_for(token: &Token) -> Option<Opcode> {
        Some(match token {
            Token::Plus => Opcode::Add,
            Token::Minus => Opcode::Sub,
            Token::Mult => Opcode::Mul,
            Token::Div => Opcode::Div,
            Token::FDiv => Opcode::Fdiv,
            Token::Mod => Opcode::Mod,
            _ => return None,
        })
    }

    pub fn mnemonic(&self) -> &'static str {
        match self {
            Opcode::Pushi => "PUSHI",
            Opcode::Push => "PUSH",
            Opcode::Neg => "NEG",
            Opcode::Jge => "JGE",
            Opcode::Jg => "JG",
            Opcode::Jle => "JLE",
            Opcode::Jl => "JL",
            Opcode::Je => "JE",
            Opcode::Jne => "JNE",
            Opcode::Add => "ADD",
            Opcode::Sub => "SUB",
            Opcode::Mul => "MUL",
            Opcode::Div => "DIV",
            Opcode::Fdiv => "FDIV",
            Opcode::Mod => "MOD",
            Opcode::Mov => "MOV",
        }
    }
}

impl Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Value(Value),
    Variable(String),
    Address(u32),
    /// Return address register used by loop markers.
    ReturnAddress,
}

impl Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Value(value) => write!(f, "{value}"),
            Operand::Variable(name) => write!(f, "{name}"),
            Operand::Address(address) => write!(f, "{address}"),
            Operand::ReturnAddress => write!(f, "$ra"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    Unary {
        opcode: Opcode,
        operand: Operand,
    },
    Binary {
        opcode: Opcode,
        left: Operand,
        right: Operand,
    },
    Declare {
        name: String,
        value_type: ValueType,
    },
    Pop,
}

impl Instruction {
    pub fn opcode(&self) -> Option<Opcode> {
        match self {
            Instruction::Unary { opcode, .. } | Instruction::Binary { opcode, .. } => Some(*opcode),
            Instruction::Declare { .. } | Instruction::Pop => None,
        }
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Instruction::Unary { opcode, operand } => write!(f, "< {opcode} {operand} >"),
            Instruction::Binary { opcode, left, right } => write!(f, "< {opcode} {left} {right} >"),
            Instruction::Declare { name, value_type } => write!(f, "{name}: .word {value_type}"),
            Instruction::Pop => write!(f, "<POP>"),
        }
    }
}
