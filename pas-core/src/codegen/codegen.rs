use crate::environment::prelude::{Value, ValueType};

use super::instruction::{Instruction, Opcode, Operand};

/// Append-only instruction list. Emitted instructions are never rewritten.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Codegen {
    code: Vec<Instruction>,
}

impl Codegen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.code
    }

    pub fn into_instructions(self) -> Vec<Instruction> {
        self.code
    }

    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    pub fn declare(&mut self, name: &str, value_type: ValueType) {
        self.code.push(Instruction::Declare {
            name: name.to_string(),
            value_type,
        });
    }

    pub fn push_immediate(&mut self, value: Value) {
        self.unary(Opcode::Pushi, Operand::Value(value));
    }

    pub fn push_variable(&mut self, name: &str) {
        self.unary(Opcode::Push, Operand::Variable(name.to_string()));
    }

    pub fn negate(&mut self, value: Value) {
        self.unary(Opcode::Neg, Operand::Value(value));
    }

    pub fn jump(&mut self, opcode: Opcode, address: u32) {
        self.unary(opcode, Operand::Address(address));
    }

    /// Binary arithmetic on two concrete operands, followed by `<POP>`.
    pub fn arithmetic(&mut self, opcode: Opcode, left: Value, right: Value) {
        self.binary(opcode, Operand::Value(left), Operand::Value(right));
        self.code.push(Instruction::Pop);
    }

    pub fn move_value(&mut self, name: &str, value: Value) {
        self.binary(Opcode::Mov, Operand::Variable(name.to_string()), Operand::Value(value));
    }

    pub fn mark_loop(&mut self, address: u32) {
        self.binary(Opcode::Mov, Operand::ReturnAddress, Operand::Address(address));
    }

    fn unary(&mut self, opcode: Opcode, operand: Operand) {
        self.code.push(Instruction::Unary { opcode, operand });
    }

    fn binary(&mut self, opcode: Opcode, left: Operand, right: Operand) {
        self.code.push(Instruction::Binary { opcode, left, right });
    }
}
