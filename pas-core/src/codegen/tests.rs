use crate::{
    environment::prelude::{Value, ValueType},
    lexer::prelude::Token
};

use super::prelude::{Codegen, Instruction, Opcode, Operand};

#[test]
fn test_rendering() {
    let mut code = Codegen::new();

    code.declare("a", ValueType::Integer);
    code.declare("y", ValueType::Real);
    code.push_immediate(Value::Integer { value: 3 });
    code.push_immediate(Value::Real { value: 1.5 });
    code.push_variable("a");
    code.negate(Value::Integer { value: 7 });
    code.arithmetic(Opcode::Fdiv, Value::Real { value: 5.5 }, Value::Integer { value: 3 });
    code.move_value("a", Value::Integer { value: 14 });
    code.mark_loop(42);
    code.jump(Opcode::Jge, 42);

    let rendered = code.instructions().iter()
        .map(|instruction| instruction.to_string())
        .collect::<Vec<String>>();

    assert_eq!(
        vec![
            "a: .word INTEGER",
            "y: .word REAL",
            "< PUSHI 3 >",
            "< PUSHI 1.5 >",
            "< PUSH a >",
            "< NEG 7 >",
            "< FDIV 5.5 3 >",
            "<POP>",
            "< MOV a 14 >",
            "< MOV $ra 42 >",
            "< JGE 42 >",
        ],
        rendered
    );
}

#[test]
fn test_append_only() {
    let mut code = Codegen::new();
    assert!(code.is_empty());

    code.push_immediate(Value::Integer { value: 1 });
    code.arithmetic(Opcode::Add, Value::Integer { value: 1 }, Value::Integer { value: 2 });

    assert_eq!(3, code.len());
    assert_eq!(Some(Opcode::Add), code.instructions()[1].opcode());
    assert_eq!(Instruction::Pop, code.instructions()[2]);
    assert_eq!(
        Instruction::Unary { opcode: Opcode::Pushi, operand: Operand::Value(Value::Integer { value: 1 }) },
        code.into_instructions()[0]
    );
}

#[test]
fn test_opcodes_for_tokens() {
    let jumps = [
        (Token::GreaterEqual, "JGE"),
        (Token::Greater, "JG"),
        (Token::LessEqual, "JLE"),
        (Token::Less, "JL"),
        (Token::Equal, "JE"),
        (Token::NotEqual, "JNE"),
    ];

    for (token, mnemonic) in jumps {
        assert_eq!(Some(mnemonic), Opcode::jump_for(&token).map(|opcode| opcode.mnemonic()));
        assert_eq!(None, Opcode::arithmetic_for(&token));
    }

    let arithmetic = [
        (Token::Plus, "ADD"),
        (Token::Minus, "SUB"),
        (Token::Mult, "MUL"),
        (Token::Div, "DIV"),
        (Token::FDiv, "FDIV"),
        (Token::Mod, "MOD"),
    ];

    for (token, mnemonic) in arithmetic {
        assert_eq!(Some(mnemonic), Opcode::arithmetic_for(&token).map(|opcode| opcode.mnemonic()));
    }
}
