use crate::utils::prelude::SrcSpan;

use super::prelude::{ArithmeticError, AssignError, Environment, Value, ValueType};

#[test]
fn test_declare_and_assign() {
    let mut env = Environment::new();

    assert!(env.declare("a".into(), ValueType::Integer, SrcSpan::from(0, 1)).is_ok());
    assert!(env.declare("x".into(), ValueType::Real, SrcSpan::from(3, 4)).is_ok());
    assert_eq!(None, env.get("a"));

    assert_eq!(Ok(()), env.assign("a", Value::Integer { value: 3 }));
    assert_eq!(Ok(()), env.assign("a", Value::Integer { value: 4 }));

    assert_eq!(Some(&Value::Integer { value: 4 }), env.get("a"));
    assert_eq!(vec![("a", ValueType::Integer), ("x", ValueType::Real)], env.symbols());
    assert_eq!(vec![("a", Value::Integer { value: 4 })], env.memory());
    assert_eq!(vec![("x", SrcSpan::from(3, 4))], env.unassigned());
}

#[test]
fn test_redeclaration_keeps_first() {
    let mut env = Environment::new();

    assert!(env.declare("a".into(), ValueType::Integer, SrcSpan::from(0, 1)).is_ok());

    let first = env.declare("a".into(), ValueType::Real, SrcSpan::from(5, 6))
        .expect_err("second declaration must fail");

    assert_eq!(SrcSpan::from(0, 1), first.location);
    assert_eq!(Some(ValueType::Integer), env.symbol("a").map(|symbol| symbol.value_type));
    assert_eq!(1, env.symbols().len());
}

#[test]
fn test_assign_checks_table() {
    let mut env = Environment::new();

    assert_eq!(Err(AssignError::Undeclared), env.assign("a", Value::Integer { value: 1 }));

    assert!(env.declare("a".into(), ValueType::Integer, SrcSpan::default()).is_ok());

    assert_eq!(
        Err(AssignError::TypeMismatch { expected: ValueType::Integer, got: ValueType::Real }),
        env.assign("a", Value::Real { value: 1.0 })
    );
    assert_eq!(None, env.get("a"));
}

#[test]
fn test_arithmetic() {
    let int = |value| Value::Integer { value };
    let real = |value| Value::Real { value };

    assert_eq!(Ok(int(5)), int(2).add(int(3)));
    assert_eq!(Ok(real(5.5)), int(2).add(real(3.5)));
    assert_eq!(Ok(int(-1)), int(2).sub(int(3)));
    assert_eq!(Ok(real(7.5)), real(2.5).mul(int(3)));

    assert_eq!(Ok(int(3)), int(7).int_div(int(2)));
    assert_eq!(Ok(int(-3)), int(-7).int_div(int(2)));
    assert_eq!(Ok(int(3)), real(7.5).int_div(int(2)));
    assert_eq!(Ok(real(3.5)), int(7).real_div(int(2)));

    assert_eq!(Ok(int(1)), int(-7).modulo(int(2)));
    assert_eq!(Ok(int(-1)), int(7).modulo(int(-2)));
    assert_eq!(Ok(int(1)), int(7).modulo(int(2)));
    assert_eq!(Ok(real(0.5)), real(-1.5).modulo(int(2)));

    assert_eq!(Ok(int(-4)), int(4).neg());
    assert_eq!(Ok(real(-0.5)), real(0.5).neg());
}

#[test]
fn test_arithmetic_errors() {
    let int = |value| Value::Integer { value };

    assert_eq!(Err(ArithmeticError::DivisionByZero), int(1).int_div(int(0)));
    assert_eq!(Err(ArithmeticError::DivisionByZero), int(1).real_div(Value::Real { value: 0.0 }));
    assert_eq!(Err(ArithmeticError::DivisionByZero), int(1).modulo(int(0)));

    assert_eq!(Err(ArithmeticError::IntegerOverflow), int(i64::MAX).add(int(1)));
    assert_eq!(Err(ArithmeticError::IntegerOverflow), int(i64::MIN).sub(int(1)));
    assert_eq!(Err(ArithmeticError::IntegerOverflow), int(i64::MIN).int_div(int(-1)));
    assert_eq!(Err(ArithmeticError::IntegerOverflow), int(i64::MIN).neg());
    assert_eq!(Err(ArithmeticError::IntegerOverflow), Value::Real { value: 1e300 }.int_div(int(1)));
}

#[test]
fn test_display() {
    assert_eq!("14", Value::Integer { value: 14 }.to_string());
    assert_eq!("-3", Value::Integer { value: -3 }.to_string());
    assert_eq!("5.0", Value::Real { value: 5.0 }.to_string());
    assert_eq!("3.5", Value::Real { value: 3.5 }.to_string());
    assert_eq!("INTEGER", ValueType::Integer.to_string());
    assert_eq!("REAL", ValueType::Real.to_string());
}

#[test]
fn test_compare() {
    use std::cmp::Ordering;

    assert_eq!(Some(Ordering::Less), Value::Integer { value: 1 }.compare(&Value::Integer { value: 2 }));
    assert_eq!(Some(Ordering::Equal), Value::Integer { value: 2 }.compare(&Value::Real { value: 2.0 }));
    assert_eq!(Some(Ordering::Greater), Value::Real { value: 2.5 }.compare(&Value::Integer { value: 2 }));
}
