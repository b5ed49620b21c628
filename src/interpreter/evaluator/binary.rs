use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{Value, ValueKind},
    },
};

/// Evaluates a binary operation between two values.
///
/// Operand kinds are examined in this order:
/// 1. two integers: arithmetic and comparison,
/// 2. two strings: concatenation only,
/// 3. `==` and `!=` on anything else: identity, see
///    [`Value::is_identical`],
/// 4. differing kinds: a type mismatch,
/// 5. anything left is an unknown operator.
///
/// # Example
/// ```
/// use monkey::{
///     ast::InfixOperator,
///     interpreter::{evaluator::binary::eval_infix, value::core::Value},
/// };
///
/// let v = eval_infix(InfixOperator::Mul, &Value::Integer(3), &Value::Integer(4)).unwrap();
/// assert_eq!(v, Value::Integer(12));
///
/// let err =
///     eval_infix(InfixOperator::Add, &Value::Integer(5), &Value::Boolean(true)).unwrap_err();
/// assert_eq!(err.to_string(), "type mismatch: INTEGER + BOOLEAN");
/// ```
pub fn eval_infix(operator: InfixOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(operator, *l, *r),
        (Value::String(l), Value::String(r)) => eval_string_infix(operator, l, r),
        _ => match operator {
            InfixOperator::Equal => Ok(Value::Boolean(left.is_identical(right))),
            InfixOperator::NotEqual => Ok(Value::Boolean(!left.is_identical(right))),
            _ if left.kind() != right.kind() => {
                Err(RuntimeError::TypeMismatch { left: left.kind(),
                                                 operator,
                                                 right: right.kind() })
            },
            _ => Err(RuntimeError::UnknownInfixOperator { left: left.kind(),
                                                          operator,
                                                          right: right.kind() }),
        },
    }
}

/// Integer arithmetic wraps at the `i64` boundary; division truncates toward
/// zero.
fn eval_integer_infix(operator: InfixOperator, l: i64, r: i64) -> EvalResult<Value> {
    let value = match operator {
        InfixOperator::Add => Value::Integer(l.wrapping_add(r)),
        InfixOperator::Sub => Value::Integer(l.wrapping_sub(r)),
        InfixOperator::Mul => Value::Integer(l.wrapping_mul(r)),
        InfixOperator::Div => {
            if r == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Value::Integer(l.wrapping_div(r))
        },
        InfixOperator::Less => Value::Boolean(l < r),
        InfixOperator::Greater => Value::Boolean(l > r),
        InfixOperator::Equal => Value::Boolean(l == r),
        InfixOperator::NotEqual => Value::Boolean(l != r),
    };
    Ok(value)
}

fn eval_string_infix(operator: InfixOperator, l: &str, r: &str) -> EvalResult<Value> {
    match operator {
        InfixOperator::Add => Ok(Value::from(format!("{l}{r}"))),
        _ => Err(RuntimeError::UnknownInfixOperator { left: ValueKind::String,
                                                      operator,
                                                      right: ValueKind::String }),
    }
}
