use std::{io::Write, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::usize_to_i64_checked,
};

/// Returns the length of a string in bytes or of an array in elements.
///
/// # Example
/// ```
/// use monkey::interpreter::{evaluator::function::builtin::len, value::core::Value};
///
/// let mut out: Vec<u8> = Vec::new();
/// assert_eq!(len(&[Value::from("four")], &mut out).unwrap(), Value::Integer(4));
/// assert_eq!(len(&[Value::from(vec![Value::Null])], &mut out).unwrap(), Value::Integer(1));
/// ```
pub fn len(args: &[Value], _: &mut dyn Write) -> EvalResult<Value> {
    let [value] = exactly::<1>(args)?;
    let length = match value {
        Value::String(text) => text.len(),
        Value::Array(elements) => elements.len(),
        other => {
            return Err(RuntimeError::UnsupportedArgument { builtin: "len",
                                                           kind:    other.kind(), });
        },
    };
    Ok(Value::Integer(usize_to_i64_checked(length)?))
}

/// Returns the first element of an array, or `null` when it is empty.
pub fn first(args: &[Value], _: &mut dyn Write) -> EvalResult<Value> {
    let [value] = exactly::<1>(args)?;
    let elements = expect_array("first", value)?;
    Ok(elements.first().cloned().unwrap_or(Value::Null))
}

/// Returns the last element of an array, or `null` when it is empty.
pub fn last(args: &[Value], _: &mut dyn Write) -> EvalResult<Value> {
    let [value] = exactly::<1>(args)?;
    let elements = expect_array("last", value)?;
    Ok(elements.last().cloned().unwrap_or(Value::Null))
}

/// Returns a new array holding every element but the first, or `null` when
/// the array is empty. The argument is left unchanged.
///
/// # Example
/// ```
/// use monkey::interpreter::{evaluator::function::builtin::rest, value::core::Value};
///
/// let array = Value::from(vec![Value::Integer(1), Value::Integer(2)]);
/// let mut out: Vec<u8> = Vec::new();
/// let tail = rest(&[array.clone()], &mut out).unwrap();
///
/// assert_eq!(tail.inspect(), "[2]");
/// assert_eq!(array.inspect(), "[1, 2]");
/// ```
pub fn rest(args: &[Value], _: &mut dyn Write) -> EvalResult<Value> {
    let [value] = exactly::<1>(args)?;
    let elements = expect_array("rest", value)?;
    match elements.split_first() {
        Some((_, tail)) => Ok(Value::from(tail.to_vec())),
        None => Ok(Value::Null),
    }
}

/// Returns a new array with the second argument appended. The original
/// array is left unchanged.
pub fn push(args: &[Value], _: &mut dyn Write) -> EvalResult<Value> {
    let [array, element] = exactly::<2>(args)?;
    let elements = expect_array("push", array)?;
    let mut pushed = Vec::with_capacity(elements.len() + 1);
    pushed.extend(elements.iter().cloned());
    pushed.push(element.clone());
    Ok(Value::from(pushed))
}

/// Views the arguments as exactly `N` values.
fn exactly<const N: usize>(args: &[Value]) -> EvalResult<&[Value; N]> {
    args.try_into()
        .map_err(|_| RuntimeError::WrongArgumentCount { got:  args.len(),
                                                        want: N, })
}

fn expect_array<'v>(builtin: &'static str, value: &'v Value) -> EvalResult<&'v Rc<Vec<Value>>> {
    match value {
        Value::Array(elements) => Ok(elements),
        other => Err(RuntimeError::ExpectedArray { builtin,
                                                   kind: other.kind() }),
    }
}
