//! Pure binary operations.
//!
//! Bitwise operations work character by character and keep the operand
//! width. Arithmetic operations go through `u128` and return the minimal
//! binary form of the result.

use crate::domain::model::{BinaryString, Operation};
use crate::utils::error::{CalcError, Result};

fn bitwise(a: &BinaryString, b: &BinaryString, op: impl Fn(bool, bool) -> bool) -> BinaryString {
    debug_assert_eq!(a.len(), b.len(), "bitwise operands must have equal length");
    BinaryString::from_bits(a.bits().zip(b.bits()).map(|(x, y)| op(x, y)))
}

pub fn bitwise_and(a: &BinaryString, b: &BinaryString) -> BinaryString {
    bitwise(a, b, |x, y| x && y)
}

pub fn bitwise_or(a: &BinaryString, b: &BinaryString) -> BinaryString {
    bitwise(a, b, |x, y| x || y)
}

pub fn bitwise_xor(a: &BinaryString, b: &BinaryString) -> BinaryString {
    bitwise(a, b, |x, y| x != y)
}

pub fn multiply(a: &BinaryString, b: &BinaryString) -> Result<BinaryString> {
    let product = a
        .to_u128()?
        .checked_mul(b.to_u128()?)
        .ok_or(CalcError::Overflow)?;
    Ok(BinaryString::from_u128(product))
}

pub fn divide(a: &BinaryString, b: &BinaryString) -> Result<BinaryString> {
    let divisor = b.to_u128()?;
    if divisor == 0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(BinaryString::from_u128(a.to_u128()? / divisor))
}

/// `((a + b) * c) / d` with truncating division.
pub fn compound_expression(
    a: &BinaryString,
    b: &BinaryString,
    c: &BinaryString,
    d: &BinaryString,
) -> Result<BinaryString> {
    let divisor = d.to_u128()?;
    if divisor == 0 {
        return Err(CalcError::DivisionByZeroInExpression);
    }

    let (a, b, c) = (a.to_u128()?, b.to_u128()?, c.to_u128()?);
    let numerator = a
        .checked_add(b)
        .and_then(|sum| sum.checked_mul(c))
        .ok_or(CalcError::Overflow)?;

    Ok(BinaryString::from_u128(numerator / divisor))
}

/// Runs `operation` over already-validated operands.
///
/// Callers check the operand count and, for bitwise verbs, equal widths.
pub fn evaluate(operation: Operation, operands: &[BinaryString]) -> Result<BinaryString> {
    match (operation, operands) {
        (Operation::And, [a, b]) => Ok(bitwise_and(a, b)),
        (Operation::Or, [a, b]) => Ok(bitwise_or(a, b)),
        (Operation::Xor, [a, b]) => Ok(bitwise_xor(a, b)),
        (Operation::Mul, [a, b]) => multiply(a, b),
        (Operation::Div, [a, b]) => divide(a, b),
        (Operation::Calc, [a, b, c, d]) => compound_expression(a, b, c, d),
        _ => Err(CalcError::Usage),
    }
}
