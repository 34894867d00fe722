use crate::domain::model::{Number, Operation};
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::validate_operand_count;
use std::ops::{Add, Mul};

/// Sum of two numbers.
pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

/// Product of two numbers.
pub fn multiply<T: Mul<Output = T>>(a: T, b: T) -> T {
    a * b
}

fn overflow(op: Operation, a: Number, b: Number) -> CalcError {
    CalcError::Overflow {
        op: op.to_string(),
        a: a.to_string(),
        b: b.to_string(),
    }
}

fn finite(op: Operation, a: Number, b: Number, value: f64) -> Result<Number> {
    if value.is_finite() {
        Ok(Number::Float(value))
    } else {
        Err(overflow(op, a, b))
    }
}

/// Like [`add`], but integer overflow and non-finite float results are errors.
pub fn checked_add(a: Number, b: Number) -> Result<Number> {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => x
            .checked_add(y)
            .map(Number::Int)
            .ok_or_else(|| overflow(Operation::Add, a, b)),
        _ => finite(Operation::Add, a, b, add(a.as_f64(), b.as_f64())),
    }
}

/// Like [`multiply`], but integer overflow and non-finite float results are errors.
pub fn checked_multiply(a: Number, b: Number) -> Result<Number> {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => x
            .checked_mul(y)
            .map(Number::Int)
            .ok_or_else(|| overflow(Operation::Multiply, a, b)),
        _ => finite(Operation::Multiply, a, b, multiply(a.as_f64(), b.as_f64())),
    }
}

impl Operation {
    pub fn apply(&self, a: Number, b: Number) -> Result<Number> {
        match self {
            Operation::Add => checked_add(a, b),
            Operation::Multiply => checked_multiply(a, b),
        }
    }
}

pub fn evaluate(op: Operation, operands: &[Number]) -> Result<Number> {
    validate_operand_count(operands.len())?;
    let result = op.apply(operands[0], operands[1]);
    match &result {
        Ok(value) => tracing::debug!("{}({}, {}) = {}", op, operands[0], operands[1], value),
        Err(e) => tracing::debug!("{}({}, {}) failed: {}", op, operands[0], operands[1], e),
    }
    result
}

/// Parse textual operands and evaluate. Non-numeric text is rejected, never coerced.
pub fn evaluate_str(op: Operation, operands: &[&str]) -> Result<Number> {
    let parsed = operands
        .iter()
        .map(|s| s.parse::<Number>())
        .collect::<Result<Vec<_>>>()?;
    evaluate(op, &parsed)
}
