use crate::utils::error::CalcError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

/// A number as it arrives from text: integers stay exact, anything with a
/// fraction or exponent becomes a float.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Widen to `f64`. Integers beyond 2^53 lose precision; use this for
    /// arithmetic, not for comparisons.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    /// True for values that came in (or stayed) as exact integers.
    pub fn is_int(&self) -> bool {
        matches!(self, Number::Int(_))
    }
}

/// Exact int/float comparison: the float must be integral and inside the
/// `i64` range before it is converted.
fn int_eq_float(i: i64, f: f64) -> bool {
    // 2^63 is exactly representable, i64::MAX is not
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    f.fract() == 0.0 && f >= -LIMIT && f < LIMIT && f as i64 == i
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => a == b,
            (Number::Int(i), Number::Float(f)) | (Number::Float(f), Number::Int(i)) => {
                int_eq_float(i, f)
            }
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(value.into())
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Float(x) => write!(f, "{}", x),
        }
    }
}

impl FromStr for Number {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = |reason: &str| CalcError::InvalidOperand {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        if trimmed.is_empty() {
            return Err(invalid("operand is empty"));
        }

        match trimmed.parse::<i64>() {
            Ok(i) => return Ok(Number::Int(i)),
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                return Err(invalid("integer is out of the 64-bit range"));
            }
            Err(_) => {}
        }

        match trimmed.parse::<f64>() {
            Ok(x) if x.is_finite() => Ok(Number::Float(x)),
            Ok(_) => Err(invalid("NaN and infinity are not accepted")),
            Err(_) => Err(invalid("not a numeric literal")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Operation {
    Add,
    Multiply,
}

impl Operation {
    /// Canonical lowercase name, as accepted on the command line and in suite files.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Multiply => "multiply",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "sum" | "+" => Ok(Operation::Add),
            "multiply" | "mul" | "product" | "*" => Ok(Operation::Multiply),
            _ => Err(CalcError::UnknownOperation {
                name: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Operation {
    type Error = CalcError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One literal check: `op(a, b)` must equal `expected`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub op: Operation,
    pub a: Number,
    pub b: Number,
    pub expected: Number,
}

impl Case {
    /// An unnamed case; integer and float literals both convert.
    pub fn new(op: Operation, a: impl Into<Number>, b: impl Into<Number>, expected: impl Into<Number>) -> Self {
        Self {
            name: None,
            op,
            a: a.into(),
            b: b.into(),
            expected: expected.into(),
        }
    }

    /// The case's own name, or `op(a, b)` when it has none.
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("{}({}, {})", self.op, self.a, self.b),
        }
    }
}

/// A named list of cases, whatever it was loaded from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suite {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub cases: Vec<Case>,
}

/// Result of evaluating one case. `actual` holds the error text when the
/// evaluation itself failed (e.g. overflow).
#[derive(Debug, Clone, Serialize)]
pub struct CaseOutcome {
    pub case: Case,
    pub actual: std::result::Result<Number, String>,
    pub passed: bool,
}

/// Summary of a suite run, serialized as-is for `--format json`.
#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    pub suite: String,
    pub outcomes: Vec<CaseOutcome>,
    pub passed: usize,
    pub failed: usize,
    pub generated_at: DateTime<Utc>,
}

impl SuiteReport {
    /// Count passes and failures and stamp the report with the current time.
    pub fn from_outcomes(suite: impl Into<String>, outcomes: Vec<CaseOutcome>) -> Self {
        let passed = outcomes.iter().filter(|o| o.passed).count();
        let failed = outcomes.len() - passed;
        Self {
            suite: suite.into(),
            outcomes,
            passed,
            failed,
            generated_at: Utc::now(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }
}
