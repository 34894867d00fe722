use crate::config::suite_config::SuiteFileSource;
use crate::config::OutputFormat;
use crate::core::arith::evaluate_str;
use crate::core::suite::{InlineSource, SuiteEngine};
use crate::core::{Number, Operation, SuiteReport};
use crate::utils::error::Result;
use serde::Serialize;

/// Exit status of `verify` when the suite loaded but some cases failed.
/// Kept apart from the severity codes (1-3) so scripts can tell a failing
/// suite from a bad invocation.
pub const CASES_FAILED_EXIT_CODE: i32 = 4;

/// One evaluated `add`/`multiply` call, as printed by `--format json`.
#[derive(Debug, Clone, Serialize)]
pub struct Calculation {
    pub op: Operation,
    pub a: Number,
    pub b: Number,
    pub result: Number,
}

/// Parse the textual operands and apply `op`. Non-numeric or missing
/// operands are rejected.
pub fn calculate(op: Operation, operands: &[String]) -> Result<Calculation> {
    let refs: Vec<&str> = operands.iter().map(String::as_str).collect();
    let result = evaluate_str(op, &refs)?;
    // evaluate_str already checked there are exactly two operands
    Ok(Calculation {
        op,
        a: refs[0].parse()?,
        b: refs[1].parse()?,
        result,
    })
}

/// Text output is the bare result; JSON output is the whole [`Calculation`].
pub fn render_calculation(calc: &Calculation, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(calc.result.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(calc)?),
    }
}

/// Run the suite file at `suite_path`, or the builtin suite when `None`.
pub async fn verify(suite_path: Option<&str>) -> Result<SuiteReport> {
    match suite_path {
        Some(path) => SuiteEngine::new(SuiteFileSource::new(path)?).run().await,
        None => SuiteEngine::new(InlineSource::builtin()).run().await,
    }
}

/// One `PASS`/`FAIL` line per case followed by a summary line, or the
/// pretty-printed report for JSON.
pub fn render_report(report: &SuiteReport, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(report)?);
    }

    let mut lines = Vec::with_capacity(report.total() + 1);
    for outcome in &report.outcomes {
        let mark = if outcome.passed { "PASS" } else { "FAIL" };
        let detail = match &outcome.actual {
            Ok(actual) if outcome.passed => format!("= {}", actual),
            Ok(actual) => format!("= {} (expected {})", actual, outcome.case.expected),
            Err(e) => format!("error: {}", e),
        };
        lines.push(format!("{} {} {}", mark, outcome.case.label(), detail));
    }
    lines.push(format!(
        "{}: {} passed, {} failed",
        report.suite, report.passed, report.failed
    ));
    Ok(lines.join("\n"))
}
