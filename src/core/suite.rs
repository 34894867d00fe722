use crate::core::{Case, CaseOutcome, CaseSource, Operation, Suite, SuiteReport};
use crate::utils::error::Result;
use async_trait::async_trait;

pub const BUILTIN_SUITE_NAME: &str = "builtin";

/// The reference checks every build must satisfy.
pub fn builtin_cases() -> Vec<Case> {
    vec![
        Case::new(Operation::Add, 2, 3, 5),
        Case::new(Operation::Add, 0, 0, 0),
        Case::new(Operation::Add, -1, 1, 0),
        Case::new(Operation::Multiply, 2, 3, 6),
        Case::new(Operation::Multiply, 0, 5, 0),
        Case::new(Operation::Multiply, -1, 4, -4),
    ]
}

/// Cases held in memory.
#[derive(Debug, Clone)]
pub struct InlineSource {
    suite: Suite,
}

impl InlineSource {
    pub fn new(name: impl Into<String>, cases: Vec<Case>) -> Self {
        Self {
            suite: Suite {
                name: name.into(),
                description: None,
                cases,
            },
        }
    }

    /// The six reference cases under the name [`BUILTIN_SUITE_NAME`].
    pub fn builtin() -> Self {
        Self::new(BUILTIN_SUITE_NAME, builtin_cases())
    }
}

#[async_trait]
impl CaseSource for InlineSource {
    async fn load_suite(&self) -> Result<Suite> {
        Ok(self.suite.clone())
    }
}

/// Evaluate one case. A case passes only when the result equals `expected`
/// exactly; an evaluation error is a failure, not an `Err`.
pub fn run_case(case: &Case) -> CaseOutcome {
    match case.op.apply(case.a, case.b) {
        Ok(actual) => CaseOutcome {
            passed: actual == case.expected,
            case: case.clone(),
            actual: Ok(actual),
        },
        Err(e) => CaseOutcome {
            case: case.clone(),
            actual: Err(e.to_string()),
            passed: false,
        },
    }
}

/// Runs every case a [`CaseSource`] provides and collects a [`SuiteReport`].
pub struct SuiteEngine<S: CaseSource> {
    source: S,
}

impl<S: CaseSource> SuiteEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Evaluate every case. Only a failure to load the suite is an error;
    /// failing cases are recorded in the report.
    pub async fn run(&self) -> Result<SuiteReport> {
        let suite = self.source.load_suite().await?;
        tracing::info!("Running suite '{}' ({} cases)", suite.name, suite.cases.len());
        if let Some(description) = &suite.description {
            tracing::info!("📝 {}", description);
        }

        let outcomes: Vec<CaseOutcome> = suite
            .cases
            .iter()
            .map(|case| {
                let outcome = run_case(case);
                match (&outcome.actual, outcome.passed) {
                    (_, true) => tracing::debug!("✅ {}", case.label()),
                    (Ok(actual), false) => tracing::warn!(
                        "❌ {}: expected {}, got {}",
                        case.label(),
                        case.expected,
                        actual
                    ),
                    (Err(e), false) => tracing::warn!("❌ {}: {}", case.label(), e),
                }
                outcome
            })
            .collect();

        let report = SuiteReport::from_outcomes(suite.name, outcomes);
        tracing::info!(
            "Suite '{}' finished: {} passed, {} failed",
            report.suite,
            report.passed,
            report.failed
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Number;

    #[tokio::test]
    async fn test_builtin_suite_passes() {
        let engine = SuiteEngine::new(InlineSource::builtin());
        let report = engine.run().await.unwrap();
        assert_eq!(report.suite, BUILTIN_SUITE_NAME);
        assert_eq!(report.total(), 6);
        assert!(report.is_success());
    }

    #[tokio::test]
    async fn test_wrong_expectation_fails_case() {
        let cases = vec![
            Case::new(Operation::Add, 2, 2, 5),
            Case::new(Operation::Multiply, 3, 4, 12),
        ];
        let report = SuiteEngine::new(InlineSource::new("mixed", cases)).run().await.unwrap();
        assert_eq!(report.passed, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(report.outcomes[0].actual, Ok(Number::Int(4)));
    }

    #[test]
    fn test_overflow_is_a_failed_case() {
        let case = Case::new(Operation::Add, i64::MAX, 1, 0);
        let outcome = run_case(&case);
        assert!(!outcome.passed);
        assert!(outcome.actual.unwrap_err().contains("Overflow"));
    }

    #[tokio::test]
    async fn test_off_by_one_float_expectation_fails() {
        // 2^53 + 1 has no exact f64; the nearest float is 2^53
        let cases = vec![Case::new(Operation::Add, 9_007_199_254_740_993_i64, 0, 9_007_199_254_740_992.0)];
        let report = SuiteEngine::new(InlineSource::new("precision", cases)).run().await.unwrap();
        assert_eq!(report.outcomes[0].actual, Ok(Number::Int(9_007_199_254_740_993)));
        assert_eq!(report.passed, 0);
        assert_eq!(report.failed, 1);
    }

    #[test]
    fn test_float_expectation_matches_int_result() {
        let outcome = run_case(&Case::new(Operation::Multiply, 2, 3, 6.0));
        assert!(outcome.passed);
    }
}
