use anyhow::Result;
use small_calc::app::commands;
use small_calc::domain::ports::CaseSource;
use small_calc::{CalcError, Number, OutputFormat, SuiteEngine, SuiteFileSource};
use tempfile::TempDir;

async fn write_suite(dir: &TempDir, name: &str, content: &str) -> Result<String> {
    let path = dir.path().join(name);
    tokio::fs::write(&path, content).await?;
    Ok(path.to_string_lossy().to_string())
}

#[tokio::test]
async fn test_suite_file_all_pass() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = write_suite(
        &temp_dir,
        "basic.toml",
        r#"
[suite]
name = "basic"

[[cases]]
op = "add"
a = 2
b = 3
expected = 5

[[cases]]
op = "add"
a = -1
b = 1
expected = 0

[[cases]]
op = "multiply"
a = 0
b = 5
expected = 0

[[cases]]
name = "half times four"
op = "multiply"
a = 0.5
b = 4
expected = 2
"#,
    )
    .await?;

    let report = SuiteEngine::new(SuiteFileSource::new(path)?).run().await?;
    assert_eq!(report.suite, "basic");
    assert_eq!(report.total(), 4);
    assert!(report.is_success());
    assert_eq!(report.outcomes[3].actual, Ok(Number::Float(2.0)));
    Ok(())
}

#[tokio::test]
async fn test_suite_file_reports_failures() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = write_suite(
        &temp_dir,
        "failing.toml",
        r#"
[suite]
name = "failing"

[[cases]]
op = "add"
a = 2
b = 2
expected = 5

[[cases]]
op = "multiply"
a = 9223372036854775807
b = 2
expected = 0
"#,
    )
    .await?;

    let report = commands::verify(Some(&path)).await?;
    assert_eq!(report.passed, 0);
    assert_eq!(report.failed, 2);

    let text = commands::render_report(&report, OutputFormat::Text)?;
    assert!(text.contains("FAIL add(2, 2) = 4 (expected 5)"));
    assert!(text.contains("FAIL multiply(9223372036854775807, 2) error:"));
    assert!(text.ends_with("failing: 0 passed, 2 failed"));

    let json: serde_json::Value =
        serde_json::from_str(&commands::render_report(&report, OutputFormat::Json)?)?;
    assert_eq!(json["suite"], "failing");
    assert_eq!(json["failed"], 2);
    assert_eq!(json["outcomes"][0]["actual"]["Ok"], 4);
    assert!(json["generated_at"].is_string());
    Ok(())
}

#[tokio::test]
async fn test_suite_file_validation_errors() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = write_suite(&temp_dir, "empty.toml", "[suite]\nname = \"empty\"\n").await?;

    let err = SuiteFileSource::new(path)?.load_suite().await.unwrap_err();
    assert!(matches!(err, CalcError::ValidationError { .. }));
    Ok(())
}

#[tokio::test]
async fn test_suite_file_with_malformed_toml() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = write_suite(&temp_dir, "broken.toml", "[suite\nname = ").await?;

    let err = commands::verify(Some(&path)).await.unwrap_err();
    assert!(matches!(err, CalcError::TomlError(_)));
    assert_eq!(err.exit_code(), 1);
    Ok(())
}

#[test]
fn test_empty_suite_path_rejected() {
    assert!(matches!(
        SuiteFileSource::new(""),
        Err(CalcError::InvalidConfigValueError { .. })
    ));
}
