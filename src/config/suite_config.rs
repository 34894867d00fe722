use crate::core::{Case, CaseSource, Number, Suite};
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{self, Validate};
use async_trait::async_trait;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// On-disk suite file:
///
/// ```toml
/// [suite]
/// name = "arith"
///
/// [[cases]]
/// op = "add"
/// a = 2
/// b = 3
/// expected = 5
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
    pub suite: SuiteMeta,
    #[serde(default)]
    pub cases: Vec<Case>,
}

/// The `[suite]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteMeta {
    pub name: String,
    pub description: Option<String>,
}

impl SuiteConfig {
    /// Parse suite TOML after `${VAR}` substitution. Does not validate.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replace `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CalcError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn into_suite(self) -> Suite {
        Suite {
            name: self.suite.name,
            description: self.suite.description,
            cases: self.cases,
        }
    }
}

fn validate_number(field: &str, value: &Number) -> Result<()> {
    match value {
        Number::Int(_) => Ok(()),
        Number::Float(x) => validation::validate_finite(field, *x),
    }
}

impl Validate for SuiteConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("suite.name", &self.suite.name)?;

        if self.cases.is_empty() {
            return Err(CalcError::ValidationError {
                message: format!("suite '{}' has no cases", self.suite.name),
            });
        }

        for (i, case) in self.cases.iter().enumerate() {
            validate_number(&format!("cases[{}].a", i), &case.a)?;
            validate_number(&format!("cases[{}].b", i), &case.b)?;
            validate_number(&format!("cases[{}].expected", i), &case.expected)?;
        }

        Ok(())
    }
}

/// Reads a suite TOML file each time it is loaded.
#[derive(Debug, Clone)]
pub struct SuiteFileSource {
    path: PathBuf,
}

impl SuiteFileSource {
    /// Rejects empty paths up front; the file itself is read on `load_suite`.
    pub fn new<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let path = path.into();
        validation::validate_path("suite", &path.to_string_lossy())?;
        Ok(Self { path })
    }
}

#[async_trait]
impl CaseSource for SuiteFileSource {
    async fn load_suite(&self) -> Result<Suite> {
        tracing::debug!("Loading suite from {}", self.path.display());
        let content = tokio::fs::read_to_string(&self.path).await?;
        let config = SuiteConfig::from_toml_str(&content)?;
        config.validate()?;
        Ok(config.into_suite())
    }
}
