use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Invalid operand '{value}': {reason}")]
    InvalidOperand { value: String, reason: String },

    #[error("Missing operand at position {position}")]
    MissingOperand { position: usize },

    #[error("Overflow while computing {op}({a}, {b})")]
    Overflow { op: String, a: String, b: String },

    #[error("Unknown operation: {name}")]
    UnknownOperation { name: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Arithmetic,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CalcError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::InvalidOperand { .. }
            | CalcError::MissingOperand { .. }
            | CalcError::UnknownOperation { .. }
            | CalcError::ValidationError { .. } => ErrorCategory::Input,
            CalcError::Overflow { .. } => ErrorCategory::Arithmetic,
            CalcError::ConfigError { .. }
            | CalcError::InvalidConfigValueError { .. }
            | CalcError::TomlError(_) => ErrorCategory::Configuration,
            CalcError::IoError(_) | CalcError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Arithmetic => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalcError::InvalidOperand { .. } => {
                "Pass plain numbers such as 2, -1 or 3.5 (no units, no NaN or infinity)"
            }
            CalcError::MissingOperand { .. } => "Both operations take exactly two operands",
            CalcError::Overflow { .. } => {
                "Use smaller operands or write one of them as a float (e.g. 2.0)"
            }
            CalcError::UnknownOperation { .. } => "Supported operations are 'add' and 'multiply'",
            CalcError::IoError(_) => "Check that the file exists and is readable",
            CalcError::SerializationError(_) => "This is likely a bug, please report it",
            CalcError::TomlError(_) => "Check the suite file for TOML syntax errors",
            CalcError::ConfigError { .. }
            | CalcError::InvalidConfigValueError { .. } => "Review the suite file against the documented format",
            CalcError::ValidationError { .. } => "Check the input values and try again",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::InvalidOperand { value, .. } => format!("'{}' is not a number", value),
            CalcError::MissingOperand { position } => {
                format!("Operand #{} is missing", position)
            }
            CalcError::Overflow { op, .. } => format!("The result of {} is too large", op),
            CalcError::IoError(e) => format!("Could not read input: {}", e),
            other => other.to_string(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
