use crate::utils::error::{CalcError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_operand_count(count: usize) -> Result<()> {
    match count {
        2 => Ok(()),
        0 | 1 => Err(CalcError::MissingOperand { position: count + 1 }),
        n => Err(CalcError::ValidationError {
            message: format!("Expected exactly 2 operands, got {}", n),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("suite", "cases.toml").is_ok());
        assert!(validate_path("suite", "").is_err());
        assert!(validate_path("suite", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("suite.name", "arith").is_ok());
        assert!(validate_non_empty_string("suite.name", "   ").is_err());
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("a", 1.5).is_ok());
        assert!(validate_finite("a", f64::NAN).is_err());
        assert!(validate_finite("a", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_operand_count() {
        assert!(validate_operand_count(2).is_ok());
        assert!(matches!(
            validate_operand_count(1),
            Err(CalcError::MissingOperand { position: 2 })
        ));
        assert!(matches!(
            validate_operand_count(0),
            Err(CalcError::MissingOperand { position: 1 })
        ));
        assert!(matches!(
            validate_operand_count(3),
            Err(CalcError::ValidationError { .. })
        ));
    }
}
