use crate::utils::error::{CalcError, Result};
use regex::Regex;
use std::sync::LazyLock;

static BINARY_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[01]+$").expect("binary literal pattern is valid"));

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Returns true when `candidate` is non-empty and made only of `0` and `1`.
pub fn is_valid_binary(candidate: &str) -> bool {
    BINARY_LITERAL.is_match(candidate)
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CalcError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CalcError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CalcError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
