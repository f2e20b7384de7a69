use crate::utils::error::{AlgoError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn rejected(field_name: &str, value: impl ToString, reason: impl Into<String>) -> AlgoError {
    AlgoError::Validation {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    match value.trim() {
        "" => Err(rejected(field_name, value, "Value cannot be empty or whitespace-only")),
        _ => Ok(()),
    }
}

/// Inclusive on both ends.
pub fn validate_range<T>(field_name: &str, value: T, min: T, max: T) -> Result<()>
where
    T: PartialOrd + std::fmt::Display,
{
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(rejected(
            field_name,
            &value,
            format!("Value must be between {} and {}", min, max),
        ))
    }
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(rejected(
        field_name,
        value,
        format!("Unsupported value. Valid values: {}", allowed.join(", ")),
    ))
}

pub fn validate_unique_names<'a, I>(field_name: &str, names: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    match names.into_iter().find(|name| !seen.insert(*name)) {
        Some(duplicate) => Err(rejected(field_name, duplicate, "Duplicate name")),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("batch.name", "demo").is_ok());
        assert!(validate_non_empty_string("batch.name", "").is_err());
        assert!(validate_non_empty_string("batch.name", "   ").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("batch.max_permutation_len", 8, 1, 10).is_ok());
        assert!(validate_range("batch.max_permutation_len", 0, 1, 10).is_err());
        assert!(validate_range("batch.max_permutation_len", 11, 1, 10).is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("batch.output_format", "csv", &["text", "json", "csv"]).is_ok());
        assert!(validate_one_of("batch.output_format", "xml", &["text", "json", "csv"]).is_err());
    }

    #[test]
    fn test_validate_unique_names() {
        assert!(validate_unique_names("jobs.name", ["a", "b"]).is_ok());

        let err = validate_unique_names("jobs.name", ["a", "b", "a"]).unwrap_err();
        assert!(err.to_string().contains("Duplicate name"));
    }
}
