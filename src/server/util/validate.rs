use std::ops::RangeInclusive;

use url::Url;

use crate::server::error::scope::ScopeError;

/// Trims `value` and rejects it when nothing is left.
///
/// # Returns
/// - `Ok(String)` - Trimmed value
/// - `Err(ScopeError::Validation)` - Value is empty or whitespace only
pub fn require_text(field: &str, value: &str) -> Result<String, ScopeError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ScopeError::Validation(format!("{} is required", field)));
    }

    Ok(trimmed.to_string())
}

/// Trims `value` and requires at least `min` characters.
pub fn require_min_chars(field: &str, value: &str, min: usize) -> Result<String, ScopeError> {
    let trimmed = require_text(field, value)?;
    if trimmed.chars().count() < min {
        return Err(ScopeError::Validation(format!(
            "{} must be at least {} characters long",
            field, min
        )));
    }

    Ok(trimmed)
}

/// Same as [`require_min_chars`] for optional fields; blank values become `None`.
pub fn optional_min_chars(
    field: &str,
    value: Option<String>,
    min: usize,
) -> Result<Option<String>, ScopeError> {
    match value {
        Some(value) if !value.trim().is_empty() => require_min_chars(field, &value, min).map(Some),
        _ => Ok(None),
    }
}

/// Rejects values made of more than one whitespace-separated word.
pub fn require_single_word(field: &str, value: &str) -> Result<String, ScopeError> {
    let trimmed = require_text(field, value)?;
    if trimmed.split_whitespace().nth(1).is_some() {
        return Err(ScopeError::Validation(format!(
            "{} must be a single word",
            field
        )));
    }

    Ok(trimmed)
}

/// Requires an absolute `http` or `https` URL.
///
/// # Returns
/// - `Ok(String)` - The trimmed URL
/// - `Err(ScopeError::Validation)` - Not a URL or not a web URL
pub fn require_url(field: &str, value: &str) -> Result<String, ScopeError> {
    let trimmed = require_text(field, value)?;

    match Url::parse(&trimmed) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(trimmed),
        _ => Err(ScopeError::Validation(format!(
            "{} must be a valid URL",
            field
        ))),
    }
}

/// Same as [`require_url`] for optional fields; blank values become `None`.
pub fn optional_url(field: &str, value: Option<String>) -> Result<Option<String>, ScopeError> {
    match value {
        Some(value) if !value.trim().is_empty() => require_url(field, &value).map(Some),
        _ => Ok(None),
    }
}

/// Blank optional text becomes `None`; anything else is trimmed.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn require_range(field: &str, value: i32, range: RangeInclusive<i32>) -> Result<i32, ScopeError> {
    if !range.contains(&value) {
        return Err(ScopeError::Validation(format!(
            "{} must be between {} and {}",
            field,
            range.start(),
            range.end()
        )));
    }

    Ok(value)
}

pub fn optional_range(
    field: &str,
    value: Option<i32>,
    range: RangeInclusive<i32>,
) -> Result<Option<i32>, ScopeError> {
    value.map(|v| require_range(field, v, range)).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_required_text() {
        assert_eq!(require_text("Name", "  Levski ").unwrap(), "Levski");
        assert!(require_text("Name", "   ").is_err());
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert!(require_min_chars("First name", "Юл", 2).is_ok());
        assert!(require_min_chars("First name", "Ю", 2).is_err());
    }

    #[test]
    fn blank_optional_text_skips_length_check() {
        assert_eq!(optional_min_chars("Text", Some(" ".to_string()), 2).unwrap(), None);
        assert!(optional_min_chars("Text", Some("a".to_string()), 2).is_err());
        assert_eq!(
            optional_min_chars("Text", Some(" Go ".to_string()), 2).unwrap(),
            Some("Go".to_string())
        );
    }

    #[test]
    fn single_word_rejects_inner_spaces() {
        assert_eq!(require_single_word("First name", " Ivan ").unwrap(), "Ivan");
        assert!(require_single_word("First name", "Ivan Petrov").is_err());
    }

    #[test]
    fn accepts_only_web_urls() {
        assert!(require_url("Link", "https://club.test/news").is_ok());
        assert!(require_url("Link", "ftp://club.test/file").is_err());
        assert!(require_url("Link", "club.test").is_err());
    }

    #[test]
    fn blank_optional_url_is_none() {
        assert_eq!(optional_url("Photo", Some("  ".to_string())).unwrap(), None);
        assert!(optional_url("Photo", Some("nope".to_string())).is_err());
    }

    #[test]
    fn checks_inclusive_range() {
        assert!(require_range("Number", 0, 0..=99).is_ok());
        assert!(require_range("Number", 99, 0..=99).is_ok());
        assert!(require_range("Number", 100, 0..=99).is_err());
    }
}
