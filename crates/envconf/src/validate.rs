//! String validators for use with [`Variable::with_validator`].
//!
//! Each helper expects a string value and fails with a message naming the
//! value and the expected pattern.
//!
//! [`Variable::with_validator`]: crate::Variable::with_validator

use crate::error::BoxError;
use crate::value::Value;
use crate::variables::Validator;
use regex::Regex;

fn string_value(value: &Value) -> Result<&str, BoxError> {
    value
        .as_str()
        .ok_or_else(|| format!("value '{value}' is not a string").into())
}

/// Require the value to match the regular expression `exp` anywhere.
///
/// An invalid expression is reported every time the validator runs.
pub fn regex_match(exp: &str) -> Validator {
    let exp = exp.to_string();
    let compiled = Regex::new(&exp);
    Box::new(move |value: &Value| -> Result<(), BoxError> {
        let v = string_value(value)?;
        let re = compiled.as_ref().map_err(Clone::clone)?;
        if !re.is_match(v) {
            return Err(format!("value '{v}' does not match regular expression '{exp}'").into());
        }
        Ok(())
    })
}

pub fn contains(s: &str) -> Validator {
    let s = s.to_string();
    Box::new(move |value: &Value| -> Result<(), BoxError> {
        let v = string_value(value)?;
        if !v.contains(s.as_str()) {
            return Err(format!("value '{v}' does not contain '{s}'").into());
        }
        Ok(())
    })
}

pub fn has_prefix(s: &str) -> Validator {
    let s = s.to_string();
    Box::new(move |value: &Value| -> Result<(), BoxError> {
        let v = string_value(value)?;
        if !v.starts_with(s.as_str()) {
            return Err(format!("value '{v}' does not start with '{s}'").into());
        }
        Ok(())
    })
}

pub fn has_suffix(s: &str) -> Validator {
    let s = s.to_string();
    Box::new(move |value: &Value| -> Result<(), BoxError> {
        let v = string_value(value)?;
        if !v.ends_with(s.as_str()) {
            return Err(format!("value '{v}' does not end with '{s}'").into());
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://api.example.com";

    fn check(validator: Validator, value: &str) -> Option<String> {
        validator(&Value::from(value)).err().map(|e| e.to_string())
    }

    #[test]
    fn test_regex_match() {
        assert_eq!(check(regex_match(r"^https?://.*$"), URL), None);
        assert_eq!(
            check(regex_match("^ftp"), URL).as_deref(),
            Some("value 'https://api.example.com' does not match regular expression '^ftp'")
        );
    }

    #[test]
    fn test_regex_match_is_unanchored() {
        assert_eq!(check(regex_match("example"), URL), None);
    }

    #[test]
    fn test_invalid_regex_fails_on_use() {
        let validator = regex_match("(unclosed");
        assert!(validator(&Value::from(URL)).is_err());
        assert!(validator(&Value::from("anything")).is_err());
    }

    #[test]
    fn test_contains() {
        assert_eq!(check(contains("example"), URL), None);
        assert_eq!(
            check(contains("google"), URL).as_deref(),
            Some("value 'https://api.example.com' does not contain 'google'")
        );
    }

    #[test]
    fn test_has_prefix() {
        assert_eq!(check(has_prefix("https"), URL), None);
        assert_eq!(
            check(has_prefix("ssh"), URL).as_deref(),
            Some("value 'https://api.example.com' does not start with 'ssh'")
        );
    }

    #[test]
    fn test_has_suffix() {
        assert_eq!(check(has_suffix("com"), URL), None);
        assert_eq!(
            check(has_suffix("org"), URL).as_deref(),
            Some("value 'https://api.example.com' does not end with 'org'")
        );
    }

    #[test]
    fn test_non_string_value() {
        let err = has_prefix("1")(&Value::from(10)).unwrap_err();
        assert_eq!(err.to_string(), "value '10' is not a string");
    }
}
