//! String validation functions

/// True when the value is empty or whitespace only
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Fails with `message` when the value is blank
pub fn validate_required(s: &str, message: &str) -> Result<(), String> {
    if is_blank(s) {
        Err(message.to_string())
    } else {
        Ok(())
    }
}

/// Validates minimum length in characters.
///
/// `label` names the field in the message, e.g. "Username must be at least 3 characters".
pub fn validate_min_length(s: &str, min: usize, label: &str) -> Result<(), String> {
    if s.chars().count() >= min {
        Ok(())
    } else {
        Err(format!("{} must be at least {} characters", label, min))
    }
}

/// Exact equality, no trimming
pub fn fields_match(value: &str, other: &str) -> bool {
    value == other
}

pub fn validate_matches(value: &str, other: &str, message: &str) -> Result<(), String> {
    if fields_match(value, other) {
        Ok(())
    } else {
        Err(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert!(validate_required("alice", "Username is required").is_ok());
        assert_eq!(
            validate_required("   ", "Username is required"),
            Err("Username is required".to_string())
        );
        assert!(validate_required("", "x").is_err());
    }

    #[test]
    fn test_min_length() {
        assert!(validate_min_length("abc", 3, "Username").is_ok());
        assert_eq!(
            validate_min_length("ab", 3, "Username"),
            Err("Username must be at least 3 characters".to_string())
        );
        // counted in characters, not bytes
        assert!(validate_min_length("äö", 3, "Username").is_err());
        assert!(validate_min_length("äöü", 3, "Username").is_ok());
    }

    #[test]
    fn test_matches() {
        assert!(fields_match("secret1", "secret1"));
        assert!(!fields_match("secret1", "secret1 "));
        assert!(validate_matches("a", "b", "Passwords do not match").is_err());
    }
}
