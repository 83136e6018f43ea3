//! Indian postal code (pincode) validation

use once_cell::sync::Lazy;
use regex::Regex;

// Six digits, first digit 1-9
static PINCODE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[1-9][0-9]{5}$").unwrap());

pub fn is_valid_pincode(pincode: &str) -> bool {
    PINCODE_REGEX.is_match(pincode)
}

/// Required, then format
pub fn validate_pincode(pincode: &str) -> Result<(), String> {
    let pincode = pincode.trim();
    if pincode.is_empty() {
        return Err("Pincode is required".to_string());
    }
    if !is_valid_pincode(pincode) {
        return Err("Invalid pincode format".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pincode_format() {
        assert!(is_valid_pincode("560001"));
        assert!(is_valid_pincode("110011"));

        assert!(!is_valid_pincode("012345"));
        assert!(!is_valid_pincode("12345"));
        assert!(!is_valid_pincode("1234567"));
        assert!(!is_valid_pincode("56000a"));
        assert!(!is_valid_pincode("５６０００１"));
    }

    #[test]
    fn test_validate_pincode() {
        assert!(validate_pincode(" 560001 ").is_ok());
        assert_eq!(validate_pincode(""), Err("Pincode is required".to_string()));
        assert_eq!(
            validate_pincode("012345"),
            Err("Invalid pincode format".to_string())
        );
    }
}
