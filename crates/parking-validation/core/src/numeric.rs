//! Numeric validation functions
//!
//! Form inputs arrive as strings; these helpers parse them the way the
//! application stores them (price as a decimal, spot counts as integers).

/// Parses a finite decimal number, ignoring surrounding whitespace
pub fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parses a whole number, ignoring surrounding whitespace
pub fn parse_whole(s: &str) -> Option<i64> {
    s.trim().parse::<i64>().ok()
}

/// Validates value is strictly greater than zero
pub fn validate_positive<T: PartialOrd + Default>(value: T, label: &str) -> Result<(), String> {
    if value > T::default() {
        Ok(())
    } else {
        Err(format!("{} must be greater than 0", label))
    }
}

/// Required, decimal, and greater than zero
pub fn validate_positive_number(s: &str, label: &str) -> Result<f64, String> {
    if s.trim().is_empty() {
        return Err(format!("{} is required", label));
    }
    let value = parse_number(s).ok_or_else(|| format!("{} must be a number", label))?;
    validate_positive(value, label)?;
    Ok(value)
}

/// Required, integral, and greater than zero
pub fn validate_positive_whole(s: &str, label: &str) -> Result<i64, String> {
    if s.trim().is_empty() {
        return Err(format!("{} is required", label));
    }
    let value = parse_whole(s).ok_or_else(|| format!("{} must be a whole number", label))?;
    validate_positive(value, label)?;
    Ok(value)
}
