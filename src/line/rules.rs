/// Validates a measurement name.
///
/// - lowercase English letters, digits or underscore
/// - must not be empty
///
/// Advisory only: the encoder emits whatever measurement name it is given.
/// Callers that want the recommended naming can check with this before
/// building a point.
pub fn validate_measurement(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }

    name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod test_rules {
    use super::validate_measurement;

    #[test]
    fn test_validate_measurement() {
        assert!(validate_measurement("electricity"));
        assert!(validate_measurement("mysql_open_connections"));
        assert!(validate_measurement("_m2"));

        assert!(!validate_measurement(""));
        assert!(!validate_measurement("Electricity"));
        assert!(!validate_measurement("open connections"));
        assert!(!validate_measurement("open,connections"));
    }
}
