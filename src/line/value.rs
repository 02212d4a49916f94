/// String spellings that line protocol accepts as boolean field values.
const BOOLEAN_LITERALS: [&str; 10] = ["true", "True", "TRUE", "t", "T", "false", "False", "FALSE", "f", "F"];

/// A field value of a line protocol point.
///
/// String input is classified once, at construction, by
/// [`FieldValue::from_text`]: strings that already look like line protocol
/// boolean or integer literals become [`FieldValue::Raw`] and are emitted
/// verbatim; everything else becomes [`FieldValue::Text`] and is quoted.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// 64-bit signed integer, rendered in decimal.
    Integer(i64),
    /// 64-bit float, rendered in decimal.
    Float(f64),
    /// Boolean, rendered as `true`/`false`.
    Bool(bool),
    /// A pre-formatted literal (`123i`, `True`, ...), emitted verbatim.
    Raw(String),
    /// A genuine string value, emitted double-quoted.
    Text(String),
}

impl FieldValue {
    /// Classifies a string value.
    ///
    /// The value is trimmed of surrounding whitespace first. A trimmed value
    /// that equals one of the recognized boolean spellings (`true`, `True`,
    /// `TRUE`, `t`, `T` and the `false` counterparts) or that matches the
    /// integer literal shape (see [`is_integer_literal`]) is kept as a
    /// pre-formatted [`FieldValue::Raw`] literal; anything else is a
    /// [`FieldValue::Text`].
    pub fn from_text(value: impl AsRef<str>) -> Self {
        let trimmed = value.as_ref().trim();

        if BOOLEAN_LITERALS.contains(&trimmed) || is_integer_literal(trimmed) {
            FieldValue::Raw(trimmed.to_string())
        } else {
            FieldValue::Text(trimmed.to_string())
        }
    }

    pub(crate) fn render(&self) -> String {
        match self {
            FieldValue::Integer(n) => n.to_string(),
            FieldValue::Float(d) => d.to_string(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Raw(s) => s.clone(),
            // Only embedded double quotes are escaped
            FieldValue::Text(s) => format!("\"{}\"", s.replace('"', "\\\"")),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(value as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::from_text(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::from_text(value)
    }
}

/// A tag value of a line protocol point.
///
/// Tags are never quoted. Text values get space, comma and equals escaped;
/// numeric values are rendered in plain decimal.
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl TagValue {
    pub(crate) fn render(&self) -> String {
        match self {
            TagValue::Integer(n) => n.to_string(),
            TagValue::Float(d) => d.to_string(),
            // Double quotes inside tag values are legal and pass through
            TagValue::Text(s) => s.trim().replace(' ', "\\ ").replace(',', "\\,").replace('=', "\\="),
        }
    }
}

impl From<i64> for TagValue {
    fn from(value: i64) -> Self {
        TagValue::Integer(value)
    }
}

impl From<i32> for TagValue {
    fn from(value: i32) -> Self {
        TagValue::Integer(value as i64)
    }
}

impl From<f64> for TagValue {
    fn from(value: f64) -> Self {
        TagValue::Float(value)
    }
}

impl From<&str> for TagValue {
    fn from(value: &str) -> Self {
        TagValue::Text(value.to_string())
    }
}

impl From<String> for TagValue {
    fn from(value: String) -> Self {
        TagValue::Text(value)
    }
}

/// Returns `true` for strings shaped like `123i`, `+123i`, `-123i`.
///
/// The digit run between the optional sign and the trailing `i` must be
/// non-empty, so `0i` qualifies but a bare `i`, `-i` or `+i` does not. The
/// signed shape is checked first; when it fails, the unsigned check still
/// runs against the full string (and rejects it, since a sign is not a
/// digit).
pub fn is_integer_literal(s: &str) -> bool {
    if s.starts_with('-') || s.starts_with('+') {
        if let Some(digits) = s[1..].strip_suffix('i') {
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                return true;
            }
        }
    }

    if let Some(digits) = s.strip_suffix('i') {
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod test_value {
    use super::{is_integer_literal, FieldValue, TagValue};

    #[test]
    fn test_is_integer_literal() {
        assert!(is_integer_literal("123i"));
        assert!(is_integer_literal("+123i"));
        assert!(is_integer_literal("-123i"));
        assert!(is_integer_literal("0i"));
        assert!(is_integer_literal("-0i"));
        assert!(is_integer_literal("+0i"));

        assert!(!is_integer_literal("i"));
        assert!(!is_integer_literal("-i"));
        assert!(!is_integer_literal("+i"));
        assert!(!is_integer_literal("123"));
        assert!(!is_integer_literal("+=0i"));
        assert!(!is_integer_literal("12.3i"));
        assert!(!is_integer_literal(""));
    }

    #[test]
    fn test_from_text_classification() {
        assert_eq!(FieldValue::from_text("true"), FieldValue::Raw("true".to_string()));
        assert_eq!(FieldValue::from_text("FALSE"), FieldValue::Raw("FALSE".to_string()));
        assert_eq!(FieldValue::from_text("T"), FieldValue::Raw("T".to_string()));
        assert_eq!(FieldValue::from_text("123i"), FieldValue::Raw("123i".to_string()));
        assert_eq!(FieldValue::from_text(" -0i "), FieldValue::Raw("-0i".to_string()));
        assert_eq!(FieldValue::from_text("two"), FieldValue::Text("two".to_string()));
        assert_eq!(FieldValue::from_text("  trimmed  "), FieldValue::Text("trimmed".to_string()));
        // "truthy" spellings outside the recognized list stay strings
        assert_eq!(FieldValue::from_text("yes"), FieldValue::Text("yes".to_string()));
    }

    #[test]
    fn test_field_render() {
        assert_eq!(FieldValue::Integer(123).render(), "123");
        assert_eq!(FieldValue::Float(2.2).render(), "2.2");
        assert_eq!(FieldValue::Bool(true).render(), "true");
        assert_eq!(FieldValue::Raw("123i".to_string()).render(), "123i");
        assert_eq!(FieldValue::Text("two".to_string()).render(), "\"two\"");
        assert_eq!(FieldValue::Text("\"x\"".to_string()).render(), "\"\\\"x\\\"\"");
    }

    #[test]
    fn test_tag_render() {
        assert_eq!(TagValue::Integer(1).render(), "1");
        assert_eq!(TagValue::Float(2.2).render(), "2.2");
        assert_eq!(TagValue::Text("abc".to_string()).render(), "abc");
        assert_eq!(TagValue::Text("s p a c e".to_string()).render(), "s\\ p\\ a\\ c\\ e");
        assert_eq!(TagValue::Text("com,ma".to_string()).render(), "com\\,ma");
        assert_eq!(TagValue::Text("equ=al".to_string()).render(), "equ\\=al");
        // double quotes are legal in tag values and pass through unescaped
        assert_eq!(TagValue::Text("quo\"te".to_string()).render(), "quo\"te");
    }
}
