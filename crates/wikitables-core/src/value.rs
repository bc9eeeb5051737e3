//! Typed field values and numeric type inference

use serde::{Deserialize, Serialize};

/// A field value with type detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Integer value
    Integer(i64),
    /// Floating-point value
    Float(f64),
    /// String value (empty for blank cells)
    String(String),
}

impl Value {
    /// Guess the type of a string value
    ///
    /// Thousands-separator commas are stripped before trying an integer and
    /// then a float parse. Anything else, including non-finite floats such
    /// as `nan` and integers outside the `i64` range, keeps the original
    /// string untouched.
    pub fn guess(s: &str) -> Self {
        let stripped = s.replace(',', "");

        if let Ok(i) = stripped.parse::<i64>() {
            return Value::Integer(i);
        }
        if is_integer_literal(&stripped) {
            return Value::String(s.to_string());
        }

        if let Ok(f) = stripped.parse::<f64>() {
            if f.is_finite() {
                return Value::Float(f);
            }
        }

        Value::String(s.to_string())
    }

    /// Check if the value is the empty string
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::String(s) if s.is_empty())
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::String(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

impl Default for Value {
    fn default() -> Self {
        Value::String(String::new())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::String(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_integer() {
        assert_eq!(Value::guess("42"), Value::Integer(42));
        assert_eq!(Value::guess("-123"), Value::Integer(-123));
        assert_eq!(Value::guess("1,234"), Value::Integer(1234));
        assert_eq!(Value::guess("12,176,866"), Value::Integer(12176866));
    }

    #[test]
    fn test_guess_integer_out_of_range() {
        assert_eq!(Value::guess("99999999999999999999"), Value::from("99999999999999999999"));
        assert_eq!(Value::guess("-9,223,372,036,854,775,809"), Value::from("-9,223,372,036,854,775,809"));
        assert_eq!(Value::guess("9,223,372,036,854,775,807"), Value::Integer(i64::MAX));
    }

    #[test]
    fn test_guess_float() {
        assert_eq!(Value::guess("12.5"), Value::Float(12.5));
        assert_eq!(Value::guess("-2.5"), Value::Float(-2.5));
        assert_eq!(Value::guess("1,234.5"), Value::Float(1234.5));
    }

    #[test]
    fn test_guess_string() {
        assert_eq!(Value::guess("abc"), Value::from("abc"));
        assert_eq!(Value::guess(""), Value::from(""));
        assert_eq!(Value::guess("nan"), Value::from("nan"));
        // commas stay when the value is not numeric
        assert_eq!(Value::guess("Paris, France"), Value::from("Paris, France"));
        assert_eq!(Value::guess("8 data and 8 address"), Value::from("8 data and 8 address"));
    }

    #[test]
    fn test_value_is_empty() {
        assert!(Value::default().is_empty());
        assert!(!Value::Integer(0).is_empty());
        assert!(!Value::from(" ").is_empty());
    }

    #[test]
    fn test_value_serializes_bare() {
        let json = serde_json::to_string(&vec![
            Value::Integer(1975),
            Value::Float(14.5),
            Value::from("CISC"),
        ])
        .unwrap();
        assert_eq!(json, r#"[1975,14.5,"CISC"]"#);
    }
}
