use std::cmp::Ordering;
use std::fmt;

use super::expr::CompareOp;

/// Values shared by property reads and action arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A boolean value.
    Bool(bool),
    /// A 64-bit signed integer.
    Int(i64),
    /// A single-precision number, written with an `f` suffix (`0.5f`).
    Float(f32),
    /// A double-precision number, written with a decimal point (`0.5`).
    Double(f64),
    /// A UTF-8 string.
    String(String),
}

impl Value {
    /// Compare this value to another using the given operator.
    ///
    /// Returns `None` for incompatible types or unsupported operations
    /// (ordering on bools, `contains` on anything but two strings).
    #[must_use]
    pub fn compare(&self, op: CompareOp, other: &Value) -> Option<bool> {
        if op == CompareOp::Contains {
            return match (self, other) {
                (Value::String(haystack), Value::String(needle)) => {
                    Some(haystack.contains(needle.as_str()))
                }
                _ => None,
            };
        }

        if let (Value::Bool(a), Value::Bool(b)) = (self, other) {
            return match op {
                CompareOp::Eq => Some(a == b),
                CompareOp::Neq => Some(a != b),
                _ => None,
            };
        }

        let ord = self.partial_cmp_value(other)?;
        Some(match op {
            CompareOp::Eq => ord == Ordering::Equal,
            CompareOp::Neq => ord != Ordering::Equal,
            CompareOp::Gt => ord == Ordering::Greater,
            CompareOp::Gte => ord != Ordering::Less,
            CompareOp::Lt => ord == Ordering::Less,
            CompareOp::Lte => ord != Ordering::Greater,
            CompareOp::Contains => return None,
        })
    }

    /// Short type name used in diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Double(_) => "double",
            Value::String(_) => "string",
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(f64::from(*v)),
            Value::Double(v) => Some(*v),
            _ => None,
        }
    }

    /// A float against a double compares at float precision.
    #[allow(clippy::cast_possible_truncation)]
    fn partial_cmp_value(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a.partial_cmp(b),
            (Value::String(a), Value::String(b)) => a.partial_cmp(b),
            (Value::Float(a), Value::Double(b)) => a.partial_cmp(&(*b as f32)),
            (Value::Double(a), Value::Float(b)) => (*a as f32).partial_cmp(b),
            _ => self.as_f64()?.partial_cmp(&other.as_f64()?),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

/// Formats the value as a DSL literal that the lexer reads back unchanged.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) if v.is_finite() => write_decimal(f, &v.to_string(), "f"),
            Value::Double(v) if v.is_finite() => write_decimal(f, &v.to_string(), ""),
            Value::Float(v) => write!(f, "{v}f"),
            Value::Double(v) => write!(f, "{v}"),
            Value::String(v) => {
                f.write_str("\"")?;
                for c in v.chars() {
                    match c {
                        '"' => f.write_str("\\\"")?,
                        '\\' => f.write_str("\\\\")?,
                        '\n' => f.write_str("\\n")?,
                        '\t' => f.write_str("\\t")?,
                        c => write!(f, "{c}")?,
                    }
                }
                f.write_str("\"")
            }
        }
    }
}

/// Writes `digits` with a fraction so it lexes as a floating literal.
/// `Display` for floats never uses exponent notation, which the lexer lacks.
fn write_decimal(f: &mut fmt::Formatter<'_>, digits: &str, suffix: &str) -> fmt::Result {
    if digits.contains('.') {
        write!(f, "{digits}{suffix}")
    } else {
        write!(f, "{digits}.0{suffix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_conversions() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(42_i64), Value::Int(42));
        assert_eq!(Value::from(0.5_f32), Value::Float(0.5));
        assert_eq!(Value::from(0.5_f64), Value::Double(0.5));
        assert_eq!(Value::from("term"), Value::String("term".to_owned()));
        assert_eq!(
            Value::from("owned".to_owned()),
            Value::String("owned".to_owned())
        );
    }

    #[test]
    fn display_as_literal() {
        assert_eq!(Value::Int(-10).to_string(), "-10");
        assert_eq!(Value::Double(0.5).to_string(), "0.5");
        assert_eq!(Value::Double(1.0).to_string(), "1.0");
        assert_eq!(Value::Float(0.25).to_string(), "0.25f");
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::Double(0.00001).to_string(), "0.00001");
        assert_eq!(Value::Double(1e17).to_string(), "100000000000000000.0");
        assert_eq!(Value::Double(-2e20).to_string(), "-200000000000000000000.0");
        assert_eq!(Value::Float(1e-7).to_string(), "0.0000001f");
        assert_eq!(Value::Float(3e10).to_string(), "30000000000.0f");
        assert_eq!(
            Value::String("say \"hi\"\n".into()).to_string(),
            r#""say \"hi\"\n""#
        );
    }

    #[test]
    fn compare_int() {
        let a = Value::Int(10);
        let b = Value::Int(20);
        assert_eq!(a.compare(CompareOp::Eq, &b), Some(false));
        assert_eq!(a.compare(CompareOp::Neq, &b), Some(true));
        assert_eq!(a.compare(CompareOp::Lt, &b), Some(true));
        assert_eq!(a.compare(CompareOp::Lte, &b), Some(true));
        assert_eq!(a.compare(CompareOp::Gt, &b), Some(false));
        assert_eq!(a.compare(CompareOp::Gte, &b), Some(false));
        assert_eq!(a.compare(CompareOp::Gte, &a), Some(true));
        assert_eq!(a.compare(CompareOp::Lte, &a), Some(true));
    }

    #[test]
    fn compare_mixed_numerics() {
        let i = Value::Int(1);
        assert_eq!(i.compare(CompareOp::Eq, &Value::Double(1.0)), Some(true));
        assert_eq!(i.compare(CompareOp::Lt, &Value::Float(1.5)), Some(true));
        assert_eq!(
            Value::Float(0.5).compare(CompareOp::Eq, &Value::Double(0.5)),
            Some(true)
        );
        assert_eq!(
            Value::Double(2.5).compare(CompareOp::Gt, &Value::Int(2)),
            Some(true)
        );
    }

    #[test]
    fn float_against_double_uses_float_precision() {
        let float = Value::Float(0.1);
        let double = Value::Double(0.1);
        assert_eq!(float.compare(CompareOp::Eq, &double), Some(true));
        assert_eq!(double.compare(CompareOp::Eq, &float), Some(true));
        assert_eq!(double.compare(CompareOp::Lte, &float), Some(true));
        assert_eq!(
            Value::Float(0.1).compare(CompareOp::Lt, &Value::Double(0.2)),
            Some(true)
        );
    }

    #[test]
    fn compare_bool_only_equality() {
        let t = Value::Bool(true);
        let f = Value::Bool(false);
        assert_eq!(t.compare(CompareOp::Eq, &t), Some(true));
        assert_eq!(t.compare(CompareOp::Neq, &f), Some(true));
        assert_eq!(t.compare(CompareOp::Gt, &f), None);
        assert_eq!(t.compare(CompareOp::Contains, &f), None);
    }

    #[test]
    fn compare_string() {
        let a = Value::from("apple");
        let b = Value::from("banana");
        assert_eq!(a.compare(CompareOp::Lt, &b), Some(true));
        assert_eq!(a.compare(CompareOp::Eq, &a), Some(true));
    }

    #[test]
    fn contains_on_strings() {
        let app_id = Value::from("xterm");
        assert_eq!(
            app_id.compare(CompareOp::Contains, &Value::from("term")),
            Some(true)
        );
        assert_eq!(
            app_id.compare(CompareOp::Contains, &Value::from("kitty")),
            Some(false)
        );
        assert_eq!(app_id.compare(CompareOp::Contains, &Value::Int(1)), None);
        assert_eq!(
            Value::Int(12).compare(CompareOp::Contains, &Value::Int(1)),
            None
        );
    }

    #[test]
    fn compare_type_mismatch_returns_none() {
        let i = Value::Int(1);
        let s = Value::from("hello");
        assert_eq!(i.compare(CompareOp::Eq, &s), None);
        assert_eq!(i.compare(CompareOp::Eq, &Value::Bool(true)), None);
        assert_eq!(s.compare(CompareOp::Eq, &Value::Bool(true)), None);
    }

    #[test]
    fn type_names() {
        assert_eq!(Value::Float(1.0).type_name(), "float");
        assert_eq!(Value::from("x").type_name(), "string");
    }
}
