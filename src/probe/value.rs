use serde::{Deserialize, Serialize};

/// Result of a probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProbeValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl ProbeValue {
    /// Truthiness as a page script would see it: `null`, `false`, `0`,
    /// `NaN` and `""` are false.
    pub fn is_truthy(&self) -> bool {
        match self {
            ProbeValue::Null => false,
            ProbeValue::Bool(b) => *b,
            ProbeValue::Number(n) => *n != 0.0 && !n.is_nan(),
            ProbeValue::Text(s) => !s.is_empty(),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ProbeValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ProbeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ProbeValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for ProbeValue {
    fn from(b: bool) -> Self {
        ProbeValue::Bool(b)
    }
}

impl From<f64> for ProbeValue {
    fn from(n: f64) -> Self {
        ProbeValue::Number(n)
    }
}

impl From<u32> for ProbeValue {
    fn from(n: u32) -> Self {
        ProbeValue::Number(f64::from(n))
    }
}

impl From<i32> for ProbeValue {
    fn from(n: i32) -> Self {
        ProbeValue::Number(f64::from(n))
    }
}

impl From<String> for ProbeValue {
    fn from(s: String) -> Self {
        ProbeValue::Text(s)
    }
}

impl From<&str> for ProbeValue {
    fn from(s: &str) -> Self {
        ProbeValue::Text(s.to_string())
    }
}

impl<T: Into<ProbeValue>> From<Option<T>> for ProbeValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ProbeValue::Null, Into::into)
    }
}
