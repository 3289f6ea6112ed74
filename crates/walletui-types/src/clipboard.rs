use std::fmt;

/// Value handed to the clipboard. Converted to text only when copied.
#[derive(Debug, Clone, PartialEq)]
pub enum ClipboardPayload {
    Text(String),
    Integer(i64),
    Number(f64),
}

impl ClipboardPayload {
    pub fn into_text(self) -> String {
        match self {
            ClipboardPayload::Text(text) => text,
            other => other.to_string(),
        }
    }
}

impl fmt::Display for ClipboardPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardPayload::Text(text) => f.write_str(text),
            ClipboardPayload::Integer(value) => write!(f, "{}", value),
            ClipboardPayload::Number(value) => write_js_number(f, *value),
        }
    }
}

/// Render like JavaScript `Number#toString`: `-0` is `0`, very large and
/// very small magnitudes use exponent form (`1e+21`, `1e-7`).
fn write_js_number(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("NaN");
    }
    if value.is_infinite() {
        return f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if value == 0.0 {
        return f.write_str("0");
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return write!(f, "{}", value);
    }

    let exp = format!("{:e}", value);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => {
            write!(f, "{}e+{}", mantissa, power)
        }
        _ => f.write_str(&exp),
    }
}

impl From<&str> for ClipboardPayload {
    fn from(value: &str) -> Self {
        ClipboardPayload::Text(value.to_string())
    }
}

impl From<String> for ClipboardPayload {
    fn from(value: String) -> Self {
        ClipboardPayload::Text(value)
    }
}

impl From<&String> for ClipboardPayload {
    fn from(value: &String) -> Self {
        ClipboardPayload::Text(value.clone())
    }
}

impl From<i64> for ClipboardPayload {
    fn from(value: i64) -> Self {
        ClipboardPayload::Integer(value)
    }
}

impl From<i32> for ClipboardPayload {
    fn from(value: i32) -> Self {
        ClipboardPayload::Integer(i64::from(value))
    }
}

impl From<u32> for ClipboardPayload {
    fn from(value: u32) -> Self {
        ClipboardPayload::Integer(i64::from(value))
    }
}

impl From<f64> for ClipboardPayload {
    fn from(value: f64) -> Self {
        ClipboardPayload::Number(value)
    }
}
