/// Number of minor units in one major unit
pub const MINOR_UNITS_PER_MAJOR: i64 = 100_000_000;

/// Fractional digits carried by a major-unit amount
pub const MAJOR_DECIMALS: u32 = 8;

/// Major-unit input accepted by the exact conversion path.
///
/// Text is parsed as written. Numbers are read through their shortest
/// round-trip decimal rendering, so `0.1` is seen as `"0.1"` rather than
/// the binary value nearest to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MajorAmount<'a> {
    Text(&'a str),
    Number(f64),
}

impl MajorAmount<'_> {
    /// Human-readable form used in error messages
    pub fn describe(&self) -> String {
        match self {
            MajorAmount::Text(text) => (*text).to_string(),
            MajorAmount::Number(value) => value.to_string(),
        }
    }
}

impl<'a> From<&'a str> for MajorAmount<'a> {
    fn from(value: &'a str) -> Self {
        MajorAmount::Text(value)
    }
}

impl<'a> From<&'a String> for MajorAmount<'a> {
    fn from(value: &'a String) -> Self {
        MajorAmount::Text(value.as_str())
    }
}

impl From<f64> for MajorAmount<'_> {
    fn from(value: f64) -> Self {
        MajorAmount::Number(value)
    }
}
