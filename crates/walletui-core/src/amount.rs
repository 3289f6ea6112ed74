//! Conversion between integer minor units and 8-digit major units.
//!
//! Two tiers are provided. The `*_approx` functions go through `f64` and are
//! only fit for rough display. The `*_exact` functions work on decimal digits
//! directly and round-trip every `i64` without loss.

use regex::Regex;
use rust_decimal::Decimal;
use std::sync::LazyLock;
use walletui_types::{AmountError, MAJOR_DECIMALS, MINOR_UNITS_PER_MAJOR, MajorAmount};

/// Plain or scientific decimal literal: sign, integer digits, fraction digits, exponent
static DECIMAL_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]?)([0-9]*)(?:\.([0-9]*))?(?:[eE]([+-]?[0-9]+))?$").unwrap()
});

/// Exponents are clamped here; anything past it is zero or out of range anyway
const EXPONENT_LIMIT: i64 = 1 << 32;

/// Digits in `i64::MAX`
const MAX_MINOR_DIGITS: i64 = 19;

/// Divide by 10^8 in floating point. Display only.
pub fn minor_to_major_approx(amount: i64) -> f64 {
    amount as f64 / MINOR_UNITS_PER_MAJOR as f64
}

/// Multiply by 10^8 in floating point and truncate toward zero.
///
/// Truncation is intentional: `0.123456789` becomes `12345678`, never
/// `12345679`. Returns `None` for NaN or infinite input. Results beyond the
/// `i64` range saturate.
pub fn major_to_minor_approx(amount: f64) -> Option<i64> {
    if !amount.is_finite() {
        return None;
    }
    Some((amount * MINOR_UNITS_PER_MAJOR as f64).trunc() as i64)
}

/// Render minor units as a major-unit string with exactly 8 fractional digits
pub fn minor_to_major_exact(amount: i64) -> String {
    let major = Decimal::new(amount, MAJOR_DECIMALS);
    format!("{:.1$}", major, MAJOR_DECIMALS as usize)
}

/// Parse a major-unit amount and convert it to minor units without rounding error.
///
/// Accepts plain (`"1.5"`) and scientific (`"15e-1"`) notation with ASCII
/// digits. Digits finer than one minor unit are truncated toward zero, so
/// `"1e-40"` is `0`. Fails with [`AmountError::Parse`] for non-numeric input
/// and [`AmountError::Overflow`] when the result does not fit in an `i64`.
pub fn major_to_minor_exact<'a>(amount: impl Into<MajorAmount<'a>>) -> Result<i64, AmountError> {
    let amount = amount.into();
    match &amount {
        MajorAmount::Text(text) => parse_minor(text.trim(), &amount),
        // f64 Display never uses exponent notation and round-trips exactly
        MajorAmount::Number(value) if value.is_finite() => {
            parse_minor(&value.to_string(), &amount)
        }
        MajorAmount::Number(_) => Err(AmountError::Parse {
            input: amount.describe(),
        }),
    }
}

/// Shift the decimal point of `literal` right by the exponent plus 8 places
/// and keep the integer part.
fn parse_minor(literal: &str, amount: &MajorAmount<'_>) -> Result<i64, AmountError> {
    let parse_error = || AmountError::Parse {
        input: amount.describe(),
    };
    let overflow = || AmountError::Overflow {
        input: amount.describe(),
    };

    let caps = DECIMAL_LITERAL.captures(literal).ok_or_else(parse_error)?;
    let negative = &caps[1] == "-";
    let integer = caps.get(2).map_or("", |m| m.as_str());
    let fraction = caps.get(3).map_or("", |m| m.as_str());
    if integer.is_empty() && fraction.is_empty() {
        return Err(parse_error());
    }

    let exponent = caps.get(4).map_or(0, |exp| {
        let exp = exp.as_str();
        let saturated = if exp.starts_with('-') {
            -EXPONENT_LIMIT
        } else {
            EXPONENT_LIMIT
        };
        exp.parse::<i64>()
            .unwrap_or(saturated)
            .clamp(-EXPONENT_LIMIT, EXPONENT_LIMIT)
    });

    let digits = format!("{}{}", integer, fraction);
    let significant = digits.trim_start_matches('0');
    let leading_zeros = (digits.len() - significant.len()) as i64;

    // Number of significant digits that land left of the decimal point
    let whole = integer.len() as i64 - leading_zeros + exponent + i64::from(MAJOR_DECIMALS);
    if significant.is_empty() || whole <= 0 {
        return Ok(0);
    }
    if whole > MAX_MINOR_DIGITS {
        return Err(overflow());
    }

    let whole = whole as usize;
    let mut minor = String::with_capacity(whole + 1);
    if negative {
        minor.push('-');
    }
    minor.extend(significant.chars().take(whole));
    minor.extend(std::iter::repeat_n('0', whole.saturating_sub(significant.len())));

    minor.parse::<i64>().map_err(|_| overflow())
}
