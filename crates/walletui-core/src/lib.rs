//! walletui-core: pure display helpers for wallet interfaces.
//!
//! Everything here is synchronous and free of side effects:
//! - [`amount`]: minor/major unit conversion (approximate `f64` and exact decimal paths)
//! - [`hash`]: 32-bit string hash compatible with the browser implementation
//! - [`text`]: truncation, address/description shortening, hex payload and origin helpers
//! - [`date`]: token based date formatting
//!
//! # Example
//!
//! ```
//! use walletui_core::{amount, text};
//!
//! assert_eq!(amount::minor_to_major_exact(12_345), "0.00012345");
//! assert_eq!(text::shorten_address(Some("0123456789abcdef"), 4), "0123...cdef");
//! ```

pub mod amount;
pub mod date;
pub mod hash;
pub mod text;

pub use amount::{
    major_to_minor_approx, major_to_minor_exact, minor_to_major_approx, minor_to_major_exact,
};
pub use date::{DEFAULT_DATE_FORMAT, format_date, format_date_default};
pub use hash::hash_code;
pub use text::{
    ELLIPSIS, decode_hex_payload, extract_origin_label, is_valid_address, shorten_address,
    shorten_description, truncate_with_ellipsis,
};
