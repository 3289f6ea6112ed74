/// Deterministic 32-bit string hash.
///
/// Folds every UTF-16 code unit as `hash * 31 + unit` with two's-complement
/// wraparound after each step, so the result matches the value a browser
/// computes for the same string. Returns 0 for the empty string.
pub fn hash_code(s: &str) -> i32 {
    s.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_mul(31).wrapping_add(i32::from(unit))
    })
}
