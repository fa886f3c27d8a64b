use num_bigint::BigUint;

/// Render a signal's bit text compactly.
///
/// Values of 16 bits and more convert to zero-padded lowercase hex, but
/// only when every character is `0` or `1`: a value carrying `x`/`z` bits
/// must never be reinterpreted as binary, so it passes through untouched.
/// Shorter values also pass through, since control signals read better in
/// their native binary form. The hex digit count covers the full bit
/// width, including a partial leading nibble.
pub fn format_bits(raw: &str) -> String {
    let bits = raw.trim();
    if bits.len() >= 16 && bits.bytes().all(|b| b == b'0' || b == b'1') {
        let value = BigUint::parse_bytes(bits.as_bytes(), 2).expect("pure binary text");
        let width = bits.len().div_ceil(4);
        format!("0x{value:0width$x}")
    } else {
        bits.to_string()
    }
}
