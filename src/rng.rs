// Uniform random samples backed by getrandom (crypto.getRandomValues in the
// browser). Falls back to Math.random if the entropy source is unavailable.

/// Map 64 random bits onto [0, 1) using the top 53 bits.
fn unit_from_bits(bits: u64) -> f64 {
    (bits >> 11) as f64 / (1u64 << 53) as f64
}

pub fn unit() -> f64 {
    let mut buf = [0u8; 8];
    match getrandom::getrandom(&mut buf) {
        Ok(()) => unit_from_bits(u64::from_le_bytes(buf)),
        Err(_) => js_sys::Math::random(),
    }
}

/// Uniform index into a collection of `len` items (0 when empty).
pub fn index(len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    ((unit() * len as f64) as usize).min(len - 1)
}
