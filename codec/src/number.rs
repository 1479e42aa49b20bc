use crate::EncodeError;

const SIGN_MASK: u64 = 0x8000_0000_0000_0000;

/// Encodes a signed integer as 8 memcomparable bytes (sign bit flipped, big-endian).
pub fn encode_int(value: i64) -> [u8; 8] { ((value as u64) ^ SIGN_MASK).to_be_bytes() }

pub fn encode_uint(value: u64) -> [u8; 8] { value.to_be_bytes() }

/// Encodes a float so byte order follows numeric order. `-0.0` and `0.0` encode identically.
pub fn encode_float(value: f64) -> Result<[u8; 8], EncodeError> {
    if value.is_nan() {
        return Err(EncodeError::Unrepresentable("NaN".to_string()));
    }
    let bits = value.to_bits();
    let ordered = if value >= 0.0 { bits | SIGN_MASK } else { !bits };
    Ok(encode_uint(ordered))
}
