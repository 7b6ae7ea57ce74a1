/*
    Conversions between base 10 strings and fixed width big endian byte arrays.
    Scalars are 256 bit so arbitrary precision integers are used throughout.
*/

use num_bigint::BigUint;

use crate::{Error, Result};

/**
    Parses an unsigned decimal string into a big endian array of N bytes,
    left padded with zeroes. Values wider than N bytes are rejected rather
    than truncated.
*/
pub fn decode<const N: usize>(s: &str) -> Result<[u8; N]> {
    if s.is_empty() || !s.bytes().all(|c| c.is_ascii_digit()) {
        return Err(Error::format("decimal input must be a non-empty string of digits"));
    }

    let value = BigUint::parse_bytes(s.as_bytes(), 10)
        .ok_or_else(|| Error::format("unparseable decimal"))?;
    let bytes = value.to_bytes_be();
    if bytes.len() > N {
        return Err(Error::InvalidFormat(format!("decimal value exceeds {} bytes", N)));
    }

    let mut out = [0u8; N];
    out[N - bytes.len()..].copy_from_slice(&bytes);
    Ok(out)
}

/**
    Big endian bytes to their base 10 representation. Zero is "0".
*/
pub fn encode(bytes: &[u8]) -> String {
    BigUint::from_bytes_be(bytes).to_str_radix(10)
}
