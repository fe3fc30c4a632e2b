/// Base64URL encoding/decoding per RFC 4648
/// No padding, URL-safe characters
use crate::error::{Error, Result};

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

const INVALID: u8 = 0xff;

const DECODE_TABLE: [u8; 256] = build_decode_table();

const fn build_decode_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Encode bytes to a Base64URL string
pub fn encode_bytes(input: &[u8]) -> String {
    let mut out = String::with_capacity((input.len() + 2) / 3 * 4);

    let mut chunks = input.chunks_exact(3);
    for chunk in &mut chunks {
        let group =
            ((chunk[0] as u32) << 16) | ((chunk[1] as u32) << 8) | (chunk[2] as u32);
        out.push(ALPHABET[(group >> 18) as usize & 0x3f] as char);
        out.push(ALPHABET[(group >> 12) as usize & 0x3f] as char);
        out.push(ALPHABET[(group >> 6) as usize & 0x3f] as char);
        out.push(ALPHABET[group as usize & 0x3f] as char);
    }

    match chunks.remainder() {
        &[b0] => {
            out.push(ALPHABET[(b0 >> 2) as usize] as char);
            out.push(ALPHABET[((b0 & 0x03) << 4) as usize] as char);
        }
        &[b0, b1] => {
            out.push(ALPHABET[(b0 >> 2) as usize] as char);
            out.push(ALPHABET[(((b0 & 0x03) << 4) | (b1 >> 4)) as usize] as char);
            out.push(ALPHABET[((b1 & 0x0f) << 2) as usize] as char);
        }
        _ => {}
    }

    out
}

/// Encode a string to Base64URL
pub fn encode(input: &str) -> String {
    encode_bytes(input.as_bytes())
}

/// Decode a Base64URL string to bytes
///
/// Absent padding is tolerated; characters outside the Base64URL alphabet
/// and impossible lengths are rejected.
pub fn decode_bytes(input: &str) -> Result<Vec<u8>> {
    let bytes = input.as_bytes();

    // A single trailing character encodes fewer than 8 bits
    if bytes.len() % 4 == 1 {
        return Err(Error::MalformedSegment(
            "truncated Base64URL data".to_string(),
        ));
    }

    let mut out = Vec::with_capacity(bytes.len() / 4 * 3 + 2);
    let mut buffer = 0u32;
    let mut bits = 0u32;

    for &b in bytes {
        let value = DECODE_TABLE[b as usize];
        if value == INVALID {
            return Err(Error::MalformedSegment(format!(
                "invalid Base64URL character: {:?}",
                b as char
            )));
        }

        buffer = (buffer << 6) | value as u32;
        bits += 6;

        if bits >= 8 {
            bits -= 8;
            out.push((buffer >> bits) as u8);
        }
    }

    Ok(out)
}

/// Decode a Base64URL string to a UTF-8 string
pub fn decode(input: &str) -> Result<String> {
    let bytes = decode_bytes(input)?;
    String::from_utf8(bytes).map_err(|e| Error::MalformedSegment(format!("invalid UTF-8: {e}")))
}

/// Check whether a segment is non-empty and composed solely of the
/// Base64URL alphabet
///
/// Pure predicate; performs no allocation and no decoding.
pub fn is_valid_format(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .bytes()
            .all(|b| DECODE_TABLE[b as usize] != INVALID)
}
