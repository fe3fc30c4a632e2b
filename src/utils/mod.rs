pub mod base64url;

pub use base64url::{decode, decode_bytes, encode, encode_bytes, is_valid_format};
