use core::fmt;

use crate::crypto::hash::md5::Md5;
use crate::crypto::hmac::HmacMd5;
use crate::encoding::{hex, utf8};
use crate::Result;

/// Result of [`compute_hash`]: lowercase hex text or the raw 16 bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Output {
    Hex(String),
    Raw([u8; Md5::DIGEST_LEN]),
}

impl Output {
    /// The digest bytes, decoding the hex form when needed.
    pub fn as_bytes(&self) -> Option<[u8; Md5::DIGEST_LEN]> {
        match self {
            Output::Raw(bytes) => Some(*bytes),
            Output::Hex(text) => {
                let text = text.as_bytes();
                if text.len() != Md5::DIGEST_LEN * 2 {
                    return None;
                }
                let mut bytes = [0u8; Md5::DIGEST_LEN];
                for (i, pair) in text.chunks_exact(2).enumerate() {
                    bytes[i] = (nibble(pair[0])? << 4) | nibble(pair[1])?;
                }
                Some(bytes)
            }
        }
    }

    pub fn into_hex(self) -> String {
        match self {
            Output::Hex(text) => text,
            Output::Raw(bytes) => hex::encode(&bytes),
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Hex(text) => f.write_str(text),
            Output::Raw(bytes) => f.write_str(&hex::encode(bytes)),
        }
    }
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        _ => None,
    }
}

pub fn digest_raw(text: &str) -> Result<[u8; Md5::DIGEST_LEN]> {
    Md5::digest(&utf8::encode(text))
}

pub fn digest_hex(text: &str) -> Result<String> {
    Ok(hex::encode(&digest_raw(text)?))
}

pub fn hmac_raw(key: &str, text: &str) -> Result<[u8; HmacMd5::TAG_LEN]> {
    HmacMd5::oneshot(&utf8::encode(key), &utf8::encode(text))
}

pub fn hmac_hex(key: &str, text: &str) -> Result<String> {
    Ok(hex::encode(&hmac_raw(key, text)?))
}

/// Digest of `text`, keyed with HMAC when `key` is given and non-empty.
///
/// An empty key counts as no key. `raw` selects the 16 raw bytes instead of
/// hex text.
pub fn compute_hash(text: &str, key: Option<&str>, raw: bool) -> Result<Output> {
    dispatch(&utf8::encode(text), key.map(utf8::encode), raw)
}

/// [`compute_hash`] over UTF-16 code units. Unpaired surrogates in either
/// argument fail with [`Error::Encoding`](crate::Error::Encoding).
pub fn compute_hash_utf16(text: &[u16], key: Option<&[u16]>, raw: bool) -> Result<Output> {
    let key = match key {
        Some(key) => Some(utf8::from_utf16(key)?),
        None => None,
    };
    dispatch(&utf8::from_utf16(text)?, key, raw)
}

fn dispatch(text: &[u8], key: Option<Vec<u8>>, raw: bool) -> Result<Output> {
    let digest = match key {
        Some(key) if !key.is_empty() => HmacMd5::oneshot(&key, text)?,
        _ => Md5::digest(text)?,
    };
    if raw {
        Ok(Output::Raw(digest))
    } else {
        Ok(Output::Hex(hex::encode(&digest)))
    }
}
