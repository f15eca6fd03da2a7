//! Text to UTF-8 byte conversion.

use crate::{Error, Result};

/// UTF-8 bytes of `text`.
#[inline(always)]
pub fn encode(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// UTF-8 bytes of a UTF-16 code-unit sequence.
///
/// Unpaired surrogates are rejected rather than replaced with U+FFFD.
pub fn from_utf16(units: &[u16]) -> Result<Vec<u8>> {
    let mut output = Vec::with_capacity(units.len());
    let mut buf = [0u8; 4];
    for (pos, ch) in char::decode_utf16(units.iter().copied()).enumerate() {
        match ch {
            Ok(ch) => output.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes()),
            Err(err) => {
                return Err(Error::Encoding(format!(
                    "unpaired surrogate {:#06x} at char {}",
                    err.unpaired_surrogate(),
                    pos
                )))
            }
        }
    }
    Ok(output)
}
