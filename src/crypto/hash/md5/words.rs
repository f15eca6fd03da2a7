//! Conversion between byte strings and little-endian 32-bit words.

/// Packs `bytes` into little-endian words. A trailing partial word is
/// zero-filled.
pub fn from_le_bytes(bytes: &[u8]) -> Vec<u32> {
    let mut words = Vec::with_capacity((bytes.len() + 3) / 4);
    let mut chunks = bytes.chunks_exact(4);
    for chunk in &mut chunks {
        words.push(u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
    }
    let rem = chunks.remainder();
    if !rem.is_empty() {
        let mut tail = [0u8; 4];
        tail[..rem.len()].copy_from_slice(rem);
        words.push(u32::from_le_bytes(tail));
    }
    words
}

/// Unpacks the first `bit_len / 8` bytes held in `words`.
///
/// Words missing past the end of `words` read as zero.
pub fn to_le_bytes(words: &[u32], bit_len: usize) -> Vec<u8> {
    let len = bit_len / 8;
    let mut bytes = Vec::with_capacity(len);
    for i in 0..len {
        let word = words.get(i >> 2).copied().unwrap_or(0);
        bytes.push((word >> ((i & 3) * 8)) as u8);
    }
    bytes
}
