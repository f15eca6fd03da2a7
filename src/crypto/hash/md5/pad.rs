/// Appends the `0x80` marker, zero fill and the bit length to a message
/// already packed into little-endian words.
///
/// `bit_len` is the message length in bits. Only the low word of the 64-bit
/// length field is written; callers keep `bit_len` below 2^32.
pub(crate) fn pad(mut words: Vec<u32>, bit_len: u32) -> Vec<u32> {
    let bit_len_wide = bit_len as u64;
    let len_idx = ((((bit_len_wide + 64) >> 9) << 4) + 14) as usize;
    let total = len_idx + 2;
    debug_assert_eq!(total % 16, 0);
    debug_assert!(words.len() <= (bit_len as usize + 31) / 32);

    words.resize(total, 0);
    words[(bit_len >> 5) as usize] |= 0x80u32 << (bit_len & 31);
    words[len_idx] = bit_len;
    words
}
