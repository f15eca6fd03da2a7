mod soft;

static LUT_DATA: [u8; 16] = *b"0123456789abcdef";

/// Encode input bytes into lowercase hex and write to output slice.
/// Returns the number of bytes written to output slice.
pub fn encode_slice(input: &[u8], output: &mut [u8]) -> crate::Result<usize> {
    soft::encode(input, output)
}

pub fn encode(input: &[u8]) -> String {
    let mut output = vec![0u8; input.len() * 2];
    let written = soft::encode(input, &mut output).unwrap_or(0);
    debug_assert_eq!(written, output.len());
    output.iter().map(|&c| c as char).collect()
}
