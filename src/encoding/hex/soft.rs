use super::LUT_DATA;
use crate::Error;

#[inline(always)]
pub(crate) fn encode_byte(input: u8, output: &mut [u8; 2]) {
    output[0] = LUT_DATA[(input >> 4) as usize];
    output[1] = LUT_DATA[(input & 0x0F) as usize];
}

pub fn encode(input: &[u8], output: &mut [u8]) -> crate::Result<usize> {
    let required_output_len = input.len() * 2;

    if output.len() < required_output_len {
        return Err(Error::BufferTooSmall {
            need: required_output_len,
            got: output.len(),
        });
    }

    for (byte, out) in input.iter().zip(output.chunks_exact_mut(2)) {
        let mut pair = [0u8; 2];
        encode_byte(*byte, &mut pair);
        out.copy_from_slice(&pair);
    }

    Ok(required_output_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        const TIMES: usize = 1000;
        for _ in 0..TIMES {
            let input_len = (rand::random::<u32>() % 1024) as usize;
            let mut input = vec![0u8; input_len];
            for byte in input.iter_mut() {
                *byte = rand::random::<u8>();
            }

            let expected = data_encoding::HEXLOWER.encode(&input);
            let mut output = vec![0u8; input_len * 2];
            let encoded_len = encode(&input, &mut output).unwrap();
            assert_eq!(expected.len(), encoded_len);
            assert_eq!(expected.as_bytes(), &output[..encoded_len]);
            assert_eq!(expected, super::super::encode(&input));
        }
    }

    #[test]
    fn test_encode_known() {
        assert_eq!(super::super::encode(&[]), "");
        assert_eq!(super::super::encode(&[0x00, 0x0f, 0xa0, 0xff]), "000fa0ff");
    }

    #[test]
    fn test_output_too_small() {
        let mut output = [0u8; 5];
        assert_eq!(
            encode(&[1, 2, 3], &mut output),
            Err(Error::BufferTooSmall { need: 6, got: 5 }),
        );
        // larger buffers are fine, the tail is untouched
        let mut output = [b'x'; 8];
        assert_eq!(encode(&[0xab, 0xcd], &mut output), Ok(4));
        assert_eq!(&output, b"abcdxxxx");
    }
}
