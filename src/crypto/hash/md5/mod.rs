//! MD5 message digest (RFC 1321) over a complete message.

pub(crate) mod compress;
pub(crate) mod pad;
pub mod words;

use crate::{Error, Result};

pub(crate) const INITIAL_STATE: [u32; 4] = [
    0x67452301,
    0xEFCDAB89,
    0x98BADCFE,
    0x10325476,
];

/// `K64[i] = floor(abs(sin(i + 1)) * 2^32)`
pub(crate) const K64: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee,
    0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be,
    0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa,
    0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed,
    0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c,
    0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05,
    0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039,
    0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1,
    0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

/// Left-rotation amounts, four per round.
pub(crate) const SHIFTS: [[u32; 4]; 4] = [
    [7, 12, 17, 22],
    [5, 9, 14, 20],
    [4, 11, 16, 23],
    [6, 10, 15, 21],
];

pub struct Md5;

impl Md5 {
    pub const BLOCK_LEN: usize = 64;
    pub const DIGEST_LEN: usize = 16;
    pub const BLOCK_WORDS: usize = Self::BLOCK_LEN / 4;

    /// Largest accepted message, in bytes. The length field is filled from a
    /// single 32-bit word, so the bit length must stay below 2^32.
    pub const MAX_INPUT_LEN: usize = (1 << 29) - 1;

    /// Returns `Error::InputTooLarge` when `len` bytes cannot be digested.
    #[inline]
    pub fn check_len(len: usize) -> Result<()> {
        if len > Self::MAX_INPUT_LEN {
            return Err(Error::InputTooLarge {
                len,
                max: Self::MAX_INPUT_LEN,
            });
        }
        Ok(())
    }

    pub fn digest(data: &[u8]) -> Result<[u8; Self::DIGEST_LEN]> {
        Self::check_len(data.len())?;
        let bit_len = (data.len() as u32) << 3;

        let padded = pad::pad(words::from_le_bytes(data), bit_len);
        debug_assert_eq!(padded.len() % Self::BLOCK_WORDS, 0);

        let mut state = INITIAL_STATE;
        for chunk in padded.chunks_exact(Self::BLOCK_WORDS) {
            let block: &[u32; 16] = match chunk.try_into() {
                Ok(block) => block,
                Err(_) => unreachable!("chunks_exact yields full blocks"),
            };
            compress::compress(&mut state, block);
        }

        let bytes = words::to_le_bytes(&state, Self::DIGEST_LEN * 8);
        let mut output = [0u8; Self::DIGEST_LEN];
        output.copy_from_slice(&bytes);
        Ok(output)
    }

    #[inline(always)]
    pub fn oneshot<T: AsRef<[u8]>>(data: T) -> Result<[u8; Self::DIGEST_LEN]> {
        Self::digest(data.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(d: [u8; 16]) -> String {
        crate::encoding::hex::encode(&d)
    }

    #[test]
    fn test_md5() {
        assert_eq!(
            Md5::oneshot(b"").unwrap(),
            [
                0xd4, 0x1d, 0x8c, 0xd9, 0x8f, 0x00, 0xb2, 0x04,
                0xe9, 0x80, 0x09, 0x98, 0xec, 0xf8, 0x42, 0x7e
            ],
        );
        assert_eq!(
            Md5::oneshot(b"hello world").unwrap(),
            [
                0x5e, 0xb6, 0x3b, 0xbb, 0xe0, 0x1e, 0xee, 0xd0,
                0x93, 0xcb, 0x22, 0xbb, 0x8f, 0x5a, 0xcd, 0xc3,
            ],
        );
        assert_eq!(
            Md5::oneshot(b"1234567890123456789012345678901234567890").unwrap(),
            [
                0xf5, 0xbf, 0x3e, 0x98, 0x44, 0x32, 0xae, 0x6f,
                0x9f, 0x98, 0x84, 0x09, 0x51, 0xe5, 0xce, 0xf3,
            ],
        );
        let random_data = (0..1000).map(|_| rand::random::<u8>()).collect::<Vec<u8>>();
        for _ in 0..100 {
            let length = (rand::random::<u32>() % 1000) as usize;
            let data = &random_data[..length];
            assert_eq!(
                Md5::oneshot(data).unwrap(),
                md5::compute(data).0,
                "Failed for data length: {}",
                length
            );
        }
    }

    #[test]
    fn test_rfc1321_suite() {
        let cases: [(&str, &str); 7] = [
            ("", "d41d8cd98f00b204e9800998ecf8427e"),
            ("a", "0cc175b9c0f1b6a831c399e269772661"),
            ("abc", "900150983cd24fb0d6963f7d28e17f72"),
            ("message digest", "f96b697d7cb7938d525a2f31aaf161d0"),
            ("abcdefghijklmnopqrstuvwxyz", "c3fcd3d76192e4007dfb496cca67e13b"),
            (
                "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
                "d174ab98d277d9f5a5611c2c9f419d9f",
            ),
            (
                "12345678901234567890123456789012345678901234567890123456789012345678901234567890",
                "57edf4a22be3c955ac49da2e2107b67a",
            ),
        ];
        for (input, expected) in cases {
            assert_eq!(hex(Md5::digest(input.as_bytes()).unwrap()), expected, "input: {:?}", input);
        }
    }

    #[test]
    fn test_block_boundaries() {
        // 55/56 bytes decide whether the length fits in the last data block.
        for length in [55usize, 56, 57, 63, 64, 65, 119, 120, 128] {
            let data = vec![0x61u8; length];
            assert_eq!(Md5::digest(&data).unwrap(), md5::compute(&data).0, "length: {}", length);
        }
    }

    #[test]
    fn test_round_constants() {
        for (i, &k) in K64.iter().enumerate() {
            let expected = (((i + 1) as f64).sin().abs() * 4294967296.0) as u32;
            assert_eq!(k, expected, "K64[{}]", i);
        }
    }

    #[test]
    fn test_single_bit_flip() {
        let data = (0..200).map(|_| rand::random::<u8>()).collect::<Vec<u8>>();
        let base = Md5::digest(&data).unwrap();
        for _ in 0..64 {
            let mut flipped = data.clone();
            let bit = (rand::random::<u32>() as usize) % (data.len() * 8);
            flipped[bit / 8] ^= 1 << (bit % 8);
            assert_ne!(Md5::digest(&flipped).unwrap(), base, "bit: {}", bit);
        }
    }

    #[test]
    fn test_input_limit() {
        assert!(Md5::check_len(0).is_ok());
        assert!(Md5::check_len(Md5::MAX_INPUT_LEN).is_ok());
        assert_eq!(
            Md5::check_len(1 << 29),
            Err(Error::InputTooLarge { len: 1 << 29, max: Md5::MAX_INPUT_LEN }),
        );
    }
}
