// HMAC: Keyed-Hashing for Message Authentication
// https://tools.ietf.org/html/rfc2104

use super::hash::md5::Md5;
use crate::Result;

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5C;

/// HMAC-MD5 with the padded key blocks computed once.
#[derive(Clone, Copy)]
pub struct HmacMd5 {
    ikey: [u8; Self::BLOCK_LEN],
    okey: [u8; Self::BLOCK_LEN],
}

impl HmacMd5 {
    pub const BLOCK_LEN: usize = Md5::BLOCK_LEN;
    pub const TAG_LEN: usize = Md5::DIGEST_LEN;

    pub fn new(key: &[u8]) -> Result<Self> {
        // H(K XOR opad, H(K XOR ipad, text))
        let mut ikey = [0u8; Self::BLOCK_LEN];
        let mut okey = [0u8; Self::BLOCK_LEN];

        if key.len() > Self::BLOCK_LEN {
            let hkey = Md5::digest(key)?;

            ikey[..Self::TAG_LEN].copy_from_slice(&hkey);
            okey[..Self::TAG_LEN].copy_from_slice(&hkey);
        } else {
            ikey[..key.len()].copy_from_slice(key);
            okey[..key.len()].copy_from_slice(key);
        }

        for idx in 0..Self::BLOCK_LEN {
            ikey[idx] ^= IPAD;
            okey[idx] ^= OPAD;
        }

        Ok(Self { ikey, okey })
    }

    pub fn sign(&self, m: &[u8]) -> Result<[u8; Self::TAG_LEN]> {
        let mut inner = Vec::with_capacity(Self::BLOCK_LEN + m.len());
        inner.extend_from_slice(&self.ikey);
        inner.extend_from_slice(m);
        let h1 = Md5::digest(&inner)?;

        let mut outer = [0u8; Self::BLOCK_LEN + Self::TAG_LEN];
        outer[..Self::BLOCK_LEN].copy_from_slice(&self.okey);
        outer[Self::BLOCK_LEN..].copy_from_slice(&h1);
        Md5::digest(&outer)
    }

    /// Recomputes the tag for `m` and compares it with `tag`.
    pub fn verify(&self, m: &[u8], tag: &[u8]) -> Result<bool> {
        let expected = self.sign(m)?;
        Ok(crate::utils::constant_time_eq(&expected, tag))
    }

    #[inline(always)]
    pub fn oneshot(key: &[u8], m: &[u8]) -> Result<[u8; Self::TAG_LEN]> {
        Self::new(key)?.sign(m)
    }
}
