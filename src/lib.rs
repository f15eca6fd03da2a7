//! MD5 (DIGEST128) message digest and HMAC-MD5.
//!
//! The whole message is hashed in one call; there is no incremental API.
//! MD5 is broken for collision resistance and is provided for
//! interoperability only.
//!
//! ```
//! assert_eq!(digest128::digest_hex("abc").unwrap(), "900150983cd24fb0d6963f7d28e17f72");
//! ```

pub mod crypto;
pub mod encoding;
pub mod utils;

mod dispatch;
mod error;

pub use dispatch::{compute_hash, compute_hash_utf16, digest_hex, digest_raw, hmac_hex, hmac_raw, Output};
pub use error::{Error, Result};

/// Runs `$e` for `$i` in `$start..$start + $count`.
#[macro_export]
macro_rules! const_loop {
    ($i:ident, $start:expr, $count:expr, $e:expr) => {{
        let mut $i: usize = $start;
        while $i < $start + $count {
            $e;
            $i += 1;
        }
    }};
}

#[macro_export]
macro_rules! const_loop4 {
    ($i:ident, $e:expr) => {{
        crate::const_loop!($i, 0, 4, {$e});
    }};
    ($i:ident, $start:expr, $e:expr) => {{
        crate::const_loop!($i, $start, 4, {$e});
    }};
}
