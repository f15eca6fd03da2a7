/// Errors returned by digest, HMAC and encoding operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The message bit length does not fit the 32-bit length word.
    #[error("input too large: {len} bytes, limit is {max} bytes")]
    InputTooLarge { len: usize, max: usize },

    #[error("malformed text: {0}")]
    Encoding(String),

    #[error("buffer length not enough: need {need}, got {got}")]
    BufferTooSmall { need: usize, got: usize },
}

pub type Result<T> = core::result::Result<T, Error>;
