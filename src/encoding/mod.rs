pub mod hex;
pub mod utf8;
