mod error;
mod lfsr;

pub use self::error::{ParseError, Result};
pub use self::lfsr::{parse_binary_string, Bits, Lfsr};
