use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("parse: unexpected '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("parse: seed is {len} bits wide, at most {max} supported")]
    TooWide { len: usize, max: u32 },
}

pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = ParseError::UnexpectedChar { ch: 'a', pos: 0 };
        assert_eq!(err.to_string(), "parse: unexpected 'a' at position 0");

        let err = ParseError::TooWide { len: 65, max: 64 };
        assert_eq!(
            err.to_string(),
            "parse: seed is 65 bits wide, at most 64 supported"
        );
    }
}
