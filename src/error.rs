use thiserror::Error;

/// Everything that can stop a round trip.
#[derive(Error, Debug)]
pub enum Error {
    /// Input text is not JSON, or does not fit the expected shape
    #[error("decode error: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// Sequence read past its end
    #[error("index {index} out of range for `bar` of length {len}")]
    Index { index: usize, len: usize },

    /// Untyped lookup found nothing (or no string) at a path
    #[error("no string value at path `{path}`")]
    Path { path: String },

    #[error("write error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_error_message() {
        let err = Error::Index { index: 1, len: 0 };
        assert_eq!(
            err.to_string(),
            "index 1 out of range for `bar` of length 0"
        );
    }

    #[test]
    fn test_decode_error_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::Decode(source);
        assert!(err.to_string().starts_with("decode error: "));
        assert!(std::error::Error::source(&err).is_some());
    }
}
