use thiserror::Error;

/// Errors raised while turning caller-supplied text into theory values.
///
/// The analysis engine itself is total; only the parsers produce these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TheoryError {
    #[error("Invalid note name: \"{0}\"")]
    InvalidNoteName(String),

    #[error("Invalid chord symbol: \"{0}\"")]
    InvalidChordSymbol(String),

    #[error("Invalid chord quality `{0}`")]
    InvalidQuality(String),

    #[error("Invalid mode `{0}`")]
    InvalidMode(String),
}

pub type Result<T> = std::result::Result<T, TheoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TheoryError::InvalidNoteName("X".to_string());
        assert_eq!(err.to_string(), "Invalid note name: \"X\"");

        let err = TheoryError::InvalidQuality("sus4".to_string());
        assert_eq!(err.to_string(), "Invalid chord quality `sus4`");
    }
}
