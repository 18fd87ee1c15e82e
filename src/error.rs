use thiserror::Error;

/// Errors raised when building or running a Mogrifier cell.
///
/// Every variant is a caller precondition violation; none is transient.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MogrifierError {
    #[error("invalid dimension: {name} must be positive, got {value}")]
    InvalidDimension { name: &'static str, value: i64 },

    #[error("invalid mogrify step count: must be non-negative, got {0}")]
    InvalidStepCount(i64),

    #[error("shape mismatch for {tensor}: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        tensor: &'static str,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },
}

pub type Result<T> = std::result::Result<T, MogrifierError>;

/// Log a rejected call before handing the error back
pub(crate) fn rejected(err: MogrifierError) -> MogrifierError {
    tracing::warn!(%err, "rejected mogrifier call");
    err
}

impl MogrifierError {
    pub(crate) fn shape(tensor: &'static str, expected: &[usize], actual: &[usize]) -> Self {
        MogrifierError::ShapeMismatch {
            tensor,
            expected: expected.to_vec(),
            actual: actual.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MogrifierError::InvalidDimension {
            name: "hidden_size",
            value: 0,
        };
        assert!(err.to_string().contains("hidden_size must be positive"));

        let err = MogrifierError::InvalidStepCount(-3);
        assert!(err.to_string().contains("got -3"));

        let err = MogrifierError::shape("input", &[4, 8], &[4, 7]);
        assert_eq!(
            err.to_string(),
            "shape mismatch for input: expected [4, 8], got [4, 7]"
        );
    }
}
