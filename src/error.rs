use thiserror::Error;

/// Everything that can go wrong while building membership functions or
/// reducing degree curves.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum FuzzyError {
    /// Shape parameters that don't describe a valid function.
    #[error("invalid parameter: {reason}")]
    InvalidParameter { reason: String },
    /// Paired arrays of different lengths.
    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
    /// A curve or universe without a single sample.
    #[error("empty input")]
    EmptyInput,
}

impl FuzzyError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        let reason = reason.into();

        tracing::debug!(%reason, "rejected parameters");

        Self::InvalidParameter { reason }
    }
}

pub type Result<T> = std::result::Result<T, FuzzyError>;

/// Fails with `LengthMismatch` unless both sides are the same length.
pub(crate) fn check_lengths(left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(FuzzyError::LengthMismatch { left, right });
    }

    Ok(())
}

#[test]
fn test_messages() {
    assert_eq!(
        FuzzyError::LengthMismatch { left: 3, right: 4 }.to_string(),
        "length mismatch: 3 vs 4"
    );
    assert_eq!(FuzzyError::EmptyInput.to_string(), "empty input");
    assert_eq!(
        FuzzyError::invalid("sigma must be positive").to_string(),
        "invalid parameter: sigma must be positive"
    );
}
