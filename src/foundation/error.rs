/// Convenience result type used across pixmatrix.
pub type PixResult<T> = Result<T, PixError>;

/// Error taxonomy for view construction, bulk operations and asset adapters.
#[derive(thiserror::Error, Debug)]
pub enum PixError {
    /// A requested region is empty or does not fit inside its parent matrix.
    #[error("invalid region: {0}")]
    InvalidRegion(String),

    /// Source and destination shapes disagree for an operation that needs them equal.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Backing storage could not be reserved.
    #[error("allocation failure: {0}")]
    AllocationFailure(String),

    /// Invalid user-provided configuration (op lists, scale factors).
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed binary payload (mask blobs, pixel data of the wrong length).
    #[error("decode error: {0}")]
    Decode(String),

    /// Wrapped lower-level error from the image codec or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PixError {
    /// Build a [`PixError::InvalidRegion`] value.
    pub fn invalid_region(msg: impl Into<String>) -> Self {
        Self::InvalidRegion(msg.into())
    }

    /// Build a [`PixError::DimensionMismatch`] value.
    pub fn dimension_mismatch(msg: impl Into<String>) -> Self {
        Self::DimensionMismatch(msg.into())
    }

    /// Build a [`PixError::AllocationFailure`] value.
    pub fn allocation_failure(msg: impl Into<String>) -> Self {
        Self::AllocationFailure(msg.into())
    }

    /// Build a [`PixError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PixError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}

/// Fails with [`PixError::DimensionMismatch`] unless both shapes are equal.
pub(crate) fn ensure_same_dims(
    op: &str,
    src: (usize, usize),
    dst: (usize, usize),
) -> PixResult<()> {
    if src != dst {
        return Err(PixError::dimension_mismatch(format!(
            "{op}: source is {}x{}, destination is {}x{}",
            src.0, src.1, dst.0, dst.1
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
