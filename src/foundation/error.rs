/// Convenience result type used at the fallible edges of the crate.
pub type StarResult<T> = Result<T, StarError>;

/// Error taxonomy for configuration loading and raster output.
///
/// The widget core itself never fails: out-of-range inputs are clamped and
/// impossible requests (tap outside every star, draw before layout) are no-ops.
#[derive(thiserror::Error, Debug)]
pub enum StarError {
    /// Invalid caller-provided data that cannot be clamped into range.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed or unreadable configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Raster surface creation or readback failures.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StarError {
    /// Build a [`StarError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StarError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`StarError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
