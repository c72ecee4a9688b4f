use thiserror::Error;

/// Configuration problems caught before the mapper is ever evaluated.
///
/// The mapper itself has no failure mode; these are raised by `validate`
/// and by constructors that take a whole scene configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HelixError {
    #[error("particle count must be positive")]
    ZeroParticleCount,

    #[error("particle count must be even to split into two strands, got {0}")]
    OddParticleCount(u32),

    #[error("{name} must be positive and finite, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("grid must contain at least one helix instance")]
    EmptyGrid,
}

pub type Result<T> = std::result::Result<T, HelixError>;

/// Reject zero, negative, NaN and infinite values for a named parameter.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(HelixError::NonPositive { name, value })
    }
}
