use thiserror::Error;

/// Convenient result alias for the dyno library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when vehicle attributes fail validation.
    #[error("invalid vehicle data: {message}")]
    VehicleDataValidation { message: String },

    /// Raised when a performance simulation is attempted with a weight that
    /// would divide by zero (or worse). Callers must supply a strictly
    /// positive curb weight.
    #[error("curb weight must be finite and positive, got {weight_kg}")]
    NonPositiveWeight { weight_kg: f64 },
}
