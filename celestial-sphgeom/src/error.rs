use thiserror::Error;

pub type SphgeomResult<T> = Result<T, SphgeomError>;

/// Failures constructing spherical geometry.
///
/// Geometry queries themselves never fail; only building a value from
/// caller-supplied numbers can.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SphgeomError {
    #[error("Invalid vector ({x}, {y}, {z}): {message}")]
    InvalidVector {
        x: f64,
        y: f64,
        z: f64,
        message: String,
    },

    #[error("Invalid polygon: {message}")]
    InvalidPolygon { message: String },
}

impl SphgeomError {
    pub fn invalid_vector(x: f64, y: f64, z: f64, message: impl Into<String>) -> Self {
        Self::InvalidVector {
            x,
            y,
            z,
            message: message.into(),
        }
    }

    pub fn invalid_polygon(message: impl Into<String>) -> Self {
        Self::InvalidPolygon {
            message: message.into(),
        }
    }
}
