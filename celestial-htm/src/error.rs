use thiserror::Error;

pub type HtmResult<T> = Result<T, HtmError>;

/// Precondition violations reported by the pixelization.
///
/// Every variant describes a caller mistake; none is transient and none
/// leaves state behind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HtmError {
    #[error("Invalid HTM index {index:#x}: {message}")]
    InvalidIndex { index: u64, message: String },

    #[error("Invalid HTM subdivision level {level}: must be in [0, {max}]")]
    InvalidLevel { level: u32, max: u32 },

    #[error("Invalid HTM pixel name '{name}': {message}")]
    InvalidName { name: String, message: String },

    #[error("Geometry error: {source}")]
    Geometry {
        #[from]
        source: celestial_sphgeom::SphgeomError,
    },
}

impl HtmError {
    pub fn invalid_index(index: u64, message: impl Into<String>) -> Self {
        Self::InvalidIndex {
            index,
            message: message.into(),
        }
    }

    pub fn invalid_level(level: u32) -> Self {
        Self::InvalidLevel {
            level,
            max: crate::MAX_LEVEL,
        }
    }

    pub fn invalid_name(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.into(),
            message: message.into(),
        }
    }
}
