//! Pixelization settings.

use crate::index::check_level;
use crate::HtmResult;

pub const DEFAULT_LEVEL: u32 = 20;
pub const DEFAULT_MAX_RANGES: usize = 64;

/// Subdivision level and interval budget of an
/// [`HtmPixelization`](crate::HtmPixelization).
///
/// Level 20 trixels are about 0.3 arcseconds across.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HtmConfig {
    /// Subdivision level, 0 to [`MAX_LEVEL`](crate::MAX_LEVEL).
    pub level: u32,

    /// Upper bound on the number of intervals returned by a region search.
    pub max_ranges: usize,
}

impl Default for HtmConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            max_ranges: DEFAULT_MAX_RANGES,
        }
    }
}

impl HtmConfig {
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn with_max_ranges(mut self, max_ranges: usize) -> Self {
        self.max_ranges = max_ranges;
        self
    }

    pub fn validate(&self) -> HtmResult<()> {
        check_level(self.level).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HtmError, MAX_LEVEL};

    #[test]
    fn test_default() {
        let config = HtmConfig::default();
        assert_eq!(config.level, 20);
        assert_eq!(config.max_ranges, 64);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = HtmConfig::default().with_level(7).with_max_ranges(3);
        assert_eq!(config, HtmConfig { level: 7, max_ranges: 3 });
    }

    #[test]
    fn test_validate_rejects_deep_level() {
        let config = HtmConfig::default().with_level(MAX_LEVEL + 1);
        assert_eq!(
            config.validate(),
            Err(HtmError::invalid_level(MAX_LEVEL + 1))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let config = HtmConfig::default().with_level(12);
        let json = serde_json::to_string(&config).unwrap();
        let back: HtmConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_missing_fields_use_defaults() {
        let config: HtmConfig = serde_json::from_str(r#"{"level": 9}"#).unwrap();
        assert_eq!(config.level, 9);
        assert_eq!(config.max_ranges, DEFAULT_MAX_RANGES);
    }
}
