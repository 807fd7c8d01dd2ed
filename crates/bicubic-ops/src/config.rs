//! Resampler configuration.
//!
//! [`ResizeConfig`] selects how out-of-range sums are narrowed to samples,
//! what happens when the source is too small to interpolate, and whether
//! the row-parallel path is used. It can be loaded from YAML:
//!
//! ```rust
//! use bicubic_ops::config::{OverflowPolicy, ResizeConfig};
//!
//! let cfg = ResizeConfig::from_yaml("overflow: wrap\nparallel: false\n").unwrap();
//! assert_eq!(cfg.overflow, OverflowPolicy::Wrap);
//! assert!(!cfg.parallel);
//! ```

use serde::{Deserialize, Serialize};

use crate::{OpsError, OpsResult};

/// How a weighted sum outside `[0, 255]` becomes an 8-bit sample.
///
/// Both policies truncate toward zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Saturate to `[0, 255]`.
    #[default]
    Clamp,
    /// Keep the low 8 bits of the truncated integer, reproducing the
    /// ringing artifacts of classic unchecked casts.
    Wrap,
}

impl OverflowPolicy {
    /// Narrows `sum` to a sample.
    #[inline]
    pub fn narrow(self, sum: f32) -> u8 {
        match self {
            OverflowPolicy::Clamp => sum.clamp(0.0, 255.0) as u8,
            OverflowPolicy::Wrap => sum as i32 as u8,
        }
    }
}

/// What to do with a source smaller than the 4x4 neighbourhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UndersizedPolicy {
    /// Return a correctly sized, all-zero image.
    #[default]
    ZeroFill,
    /// Fail with [`OpsError::UndersizedSource`].
    Reject,
}

/// Options for [`crate::resize::resize_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeConfig {
    /// Sample narrowing policy.
    pub overflow: OverflowPolicy,
    /// Undersized source policy.
    pub undersized: UndersizedPolicy,
    /// Distribute output rows across the rayon pool.
    ///
    /// Ignored when the `parallel` feature is disabled.
    pub parallel: bool,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            overflow: OverflowPolicy::Clamp,
            undersized: UndersizedPolicy::ZeroFill,
            parallel: true,
        }
    }
}

impl ResizeConfig {
    /// Settings that reproduce the reference output byte for byte.
    pub fn reference() -> Self {
        Self {
            overflow: OverflowPolicy::Wrap,
            ..Self::default()
        }
    }

    /// Sets the overflow policy.
    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    /// Sets the undersized source policy.
    pub fn with_undersized(mut self, undersized: UndersizedPolicy) -> Self {
        self.undersized = undersized;
        self
    }

    /// Enables or disables the row-parallel path.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Parses a YAML document. Missing keys take their default.
    pub fn from_yaml(yaml: &str) -> OpsResult<Self> {
        serde_yaml::from_str(yaml).map_err(|e| OpsError::InvalidConfig(e.to_string()))
    }

    /// Serializes to YAML.
    pub fn to_yaml(&self) -> OpsResult<String> {
        serde_yaml::to_string(self).map_err(|e| OpsError::InvalidConfig(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_narrowing() {
        let p = OverflowPolicy::Clamp;
        assert_eq!(p.narrow(270.9375), 255);
        assert_eq!(p.narrow(-15.9375), 0);
        assert_eq!(p.narrow(99.9), 99);
        assert_eq!(p.narrow(f32::NAN), 0);
    }

    #[test]
    fn test_wrap_narrowing() {
        let p = OverflowPolicy::Wrap;
        assert_eq!(p.narrow(270.9375), 14);
        assert_eq!(p.narrow(-15.9375), 241);
        assert_eq!(p.narrow(99.9), 99);
        assert_eq!(p.narrow(256.0), 0);
    }

    #[test]
    fn test_defaults() {
        let cfg = ResizeConfig::default();
        assert_eq!(cfg.overflow, OverflowPolicy::Clamp);
        assert_eq!(cfg.undersized, UndersizedPolicy::ZeroFill);
        assert!(cfg.parallel);
        assert_eq!(ResizeConfig::reference().overflow, OverflowPolicy::Wrap);
    }

    #[test]
    fn test_yaml_partial() {
        let cfg = ResizeConfig::from_yaml("undersized: reject").unwrap();
        assert_eq!(cfg.undersized, UndersizedPolicy::Reject);
        assert_eq!(cfg.overflow, OverflowPolicy::Clamp);
        assert!(cfg.parallel);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let cfg = ResizeConfig::default()
            .with_overflow(OverflowPolicy::Wrap)
            .with_undersized(UndersizedPolicy::Reject)
            .with_parallel(false);
        let yaml = cfg.to_yaml().unwrap();
        assert!(yaml.contains("overflow: wrap"));
        assert_eq!(ResizeConfig::from_yaml(&yaml).unwrap(), cfg);
    }

    #[test]
    fn test_yaml_invalid() {
        let err = ResizeConfig::from_yaml("overflow: saturate").unwrap_err();
        assert!(matches!(err, OpsError::InvalidConfig(_)));
    }
}
