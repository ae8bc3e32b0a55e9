use glam::Vec4;
use serde::{Deserialize, Serialize};
use crate::ConfigError;

/// Resolution range exposed to users of the visualization.
pub const RESOLUTION_RANGE: (u32, u32) = (4, 512);
pub const VERTICAL_OFFSET_RANGE: (f32, f32) = (-2.0, 2.0);

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashVisConfig {
    pub resolution: u32,
    pub seed: i32,
    /// Max height displacement of an instance, in cell units before scaling.
    pub vertical_offset: f32,
}

impl Default for HashVisConfig {
    fn default() -> Self { Self { resolution: 32, seed: 0, vertical_offset: 1.0 } }
}

impl HashVisConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(|e| ConfigError::invalid("json", e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (lo, hi) = RESOLUTION_RANGE;
        if !(lo..=hi).contains(&self.resolution) {
            return Err(ConfigError::invalid(
                "resolution",
                format!("{} outside [{lo}, {hi}]", self.resolution),
            ));
        }
        let (lo, hi) = VERTICAL_OFFSET_RANGE;
        if !self.vertical_offset.is_finite() || !(lo..=hi).contains(&self.vertical_offset) {
            return Err(ConfigError::invalid(
                "vertical_offset",
                format!("{} outside [{lo}, {hi}]", self.vertical_offset),
            ));
        }
        Ok(())
    }

    #[inline] pub fn instance_count(&self) -> usize {
        (self.resolution as usize) * (self.resolution as usize)
    }

    /// Per-draw config vector bound next to the hash buffer:
    /// (resolution, 1/resolution, vertical_offset/resolution, 0).
    pub fn shader_config(&self) -> Vec4 {
        let r = self.resolution as f32;
        Vec4::new(r, 1.0 / r, self.vertical_offset / r, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test] fn defaults_are_valid() {
        let c = HashVisConfig::default();
        assert_eq!(c.resolution, 32);
        assert_eq!(c.seed, 0);
        assert!(c.validate().is_ok());
        assert_eq!(c.instance_count(), 1024);
    }

    #[test] fn missing_json_fields_use_defaults() {
        let c = HashVisConfig::from_json_str(r#"{ "seed": -7 }"#).unwrap();
        assert_eq!(c, HashVisConfig { seed: -7, ..HashVisConfig::default() });
    }

    #[test] fn bad_json_is_a_config_error() {
        let e = HashVisConfig::from_json_str(r#"{ "resolution": -3 }"#).unwrap_err();
        assert!(matches!(e, ConfigError::InvalidConfiguration { field: "json", .. }));
    }

    #[test] fn range_checks() {
        let ok = |r, off| HashVisConfig { resolution: r, seed: 0, vertical_offset: off }.validate().is_ok();
        assert!(ok(4, 0.0));
        assert!(ok(512, -2.0));
        assert!(ok(100, 2.0));
        assert!(!ok(3, 0.0));
        assert!(!ok(513, 0.0));
        assert!(!ok(32, 2.5));
        assert!(!ok(32, f32::NAN));
    }

    #[test] fn shader_config_vector() {
        let c = HashVisConfig { resolution: 32, seed: 1, vertical_offset: 1.0 };
        let v = c.shader_config();
        assert_eq!(v, Vec4::new(32.0, 1.0 / 32.0, 1.0 / 32.0, 0.0));
    }
}
