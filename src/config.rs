use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::zoom::ZoomConfig;

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV_VAR: &str = "PAGED_CANVAS_CONFIG";

/// Page surface layout, in points at scale 1.0
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Side length of the square page surface
    pub size: f32,
    /// Vertical space between consecutive pages
    pub gap: f32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            size: 500.0,
            gap: 20.0,
        }
    }
}

/// Editor-wide settings. Every field falls back to its default when absent
/// from the config file.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub zoom: ZoomConfig,
    pub page: PageConfig,
    /// New elements land at a random position in `[0, placement_range)`
    pub placement_range: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            zoom: ZoomConfig::default(),
            page: PageConfig::default(),
            placement_range: 200.0,
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Loads the file named by [`CONFIG_ENV_VAR`], falling back to defaults
    /// when the variable is unset or the file is unusable.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", Path::new(&path).display());
                config
            }
            Err(err) => {
                log::warn!("Ignoring config: {err}");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let zoom = &self.zoom;
        if zoom.min_scale <= 0.0 {
            return Err(ConfigError::Invalid("zoom.min_scale must be positive".into()));
        }
        if zoom.min_scale > zoom.max_scale {
            return Err(ConfigError::Invalid(
                "zoom.min_scale exceeds zoom.max_scale".into(),
            ));
        }
        if !(zoom.min_scale..=zoom.max_scale).contains(&zoom.button_min_scale) {
            return Err(ConfigError::Invalid(
                "zoom.button_min_scale must lie within [min_scale, max_scale]".into(),
            ));
        }
        if zoom.button_step <= 0.0 || zoom.wheel_zoom_in <= 1.0 || zoom.wheel_zoom_out >= 1.0 {
            return Err(ConfigError::Invalid("zoom steps must move the scale".into()));
        }
        if zoom.wheel_zoom_out <= 0.0 {
            return Err(ConfigError::Invalid("zoom.wheel_zoom_out must be positive".into()));
        }
        if self.page.size <= 0.0 || self.page.gap < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "bad page layout: size {}, gap {}",
                self.page.size, self.page.gap
            )));
        }
        if self.placement_range < 0.0 {
            return Err(ConfigError::Invalid("placement_range is negative".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(EditorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = EditorConfig::from_json(r#"{ "page": { "size": 320.0 } }"#).unwrap();
        assert_eq!(config.page.size, 320.0);
        assert_eq!(config.page.gap, 20.0);
        assert_eq!(config.zoom, ZoomConfig::default());
        assert_eq!(config.placement_range, 200.0);
    }

    #[test]
    fn test_inverted_zoom_bounds_rejected() {
        let err = EditorConfig::from_json(r#"{ "zoom": { "min_scale": 4.0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = EditorConfig::from_json("{ zoom: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = EditorConfig::load("/nonexistent/paged_canvas.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/paged_canvas.json"));
    }
}
