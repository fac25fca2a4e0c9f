//! Game configuration: canvas size, frame rate, scale.
//!
//! Every field has a default, so a JSON config only needs the keys it
//! changes:
//!
//! ```json
//! { "fps": 45, "scale": 1 }
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Canvas width in device pixels.
    pub width: u32,
    /// Canvas height in device pixels.
    pub height: u32,
    /// Target ticks per second. Around 60 is the practical ceiling.
    pub fps: f64,
    /// One-shot scale applied to the surface at startup. Mouse positions are
    /// divided by it before reaching the game.
    pub scale: f64,
    /// Smooth scaled images; `false` keeps pixel art crisp.
    pub interpolation: bool,
    /// Color the whole canvas is cleared with before each draw.
    pub background: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 1365,
            height: 805,
            fps: 30.0,
            scale: 2.0,
            interpolation: false,
            background: "black".to_string(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| format!("invalid config: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "canvas size must be non-zero, got {}x{}",
                self.width, self.height
            ));
        }
        if !(self.fps.is_finite() && self.fps > 0.0) {
            return Err(format!("fps must be positive, got {}", self.fps));
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(format!("scale must be positive, got {}", self.scale));
        }
        Ok(())
    }

    /// Drawing-space size once the scale is applied.
    pub fn logical_size(&self) -> (f64, f64) {
        (self.width as f64 / self.scale, self.height as f64 / self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_classic_setup() {
        let c = GameConfig::default();
        assert_eq!((c.width, c.height), (1365, 805));
        assert_eq!(c.fps, 30.0);
        assert_eq!(c.scale, 2.0);
        assert!(!c.interpolation);
        assert_eq!(c.background, "black");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let c = GameConfig::from_json(r#"{"fps": 45, "scale": 1}"#).unwrap();
        assert_eq!(
            c,
            GameConfig {
                fps: 45.0,
                scale: 1.0,
                ..GameConfig::default()
            }
        );
    }

    #[test]
    fn rejects_zero_scale() {
        let err = GameConfig::from_json(r#"{"scale": 0}"#).unwrap_err();
        assert!(err.contains("scale"), "{err}");
    }

    #[test]
    fn rejects_zero_size() {
        let c = GameConfig {
            width: 0,
            ..GameConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        let err = GameConfig::from_json("{fps:").unwrap_err();
        assert!(err.starts_with("invalid config"), "{err}");
    }

    #[test]
    fn logical_size_divides_by_scale() {
        let c = GameConfig::default();
        assert_eq!(c.logical_size(), (682.5, 402.5));
    }
}
