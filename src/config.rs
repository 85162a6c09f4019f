use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::colour::Colour;
use crate::error::{Result, TraceError};
use crate::math::Point;
use crate::scene::{read_json_file, Scene};
use crate::tracer::{RayTracer, DEFAULT_DEPTH_LIMIT};

/// Fixed viewing setup for a render.  Any field left out of a config file keeps its default.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: usize,
    pub height: usize,
    pub eye: Point,
    pub background: Colour,
    pub depth_limit: u32,
}

impl Default for RenderConfig {
    fn default() -> RenderConfig {
        RenderConfig {
            width: 800,
            height: 800,
            eye: Point::new(0.0, 0.0, -5.0),
            background: Colour::splat(0.1),
            depth_limit: DEFAULT_DEPTH_LIMIT,
        }
    }
}

impl RenderConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<RenderConfig> {
        let config: RenderConfig = read_json_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Pixel positions need at least two pixels along each axis
    pub fn validate(&self) -> Result<()> {
        if self.width < 2 || self.height < 2 {
            return Err(TraceError::InvalidConfig(format!(
                "image must be at least 2x2, got {}x{}", self.width, self.height
            )));
        }
        Ok(())
    }

    pub fn tracer<'a>(&self, scene: &'a Scene) -> RayTracer<'a> {
        RayTracer::new(scene, self.eye, self.background).with_depth_limit(self.depth_limit)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let path = std::env::temp_dir().join(format!("mirror-tracer-config-{}.json", std::process::id()));
        fs::write(&path, r#"{ "width": 64, "depth_limit": 4 }"#).unwrap();
        let config = RenderConfig::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.width, 64);
        assert_eq!(config.height, 800);
        assert_eq!(config.depth_limit, 4);
        assert_eq!(config.eye, Point::new(0.0, 0.0, -5.0));
        assert_eq!(config.background, Colour::splat(0.1));
    }

    #[test]
    fn tiny_image_is_rejected() {
        let config = RenderConfig { height: 1, ..RenderConfig::default() };
        assert!(matches!(config.validate(), Err(TraceError::InvalidConfig(_))));
        assert!(RenderConfig::default().validate().is_ok());
    }
}
