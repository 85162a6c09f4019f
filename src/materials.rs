use serde::{Deserialize, Serialize};

use crate::colour::Colour;

/// Phong coefficients of a surface plus how much of the mirrored scene it shows
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, Serialize)]
pub struct Material {
    pub ambient: Colour,
    pub diffuse: Colour,
    pub specular: Colour,
    #[serde(default)]
    pub reflectivity: f32,
}

impl Material {
    pub fn new(ambient: Colour, diffuse: Colour, specular: Colour, reflectivity: f32) -> Material {
        Material { ambient, diffuse, specular, reflectivity }
    }

    /// Same coefficients with a different reflectivity
    pub fn with_reflectivity(self, reflectivity: f32) -> Material {
        Material { reflectivity, ..self }
    }

    pub fn is_reflective(&self) -> bool {
        self.reflectivity > 0.0
    }
}

impl Default for Material {
    // Dull red plastic
    fn default() -> Material {
        Material {
            ambient: Colour::new(0.1, 0.0, 0.0),
            diffuse: Colour::new(0.7, 0.0, 0.0),
            specular: Colour::splat(0.5),
            reflectivity: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflectivity_toggle() {
        let plain = Material::default();
        assert!(!plain.is_reflective());

        let mirror = plain.with_reflectivity(0.8);
        assert!(mirror.is_reflective());
        assert_eq!(mirror.diffuse, plain.diffuse);
    }
}
