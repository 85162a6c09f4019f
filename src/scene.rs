use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::colour::Colour;
use crate::error::{Result, TraceError};
use crate::geometry::Surface;
use crate::materials::Material;
use crate::math::{Point, Vector};
use crate::ray::Ray;

/// A point light
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, Serialize)]
pub struct Light {
    pub position: Point,
    pub intensity: Colour,
}

impl Light {
    pub fn new(position: Point, intensity: Colour) -> Light {
        Light { position, intensity }
    }
}

/// Everything that gets rendered: surfaces, point lights, and one ambient term shared by all.
/// The scene owns its surfaces; cloning a scene deep-copies them.
#[derive(Clone, PartialEq, Debug)]
pub struct Scene {
    ambient: Colour,
    surfaces: Vec<Surface>,
    lights: Vec<Light>,
}

impl Scene {
    pub fn new(ambient: Colour) -> Scene {
        Scene { ambient, surfaces: Vec::new(), lights: Vec::new() }
    }

    /// No validation: duplicates and degenerate geometry are accepted as given
    pub fn add_surface(&mut self, surface: Surface) {
        self.surfaces.push(surface);
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn ambient(&self) -> Colour {
        self.ambient
    }

    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }
}

impl Default for Scene {
    fn default() -> Scene {
        Scene::new(Colour::splat(0.5))
    }
}

#[derive(Debug, Deserialize, Serialize)]
struct SphereDeclaration {
    centre: Point,
    radius: f32,
    material: Material,
}

#[derive(Debug, Deserialize, Serialize)]
struct EllipsoidDeclaration {
    centre: Point,
    semi_axes: Vector,
    material: Material,
}

#[derive(Debug, Deserialize, Serialize)]
struct CylinderDeclaration {
    centre: Point,
    axis: Vector,
    radius: f32,
    // Left out for an unbounded cylinder
    height: Option<f32>,
    material: Material,
}

#[derive(Debug, Deserialize, Serialize)]
struct PlaneDeclaration {
    point: Point,
    normal: Vector,
    material: Material,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "lowercase", tag = "shape")]
enum ShapeDeclaration {
    Sphere(SphereDeclaration),
    Ellipsoid(EllipsoidDeclaration),
    Cylinder(CylinderDeclaration),
    Plane(PlaneDeclaration),
}

#[derive(Debug, Deserialize, Serialize)]
struct SceneDeclaration {
    #[serde(default = "default_ambient")]
    ambient: Colour,
    #[serde(default)]
    lights: Vec<Light>,
    objects: Vec<ShapeDeclaration>,
}

fn default_ambient() -> Colour {
    Scene::default().ambient()
}

impl ShapeDeclaration {
    fn to_surface(&self) -> Surface {
        match self {
            ShapeDeclaration::Sphere(s) => Surface::sphere(s.centre, s.radius, s.material),
            ShapeDeclaration::Ellipsoid(e) => Surface::ellipsoid(e.centre, e.semi_axes, e.material),
            ShapeDeclaration::Cylinder(c) =>
                Surface::cylinder(c.centre, c.axis, c.radius, c.height.unwrap_or(f32::INFINITY), c.material),
            ShapeDeclaration::Plane(p) => Surface::plane(p.point, Ray::along(p.point, p.normal), p.material),
        }
    }
}

impl SceneDeclaration {
    fn to_scene(&self) -> Scene {
        let mut scene = Scene::new(self.ambient);
        for obj in &self.objects {
            scene.add_surface(obj.to_surface());
        }
        for light in &self.lights {
            scene.add_light(*light);
        }
        scene
    }
}

/// Read a JSON file into any deserialisable type
pub(crate) fn read_json_file<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| TraceError::Io { path: path.to_owned(), source })?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|source| TraceError::Json { path: path.to_owned(), source })
}

/// Load a scene from a JSON declaration file
pub fn load_scene<P: AsRef<Path>>(scene_path: P) -> Result<Scene> {
    let scene_path = scene_path.as_ref();
    let declaration: SceneDeclaration = read_json_file(scene_path)?;
    debug!("Scene declaration: {:?}", declaration);

    let scene = declaration.to_scene();
    info!("Loaded {} surfaces and {} lights from {}", scene.surfaces().len(), scene.lights().len(), scene_path.display());
    Ok(scene)
}
