use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::colour::Colour;
use crate::error::{Result, TraceError};
use crate::geometry::Surface;
use crate::materials::Material;
use crate::math::{Point, Vector};
use crate::ray::Ray;
use crate::scene::{Light, Scene};

/// Pre-built scenes, one of which is active.  Scenes are numbered from 1.
pub struct SceneCatalogue {
    scenes: Vec<Scene>,
    active: usize,
}

impl SceneCatalogue {
    /// A catalogue holding `first`, which starts out active
    pub fn new(first: Scene) -> SceneCatalogue {
        SceneCatalogue { scenes: vec![first], active: 0 }
    }

    /// The four built-in scenes; `seed` drives the random sphere grid
    pub fn builtin(seed: u64) -> SceneCatalogue {
        let mut catalogue = SceneCatalogue::new(reference_scene());
        catalogue.add(mirror_floor_scene());
        catalogue.add(quadrics_scene());
        catalogue.add(sphere_grid_scene(seed));
        catalogue
    }

    /// Append a scene and return its number
    pub fn add(&mut self, scene: Scene) -> usize {
        self.scenes.push(scene);
        self.scenes.len()
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Make scene `number` the active one
    pub fn select(&mut self, number: usize) -> Result<&Scene> {
        if number == 0 || number > self.scenes.len() {
            return Err(TraceError::UnknownScene { requested: number, available: self.scenes.len() });
        }
        self.active = number - 1;
        info!("Scene {} selected", number);
        Ok(&self.scenes[self.active])
    }

    pub fn active(&self) -> &Scene {
        &self.scenes[self.active]
    }

    pub fn active_number(&self) -> usize {
        self.active + 1
    }
}

/// Floor at y = -1.  Planes sit at n.X = -n.P, hence the declared point.
fn floor(material: Material) -> Surface {
    let point = Point::new(0.0, 1.0, 0.0);
    Surface::plane(point, Ray::along(point, Vector::new(0.0, 1.0, 0.0)), material)
}

/// Green and red balls under one white light
pub fn reference_scene() -> Scene {
    let mut scene = Scene::default();
    scene.add_light(Light::new(Point::new(1.0, 3.0, 2.0), Colour::WHITE));

    let green = Material::new(Colour::new(0.0, 0.1, 0.0), Colour::new(0.0, 0.7, 0.0), Colour::splat(0.75), 0.0);
    let red = Material::new(Colour::new(0.1, 0.0, 0.0), Colour::new(0.7, 0.0, 0.0), Colour::splat(0.75), 0.0);
    scene.add_surface(Surface::sphere(Point::new(0.0, 0.0, 5.0), 0.5, green));
    scene.add_surface(Surface::sphere(Point::new(0.5, 1.0, 4.0), 0.25, red));
    scene
}

/// Polished floor with a mirror ball and a glossy ball, lit by two lights
pub fn mirror_floor_scene() -> Scene {
    let mut scene = Scene::new(Colour::splat(0.3));
    scene.add_light(Light::new(Point::new(2.0, 4.0, 0.0), Colour::splat(0.8)));
    scene.add_light(Light::new(Point::new(-3.0, 2.0, 1.0), Colour::new(0.4, 0.4, 0.6)));

    let polished = Material::new(Colour::splat(0.2), Colour::splat(0.4), Colour::splat(0.3), 0.4);
    let glossy_red = Material::new(Colour::new(0.2, 0.0, 0.0), Colour::new(0.8, 0.1, 0.1), Colour::splat(0.6), 0.3);
    let mirror = Material::new(Colour::splat(0.05), Colour::splat(0.1), Colour::splat(0.9), 0.8);
    scene.add_surface(floor(polished));
    scene.add_surface(Surface::sphere(Point::new(-0.8, -0.4, 4.0), 0.6, glossy_red));
    scene.add_surface(Surface::sphere(Point::new(0.8, -0.5, 5.0), 0.5, mirror));
    scene
}

/// An ellipsoid and a capped-height cylinder standing on a floor
pub fn quadrics_scene() -> Scene {
    let mut scene = Scene::default();
    scene.add_light(Light::new(Point::new(1.0, 3.0, 0.0), Colour::WHITE));

    let matte_grey = Material::new(Colour::splat(0.1), Colour::splat(0.5), Colour::BLACK, 0.0);
    let jade = Material::new(Colour::new(0.0, 0.15, 0.1), Colour::new(0.1, 0.6, 0.4), Colour::splat(0.5), 0.0);
    let steel = Material::new(Colour::splat(0.1), Colour::new(0.3, 0.3, 0.4), Colour::splat(0.8), 0.2);
    scene.add_surface(floor(matte_grey));
    scene.add_surface(Surface::ellipsoid(Point::new(-0.6, -0.4, 4.0), Vector::new(0.6, 0.3, 0.4), jade));
    scene.add_surface(Surface::cylinder(Point::new(0.7, -0.2, 5.0), Vector::new(0.0, 1.0, 0.0), 0.3, 1.6, steel));
    scene
}

/// Grid of randomly coloured small spheres on a floor.  Same seed, same scene.
pub fn sphere_grid_scene(seed: u64) -> Scene {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut rand = || rng.gen::<f32>();

    let mut scene = Scene::new(Colour::splat(0.4));
    scene.add_light(Light::new(Point::new(0.0, 5.0, 0.0), Colour::splat(0.9)));
    scene.add_surface(floor(Material::new(Colour::splat(0.1), Colour::splat(0.6), Colour::BLACK, 0.2)));

    for a in -3..4 {
        for b in 3..10 {
            let radius = 0.15 + 0.1 * rand();
            let centre = Point::new(0.5 * a as f32 + 0.2 * rand(), -1.0 + radius, b as f32 * 0.8 + 0.2 * rand());
            let diffuse = Colour::new(rand() * rand(), rand() * rand(), rand() * rand());
            let reflectivity = if rand() < 0.25 { 0.5 + 0.5 * rand() } else { 0.0 };
            let material = Material::new(diffuse * 0.2, diffuse, Colour::splat(0.5), reflectivity);
            scene.add_surface(Surface::sphere(centre, radius, material));
        }
    }

    scene
}
