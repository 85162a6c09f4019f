//! Whitted-style recursive tracing: nearest hit, shadow rays, Phong shading and mirror reflection.

use crate::colour::Colour;
use crate::geometry::{closest_hit, Surface, VISIBILITY_THRESHOLD};
use crate::math::Point;
use crate::ray::Ray;
use crate::scene::{Light, Scene};

/// Phong shininess, shared by every surface
pub const SPECULAR_EXPONENT: i32 = 5;

/// Reflections are followed while the depth is at most this
pub const DEFAULT_DEPTH_LIMIT: u32 = 2;

/// Traces rays against one scene.  The scene is only read, so a tracer can be shared freely.
pub struct RayTracer<'a> {
    scene: &'a Scene,
    eye: Point,
    background: Colour,
    depth_limit: u32,
}

impl<'a> RayTracer<'a> {
    pub fn new(scene: &'a Scene, eye: Point, background: Colour) -> RayTracer<'a> {
        RayTracer { scene, eye, background, depth_limit: DEFAULT_DEPTH_LIMIT }
    }

    pub fn with_depth_limit(self, depth_limit: u32) -> RayTracer<'a> {
        RayTracer { depth_limit, ..self }
    }

    pub fn eye(&self) -> Point {
        self.eye
    }

    /// Colour seen from the eye through `pixel`
    pub fn trace_pixel(&self, pixel: Point) -> Colour {
        self.trace(&Ray::new(self.eye, pixel), 0)
    }

    /// Colour seen along `ray`, before clamping.  `depth` counts reflections so far.
    pub fn trace(&self, ray: &Ray, depth: u32) -> Colour {
        let surfaces = self.scene.surfaces();
        let (index, hit) = match closest_hit(ray, surfaces) {
            Some(found) => found,
            None => return self.background,
        };
        let surface = &surfaces[index];
        let hit_point = hit.normal.start();

        let mut colour = Colour::BLACK;
        // Ambient light is scene-wide, so it is added once however many lights there are
        let mut ambient_pending = true;
        for light in self.scene.lights() {
            if self.in_shadow(index, hit_point, light) {
                if ambient_pending {
                    colour += self.ambience(surface);
                    ambient_pending = false;
                }
            } else {
                colour += self.illumination(surface, &hit.normal, light, ambient_pending);
                ambient_pending = false;
            }
        }

        if depth <= self.depth_limit && surface.material.is_reflective() {
            let reflected = ray.reflected(&hit.normal);
            colour += self.trace(&reflected, depth + 1) * surface.material.reflectivity;
        }

        colour
    }

    /// Whether any surface sits between `light` and `hit_point` on the surface at `index`
    fn in_shadow(&self, index: usize, hit_point: Point, light: &Light) -> bool {
        let surfaces = self.scene.surfaces();
        let light_ray = Ray::new(light.position, hit_point);

        // Distance at which the light ray meets the lit surface itself
        let reference = match surfaces[index].intersect(&light_ray) {
            Some(hit) => hit.t,
            None => return false,
        };

        surfaces.iter()
            .filter_map(|s| s.intersect(&light_ray))
            .any(|hit| hit.t > VISIBILITY_THRESHOLD && hit.t < reference)
    }

    fn ambience(&self, surface: &Surface) -> Colour {
        surface.material.ambient * self.scene.ambient()
    }

    /// Illum = ka*A + C * (kd * (L.N) + ks * (R.E)^n)
    fn illumination(&self, surface: &Surface, normal: &Ray, light: &Light, with_ambient: bool) -> Colour {
        let mut colour = if with_ambient { self.ambience(surface) } else { Colour::BLACK };

        let point = normal.start();
        let to_light = Ray::new(point, light.position);
        let ln = to_light.direction().dot(&normal.direction());
        if ln <= 0.0 {
            // Light is on the far side of the surface
            return colour;
        }

        let material = &surface.material;
        let diffuse = material.diffuse * ln;

        let reflected = Ray::new(light.position, point).reflected(normal);
        let to_eye = Ray::new(point, self.eye);
        let re = reflected.direction().dot(&to_eye.direction());
        let specular = material.specular * re.powi(SPECULAR_EXPONENT);

        colour += light.intensity * (diffuse + specular);
        colour
    }
}
