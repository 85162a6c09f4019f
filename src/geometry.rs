use crate::materials::Material;
use crate::math::{Point, Vector};
use crate::ray::Ray;

/// Hits nearer than this along a unit-direction ray are not visible.
/// This also keeps shadow and reflection rays off the surface they leave from.
pub const VISIBILITY_THRESHOLD: f32 = 1.0;

/// A negative discriminant this close to zero is treated as a grazing hit
pub const DISCRIMINANT_TOLERANCE: f32 = 1e-4;

/// Distance a hit point is pushed off its surface along each axis
pub const SURFACE_OFFSET: f32 = 1e-4;

/// Where a ray met a surface: distance along the ray, and the outward normal
/// starting at the (offset) hit point
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Hit {
    pub t: f32,
    pub normal: Ray,
}

#[derive(Clone, PartialEq, Debug)]
pub enum Shape {
    Sphere {
        centre: Point,
        radius: f32,
    },
    Ellipsoid {
        centre: Point,
        semi_axes: Vector,
    },
    /// Cylinder around `axis` through `centre`.  `height` bounds it to half that
    /// distance either side of the centre; infinity leaves it open.
    InfiniteCylinder {
        centre: Point,
        axis: Vector,
        radius: f32,
        height: f32,
    },
    InfinitePlane {
        point: Point,
        normal: Ray,
    },
}

/// A shape with its material.  Cloning copies everything, so scenes never share surfaces.
#[derive(Clone, PartialEq, Debug)]
pub struct Surface {
    pub shape: Shape,
    pub material: Material,
}

impl Surface {
    pub fn sphere(centre: Point, radius: f32, material: Material) -> Surface {
        Surface { shape: Shape::Sphere { centre, radius }, material }
    }

    pub fn ellipsoid(centre: Point, semi_axes: Vector, material: Material) -> Surface {
        Surface { shape: Shape::Ellipsoid { centre, semi_axes }, material }
    }

    pub fn cylinder(centre: Point, axis: Vector, radius: f32, height: f32, material: Material) -> Surface {
        Surface { shape: Shape::InfiniteCylinder { centre, axis, radius, height }, material }
    }

    pub fn plane(point: Point, normal: Ray, material: Material) -> Surface {
        Surface { shape: Shape::InfinitePlane { point, normal }, material }
    }

    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        self.shape.intersect(ray)
    }
}

impl Shape {
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        match self {
            Shape::Sphere { centre, radius } => sphere_intersect(ray, *centre, *radius),
            Shape::Ellipsoid { centre, semi_axes } => ellipsoid_intersect(ray, *centre, *semi_axes),
            Shape::InfiniteCylinder { centre, axis, radius, height } => cylinder_intersect(ray, *centre, *axis, *radius, *height),
            Shape::InfinitePlane { point, normal } => plane_intersect(ray, *point, normal),
        }
    }
}

/// Roots of `a t^2 + b t + c`, nearest first
fn quadratic_roots(a: f32, b: f32, c: f32) -> Option<(f32, f32)> {
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 && discriminant.abs() > DISCRIMINANT_TOLERANCE {
        return None;
    }

    let d_sqrt = discriminant.abs().sqrt();
    Some(((-b - d_sqrt) / (2.0 * a), (-b + d_sqrt) / (2.0 * a)))
}

// The near root wins whenever it is in front of the ray start
fn pick_root(near: f32, far: f32) -> f32 {
    if near > 0.0 { near } else { far }
}

fn visible(t: f32) -> bool {
    // Written this way round so NaN is rejected too
    t >= VISIBILITY_THRESHOLD
}

/// Normal ray leaving the surface at `p` in `direction`, nudged off the surface
fn normal_at(p: Point, direction: Vector) -> Ray {
    let direction = direction.normalise();
    Ray::along(p.adjust(SURFACE_OFFSET, &direction), direction)
}

fn sphere_intersect(ray: &Ray, centre: Point, radius: f32) -> Option<Hit> {
    let oc = ray.start() - centre;
    let dir = ray.direction();
    let a = dir.len_sq();
    let b = 2.0 * dir.dot(&oc);
    let c = oc.len_sq() - radius * radius;

    let (near, far) = quadratic_roots(a, b, c)?;
    let t = pick_root(near, far);
    if !visible(t) {
        return None;
    }

    let p = ray.point_at(t);
    Some(Hit { t, normal: normal_at(p, p - centre) })
}

fn ellipsoid_intersect(ray: &Ray, centre: Point, semi_axes: Vector) -> Option<Hit> {
    // Squash space so the ellipsoid becomes a unit sphere; t is unchanged by the scaling
    let oc = (ray.start() - centre).unscale(&semi_axes);
    let dir = ray.direction().unscale(&semi_axes);
    let a = dir.len_sq();
    let b = 2.0 * dir.dot(&oc);
    let c = oc.len_sq() - 1.0;

    let (near, far) = quadratic_roots(a, b, c)?;
    let t = pick_root(near, far);
    if !visible(t) {
        return None;
    }

    let p = ray.point_at(t);
    let gradient = (p - centre).unscale(&semi_axes.scale(&semi_axes));
    Some(Hit { t, normal: normal_at(p, gradient) })
}

fn cylinder_intersect(ray: &Ray, centre: Point, axis: Vector, radius: f32, height: f32) -> Option<Hit> {
    let axis = axis.normalise();
    let dir = ray.direction();
    let oc = ray.start() - centre;

    // Work in the plane perpendicular to the axis
    let dir_perp = dir - axis * dir.dot(&axis);
    let oc_perp = oc - axis * oc.dot(&axis);
    let a = dir_perp.len_sq();
    if a == 0.0 {
        // Running along the axis
        return None;
    }
    let b = 2.0 * dir_perp.dot(&oc_perp);
    let c = oc_perp.len_sq() - radius * radius;

    let (near, far) = quadratic_roots(a, b, c)?;
    let half_height = 0.5 * height;
    let within_height = |t: f32| (ray.point_at(t) - centre).dot(&axis).abs() <= half_height;
    let t = if near > 0.0 && within_height(near) {
        near
    } else if within_height(far) {
        far
    } else {
        return None;
    };
    if !visible(t) {
        return None;
    }

    let p = ray.point_at(t);
    let from_axis = p - centre;
    Some(Hit { t, normal: normal_at(p, from_axis - axis * from_axis.dot(&axis)) })
}

fn plane_intersect(ray: &Ray, point: Point, normal: &Ray) -> Option<Hit> {
    let n = normal.direction();
    let denominator = ray.direction().dot(&n);
    if denominator == 0.0 {
        // Parallel to the plane
        return None;
    }

    // d = -n.P, so the plane sits at n.X = -n.P: mirrored through the origin
    // from its declared point along the normal
    let d = -n.dot(&point.to_vector());
    let t = (d - n.dot(&ray.start().to_vector())) / denominator;
    if !visible(t) || t == 0.0 {
        return None;
    }

    // The normal returned always faces back towards the ray
    let facing = if denominator > 0.0 { normal.reversed().direction() } else { n };
    let p = ray.point_at(t);
    Some(Hit { t, normal: Ray::along(p.adjust(SURFACE_OFFSET, &facing), facing) })
}

/// Nearest visible hit over `surfaces`, with the index of the surface hit.
/// On equal distances the earlier surface wins.
pub fn closest_hit(ray: &Ray, surfaces: &[Surface]) -> Option<(usize, Hit)> {
    let mut result = None;
    let mut closest_so_far = f32::INFINITY;
    for (i, surface) in surfaces.iter().enumerate() {
        if let Some(hit) = surface.intersect(ray) {
            if hit.t < closest_so_far {
                closest_so_far = hit.t;
                result = Some((i, hit));
            }
        }
    }

    result
}
