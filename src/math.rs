use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A position in space.  Subtracting two points gives a `Vector`.
#[derive(Clone, Copy, PartialEq, Debug, Default, Deserialize, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// A raw displacement or direction.  Not normalised unless stated.
#[derive(Clone, Copy, PartialEq, Debug, Default, Deserialize, Serialize)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point {
    pub fn new(x: f32, y: f32, z: f32) -> Point {
        Point { x, y, z }
    }

    pub fn origin() -> Point {
        Point::new(0.0, 0.0, 0.0)
    }

    /// Divides each coordinate by the distance from the origin.
    /// The zero point produces NaN coordinates.
    pub fn normalise(&self) -> Point {
        let norm = (self.x * self.x + self.y * self.y + self.z * self.z).sqrt();
        Point::new(self.x / norm, self.y / norm, self.z / norm)
    }

    /// Adds the same amount to every coordinate
    pub fn offset(&self, additive: f32) -> Point {
        Point::new(self.x + additive, self.y + additive, self.z + additive)
    }

    /// Nudges the point by `epsilon` along each axis, towards the side the matching
    /// component of `towards` points to.  Zero components count as positive.
    pub fn adjust(&self, epsilon: f32, towards: &Vector) -> Point {
        let nudge = |coord: f32, sign: f32| if sign < 0.0 { coord - epsilon } else { coord + epsilon };
        Point::new(nudge(self.x, towards.x), nudge(self.y, towards.y), nudge(self.z, towards.z))
    }

    pub fn to_vector(&self) -> Vector {
        Vector::new(self.x, self.y, self.z)
    }
}

impl Vector {
    pub fn new(x: f32, y: f32, z: f32) -> Vector {
        Vector { x, y, z }
    }

    pub fn zero() -> Vector {
        Vector::new(0.0, 0.0, 0.0)
    }

    pub fn dot(&self, other: &Vector) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Vector) -> Vector {
        Vector::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn len_sq(&self) -> f32 {
        self.dot(self)
    }

    pub fn length(&self) -> f32 {
        self.len_sq().sqrt()
    }

    /// Unit vector in the same direction.  The zero vector produces NaN components.
    pub fn normalise(&self) -> Vector {
        *self * (1.0 / self.length())
    }

    /// Scales each component by the matching component of `other`
    pub fn scale(&self, other: &Vector) -> Vector {
        Vector::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// Divides each component by the matching component of `other`
    pub fn unscale(&self, other: &Vector) -> Vector {
        Vector::new(self.x / other.x, self.y / other.y, self.z / other.z)
    }

    pub fn map<F: Fn(f32) -> f32>(&self, f: F) -> Vector {
        Vector::new(f(self.x), f(self.y), f(self.z))
    }
}

pub fn dot(a: Vector, b: Vector) -> f32 {
    a.dot(&b)
}

/// Order matters: `cross(a, b) == -cross(b, a)`
pub fn cross(a: Vector, b: Vector) -> Vector {
    a.cross(&b)
}

/// The scalar component of `a` along `b`, applied to `frame`
pub fn projection(a: Vector, b: Vector, frame: Vector) -> Vector {
    frame * (a.dot(&b) / b.dot(&b))
}

impl Sub for Point {
    type Output = Vector;
    fn sub(self, other: Point) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Add<Vector> for Point {
    type Output = Point;
    fn add(self, v: Vector) -> Point {
        Point::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }
}

impl Add for Vector {
    type Output = Vector;
    fn add(self, other: Vector) -> Vector {
        Vector::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, other: Vector) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl Sub for Vector {
    type Output = Vector;
    fn sub(self, other: Vector) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f32> for Vector {
    type Output = Vector;
    fn mul(self, scale: f32) -> Vector {
        Vector::new(self.x * scale, self.y * scale, self.z * scale)
    }
}

impl Mul<Vector> for f32 {
    type Output = Vector;
    fn mul(self, v: Vector) -> Vector {
        v * self
    }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn point_sub_gives_vector() {
        let p1 = Point::new(1.0, 2.0, 3.0);
        let p2 = Point::new(-1.0, 5.0, 0.0);

        assert_eq!(p1 - p2, Vector::new(2.0, -3.0, 3.0));
    }

    #[test]
    fn vector_len_sq() {
        assert_eq!(Vector::new(0.0, 0.0, 0.0).len_sq(), 0.0);
        assert_eq!(Vector::new(0.0, 1.0, 0.0).len_sq(), 1.0);
        assert_eq!(Vector::new(0.0, 5.0, 0.0).len_sq(), 25.0);
        assert_eq!(Vector::new(1.0, 1.0, 1.0).len_sq(), 3.0);
    }

    #[test]
    fn vector_normalise() {
        // Normalise an already normalised vector
        let up = Vector::new(0.0, 1.0, 0.0);
        assert_eq!(up.normalise(), Vector::new(0.0, 1.0, 0.0));

        // Normalise a longer vector
        let up = Vector::new(0.0, 3.0, 0.0);
        assert_eq!(up.normalise(), Vector::new(0.0, 1.0, 0.0));

        let skew = Vector::new(3.0, -4.0, 12.0).normalise();
        assert!(approx_eq!(f32, skew.length(), 1.0, epsilon = 1e-6));
    }

    #[test]
    fn point_normalise() {
        let p = Point::new(0.0, 0.0, -5.0).normalise();
        assert_eq!(p, Point::new(0.0, 0.0, -1.0));

        let p = Point::new(2.0, 2.0, 1.0).normalise();
        assert!(approx_eq!(f32, p.to_vector().length(), 1.0, epsilon = 1e-6));

        // Zero length is a caller error
        assert!(Point::origin().normalise().x.is_nan());
    }

    #[test]
    fn cross_is_order_sensitive() {
        let x = Vector::new(1.0, 0.0, 0.0);
        let y = Vector::new(0.0, 1.0, 0.0);

        assert_eq!(cross(x, y), Vector::new(0.0, 0.0, 1.0));
        assert_eq!(cross(y, x), Vector::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn projection_scales_frame() {
        let a = Vector::new(2.0, 3.0, 0.0);
        let b = Vector::new(2.0, 0.0, 0.0);
        // Component of a along b is 2 / 2 = 1.0
        assert_eq!(projection(a, b, Vector::new(0.0, 4.0, 1.0)), Vector::new(0.0, 4.0, 1.0));
        assert_eq!(projection(a, b, b), Vector::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn adjust_follows_reference_signs() {
        let p = Point::new(1.0, 1.0, 1.0);
        let adjusted = p.adjust(0.5, &Vector::new(-1.0, 0.0, 2.0));

        assert_eq!(adjusted, Point::new(0.5, 1.5, 1.5));
    }

    #[test]
    fn offset_adds_to_every_axis() {
        assert_eq!(Point::new(1.0, -2.0, 0.0).offset(1.0), Point::new(2.0, -1.0, 1.0));
    }
}
