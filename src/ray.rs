use crate::math::{Point, Vector};

/// A half-line from `start`.  The unit direction is fixed when the ray is built.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Ray {
    start: Point,
    through: Point,
    direction: Vector,
}

impl Ray {
    /// Ray from `start` passing through `through`
    pub fn new(start: Point, through: Point) -> Ray {
        Ray { start, through, direction: (through - start).normalise() }
    }

    /// Ray from `start` heading along `direction`, which is normalised here
    pub fn along(start: Point, direction: Vector) -> Ray {
        let direction = direction.normalise();
        Ray { start, through: start + direction, direction }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    /// The point the ray was aimed through, or one unit along it
    pub fn through(&self) -> Point {
        self.through
    }

    pub fn direction(&self) -> Vector {
        self.direction
    }

    pub fn point_at(&self, t: f32) -> Point {
        self.start + self.direction * t
    }

    /// Ray from the through point back to the start
    pub fn reversed(&self) -> Ray {
        Ray::new(self.through, self.start)
    }

    /// Mirror reflection of this ray about `normal`, leaving from the normal's start.
    /// R = 2(N.V)N - V with V the reversed incident direction.
    pub fn reflected(&self, normal: &Ray) -> Ray {
        let incident = -self.direction;
        let n = normal.direction;
        let reflected = n * (2.0 * n.dot(&incident)) - incident;
        Ray::along(normal.start, reflected)
    }
}
