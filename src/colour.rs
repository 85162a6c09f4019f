use std::ops::{Add, AddAssign, Div, Mul, MulAssign};

use serde::{Deserialize, Serialize};

/// RGB triple.  Channels are nominally in [0,1] but are only clamped when written out.
#[derive(Clone, Copy, PartialEq, Debug, Default, Deserialize, Serialize)]
pub struct Colour {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Colour {
    pub const BLACK: Colour = Colour { r: 0.0, g: 0.0, b: 0.0 };
    pub const WHITE: Colour = Colour { r: 1.0, g: 1.0, b: 1.0 };

    pub fn new(r: f32, g: f32, b: f32) -> Colour {
        Colour { r, g, b }
    }

    pub fn splat(v: f32) -> Colour {
        Colour::new(v, v, v)
    }

    pub fn clamped(&self) -> Colour {
        Colour::new(self.r.clamp(0.0, 1.0), self.g.clamp(0.0, 1.0), self.b.clamp(0.0, 1.0))
    }

    /// Brightness summed over channels
    pub fn intensity(&self) -> f32 {
        self.r + self.g + self.b
    }
}

impl Add for Colour {
    type Output = Colour;
    fn add(self, other: Colour) -> Colour {
        Colour::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

impl AddAssign for Colour {
    fn add_assign(&mut self, other: Colour) {
        self.r += other.r;
        self.g += other.g;
        self.b += other.b;
    }
}

impl Mul for Colour {
    type Output = Colour;
    fn mul(self, other: Colour) -> Colour {
        Colour::new(self.r * other.r, self.g * other.g, self.b * other.b)
    }
}

impl Mul<f32> for Colour {
    type Output = Colour;
    fn mul(self, scale: f32) -> Colour {
        Colour::new(self.r * scale, self.g * scale, self.b * scale)
    }
}

impl MulAssign<f32> for Colour {
    fn mul_assign(&mut self, scale: f32) {
        self.r *= scale;
        self.g *= scale;
        self.b *= scale;
    }
}

impl Div<f32> for Colour {
    type Output = Colour;
    fn div(self, divisor: f32) -> Colour {
        Colour::new(self.r / divisor, self.g / divisor, self.b / divisor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_operators() {
        let c1 = Colour::new(0.5, 0.25, 1.0);
        let c2 = Colour::new(0.5, 0.5, 0.0);

        assert_eq!(c1 + c2, Colour::new(1.0, 0.75, 1.0));
        assert_eq!(c1 * c2, Colour::new(0.25, 0.125, 0.0));
        assert_eq!(c1 * 2.0, Colour::new(1.0, 0.5, 2.0));
        assert_eq!(c1 / 2.0, Colour::new(0.25, 0.125, 0.5));

        let mut acc = Colour::BLACK;
        acc += c1;
        acc += c2;
        acc *= 0.5;
        assert_eq!(acc, Colour::new(0.5, 0.375, 0.5));
    }

    #[test]
    fn not_clamped_until_asked() {
        let bright = Colour::new(1.5, -0.2, 0.4) + Colour::WHITE;
        assert_eq!(bright, Colour::new(2.5, 0.8, 1.4));
        assert_eq!(bright.clamped(), Colour::new(1.0, 0.8, 1.0));
        assert_eq!(Colour::new(-1.0, 0.0, 0.5).clamped(), Colour::new(0.0, 0.0, 0.5));
    }
}
