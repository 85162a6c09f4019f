use log::{debug, info};

use crate::colour::Colour;
use crate::math::Point;
use crate::tracer::RayTracer;

/// Somewhere to put finished pixels.  `y` counts rows down from the top of the image.
pub trait PixelSink {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn set_pixel(&mut self, x: usize, y: usize, colour: Colour);
}

/// Image stored bottom row first, with every channel clamped to [0,1]
pub struct Framebuffer {
    width: usize,
    height: usize,
    pixels: Vec<Colour>,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Framebuffer {
        Framebuffer { width, height, pixels: vec![Colour::BLACK; width * height] }
    }

    pub fn clear(&mut self) {
        for p in self.pixels.iter_mut() {
            *p = Colour::BLACK;
        }
    }

    // Storage row for an image row counted from the top
    fn storage_row(&self, y: usize) -> usize {
        self.height - 1 - y
    }

    /// Pixel at column `x`, `y` rows down from the top
    pub fn get(&self, x: usize, y: usize) -> Colour {
        self.pixels[self.storage_row(y) * self.width + x]
    }

    /// Rows in storage order, bottom of the image first.  Empty if either side is 0.
    pub fn rows(&self) -> std::slice::Chunks<'_, Colour> {
        self.pixels.chunks(self.width.max(1))
    }
}

impl PixelSink for Framebuffer {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn set_pixel(&mut self, x: usize, y: usize, colour: Colour) {
        let row = self.storage_row(y);
        self.pixels[row * self.width + x] = colour.clamped();
    }
}

/// Screen space position of a pixel: x and y run over [-1,1], z is 0.
/// Row 0 is the top of the screen.
pub fn pixel_position(row: usize, col: usize, width: usize, height: usize) -> Point {
    let x = 2.0 * col as f32 / (width as f32 - 1.0) - 1.0;
    let y = 1.0 - 2.0 * row as f32 / (height as f32 - 1.0);
    Point::new(x, y, 0.0)
}

/// Trace every pixel of `sink` through `tracer`
pub fn render<S: PixelSink>(tracer: &RayTracer, sink: &mut S) {
    let (width, height) = (sink.width(), sink.height());
    info!("Rendering {}x{} from eye {:?}", width, height, tracer.eye());

    for i in 0..height {
        for j in 0..width {
            let colour = tracer.trace_pixel(pixel_position(i, j, width, height));
            sink.set_pixel(j, i, colour);
        }
        if i % 100 == 0 {
            debug!("Finished row {} of {}", i, height);
        }
    }

    info!("Render done");
}
