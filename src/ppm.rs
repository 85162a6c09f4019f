use std::fs;
use std::path::Path;

use crate::colour::Colour;
use crate::error::{Result, TraceError};
use crate::render::Framebuffer;

/// Plain text (P3) image, written top row first
pub struct PpmImage {
    width: usize,
    height: usize,
    body: String,
}

impl PpmImage {
    pub fn create(width: usize, height: usize) -> PpmImage {
        PpmImage { width, height, body: String::from("") }
    }

    pub fn from_framebuffer(framebuffer: &Framebuffer) -> PpmImage {
        let mut rows = framebuffer.rows().rev().peekable();
        let width = rows.peek().map_or(0, |row| row.len());
        let mut image = PpmImage::create(width, 0);
        for row in rows {
            for colour in row {
                image.append_pixel(colour);
            }
            image.end_row();
        }
        image
    }

    /// Channels are expected to be in [0,1]
    pub fn append_pixel(&mut self, colour: &Colour) {
        let colour = *colour * 255.0;
        self.body.push_str(&format!("{:4} {:4} {:4}", colour.r as u32, colour.g as u32, colour.b as u32));
    }

    pub fn end_row(&mut self) {
        self.body.push('\n');
        self.height += 1;
    }

    pub fn get_text(&self) -> String {
        let mut text = String::new();
        // COLS x ROWS; 255 is max colour
        text.push_str(&format!("P3\n{} {}\n255\n", self.width, self.height));
        text.push_str(&self.body);
        text
    }

    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| TraceError::Io { path: parent.to_owned(), source })?;
            }
        }
        fs::write(path, self.get_text()).map_err(|source| TraceError::Io { path: path.to_owned(), source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::PixelSink;

    #[test]
    fn text_is_top_row_first() {
        let mut fb = Framebuffer::new(2, 2);
        fb.set_pixel(0, 0, Colour::WHITE);
        fb.set_pixel(1, 1, Colour::new(0.0, 1.0, 0.0));

        let text = PpmImage::from_framebuffer(&fb).get_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "P3");
        assert_eq!(lines[1], "2 2");
        assert_eq!(lines[2], "255");
        assert_eq!(lines[3], " 255  255  255   0    0    0");
        assert_eq!(lines[4], "   0    0    0   0  255    0");
        assert_eq!(lines.len(), 5);
    }
}
