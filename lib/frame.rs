use std::io::{self, Write};
use std::path::Path;

use image::{ImageResult, RgbImage};

use crate::interval::Interval;
use crate::Color;

const INTENSITY: Interval = Interval::new(0.0, 0.999);

/// Gamma corrected output colours, stored row by row from the top of the image.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, pixels: vec![Color::ZERO; width as usize * height as usize] }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, x: u32, y: u32) -> usize {
        x as usize + y as usize * self.width as usize
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Stores the average of `samples` accumulated linear radiance values.
    pub fn set_pixel(&mut self, x: u32, y: u32, accumulated: Color, samples: u32) {
        let i = self.index(x, y);
        self.pixels[i] = correct(accumulated, samples);
    }

    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| quantize(*c)).collect()
    }

    pub fn to_image(&self) -> RgbImage {
        let mut img = RgbImage::new(self.width, self.height);
        for (x, y, px) in img.enumerate_pixels_mut() {
            px.0 = quantize(self.pixel(x, y));
        }
        img
    }

    /// Encodes the image in the format implied by the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> ImageResult<()> {
        self.to_image().save(path)
    }

    /// Plain-text PPM (P3).
    pub fn write_ppm<W: Write>(&self, w: &mut W) -> io::Result<()> {
        writeln!(w, "P3")?;
        writeln!(w, "{} {}", self.width, self.height)?;
        writeln!(w, "255")?;

        for c in &self.pixels {
            let [r, g, b] = quantize(*c);
            writeln!(w, "{} {} {}", r, g, b)?;
        }

        Ok(())
    }
}

/// Averages, applies gamma 2 and clamps into `[0, 0.999]`.
fn correct(accumulated: Color, samples: u32) -> Color {
    let c = accumulated / samples as f32;

    Color::new(
        INTENSITY.clamp(c.x.sqrt()),
        INTENSITY.clamp(c.y.sqrt()),
        INTENSITY.clamp(c.z.sqrt()),
    )
}

fn quantize(color: Color) -> [u8; 3] {
    [(color.x * 256.0) as u8, (color.y * 256.0) as u8, (color.z * 256.0) as u8]
}
