//! The raster surface a field renders into.
//!
//! A plain RGBA8 pixel buffer plus its device-pixel dimensions. The render
//! loop is the only writer; pointer handling never touches the buffer. The
//! buffer is exported to the host as raw bytes for upload/presentation.

use glam::Vec2;

use super::color::{Pixel, Rgba};

pub struct PixelSurface {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl PixelSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Pixel::default(); (width * height) as usize],
        }
    }

    /// Resize the backing buffer. Like a canvas, resizing clears all pixels;
    /// size-derived layout must be recomputed by the caller.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.resize((width * height) as usize, Pixel::default());
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Dimensions as a vector, for layout math.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// True when either dimension is zero (not yet laid out by the host).
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn get(&self, x: u32, y: u32) -> Pixel {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Composite a color onto one pixel. Out-of-bounds coordinates are ignored.
    pub fn blend(&mut self, x: i32, y: i32, color: Rgba) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = (y as u32 * self.width + x as u32) as usize;
        self.pixels[idx] = self.pixels[idx].over(color);
    }

    /// Composite a translucent fill over the whole surface.
    /// With low alpha this produces the trailing-fade effect: previous frames
    /// dim gradually instead of being cleared outright.
    pub fn fill(&mut self, color: Rgba) {
        for px in &mut self.pixels {
            *px = px.over(color);
        }
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Raw bytes of the RGBA8 buffer, for host-side upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}
