use std::path::Path;

use image::RgbaImage;

use super::canvas::{write_png, PixelCanvas};
use super::{SkinError, SkinResult};
use crate::geometry::{Color, PixelRect};

/// Square border-image source: four inset edge bars plus a staircase step
/// inside each corner, transparent everywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSkin {
    pub size: u32,
    pub color: Color,
    pub edge_thickness: u32,
    pub corner_step: u32,
}

impl FrameSkin {
    pub const fn new(size: u32, color: Color, edge_thickness: u32, corner_step: u32) -> Self {
        Self {
            size,
            color,
            edge_thickness,
            corner_step,
        }
    }

    pub fn validate(&self) -> SkinResult<()> {
        if self.size == 0 {
            return Err(SkinError::InvalidParameter {
                name: "frame size",
                value: 0,
                reason: "must be at least 1",
            });
        }

        // Keeps every rect non-negative and leaves a transparent center.
        let inset = u64::from(self.edge_thickness) + u64::from(self.corner_step);
        if inset * 2 >= u64::from(self.size) {
            return Err(SkinError::InvalidParameter {
                name: "edge thickness + corner step",
                value: inset,
                reason: "must be less than half the frame size",
            });
        }
        Ok(())
    }

    /// Top, bottom, left and right bars.
    pub fn edge_rects(&self) -> SkinResult<[PixelRect; 4]> {
        self.validate()?;
        let (s, t, c) = (self.size, self.edge_thickness, self.corner_step);
        let span = s - 2 * c;
        Ok([
            PixelRect::new(c, 0, span, t),
            PixelRect::new(c, s - t, span, t),
            PixelRect::new(0, c, t, span),
            PixelRect::new(s - t, c, t, span),
        ])
    }

    /// Top-left, top-right, bottom-left and bottom-right steps, each tucked
    /// into the inner corner formed by two adjacent bars.
    pub fn corner_rects(&self) -> SkinResult<[PixelRect; 4]> {
        self.validate()?;
        let (s, t, c) = (self.size, self.edge_thickness, self.corner_step);
        let far = s - t - c;
        Ok([
            PixelRect::new(t, t, c, c),
            PixelRect::new(far, t, c, c),
            PixelRect::new(t, far, c, c),
            PixelRect::new(far, far, c, c),
        ])
    }

    /// Border-image slice width that keeps the bars and corner steps unscaled.
    pub const fn slice_margin(&self) -> u32 {
        self.edge_thickness + self.corner_step
    }

    pub fn generate(&self) -> SkinResult<RgbaImage> {
        let edges = self.edge_rects()?;
        let corners = self.corner_rects()?;

        let mut canvas = PixelCanvas::new(self.size, self.size);
        for rect in edges.into_iter().chain(corners) {
            canvas.fill_rect(rect, self.color);
        }
        Ok(canvas.finish())
    }

    pub fn generate_and_store(&self, path: &Path) -> SkinResult<RgbaImage> {
        let image = self.generate()?;
        write_png(&image, path)?;
        Ok(image)
    }
}
