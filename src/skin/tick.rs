use std::path::Path;

use image::RgbaImage;

use super::canvas::{write_png, PixelCanvas};
use super::{SkinError, SkinResult};
use crate::geometry::{Color, PixelPoint};

// Checkmark anchors as fractions of the canvas size.
const SHORT_LEG_START: (f64, f64) = (0.14, 0.50);
const JOINT: (f64, f64) = (0.36, 0.79);
const LONG_LEG_END: (f64, f64) = (0.86, 0.21);

/// Checkmark glyph: short leg down-right, long leg up-right, hard-edged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickIcon {
    pub size: u32,
    pub color: Color,
    pub stroke_width: u32,
}

impl TickIcon {
    pub const fn new(size: u32, color: Color, stroke_width: u32) -> Self {
        Self {
            size,
            color,
            stroke_width,
        }
    }

    pub fn validate(&self) -> SkinResult<()> {
        if self.size == 0 {
            return Err(SkinError::InvalidParameter {
                name: "tick size",
                value: 0,
                reason: "must be at least 1",
            });
        }
        if self.stroke_width == 0 {
            return Err(SkinError::InvalidParameter {
                name: "stroke width",
                value: 0,
                reason: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Start of the short leg, the joint, and the end of the long leg, in pixel indices.
    pub fn anchor_points(&self) -> [PixelPoint; 3] {
        [
            anchor(self.size, SHORT_LEG_START),
            anchor(self.size, JOINT),
            anchor(self.size, LONG_LEG_END),
        ]
    }

    pub fn generate(&self) -> SkinResult<RgbaImage> {
        self.validate()?;

        let [start, joint, end] = self.anchor_points();
        let radius = f64::from(self.stroke_width) / 2.0;
        let radius_sq = radius * radius;

        let mut canvas = PixelCanvas::new(self.size, self.size);
        for y in 0..self.size {
            for x in 0..self.size {
                let point = (f64::from(x), f64::from(y));
                if distance_sq_to_segment(point, start, joint) <= radius_sq
                    || distance_sq_to_segment(point, joint, end) <= radius_sq
                {
                    canvas.fill_pixel(x, y, self.color);
                }
            }
        }
        Ok(canvas.finish())
    }

    pub fn generate_and_store(&self, path: &Path) -> SkinResult<RgbaImage> {
        let image = self.generate()?;
        write_png(&image, path)?;
        Ok(image)
    }
}

fn anchor(size: u32, (fx, fy): (f64, f64)) -> PixelPoint {
    let max = f64::from(size.saturating_sub(1));
    let scale = f64::from(size);
    // Bounded by `max`, which always fits in i32 for realistic canvas sizes.
    PixelPoint::new(
        (fx * scale).round().clamp(0.0, max) as i32,
        (fy * scale).round().clamp(0.0, max) as i32,
    )
}

fn distance_sq_to_segment(point: (f64, f64), a: PixelPoint, b: PixelPoint) -> f64 {
    let (px, py) = point;
    let (ax, ay) = (f64::from(a.x), f64::from(a.y));
    let (dx, dy) = (f64::from(b.x) - ax, f64::from(b.y) - ay);
    let length_sq = dx * dx + dy * dy;

    let t = if length_sq == 0.0 {
        0.0
    } else {
        (((px - ax) * dx + (py - ay) * dy) / length_sq).clamp(0.0, 1.0)
    };
    let (cx, cy) = (ax + t * dx, ay + t * dy);
    (px - cx) * (px - cx) + (py - cy) * (py - cy)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROSE: Color = Color::new(0x8b, 0x4b, 0x62);
    const ROSE_RGBA: [u8; 4] = [0x8b, 0x4b, 0x62, 255];

    fn reference_tick() -> TickIcon {
        TickIcon::new(14, ROSE, 3)
    }

    #[test]
    fn anchors_round_to_reference_pixels() {
        assert_eq!(
            reference_tick().anchor_points(),
            [
                PixelPoint::new(2, 7),
                PixelPoint::new(5, 11),
                PixelPoint::new(12, 3),
            ]
        );
    }

    #[test]
    fn joint_is_opaque_and_far_corner_is_transparent() {
        let image = reference_tick().generate().unwrap();
        assert_eq!(image.dimensions(), (14, 14));
        assert_eq!(image.get_pixel(5, 11).0, ROSE_RGBA);
        assert_eq!(image.get_pixel(2, 7).0, ROSE_RGBA);
        assert_eq!(image.get_pixel(12, 3).0, ROSE_RGBA);
        assert_eq!(image.get_pixel(13, 0).0[3], 0);
        assert_eq!(image.get_pixel(0, 0).0[3], 0);
        assert_eq!(image.get_pixel(13, 13).0[3], 0);
    }

    #[test]
    fn pixels_are_either_transparent_or_exact_stroke_color() {
        for (size, stroke_width) in [(1, 1), (7, 1), (14, 3), (32, 5), (9, 20)] {
            let image = TickIcon::new(size, ROSE, stroke_width).generate().unwrap();
            assert_eq!(image.dimensions(), (size, size));
            assert!(image
                .pixels()
                .all(|pixel| pixel.0 == ROSE_RGBA || pixel.0[3] == 0));
            assert!(image.pixels().any(|pixel| pixel.0 == ROSE_RGBA));
        }
    }

    #[test]
    fn translucent_color_is_stamped_fully_opaque() {
        let image = TickIcon::new(14, Color::with_alpha(0x8b, 0x4b, 0x62, 40), 3)
            .generate()
            .unwrap();
        assert_eq!(image.get_pixel(5, 11).0, ROSE_RGBA);
    }

    #[test]
    fn wider_stroke_covers_more_pixels() {
        let count = |stroke_width| {
            TickIcon::new(14, ROSE, stroke_width)
                .generate()
                .unwrap()
                .pixels()
                .filter(|pixel| pixel.0[3] == 255)
                .count()
        };
        assert!(count(1) < count(3));
        assert!(count(3) < count(5));
    }

    #[test]
    fn generation_is_idempotent() {
        let tick = reference_tick();
        assert_eq!(
            tick.generate().unwrap().into_raw(),
            tick.generate().unwrap().into_raw()
        );
    }

    #[test]
    fn zero_size_or_stroke_is_rejected() {
        assert!(matches!(
            TickIcon::new(0, ROSE, 3).generate(),
            Err(SkinError::InvalidParameter {
                name: "tick size",
                ..
            })
        ));
        assert!(matches!(
            TickIcon::new(14, ROSE, 0).generate(),
            Err(SkinError::InvalidParameter {
                name: "stroke width",
                ..
            })
        ));
    }

    #[test]
    fn single_pixel_tick_collapses_onto_the_only_pixel() {
        let image = TickIcon::new(1, ROSE, 1).generate().unwrap();
        assert_eq!(image.get_pixel(0, 0).0, ROSE_RGBA);
    }
}
