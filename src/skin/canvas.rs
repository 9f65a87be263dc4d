use std::fs;
use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};

use super::{SkinError, SkinResult};
use crate::geometry::{Color, PixelRect};

/// Write-only drawing surface. Starts fully transparent; every stamp is an
/// opaque overwrite, nothing is blended.
#[derive(Debug)]
pub struct PixelCanvas {
    image: RgbaImage,
}

impl PixelCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Stamps `rect`, clipped to the canvas.
    pub fn fill_rect(&mut self, rect: PixelRect, color: Color) {
        if rect.is_empty() {
            return;
        }
        let right = rect.x.saturating_add(rect.width).min(self.width());
        let bottom = rect.y.saturating_add(rect.height).min(self.height());
        let pixel = Rgba(color.opaque_rgba());
        for y in rect.y..bottom {
            for x in rect.x..right {
                self.image.put_pixel(x, y, pixel);
            }
        }
    }

    pub fn fill_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x < self.width() && y < self.height() {
            self.image.put_pixel(x, y, Rgba(color.opaque_rgba()));
        }
    }

    pub fn finish(self) -> RgbaImage {
        self.image
    }
}

pub(super) fn write_png(image: &RgbaImage, path: &Path) -> SkinResult<()> {
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| SkinError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| SkinError::WriteAsset {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "wrote skin asset"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROSE: Color = Color::new(0x8b, 0x4b, 0x62);

    #[test]
    fn new_canvas_is_fully_transparent() {
        let image = PixelCanvas::new(5, 3).finish();
        assert_eq!(image.dimensions(), (5, 3));
        assert!(image.pixels().all(|pixel| pixel.0 == [0, 0, 0, 0]));
    }

    #[test]
    fn fill_rect_clips_to_canvas_bounds() {
        let mut canvas = PixelCanvas::new(4, 4);
        canvas.fill_rect(PixelRect::new(2, 2, 10, 10), ROSE);
        let image = canvas.finish();

        let opaque = image.pixels().filter(|pixel| pixel.0[3] == 255).count();
        assert_eq!(opaque, 4);
        assert_eq!(image.get_pixel(3, 3).0, [0x8b, 0x4b, 0x62, 255]);
        assert_eq!(image.get_pixel(1, 1).0, [0, 0, 0, 0]);
    }

    #[test]
    fn stamps_force_full_opacity_and_overwrite_in_order() {
        let mut canvas = PixelCanvas::new(2, 1);
        canvas.fill_rect(PixelRect::new(0, 0, 2, 1), Color::with_alpha(1, 2, 3, 10));
        canvas.fill_pixel(1, 0, ROSE);
        canvas.fill_pixel(9, 9, ROSE);
        let image = canvas.finish();

        assert_eq!(image.get_pixel(0, 0).0, [1, 2, 3, 255]);
        assert_eq!(image.get_pixel(1, 0).0, [0x8b, 0x4b, 0x62, 255]);
    }

    #[test]
    fn empty_rect_stamps_nothing() {
        let mut canvas = PixelCanvas::new(3, 3);
        canvas.fill_rect(PixelRect::new(0, 0, 3, 0), ROSE);
        canvas.fill_rect(PixelRect::new(0, 0, 0, 3), ROSE);
        assert!(canvas.finish().pixels().all(|pixel| pixel.0[3] == 0));
    }
}
