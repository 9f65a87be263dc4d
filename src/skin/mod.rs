//! Procedural pixel-art bitmaps used as style assets by the sticky note.
//!
//! Both generators are pure: the same parameters always produce the same
//! pixels. Persisting them is a separate, explicit step.

pub mod assets;
mod canvas;
pub mod frame;
pub mod tick;

use std::io;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use crate::geometry::Color;

pub use assets::{default_asset_dir, SkinAssets, StoredSkin, FRAME_FILE_NAME, TICK_FILE_NAME};
pub use canvas::PixelCanvas;
pub use frame::FrameSkin;
pub use tick::TickIcon;

pub type SkinResult<T> = std::result::Result<T, SkinError>;

#[derive(Debug, Error)]
pub enum SkinError {
    #[error("invalid {name} ({value}): {reason}")]
    InvalidParameter {
        name: &'static str,
        value: u64,
        reason: &'static str,
    },
    #[error("failed to create asset directory: {path}")]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("failed to write skin asset: {path}")]
    WriteAsset {
        path: PathBuf,
        source: image::ImageError,
    },
}

pub const DEFAULT_CANVAS_SIZE: u32 = 24;
pub const DEFAULT_TICK_SIZE: u32 = 14;
pub const DEFAULT_BORDER_COLOR: Color = Color::new(0x8b, 0x4b, 0x62);
pub const DEFAULT_EDGE_THICKNESS: u32 = 4;
pub const DEFAULT_CORNER_STEP: u32 = 2;
pub const DEFAULT_STROKE_WIDTH: u32 = 3;

/// Parameters for both generated bitmaps, read from the `skin` section of `config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SkinConfig {
    pub canvas_size: u32,
    pub tick_size: u32,
    pub border_color: Color,
    pub edge_thickness: u32,
    pub corner_step: u32,
    pub stroke_width: u32,
}

impl Default for SkinConfig {
    fn default() -> Self {
        Self {
            canvas_size: DEFAULT_CANVAS_SIZE,
            tick_size: DEFAULT_TICK_SIZE,
            border_color: DEFAULT_BORDER_COLOR,
            edge_thickness: DEFAULT_EDGE_THICKNESS,
            corner_step: DEFAULT_CORNER_STEP,
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

impl SkinConfig {
    pub const fn tick_icon(&self) -> TickIcon {
        TickIcon::new(self.tick_size, self.border_color, self.stroke_width)
    }

    pub const fn frame_skin(&self) -> FrameSkin {
        FrameSkin::new(
            self.canvas_size,
            self.border_color,
            self.edge_thickness,
            self.corner_step,
        )
    }
}
