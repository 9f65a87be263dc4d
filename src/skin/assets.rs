use std::path::{Path, PathBuf};

use image::RgbaImage;

use super::canvas::write_png;
use super::{SkinConfig, SkinResult};

pub const TICK_FILE_NAME: &str = "tick.png";
pub const FRAME_FILE_NAME: &str = "pixel_frame.png";

const ASSET_SUBDIR: &str = "pixnote";
const DEFAULT_FALLBACK_ASSET_DIR: &str = "/tmp/pixnote";

/// Both generated bitmaps, held in memory until stored.
#[derive(Debug, Clone)]
pub struct SkinAssets {
    pub tick: RgbaImage,
    pub frame: RgbaImage,
    pub slice_margin: u32,
}

/// Locations of persisted assets, consumed by the styling layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSkin {
    pub tick_path: PathBuf,
    pub frame_path: PathBuf,
    pub slice_margin: u32,
}

impl SkinAssets {
    pub fn generate(config: &SkinConfig) -> SkinResult<Self> {
        let frame_skin = config.frame_skin();
        let frame = frame_skin.generate()?;
        let tick = config.tick_icon().generate()?;
        Ok(Self {
            tick,
            frame,
            slice_margin: frame_skin.slice_margin(),
        })
    }

    pub fn store(&self, dir: &Path) -> SkinResult<StoredSkin> {
        let tick_path = dir.join(TICK_FILE_NAME);
        let frame_path = dir.join(FRAME_FILE_NAME);
        write_png(&self.tick, &tick_path)?;
        write_png(&self.frame, &frame_path)?;
        tracing::info!(dir = %dir.display(), "stored skin assets");

        Ok(StoredSkin {
            tick_path,
            frame_path,
            slice_margin: self.slice_margin,
        })
    }
}

pub fn default_asset_dir() -> PathBuf {
    asset_dir_with(std::env::var_os("XDG_RUNTIME_DIR").map(PathBuf::from).as_deref())
}

fn asset_dir_with(runtime_dir: Option<&Path>) -> PathBuf {
    match runtime_dir.filter(|dir| !dir.as_os_str().is_empty()) {
        Some(dir) => dir.join(ASSET_SUBDIR),
        None => PathBuf::from(DEFAULT_FALLBACK_ASSET_DIR),
    }
}
