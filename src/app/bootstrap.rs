use std::path::{Path, PathBuf};

use crate::clock::ClockFormatter;
use crate::config::{load_app_config, AppConfig};
use crate::error::AppResult;
use crate::skin::{default_asset_dir, SkinAssets, SkinConfig, SkinError, StoredSkin};
use crate::ui::UiPalette;

pub(super) struct AppBootstrap {
    pub(super) palette: UiPalette,
    pub(super) clock: ClockFormatter,
    pub(super) skin: Option<StoredSkin>,
    pub(super) avatar: Option<PathBuf>,
}

pub(super) fn bootstrap_app_runtime() -> AppBootstrap {
    let config = load_app_config();
    tracing::info!(
        locale = config.locale.as_deref().unwrap_or("default"),
        canvas_size = config.skin.canvas_size,
        border_color = %config.skin.border_color,
        "loaded app config"
    );
    bootstrap_with(&config, &default_asset_dir())
}

fn bootstrap_with(config: &AppConfig, asset_dir: &Path) -> AppBootstrap {
    let skin = match prepare_skin_assets(&config.skin, asset_dir) {
        Ok(stored) => Some(stored),
        Err(err) => {
            tracing::warn!(?err, "skin assets unavailable; using flat borders");
            None
        }
    };

    AppBootstrap {
        palette: UiPalette::new(config.background_color, config.skin.border_color),
        clock: ClockFormatter::from_locale_name(config.locale.as_deref()),
        skin,
        avatar: resolve_avatar(config.avatar.as_deref()),
    }
}

/// Configured avatar path, kept only when it names an existing file.
fn resolve_avatar(path: Option<&Path>) -> Option<PathBuf> {
    let path = path.filter(|path| !path.as_os_str().is_empty())?;
    if path.is_file() {
        Some(path.to_path_buf())
    } else {
        tracing::warn!(path = %path.display(), "avatar image not found; header shows clock only");
        None
    }
}

/// Generates both bitmaps and writes them to `dir`. Out-of-range geometry
/// falls back to the reference proportions in the configured color; write
/// failures are returned to the caller.
pub(super) fn prepare_skin_assets(config: &SkinConfig, dir: &Path) -> AppResult<StoredSkin> {
    let assets = match SkinAssets::generate(config) {
        Ok(assets) => assets,
        Err(err @ SkinError::InvalidParameter { .. }) => {
            tracing::warn!(%err, "invalid skin config; using reference proportions");
            SkinAssets::generate(&SkinConfig {
                border_color: config.border_color,
                ..SkinConfig::default()
            })?
        }
        Err(err) => return Err(err.into()),
    };
    Ok(assets.store(dir)?)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::*;
    use crate::error::AppError;
    use crate::geometry::Color;

    fn fixture_root() -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let pid = std::process::id();
        path.push(format!("pixnote-bootstrap-{pid}-{nanos}"));
        path
    }

    fn with_temp_root<F: FnOnce(&Path)>(f: F) {
        let root = fixture_root();
        fs::create_dir_all(&root).unwrap();
        f(&root);
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn prepare_skin_assets_writes_configured_assets() {
        with_temp_root(|root| {
            let config = SkinConfig {
                canvas_size: 32,
                ..SkinConfig::default()
            };
            let stored = prepare_skin_assets(&config, root).unwrap();
            assert!(stored.frame_path.exists());
            assert!(stored.tick_path.exists());
            let frame = image::open(&stored.frame_path).unwrap().to_rgba8();
            assert_eq!(frame.dimensions(), (32, 32));
        });
    }

    #[test]
    fn invalid_geometry_falls_back_to_reference_proportions_in_configured_color() {
        with_temp_root(|root| {
            let config = SkinConfig {
                canvas_size: 8,
                border_color: Color::new(0x11, 0x22, 0x33),
                ..SkinConfig::default()
            };
            let stored = prepare_skin_assets(&config, root).unwrap();
            assert_eq!(stored.slice_margin, 6);

            let frame = image::open(&stored.frame_path).unwrap().to_rgba8();
            assert_eq!(frame.dimensions(), (24, 24));
            assert_eq!(frame.get_pixel(12, 1).0, [0x11, 0x22, 0x33, 255]);
        });
    }

    #[test]
    fn write_failure_is_surfaced_as_skin_error() {
        with_temp_root(|root| {
            let blocker = root.join("file");
            fs::write(&blocker, b"x").unwrap();
            let error = prepare_skin_assets(&SkinConfig::default(), &blocker.join("assets"))
                .unwrap_err();
            assert!(matches!(error, AppError::Skin(SkinError::CreateDir { .. })));
        });
    }

    #[test]
    fn avatar_is_kept_only_when_the_file_exists() {
        with_temp_root(|root| {
            let gif = root.join("kedi.gif");
            fs::write(&gif, b"GIF89a").unwrap();

            assert_eq!(resolve_avatar(Some(gif.as_path())), Some(gif.clone()));
            let missing = root.join("missing.gif");
            assert_eq!(resolve_avatar(Some(missing.as_path())), None);
            assert_eq!(resolve_avatar(Some(root)), None);
            assert_eq!(resolve_avatar(Some(Path::new(""))), None);
            assert_eq!(resolve_avatar(None), None);

            let config = AppConfig {
                avatar: Some(gif.clone()),
                ..AppConfig::default()
            };
            assert_eq!(bootstrap_with(&config, &root.join("assets")).avatar, Some(gif));
        });
    }

    #[test]
    fn bootstrap_without_writable_assets_keeps_running_unskinned() {
        with_temp_root(|root| {
            let blocker = root.join("file");
            fs::write(&blocker, b"x").unwrap();
            let bootstrap = bootstrap_with(&AppConfig::default(), &blocker);
            assert!(bootstrap.skin.is_none());
            assert_eq!(bootstrap.palette.background, Color::new(0xf9, 0xd5, 0xe5));
        });
    }
}
