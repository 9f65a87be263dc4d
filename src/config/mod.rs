use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::geometry::Color;
use crate::skin::SkinConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigPathError {
    MissingHomeDirectory,
}

const APP_DIR: &str = "pixnote";
const APP_CONFIG_FILE: &str = "config.json";

pub(crate) const DEFAULT_BACKGROUND_COLOR: Color = Color::new(0xf9, 0xd5, 0xe5);

/// Application-level settings from `config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) skin: SkinConfig,
    pub(crate) background_color: Color,
    pub(crate) locale: Option<String>,
    /// Image shown left of the clock; animated GIFs loop.
    pub(crate) avatar: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            skin: SkinConfig::default(),
            background_color: DEFAULT_BACKGROUND_COLOR,
            locale: None,
            avatar: None,
        }
    }
}

pub(crate) fn load_app_config() -> AppConfig {
    let (xdg_config_home, home) = config_env_dirs();
    load_app_config_with(xdg_config_home.as_deref(), home.as_deref())
}

fn load_app_config_with(xdg_config_home: Option<&Path>, home: Option<&Path>) -> AppConfig {
    let path = match app_config_path(APP_DIR, APP_CONFIG_FILE, xdg_config_home, home) {
        Ok(p) => p,
        Err(_) => return AppConfig::default(),
    };
    if !path.exists() {
        return AppConfig::default();
    }
    match std::fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
            tracing::warn!(?err, ?path, "failed to parse config.json; using defaults");
            AppConfig::default()
        }),
        Err(err) => {
            tracing::warn!(?err, ?path, "failed to read config.json; using defaults");
            AppConfig::default()
        }
    }
}

pub(crate) fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

pub(crate) fn app_config_path(
    app_dir: &str,
    file_name: &str,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    let mut path = config_root(xdg_config_home, home)?;
    path.push(app_dir);
    path.push(file_name);
    Ok(path)
}

fn config_root(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    if let Some(xdg) = xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(xdg.to_path_buf());
    }

    let home = home.ok_or(ConfigPathError::MissingHomeDirectory)?;
    Ok(home.join(".config"))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn fixture_root() -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let pid = std::process::id();
        path.push(format!("pixnote-config-{pid}-{nanos}"));
        path
    }

    fn with_config_file<F: FnOnce(&Path)>(contents: &str, f: F) {
        let root = fixture_root();
        let dir = root.join(APP_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(APP_CONFIG_FILE), contents).unwrap();
        f(&root);
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn app_config_path_prefers_xdg_config_home() {
        let path = app_config_path(
            "pixnote",
            "config.json",
            Some(Path::new("/tmp/config-root")),
            Some(Path::new("/tmp/home")),
        )
        .expect("path should resolve");

        assert_eq!(path, PathBuf::from("/tmp/config-root/pixnote/config.json"));
    }

    #[test]
    fn app_config_path_falls_back_to_home_dot_config() {
        let path = app_config_path("pixnote", "config.json", None, Some(Path::new("/tmp/home")))
            .expect("path should resolve");

        assert_eq!(path, PathBuf::from("/tmp/home/.config/pixnote/config.json"));
    }

    #[test]
    fn app_config_path_errors_when_home_missing_and_xdg_unset() {
        let error = app_config_path("pixnote", "config.json", None, None).unwrap_err();
        assert_eq!(error, ConfigPathError::MissingHomeDirectory);
    }

    #[test]
    fn missing_config_file_yields_defaults() {
        let root = fixture_root();
        let config = load_app_config_with(Some(&root), None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.background_color.to_hex(), "#f9d5e5");
        assert!(config.locale.is_none());
        assert!(config.avatar.is_none());
    }

    #[test]
    fn partial_config_overrides_only_given_fields() {
        with_config_file(
            r##"{"skin": {"canvas_size": 32, "stroke_width": 2}, "locale": "en_US", "avatar": "/home/me/kedi.gif"}"##,
            |root| {
                let config = load_app_config_with(Some(root), None);
                assert_eq!(config.skin.canvas_size, 32);
                assert_eq!(config.skin.stroke_width, 2);
                assert_eq!(config.skin.edge_thickness, 4);
                assert_eq!(config.background_color, DEFAULT_BACKGROUND_COLOR);
                assert_eq!(config.locale.as_deref(), Some("en_US"));
                assert_eq!(config.avatar, Some(PathBuf::from("/home/me/kedi.gif")));
            },
        );
    }

    #[test]
    fn malformed_config_falls_back_to_defaults() {
        with_config_file(r#"{"skin": {"border_color": "rose"}}"#, |root| {
            assert_eq!(load_app_config_with(Some(root), None), AppConfig::default());
        });
        with_config_file("{ not json", |root| {
            assert_eq!(load_app_config_with(Some(root), None), AppConfig::default());
        });
    }
}
