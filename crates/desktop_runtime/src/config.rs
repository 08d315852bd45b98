//! Desktop settings and per-window layout defaults.
//!
//! `window_catalog.toml` is validated by the build script and embedded as JSON; this module
//! decodes it into a [`DesktopConfig`] and falls back to built-in defaults if that fails.

use leptos::logging;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    geometry::{GeometryLimits, WindowGeometry},
    model::{Point, Size, WindowId, DEFAULT_BASE_Z_INDEX},
};

mod generated {
    include!(concat!(env!("OUT_DIR"), "/window_catalog_generated.rs"));
}

pub const CATALOG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("window catalog is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("window catalog schema mismatch: expected {expected} found {found}")]
    SchemaVersion { expected: u32, found: u32 },
    #[error("window catalog has no entry for `{0}`")]
    MissingWindow(WindowId),
    #[error("window catalog lists `{0}` more than once")]
    DuplicateWindow(WindowId),
    #[error("window `{id}` default size {width}x{height} is below the configured minimum")]
    BelowMinimum { id: WindowId, width: i32, height: i32 },
}

#[derive(Debug, Deserialize)]
struct RawWindowEntry {
    id: WindowId,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    resizable: bool,
    draggable: bool,
    show_on_desktop: bool,
    desktop_label: String,
}

#[derive(Debug, Deserialize)]
struct RawCatalog {
    schema_version: u32,
    base_z_index: u32,
    title_bar_height: i32,
    min_width: i32,
    min_height: i32,
    taskbar_height: i32,
    #[serde(default)]
    boot_open: Vec<WindowId>,
    windows: Vec<RawWindowEntry>,
}

/// Default placement and behavior of one window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowLayout {
    pub id: WindowId,
    pub position: Point,
    pub size: Size,
    pub resizable: bool,
    pub draggable: bool,
    pub show_on_desktop: bool,
    pub desktop_label: String,
}

impl WindowLayout {
    fn fallback(id: WindowId) -> Self {
        let step = id.index() as i32 * 28;
        Self {
            id,
            position: Point::new(96 + step, 48 + step),
            size: Size::new(480, 360),
            resizable: true,
            draggable: true,
            show_on_desktop: true,
            desktop_label: id.title().to_string(),
        }
    }

    /// Fresh geometry for a window that is being mounted.
    pub fn initial_geometry(&self) -> WindowGeometry {
        WindowGeometry::new(self.position, self.size)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopConfig {
    pub base_z_index: u32,
    pub title_bar_height: i32,
    pub min_size: Size,
    pub taskbar_height: i32,
    /// Windows opened at boot, in order.
    pub boot_open: Vec<WindowId>,
    layouts: Vec<WindowLayout>,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            base_z_index: DEFAULT_BASE_Z_INDEX,
            title_bar_height: 28,
            min_size: Size::new(240, 160),
            taskbar_height: 38,
            boot_open: Vec::new(),
            layouts: WindowId::ALL.into_iter().map(WindowLayout::fallback).collect(),
        }
    }
}

impl DesktopConfig {
    /// Decodes the embedded catalog, logging and falling back to defaults on failure.
    pub fn load() -> Self {
        match Self::from_json(generated::WINDOW_CATALOG_JSON) {
            Ok(config) => config,
            Err(err) => {
                logging::warn!("window catalog rejected, using defaults: {err}");
                Self::default()
            }
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let catalog: RawCatalog = serde_json::from_str(raw)?;
        if catalog.schema_version != CATALOG_SCHEMA_VERSION {
            return Err(ConfigError::SchemaVersion {
                expected: CATALOG_SCHEMA_VERSION,
                found: catalog.schema_version,
            });
        }

        let min_size = Size::new(catalog.min_width, catalog.min_height);
        let mut slots: Vec<Option<WindowLayout>> = vec![None; WindowId::COUNT];
        for entry in catalog.windows {
            let slot = &mut slots[entry.id.index()];
            if slot.is_some() {
                return Err(ConfigError::DuplicateWindow(entry.id));
            }
            if entry.width < min_size.width || entry.height < min_size.height {
                return Err(ConfigError::BelowMinimum {
                    id: entry.id,
                    width: entry.width,
                    height: entry.height,
                });
            }
            *slot = Some(WindowLayout {
                id: entry.id,
                position: Point::new(entry.x, entry.y),
                size: Size::new(entry.width, entry.height),
                resizable: entry.resizable,
                draggable: entry.draggable,
                show_on_desktop: entry.show_on_desktop,
                desktop_label: entry.desktop_label,
            });
        }

        let layouts = WindowId::ALL
            .into_iter()
            .map(|id| slots[id.index()].take().ok_or(ConfigError::MissingWindow(id)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            base_z_index: catalog.base_z_index,
            title_bar_height: catalog.title_bar_height,
            min_size,
            taskbar_height: catalog.taskbar_height,
            boot_open: catalog.boot_open,
            layouts,
        })
    }

    pub fn layout(&self, id: WindowId) -> &WindowLayout {
        &self.layouts[id.index()]
    }

    /// Layouts of windows that get a desktop icon, in canonical order.
    pub fn desktop_icons(&self) -> impl Iterator<Item = &WindowLayout> + '_ {
        self.layouts.iter().filter(|layout| layout.show_on_desktop)
    }

    pub fn limits(&self) -> GeometryLimits {
        GeometryLimits {
            min_size: self.min_size,
            title_bar_height: self.title_bar_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn catalog_json(windows: &[(&str, i32, i32)], boot_open: &[&str]) -> String {
        let windows: Vec<serde_json::Value> = windows
            .iter()
            .map(|(id, width, height)| {
                serde_json::json!({
                    "id": id,
                    "x": 10,
                    "y": 20,
                    "width": width,
                    "height": height,
                    "resizable": true,
                    "draggable": true,
                    "show_on_desktop": *id != "now-playing",
                    "desktop_label": id,
                })
            })
            .collect();
        serde_json::json!({
            "schema_version": 1,
            "base_z_index": 21,
            "title_bar_height": 28,
            "min_width": 200,
            "min_height": 150,
            "taskbar_height": 38,
            "boot_open": boot_open,
            "windows": windows,
        })
        .to_string()
    }

    fn all_windows() -> Vec<(&'static str, i32, i32)> {
        WindowId::ALL
            .into_iter()
            .map(|id| (id.token(), 400, 300))
            .collect()
    }

    #[test]
    fn embedded_catalog_decodes() {
        let config = DesktopConfig::from_json(generated::WINDOW_CATALOG_JSON)
            .expect("embedded catalog is valid");
        assert_eq!(config.base_z_index, DEFAULT_BASE_Z_INDEX);
        for id in WindowId::ALL {
            assert_eq!(config.layout(id).id, id);
            assert!(config.layout(id).size.width >= config.min_size.width);
        }
    }

    #[test]
    fn complete_catalog_builds_layouts_and_boot_list() {
        let config =
            DesktopConfig::from_json(&catalog_json(&all_windows(), &["essays", "about"]))
                .expect("valid catalog");

        assert_eq!(config.boot_open, vec![WindowId::Essays, WindowId::About]);
        assert_eq!(
            config.limits(),
            GeometryLimits {
                min_size: Size::new(200, 150),
                title_bar_height: 28,
            }
        );
        let about = config.layout(WindowId::About);
        assert_eq!(about.position, Point::new(10, 20));
        assert_eq!(about.size, Size::new(400, 300));
        assert_eq!(config.desktop_icons().count(), WindowId::COUNT - 1);
        assert!(config
            .desktop_icons()
            .all(|layout| layout.id != WindowId::NowPlaying));
    }

    #[test]
    fn missing_window_is_rejected() {
        let mut windows = all_windows();
        windows.retain(|(id, _, _)| *id != "chess");

        let err = DesktopConfig::from_json(&catalog_json(&windows, &[])).unwrap_err();

        assert!(matches!(err, ConfigError::MissingWindow(WindowId::Chess)));
    }

    #[test]
    fn duplicate_window_is_rejected() {
        let mut windows = all_windows();
        windows.push(("snake", 400, 300));

        let err = DesktopConfig::from_json(&catalog_json(&windows, &[])).unwrap_err();

        assert!(matches!(err, ConfigError::DuplicateWindow(WindowId::Snake)));
    }

    #[test]
    fn undersized_default_is_rejected() {
        let mut windows = all_windows();
        windows[0] = ("about", 120, 300);

        let err = DesktopConfig::from_json(&catalog_json(&windows, &[])).unwrap_err();

        assert!(matches!(
            err,
            ConfigError::BelowMinimum {
                id: WindowId::About,
                width: 120,
                ..
            }
        ));
    }

    #[test]
    fn unknown_window_token_fails_to_decode() {
        let mut windows = all_windows();
        windows.push(("minesweeper", 400, 300));

        let err = DesktopConfig::from_json(&catalog_json(&windows, &[])).unwrap_err();

        assert!(matches!(err, ConfigError::Decode(_)));
    }

    #[test]
    fn schema_version_mismatch_is_rejected() {
        let raw = catalog_json(&all_windows(), &[]).replace(
            "\"schema_version\":1",
            "\"schema_version\":2",
        );

        let err = DesktopConfig::from_json(&raw).unwrap_err();

        assert!(matches!(
            err,
            ConfigError::SchemaVersion {
                expected: 1,
                found: 2
            }
        ));
    }

    #[test]
    fn defaults_cover_every_window() {
        let config = DesktopConfig::default();
        for id in WindowId::ALL {
            assert_eq!(config.layout(id).desktop_label, id.title());
            assert!(!config.layout(id).initial_geometry().minimized);
        }
    }
}
