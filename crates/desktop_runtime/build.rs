use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const CATALOG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowEntry {
    id: String,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    resizable: bool,
    draggable: bool,
    show_on_desktop: bool,
    desktop_label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowCatalog {
    schema_version: u32,
    base_z_index: u32,
    title_bar_height: i32,
    min_width: i32,
    min_height: i32,
    taskbar_height: i32,
    #[serde(default)]
    boot_open: Vec<String>,
    windows: Vec<WindowEntry>,
}

fn validate(catalog: &WindowCatalog, path: &str) {
    if catalog.schema_version != CATALOG_SCHEMA_VERSION {
        panic!(
            "catalog schema mismatch in {path}: expected {CATALOG_SCHEMA_VERSION} found {}",
            catalog.schema_version
        );
    }

    let mut seen = BTreeSet::new();
    for entry in &catalog.windows {
        if !seen.insert(entry.id.as_str()) {
            panic!("duplicate window id `{}` in {path}", entry.id);
        }
        if entry.width < catalog.min_width || entry.height < catalog.min_height {
            panic!(
                "window `{}` in {path} is {}x{}, below the {}x{} minimum",
                entry.id, entry.width, entry.height, catalog.min_width, catalog.min_height
            );
        }
    }

    for id in &catalog.boot_open {
        if !seen.contains(id.as_str()) {
            panic!("boot_open names unknown window `{id}` in {path}");
        }
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("window_catalog.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let catalog: WindowCatalog = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    validate(&catalog, &path.display().to_string());

    let json = serde_json::to_string_pretty(&catalog).expect("serialize window catalog");
    let generated = format!(
        "/// Build-time generated window catalog JSON.\n\
pub const WINDOW_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("window_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
