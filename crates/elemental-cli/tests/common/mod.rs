//! Shared helpers for the CLI test binaries.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// `elemental` isolated from the developer's config, `.env` and log settings.
pub fn elemental(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("elemental").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    for (key, _) in std::env::vars() {
        if key.starts_with("ELEMENTAL_") {
            cmd.env_remove(key);
        }
    }
    cmd
}

pub fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

pub const WIDGET_TOML: &str = r#"
name = "my-widget"
description = "A widget"
customElementClass = "LitElement"
useHAX = true

[[propsList]]
name = "title"
type = "String"

[[propsList]]
name = "src"
type = "String"
"#;

pub fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}
