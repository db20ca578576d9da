//! The adapters plugged into the core scaffold service.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use elemental_adapters::{FileAnswerSource, LocalFilesystem, MemoryFilesystem};
use elemental_core::{application::SPEC_FILE_NAME, prelude::*};

const ANSWERS: &str = r#"
name = "rh-card"
customElementClass = "PolymerElement"
useHAX = true
useSass = true

[[propsList]]
name = "color"
type = "String"

[[propsList]]
name = "alt"
type = "String"

[sassLibrary]
pkg = "@rhelements/rh-sass"
path = "rh-sass/rh-sass"
"#;

fn answers_file(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("answers.toml");
    fs::write(&path, ANSWERS).unwrap();
    path
}

#[test]
fn answers_file_to_disk() {
    let temp = TempDir::new().unwrap();
    let service = ScaffoldService::new(
        Box::new(FileAnswerSource::new(answers_file(&temp))),
        Box::new(LocalFilesystem::new()),
    );

    let spec = service.compile(&RememberedDefaults::default()).unwrap();
    assert_eq!(spec.class_name(), "RhCard");
    assert_eq!(spec.library_flags().variant_package(), Some("@polymer/polymer"));
    assert_eq!(spec.library_flags().sass_library_pkg(), Some("@rhelements/rh-sass"));

    let out = temp.path().join("out");
    let report = service.emit(&spec, &out, false).unwrap();
    assert_eq!(report.root, out.join("rh-card"));
    assert_eq!(report.written.len(), 3);

    let hax: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("rh-card/src/rh-card-hax.json")).unwrap())
            .unwrap();
    let quick: Vec<_> = hax["settings"]["quick"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["property"].as_str().unwrap().to_string())
        .collect();
    // color promoted to quick, alt required in both lists
    assert!(quick.contains(&"color".to_string()));
    assert!(quick.contains(&"alt".to_string()));

    let context: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(out.join("rh-card").join(SPEC_FILE_NAME)).unwrap(),
    )
    .unwrap();
    assert_eq!(context["useSass"], true);
    assert_eq!(context["litLibraryPkg"], false);
}

#[test]
fn failed_write_leaves_no_element_directory() {
    let temp = TempDir::new().unwrap();
    let fs = MemoryFilesystem::new();
    fs.fail_writes_to(Path::new("out/rh-card").join(SPEC_FILE_NAME));

    let service = ScaffoldService::new(
        Box::new(FileAnswerSource::new(answers_file(&temp))),
        Box::new(fs.clone()),
    );
    let spec = service.compile(&RememberedDefaults::default()).unwrap();

    assert!(service.emit(&spec, Path::new("out"), false).is_err());
    assert!(fs.list_files().is_empty());
}

#[test]
fn forced_rewrite_keeps_foreign_files() {
    let temp = TempDir::new().unwrap();
    let fs = MemoryFilesystem::new();
    fs.create_dir_all(Path::new("out/rh-card")).unwrap();
    fs.write_file(Path::new("out/rh-card/README.md"), "# mine").unwrap();
    fs.fail_writes_to(Path::new("out/rh-card").join(SPEC_FILE_NAME));

    let service = ScaffoldService::new(
        Box::new(FileAnswerSource::new(answers_file(&temp))),
        Box::new(fs.clone()),
    );
    let spec = service.compile(&RememberedDefaults::default()).unwrap();

    assert!(service.emit(&spec, Path::new("out"), true).is_err());
    assert_eq!(
        fs.read_file(Path::new("out/rh-card/README.md")).as_deref(),
        Some("# mine")
    );
    assert_eq!(fs.list_files().len(), 1);
}
