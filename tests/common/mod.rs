#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const DEFAULT_SCENE_PATH: &str =
    "Assets/Plugins/ES/0_Stand/Stand_Tools/ESVMCP/RunningData/Input/indoor_room_scene.json";

/// Isolated working directory holding scene fixtures.
pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().to_path_buf();
        Self { _tmp: tmp, root }
    }

    /// Runs the binary with the fixture directory as its working directory.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("scene-report");
        cmd.current_dir(&self.root).env_remove("RUST_LOG");
        cmd
    }

    pub fn write(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture dir");
        }
        fs::write(&path, contents).expect("write fixture");
        path
    }

    pub fn write_json(&self, rel: &str, value: &Value) -> PathBuf {
        self.write(
            rel,
            &serde_json::to_string_pretty(value).expect("serialize fixture"),
        )
    }

    pub fn write_default_scene(&self, value: &Value) -> PathBuf {
        self.write_json(DEFAULT_SCENE_PATH, value)
    }

    /// Stdout of a run, split into lines.
    pub fn stdout_lines(&self, args: &[&str], success: bool) -> Vec<String> {
        let mut cmd = self.cmd();
        let assert = cmd.args(args).assert();
        let assert = if success {
            assert.success()
        } else {
            assert.failure()
        };
        let out = assert.get_output().stdout.clone();
        String::from_utf8(out)
            .expect("utf8 stdout")
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

/// A furnished room batch in the shape the scene executor consumes.
pub fn indoor_room_scene() -> Value {
    serde_json::json!({
        "commandId": "indoor_room_001",
        "timestamp": "2025-10-25T10:00:00",
        "description": "Indoor room with furniture and lighting",
        "order": 1,
        "commands": [
            {"type": "CreateGameObject", "id": "room_root", "name": "Room"},
            {"type": "CreatePrimitive", "id": "floor", "name": "Floor", "primitiveType": "Plane"},
            {"type": "CreatePrimitive", "id": "wall_north", "name": "Wall_North"},
            {"type": "CreatePrimitive", "id": "wall_south", "name": "Wall_South"},
            {"type": "CreatePrimitive", "id": "ceiling", "name": "Ceiling"},
            {"type": "CreatePrimitive", "id": "table_top", "name": "Table"},
            {"type": "CreatePrimitive", "id": "chair_1", "name": "Chair"},
            {"type": "CreatePrimitive", "id": "bookshelf", "name": "Bookshelf"},
            {"type": "CreateMaterial", "id": "wood_material", "name": "WoodMaterial"},
            {"type": "SetMaterial", "id": "table_material", "target": "table_top"},
            {"type": "CreateLight", "id": "ceiling_light", "name": "CeilingLight"},
            {"type": "AddComponent", "id": "table_collider", "component": "BoxCollider"},
            {"type": "AddComponent", "id": "chair_rigidbody", "component": "Rigidbody"},
            {"type": "SetParent", "id": "floor_parent", "target": "floor", "parent": "room_root"},
            {"type": "SetTransform", "id": "chair_transform", "position": {"x": 1, "y": 0, "z": 2}},
            {"comment": "untyped entry"}
        ]
    })
}

pub fn assert_no_statistics(lines: &[String]) {
    for l in lines {
        assert!(!l.contains("Total commands"), "unexpected stats: {}", l);
        assert!(!l.contains("related command"), "unexpected stats: {}", l);
        assert!(!l.contains("Command types"), "unexpected stats: {}", l);
    }
}

pub fn fixture_root(path: &Path) -> &str {
    path.to_str().expect("fixture path utf8")
}
