#![allow(dead_code)]

use assert_cmd::Command;
use promptshelf::domain::Document;
use std::fs;
use std::path::Path;

pub fn promptshelf_cmd() -> Command {
    let mut cmd = Command::cargo_bin("promptshelf").unwrap();
    cmd.env_remove("PROMPTSHELF_ROOT");
    cmd.env_remove("PROMPTSHELF_COPY_COMMAND");
    cmd.env_remove("PROMPTSHELF_LOG");
    cmd
}

pub fn init_library(root: &Path) {
    promptshelf_cmd().arg("init").arg(root).assert().success();
}

pub fn read_library(root: &Path) -> Document {
    let text = fs::read_to_string(root.join(".promptshelf/library.json")).unwrap();
    serde_json::from_str(&text).unwrap()
}

pub fn write_library(root: &Path, json: &str) {
    fs::write(root.join(".promptshelf/library.json"), json).unwrap();
}
