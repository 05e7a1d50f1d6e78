#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use cell_narrow::Value;
use tempfile::{TempDir, tempdir};

/// Scratch directory for input and output files, removed on drop.
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            temp_dir: tempdir().expect("temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    pub fn write(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.join(name);
        fs::write(&path, contents).expect("write temp file");
        path
    }
}

/// Text cells, as a delimited-text parser hands them over.
pub fn texts(cells: &[&str]) -> Vec<Value> {
    cells.iter().map(|cell| Value::text(*cell)).collect()
}
