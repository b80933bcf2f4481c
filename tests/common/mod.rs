//! Helpers for integration tests.

use std::path::{Path, PathBuf};

use lionweb_server_config::environment::MapSource;
use lionweb_server_config::models::config::GeneratorSettings;
use tempfile::TempDir;

/// Scratch working directory removed when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        TestDir {
            dir: tempfile::tempdir().expect("Failed to create temporary directory."),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn output_path(&self) -> PathBuf {
        self.path().join("server-config.json")
    }

    pub fn settings(&self) -> GeneratorSettings {
        GeneratorSettings {
            output_path: self.output_path(),
            template_path: None,
        }
    }
}

/// Database variables as the test harness sets them for the server container.
pub fn database_vars() -> Vec<(&'static str, &'static str)> {
    vec![
        ("PGHOST", "mypgdb"),
        ("PGPORT", "5432"),
        ("PGUSER", "postgres"),
        ("PGPASSWORD", "lionweb"),
        ("PGDB", "lionweb_test"),
    ]
}

pub fn database_source() -> MapSource {
    MapSource::from_pairs(database_vars())
}
