//! Test utilities for the artifact collector
//!
//! This module provides fixture trees and helpers shared by the unit tests.

#![cfg(test)]

use anyhow::Result;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Relative location of the artifact fixture inside the temp root
pub const FIXTURE_DIR: &str = "test/fixtures/artifacts";

/// Creates a temporary directory that is automatically cleaned up
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates the artifact fixture tree:
///
/// ```text
/// test/fixtures/artifacts/
///   Mr Freeze.jpg
///   folder/Commando.jpg
///   this is a folder with a space/The Terminator.jpg
///   gifs/Smile.gif
///   links/terminator/terminator2.jpg
///   links/folder-link -> terminator        (unix only)
/// ```
pub fn create_artifact_fixture() -> Result<TempDir> {
    let temp_dir = create_temp_dir()?;
    let base = temp_dir.path().join(FIXTURE_DIR);

    write_file(&base.join("Mr Freeze.jpg"), b"mr freeze")?;
    write_file(&base.join("folder/Commando.jpg"), b"commando")?;
    write_file(
        &base.join("this is a folder with a space/The Terminator.jpg"),
        b"the terminator",
    )?;
    write_file(&base.join("gifs/Smile.gif"), b"smile")?;
    write_file(&base.join("links/terminator/terminator2.jpg"), b"terminator 2")?;

    #[cfg(unix)]
    std::os::unix::fs::symlink("terminator", base.join("links/folder-link"))?;

    Ok(temp_dir)
}

/// Write a file, creating parent directories as needed
pub fn write_file(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
