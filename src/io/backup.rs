//! Backup management
//!
//! Before a file is rewritten a timestamped copy is placed beside it.
//! `clean_backups` removes the copies a previous run left behind.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::{IoContext, NormalizerResult};

/// Copies `path` to a sibling `<file name>.<yyyyMMdd_HHmmss>.bak` and
/// returns the backup path.
pub fn create_backup(path: &Path) -> NormalizerResult<PathBuf> {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let original_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let backup = path.with_file_name(format!("{original_name}.{timestamp}.bak"));
    fs::copy(path, &backup)
        .with_io_context(&format!("could not back up {}", path.display()))?;
    Ok(backup)
}

/// Deletes stale backup files under the target (or beside a single-file
/// target) and returns how many were removed. Individual delete failures
/// are logged and do not stop the sweep.
pub fn clean_backups(target: &Path) -> NormalizerResult<usize> {
    let root = if target.is_file() {
        target
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    } else {
        target.to_path_buf()
    };

    let backup_name = Regex::new(r"\.\d{8}_\d{6}\.bak$")
        .expect("Failed to compile backup name regex");

    let mut removed = 0;
    sweep(&root, &backup_name, &mut removed)?;
    Ok(removed)
}

fn sweep(dir: &Path, backup_name: &Regex, removed: &mut usize) -> NormalizerResult<()> {
    let entries = fs::read_dir(dir)
        .with_io_context(&format!("could not read directory {}", dir.display()))?;

    for entry in entries.filter_map(|entry| entry.ok()) {
        let path = entry.path();
        if path.is_dir() {
            sweep(&path, backup_name, removed)?;
        } else if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
            if backup_name.is_match(name) {
                match fs::remove_file(&path) {
                    Ok(()) => *removed += 1,
                    Err(e) => log::warn!("could not delete backup {}: {e}", path.display()),
                }
            }
        }
    }
    Ok(())
}
