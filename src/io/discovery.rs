//! C# source discovery

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{IoContext, NormalizerError, NormalizerResult};

/// Directory names never descended into.
const EXCLUDED_DIRS: [&str; 3] = ["bin", "obj", ".git"];

/// Files to process for the given target. A file target is returned as
/// is; a directory is walked recursively with entries sorted by name at
/// each level, so the processing order is stable across runs.
pub fn enumerate_cs_files(target: &Path) -> NormalizerResult<Vec<PathBuf>> {
    if target.is_file() {
        return Ok(vec![target.to_path_buf()]);
    }
    if target.is_dir() {
        let mut files = Vec::new();
        walk(target, &mut files)?;
        return Ok(files);
    }
    Err(NormalizerError::TargetNotFound {
        path: target.to_path_buf(),
    })
}

fn is_excluded_dir(name: &str) -> bool {
    EXCLUDED_DIRS
        .iter()
        .any(|excluded| name.eq_ignore_ascii_case(excluded))
}

fn is_cs_file(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some("cs")
}

fn walk(dir: &Path, files: &mut Vec<PathBuf>) -> NormalizerResult<()> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)
        .with_io_context(&format!("could not read directory {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .collect();
    entries.sort();

    for path in entries {
        if path.is_dir() {
            let name = path.file_name().and_then(|name| name.to_str()).unwrap_or("");
            if is_excluded_dir(name) {
                continue;
            }
            walk(&path, files)?;
        } else if is_cs_file(&path) {
            files.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "class C {}\n").unwrap();
    }

    #[test]
    fn test_single_file_target_returns_itself() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("Player.cs");
        touch(&file);

        let files = enumerate_cs_files(&file).unwrap();
        assert_eq!(files, vec![file]);
    }

    #[test]
    fn test_directory_walk_is_recursive_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("Zebra.cs"));
        touch(&dir.path().join("Alpha.cs"));
        touch(&dir.path().join("Nested").join("Inner.cs"));
        touch(&dir.path().join("Nested").join("readme.txt"));

        let files = enumerate_cs_files(dir.path()).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|path| {
                path.strip_prefix(dir.path())
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        assert_eq!(names, vec!["Alpha.cs", "Nested/Inner.cs", "Zebra.cs"]);
    }

    #[test]
    fn test_bin_obj_and_git_directories_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("Keep.cs"));
        touch(&dir.path().join("bin").join("Generated.cs"));
        touch(&dir.path().join("OBJ").join("Temp.cs"));
        touch(&dir.path().join(".git").join("Hook.cs"));
        touch(&dir.path().join("Source").join("obj").join("Deep.cs"));
        touch(&dir.path().join("Source").join("Real.cs"));

        let files = enumerate_cs_files(dir.path()).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|path| {
                path.strip_prefix(dir.path())
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        assert_eq!(names, vec!["Keep.cs", "Source/Real.cs"]);
    }

    #[test]
    fn test_missing_target_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let result = enumerate_cs_files(&missing);
        assert!(matches!(
            result,
            Err(NormalizerError::TargetNotFound { path }) if path == missing
        ));
    }
}
