//! Recursive enumeration of the monitored directory.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Enumerate every regular file under `root`, recursively.
///
/// Yields `(key, path)` pairs lazily as the walker descends, where `key` is
/// the file's path relative to `root` with `/` separators on every platform.
/// Keys are what the baseline maps are indexed by, so they must be stable
/// across runs and platforms.
///
/// Hidden files are included and ignore files (.gitignore etc.) are not
/// honored: an integrity checker has to see everything. Symlinks are not
/// followed. Enumeration order is whatever the walker yields; callers treat
/// the sequence as unordered. A root that is not a directory is an error
/// before any traversal; per-entry walk errors surface as `Err` items.
pub fn walk_files(root: &Path) -> Result<impl Iterator<Item = Result<(String, PathBuf)>>> {
    if !root.is_dir() {
        return Err(Error::not_a_directory(root));
    }

    let root = root.to_path_buf();
    let walker = ignore::WalkBuilder::new(&root)
        .standard_filters(false) // No hidden/ignore/gitignore filtering
        .follow_links(false)
        .build();

    Ok(walker.filter_map(move |entry| {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => return Some(Err(e.into())),
        };
        match entry.file_type() {
            Some(file_type) if file_type.is_file() => {}
            _ => return None, // directories, including the root itself
        }

        let path = entry.into_path();
        Some(relative_key(&root, &path).map(|key| (key, path)))
    }))
}

/// Compute the stable map key for `path` relative to `root`.
fn relative_key(root: &Path, path: &Path) -> Result<String> {
    let relative = path.strip_prefix(root).map_err(|_| Error::Io {
        source: std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("Path escapes monitored root: {}", path.display()),
        ),
    })?;

    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    Ok(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::fs;
    use tempfile::TempDir;

    fn collect_files(root: &Path) -> Vec<(String, PathBuf)> {
        walk_files(root).unwrap().collect::<Result<Vec<_>>>().unwrap()
    }

    fn keys(root: &Path) -> BTreeSet<String> {
        collect_files(root).into_iter().map(|(key, _)| key).collect()
    }

    #[test]
    fn test_walk_flat_directory() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), b"a").unwrap();
        fs::write(temp_dir.path().join("b.txt"), b"b").unwrap();

        let found = keys(temp_dir.path());
        assert_eq!(
            found,
            BTreeSet::from(["a.txt".to_string(), "b.txt".to_string()])
        );
    }

    #[test]
    fn test_walk_descends_into_subdirectories() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("root.txt"), b"root").unwrap();
        fs::create_dir_all(temp_dir.path().join("sub/deep")).unwrap();
        fs::write(temp_dir.path().join("sub/mid.txt"), b"mid").unwrap();
        fs::write(temp_dir.path().join("sub/deep/leaf.txt"), b"leaf").unwrap();

        let found = keys(temp_dir.path());
        assert_eq!(
            found,
            BTreeSet::from([
                "root.txt".to_string(),
                "sub/mid.txt".to_string(),
                "sub/deep/leaf.txt".to_string(),
            ])
        );
    }

    #[test]
    fn test_walk_includes_hidden_and_ignored_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(".hidden"), b"h").unwrap();
        fs::write(temp_dir.path().join(".gitignore"), b"ignored.txt\n").unwrap();
        fs::write(temp_dir.path().join("ignored.txt"), b"i").unwrap();

        let found = keys(temp_dir.path());
        assert!(found.contains(".hidden"));
        assert!(found.contains(".gitignore"));
        assert!(found.contains("ignored.txt"));
    }

    #[test]
    fn test_walk_skips_directories_themselves() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("only_dir")).unwrap();

        assert!(keys(temp_dir.path()).is_empty());
    }

    #[test]
    fn test_walk_paths_are_absolute_and_readable() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("f.txt"), b"data").unwrap();

        let files = collect_files(temp_dir.path());
        assert_eq!(files.len(), 1);
        assert_eq!(fs::read(&files[0].1).unwrap(), b"data");
    }

    #[test]
    fn test_walk_yields_incrementally() {
        let temp_dir = TempDir::new().unwrap();
        for i in 0..5 {
            fs::write(temp_dir.path().join(format!("f{}.txt", i)), b"x").unwrap();
        }

        // The sequence can be consumed one entry at a time
        let mut iter = walk_files(temp_dir.path()).unwrap();
        let (key, path) = iter.next().unwrap().unwrap();
        assert!(key.ends_with(".txt"));
        assert!(path.is_file());
    }

    #[test]
    fn test_walk_non_directory_root() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("file.txt");
        fs::write(&file, b"x").unwrap();

        assert!(walk_files(&file).is_err());
        assert!(walk_files(&temp_dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_relative_key_outside_root_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("root");
        fs::create_dir(&root).unwrap();
        let stray = temp_dir.path().join("elsewhere/file.txt");

        let err = relative_key(&root, &stray).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("file.txt"));
    }

    #[test]
    fn test_relative_key_joins_with_slash() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        let key = relative_key(root, &root.join("a").join("b.txt")).unwrap();
        assert_eq!(key, "a/b.txt");
    }
}
