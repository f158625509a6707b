use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use tracing::debug;
use tracing::warn;
use walkdir::DirEntry;
use walkdir::WalkDir;

use crate::config::FinderConfig;
use crate::error::FinderError;
use crate::error::Result;

/// Enumerates candidate files under a root directory.
///
/// Entries are visited depth first in file-name order, so the output order
/// is stable for a fixed tree. Symlinked directories are followed, and a
/// link that leads back to one of its ancestors is skipped.
pub struct PathCollector<'a> {
    config: &'a FinderConfig,
}

impl<'a> PathCollector<'a> {
    pub fn new(config: &'a FinderConfig) -> Self {
        Self { config }
    }

    pub fn collect(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let root = std::path::absolute(root)?;
        if !root.is_dir() {
            return Err(FinderError::InvalidRoot { path: root });
        }
        if self.has_vcs_component(&root) {
            debug!("{} is inside a version-control directory", root.display());
            return Ok(Vec::new());
        }

        let mut walker = WalkDir::new(&root)
            .follow_links(self.config.follow_links)
            .sort_by_file_name();
        if let Some(depth) = self.config.max_depth {
            walker = walker.max_depth(depth.saturating_add(1));
        }

        let mut files = Vec::new();
        let entries = walker
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !self.is_pruned_dir(entry));
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.loop_ancestor().is_some() => {
                    debug!("skipping symlink loop: {err}");
                    continue;
                }
                Err(err) => {
                    warn!("skipping entry: {err}");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            if self.is_excluded_file(&root, &entry) {
                debug!("excluded {}", entry.path().display());
                continue;
            }
            files.push(entry.into_path());
        }

        debug!("collected {} files under {}", files.len(), root.display());
        Ok(files)
    }

    fn is_pruned_dir(&self, entry: &DirEntry) -> bool {
        entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.config.is_vcs_dir(name))
    }

    fn is_excluded_file(&self, root: &Path, entry: &DirEntry) -> bool {
        let name = entry.file_name().to_string_lossy();
        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        self.config.is_excluded_name(&name) || self.has_vcs_component(relative)
    }

    fn has_vcs_component(&self, path: &Path) -> bool {
        path.components().any(|component| match component {
            Component::Normal(part) => part
                .to_str()
                .is_some_and(|name| self.config.is_vcs_dir(name)),
            _ => false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "").unwrap();
    }

    fn relative(root: &Path, files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|path| {
                path.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn collects_absolute_paths_in_stable_order() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "b.txt");
        touch(dir.path(), "a/z.txt");
        touch(dir.path(), "a/y.txt");

        let config = FinderConfig::default();
        let files = PathCollector::new(&config).collect(dir.path()).unwrap();

        assert!(files.iter().all(|path| path.is_absolute()));
        let root = std::path::absolute(dir.path()).unwrap();
        assert_eq!(relative(&root, &files), vec!["a/y.txt", "a/z.txt", "b.txt"]);

        let again = PathCollector::new(&config).collect(dir.path()).unwrap();
        assert_eq!(files, again);
    }

    #[test]
    fn skips_excluded_suffixes_and_vcs_dirs() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "src/main.rs");
        touch(dir.path(), "src/.main.rs.swp");
        touch(dir.path(), "pkg/mod.pyc");
        touch(dir.path(), ".git/HEAD");
        touch(dir.path(), "vendor/.hg/store/data");
        touch(dir.path(), ".github/workflows/ci.yml");

        let config = FinderConfig::default();
        let files = PathCollector::new(&config).collect(dir.path()).unwrap();
        let root = std::path::absolute(dir.path()).unwrap();

        assert_eq!(
            relative(&root, &files),
            vec![".github/workflows/ci.yml", "src/main.rs"]
        );
    }

    #[test]
    fn configured_suffixes_are_honoured() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "main.o");
        touch(dir.path(), "main.c");

        let config = FinderConfig::default().with_extra_suffixes([".o"]);
        let files = PathCollector::new(&config).collect(dir.path()).unwrap();
        let root = std::path::absolute(dir.path()).unwrap();

        assert_eq!(relative(&root, &files), vec!["main.c"]);
    }

    #[test]
    fn max_depth_bounds_the_walk() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "top.txt");
        touch(dir.path(), "one/two/deep.txt");

        let config = FinderConfig {
            max_depth: Some(1),
            ..FinderConfig::default()
        };
        let files = PathCollector::new(&config).collect(dir.path()).unwrap();
        let root = std::path::absolute(dir.path()).unwrap();

        assert_eq!(relative(&root, &files), vec!["top.txt"]);
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = tempdir().unwrap();
        let config = FinderConfig::default();
        let err = PathCollector::new(&config)
            .collect(&dir.path().join("missing"))
            .unwrap_err();
        assert!(matches!(err, FinderError::InvalidRoot { .. }));
    }

    #[test]
    fn root_inside_vcs_dir_yields_nothing() {
        let dir = tempdir().unwrap();
        touch(dir.path(), ".git/HEAD");
        touch(dir.path(), ".git/refs/heads/main");

        let config = FinderConfig::default();
        let files = PathCollector::new(&config)
            .collect(&dir.path().join(".git/refs"))
            .unwrap();
        assert!(files.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn symlink_loops_terminate() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "a/file.txt");
        std::os::unix::fs::symlink(dir.path().join("a"), dir.path().join("a/again")).unwrap();

        let config = FinderConfig::default();
        let files = PathCollector::new(&config).collect(dir.path()).unwrap();
        let root = std::path::absolute(dir.path()).unwrap();

        assert_eq!(relative(&root, &files), vec!["a/file.txt"]);
    }
}
