const DEFAULT_EXCLUDE_SUFFIXES: &[&str] = &[".swp", ".swo", ".pyc"];
const DEFAULT_VCS_DIRS: &[&str] = &[".git", ".hg", ".svn", ".bzr"];

/// Settings threaded through the collector for one search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderConfig {
    /// File-name suffixes that are never candidates (swap files, bytecode)
    pub exclude_suffixes: Vec<String>,

    /// Version-control metadata directories pruned from the walk
    pub vcs_dirs: Vec<String>,

    /// Follow symbolic links (loops are detected and skipped)
    pub follow_links: bool,

    /// Directory levels descended below the root; `Some(0)` keeps the walk
    /// to the root's own files. Unbounded when unset.
    pub max_depth: Option<usize>,
}

impl FinderConfig {
    /// Adds suffixes on top of the defaults, skipping duplicates and blanks.
    pub fn with_extra_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for suffix in suffixes {
            let suffix = suffix.into();
            if !suffix.is_empty() && !self.exclude_suffixes.contains(&suffix) {
                self.exclude_suffixes.push(suffix);
            }
        }
        self
    }

    pub fn is_excluded_name(&self, name: &str) -> bool {
        self.exclude_suffixes
            .iter()
            .any(|suffix| name.ends_with(suffix.as_str()))
    }

    pub fn is_vcs_dir(&self, name: &str) -> bool {
        self.vcs_dirs.iter().any(|dir| dir == name)
    }
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            exclude_suffixes: to_strings(DEFAULT_EXCLUDE_SUFFIXES),
            vcs_dirs: to_strings(DEFAULT_VCS_DIRS),
            follow_links: true,
            max_depth: None,
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}
