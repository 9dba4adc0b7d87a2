/*!
 * Ignore rules and extension filtering for DirPrompt
 */

use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::Path;

use glob_match::glob_match;

/// Returns true if the pattern contains glob metacharacters
fn is_glob(pattern: &str) -> bool {
    pattern.contains(&['*', '?', '['][..])
}

/// Normalize an extension entry: leading dot stripped, lowercased
fn normalize_ext(entry: &str) -> String {
    entry.strip_prefix('.').unwrap_or(entry).to_lowercase()
}

/// Lowercased extension of a file name, if any
fn extension_of(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .and_then(OsStr::to_str)
        .map(str::to_lowercase)
}

/// Matching rules for entries excluded from prompt content.
///
/// Directory patterns prune entire subtrees. File patterns keep the file in
/// the tree rendering but replace its content with a placeholder. A file
/// pattern is matched as a glob against the base name; entries without glob
/// metacharacters additionally act as extension matches, so `py` and `.pyc`
/// cover `main.py` and `cache.pyc` the way `--ignore-file` advertises.
#[derive(Debug, Clone)]
pub struct IgnoreRules {
    /// Patterns pruning directories and their subtrees
    dir_patterns: Vec<String>,

    /// Patterns marking files as content-omitted
    file_patterns: Vec<String>,

    /// Extension forms of the non-glob file patterns
    file_exts: HashSet<String>,
}

impl IgnoreRules {
    /// Create rules from merged directory and file pattern lists
    pub fn new(dir_patterns: Vec<String>, file_patterns: Vec<String>) -> Self {
        let file_exts = file_patterns
            .iter()
            .filter(|pattern| !is_glob(pattern))
            .map(|pattern| normalize_ext(pattern))
            .collect();

        Self {
            dir_patterns,
            file_patterns,
            file_exts,
        }
    }

    /// Check if a directory should be pruned from the scan
    pub fn dir_ignored(&self, name: &str) -> bool {
        self.dir_patterns.iter().any(|p| glob_match(p, name))
    }

    /// Check if a file's content should be replaced by a placeholder
    pub fn file_ignored(&self, name: &str) -> bool {
        if self.file_patterns.iter().any(|p| glob_match(p, name)) {
            return true;
        }

        extension_of(name).map_or(false, |ext| self.file_exts.contains(&ext))
    }
}

/// Extension filter built from the `--filter` list.
///
/// An empty list selects every file. A non-empty list selects exactly the
/// files whose extension (dot-stripped, case-insensitive) appears in it;
/// files without an extension are not selected.
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
    exts: Option<HashSet<String>>,
}

impl ExtensionFilter {
    /// Build a filter from raw CLI entries, with or without leading dots
    pub fn new(entries: &[String]) -> Self {
        if entries.is_empty() {
            return Self { exts: None };
        }

        let exts = entries.iter().map(|entry| normalize_ext(entry)).collect();
        Self { exts: Some(exts) }
    }

    /// Check if a file is eligible for content rendering
    pub fn selects(&self, name: &str) -> bool {
        match &self.exts {
            None => true,
            Some(exts) => extension_of(name).map_or(false, |ext| exts.contains(&ext)),
        }
    }
}
