/*!
 * Directory and file scanning functionality
 */

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::warn;
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{DirPromptError, Result};
use crate::filter::{ExtensionFilter, IgnoreRules};
use crate::notebook;
use crate::types::{DirectoryNode, FileNode, Node};

/// Hidden entries are skipped outright, except for these names
const HIDDEN_EXCEPTIONS: [&str; 2] = [".env.example", ".example.env"];

fn hidden(name: &str) -> bool {
    name.starts_with('.') && !HIDDEN_EXCEPTIONS.contains(&name)
}

/// Scanner for directory contents
pub struct Scanner {
    /// Scanner configuration
    config: Config,
    /// Extension filter built from the configured list
    filter: ExtensionFilter,
    /// Resolved output target, excluded from the scan
    output_target: PathBuf,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: Config) -> Self {
        let filter = ExtensionFilter::new(&config.filters);
        let output_target = config.resolved_output();

        Self {
            config,
            filter,
            output_target,
        }
    }

    /// Scan the target directory and return the directory tree
    pub fn scan(&self) -> Result<DirectoryNode> {
        let root = &self.config.target_dir;

        // An unreadable root is fatal; everything below it is recoverable.
        let _ = fs::read_dir(root).map_err(|source| DirPromptError::Scan {
            path: root.clone(),
            source,
        })?;

        let rules = self.build_rules();
        Ok(self.scan_directory(root, Path::new(""), &rules))
    }

    /// Ignore rules extended with the prompt files earlier runs may have
    /// left behind, so a re-run never swallows its own output.
    fn build_rules(&self) -> IgnoreRules {
        let base = IgnoreRules::new(
            self.config.ignore_dirs.clone(),
            self.config.ignore_files.clone(),
        );

        let mut names = collect_dir_names(&self.config.target_dir, &base);
        names.insert(self.config.root_name.clone());

        let mut file_patterns = self.config.ignore_files.clone();
        file_patterns.extend(names.into_iter().map(|name| format!("{}_prompt.txt", name)));

        IgnoreRules::new(self.config.ignore_dirs.clone(), file_patterns)
    }

    /// Scan a directory and return its node representation
    fn scan_directory(&self, abs_path: &Path, rel_path: &Path, rules: &IgnoreRules) -> DirectoryNode {
        let mut contents = Vec::new();

        let entries = WalkDir::new(abs_path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("Skipping unreadable entry under {}: {}", abs_path.display(), e);
                    None
                }
            });

        for entry in entries {
            let entry_name = entry.file_name().to_string_lossy().to_string();
            if hidden(&entry_name) {
                continue;
            }

            let entry_path = entry.path();
            if entry_path.is_dir() {
                if rules.dir_ignored(&entry_name) {
                    continue;
                }
                let new_rel_path = rel_path.join(&entry_name);
                let dir_node = self.scan_directory(entry_path, &new_rel_path, rules);
                contents.push(Node::Directory(dir_node));
            } else {
                if entry_path == self.output_target {
                    continue;
                }
                let file_node = self.process_file(entry_path, rel_path, entry_name, rules);
                contents.push(Node::File(file_node));
            }
        }

        DirectoryNode {
            name: abs_path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string(),
            path: rel_path.to_path_buf(),
            contents,
        }
    }

    /// Build the node for a single file, reading content when eligible
    fn process_file(
        &self,
        abs_path: &Path,
        rel_dir: &Path,
        name: String,
        rules: &IgnoreRules,
    ) -> FileNode {
        let selected = self.filter.selects(&name);
        let ignored = rules.file_ignored(&name);

        // Tree-only runs never render content, so skip the reads
        let content = if selected && !ignored && !self.config.tree_only {
            match self.read_content(abs_path) {
                Ok(text) => Some(text),
                Err(e) => {
                    warn!("Failed to read {}: {}", abs_path.display(), e);
                    None
                }
            }
        } else {
            None
        };

        FileNode {
            path: rel_dir.join(&name),
            name,
            selected,
            ignored,
            content,
        }
    }

    /// Read file content as text, flattening notebooks and falling back to
    /// a lossy decode for non-UTF-8 bytes
    fn read_content(&self, path: &Path) -> io::Result<String> {
        let bytes = fs::read(path)?;
        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
        };

        let is_notebook = path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("ipynb"));
        if is_notebook {
            match notebook::flatten(&text) {
                Ok(flattened) => return Ok(flattened),
                Err(e) => warn!(
                    "Malformed notebook {}, keeping raw text: {}",
                    path.display(),
                    e
                ),
            }
        }

        Ok(text)
    }
}

/// Names of every non-hidden, non-ignored directory under `dir`
pub fn collect_dir_names(dir: &Path, rules: &IgnoreRules) -> HashSet<String> {
    let mut names = HashSet::new();
    collect_into(dir, rules, &mut names);
    names
}

fn collect_into(dir: &Path, rules: &IgnoreRules, names: &mut HashSet<String>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Skipping unreadable directory {}: {}", dir.display(), e);
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if hidden(&name) || rules.dir_ignored(&name) {
            continue;
        }
        names.insert(name);
        collect_into(&path, rules, names);
    }
}
