/*!
 * Configuration handling for DirPrompt
 */

use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use clap_complete::Shell;
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::error::{DirPromptError, Result};
use crate::{ensure, error};

/// Ignore lists bundled with the binary
static DEFAULT_CONFIG: &str = include_str!("config.json");

/// Lazily parse the bundled ignore lists once
static DEFAULT_IGNORE: Lazy<IgnoreConfig> =
    Lazy::new(|| serde_json::from_str(DEFAULT_CONFIG).expect("embedded config.json is valid"));

/// Ignore lists as stored in a config file
#[derive(Debug, Clone, Deserialize)]
pub struct IgnoreConfig {
    /// Directory patterns pruned from the scan
    #[serde(rename = "IGNORE_DIRS")]
    pub dirs: Vec<String>,

    /// File patterns whose content is omitted
    #[serde(rename = "IGNORE_FILES")]
    pub files: Vec<String>,
}

impl IgnoreConfig {
    /// Load ignore lists from a custom config file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| DirPromptError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| DirPromptError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The bundled default ignore lists
    pub fn bundled() -> &'static Self {
        &DEFAULT_IGNORE
    }
}

/// Command-line arguments for DirPrompt
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "dirprompt",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate a plain-text prompt of directory contents for LLM context",
    long_about = "Walks a directory tree, renders it as a diagram, and concatenates the contents of the surviving files into a single text artifact, designed for providing context to Large Language Models (LLMs)."
)]
pub struct Args {
    /// Target directory to scan
    #[clap(default_value = ".")]
    pub directory: String,

    /// Comma-separated list of file extensions to include (default: all)
    #[clap(long = "filter", value_delimiter = ',')]
    pub filters: Vec<String>,

    /// Output directory for the generated prompt file
    #[clap(long, default_value = ".")]
    pub outpath: String,

    /// Output file base name (default: <directory>_prompt)
    #[clap(long)]
    pub outfile: Option<String>,

    /// Comma-separated list of extra directory patterns to ignore
    #[clap(long = "ignore-dir", value_delimiter = ',')]
    pub ignore_dirs: Vec<String>,

    /// Comma-separated list of extra file patterns to ignore
    #[clap(long = "ignore-file", value_delimiter = ',')]
    pub ignore_files: Vec<String>,

    /// Path to a custom config file (default: bundled config.json)
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Delete previously generated prompt files instead of generating one
    #[clap(long)]
    pub clean: bool,

    /// Render the directory tree only and print it to the terminal
    #[clap(long)]
    pub tree: bool,

    /// Copy the generated prompt to the clipboard
    #[clap(long, help = "Copy output to system clipboard")]
    pub clip: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,

    /// Increase log verbosity (-v: info, -vv: debug, -vvv: trace)
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Canonicalized target directory
    pub target_dir: PathBuf,

    /// Base name of the target directory
    pub root_name: String,

    /// Output prompt file path
    pub output_file: PathBuf,

    /// Merged directory patterns to ignore
    pub ignore_dirs: Vec<String>,

    /// Merged file patterns to ignore
    pub ignore_files: Vec<String>,

    /// Extensions eligible for content rendering (empty: all)
    pub filters: Vec<String>,

    /// Render the tree only
    pub tree_only: bool,

    /// Copy output to clipboard
    pub clip: bool,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Result<Self> {
        let target_dir = PathBuf::from(&args.directory)
            .canonicalize()
            .map_err(|e| error!(Config, "Invalid directory '{}': {}", args.directory, e))?;

        let root_name = target_dir
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .ok_or_else(|| error!(Config, "Cannot derive a name for {}", target_dir.display()))?;

        let ignore = match &args.config {
            Some(path) => IgnoreConfig::load(path)?,
            None => IgnoreConfig::bundled().clone(),
        };

        let outfile = args
            .outfile
            .unwrap_or_else(|| format!("{}_prompt", root_name));
        let output_file = PathBuf::from(&args.outpath).join(format!("{}.txt", outfile));

        Ok(Self {
            target_dir,
            root_name,
            output_file,
            ignore_dirs: merge_patterns(&ignore.dirs, &args.ignore_dirs),
            ignore_files: merge_patterns(&ignore.files, &args.ignore_files),
            filters: args.filters,
            tree_only: args.tree,
            clip: args.clip,
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.target_dir.is_dir(),
            Config,
            "Target directory not found: {}",
            self.target_dir.display()
        );

        if let Some(parent) = self.output_file.parent() {
            if !parent.as_os_str().is_empty() {
                ensure!(
                    parent.is_dir(),
                    Config,
                    "Output directory not found: {}",
                    parent.display()
                );
            }
        }

        Ok(())
    }

    /// Absolute path the output file will land at, used to keep the scan
    /// from picking up its own output. The file may not exist yet, so only
    /// the parent directory is resolved.
    pub fn resolved_output(&self) -> PathBuf {
        let name = match self.output_file.file_name() {
            Some(name) => name.to_os_string(),
            None => return self.output_file.clone(),
        };

        match self.output_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent
                .canonicalize()
                .map(|dir| dir.join(&name))
                .unwrap_or_else(|_| self.output_file.clone()),
            _ => env::current_dir()
                .map(|dir| dir.join(&name))
                .unwrap_or_else(|_| self.output_file.clone()),
        }
    }
}

/// Merge base and extra pattern lists, keeping first occurrences
pub(crate) fn merge_patterns(base: &[String], extra: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = base.to_vec();
    merged.extend(extra.iter().cloned());

    let mut seen = HashSet::new();
    merged.retain(|pattern| seen.insert(pattern.clone()));
    merged
}
