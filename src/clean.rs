/*!
 * Cleanup of previously generated prompt files
 */

use std::fs;
use std::path::PathBuf;

use log::warn;
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{DirPromptError, Result};
use crate::filter::IgnoreRules;
use crate::scanner::collect_dir_names;

/// Suffix of the generated-file naming convention
const PROMPT_SUFFIX: &str = "_prompt.txt";

/// Delete prompt files earlier runs left under the target directory.
///
/// A candidate is removed only when its name follows the
/// `<directory>_prompt.txt` convention for a directory that exists in the
/// scanned tree (the scan root included). Other files ending in
/// `_prompt.txt` are never touched.
pub fn clean_prompts(config: &Config) -> Result<()> {
    let rules = IgnoreRules::new(config.ignore_dirs.clone(), config.ignore_files.clone());

    let mut names = collect_dir_names(&config.target_dir, &rules);
    names.insert(config.root_name.clone());

    let mut removed = 0;
    for candidate in find_prompt_files(config) {
        let stem = match candidate.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => stem,
            None => continue,
        };
        let base = match stem.strip_suffix("_prompt") {
            Some(base) => base,
            None => continue,
        };
        if !names.contains(base) {
            continue;
        }

        fs::remove_file(&candidate).map_err(|source| DirPromptError::Cleanup {
            path: candidate.clone(),
            source,
        })?;
        println!("Removed {}", candidate.display());
        removed += 1;
    }

    if removed == 0 {
        println!(
            "No matching prompt files found to clean under {}",
            config.target_dir.display()
        );
    }

    Ok(())
}

/// Every `*_prompt.txt` under the root, descending into ignored and hidden
/// directories as well
fn find_prompt_files(config: &Config) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    let entries = WalkDir::new(&config.target_dir)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry during cleanup: {}", e);
                None
            }
        });

    for entry in entries {
        if entry.file_type().is_file()
            && entry.file_name().to_string_lossy().ends_with(PROMPT_SUFFIX)
        {
            candidates.push(entry.into_path());
        }
    }

    candidates
}
