/*!
 * Prompt assembly and output writing for DirPrompt
 */

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::config::Config;
use crate::error::{DirPromptError, Result};
use crate::types::{DirectoryNode, FileNode, Node};

/// Marker substituted for files whose content is empty or whitespace
const EMPTY_MARKER: &str = "EMPTY FILE";

/// Marker substituted for files matched by an ignore-file pattern
const IGNORED_MARKER: &str = "IGNORED FILE";

/// Prompt writer for directory contents
pub struct PromptWriter {
    /// Writer configuration
    config: Config,
}

impl PromptWriter {
    /// Create a new prompt writer
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Render the glyph tree for the scanned directory
    pub fn render_tree(&self, root: &DirectoryNode) -> String {
        let mut tree = format!("{}/\n", self.config.root_name);
        render_children(&root.contents, "", &mut tree);
        tree
    }

    /// Assemble the prompt document, or the bare tree in tree-only mode
    pub fn assemble(&self, root: &DirectoryNode) -> String {
        let tree = self.render_tree(root);
        if self.config.tree_only {
            return tree;
        }

        let mut prompt = String::from("<context>\n<directory_tree>\n");
        prompt.push_str(&tree);
        prompt.push_str("</directory_tree>\n\n<files>\n\n");

        for file in root.file_nodes() {
            if let Some(block) = render_file_block(file) {
                prompt.push_str(&block);
            }
        }

        prompt.push_str("</files>\n</context>");
        prompt
    }

    /// Write the assembled prompt to the configured output file
    pub fn write(&self, prompt: &str) -> Result<()> {
        let path = &self.config.output_file;
        let file = File::create(path).map_err(|source| DirPromptError::Output {
            path: path.clone(),
            source,
        })?;

        let mut writer = BufWriter::new(file);
        writer
            .write_all(prompt.as_bytes())
            .map_err(|source| DirPromptError::Output {
                path: path.clone(),
                source,
            })?;
        writer.flush().map_err(|source| DirPromptError::Output {
            path: path.clone(),
            source,
        })?;

        Ok(())
    }
}

/// Append tree lines for the nodes at one level, recursing into directories
fn render_children(nodes: &[Node], indent: &str, tree: &mut String) {
    for (index, node) in nodes.iter().enumerate() {
        let is_last = index + 1 == nodes.len();
        let connector = if is_last { "└── " } else { "├── " };

        match node {
            Node::Directory(dir) => {
                tree.push_str(indent);
                tree.push_str(connector);
                tree.push_str(&dir.name);
                tree.push_str("/\n");

                let child_indent =
                    format!("{}{}", indent, if is_last { "    " } else { "│   " });
                render_children(&dir.contents, &child_indent, tree);
            }
            Node::File(file) => {
                tree.push_str(indent);
                tree.push_str(connector);
                tree.push_str(&file.name);
                tree.push('\n');
            }
        }
    }
}

/// Render the files-section block for one file.
///
/// Files the extension filter did not select get no block at all. Ignored
/// files keep their tree line but carry a placeholder instead of content.
/// A file whose read failed was already warned about during the scan and
/// is dropped from the files section.
fn render_file_block(file: &FileNode) -> Option<String> {
    if !file.selected {
        return None;
    }

    let content = if file.ignored {
        IGNORED_MARKER
    } else {
        match &file.content {
            Some(text) if text.trim().is_empty() => EMPTY_MARKER,
            Some(text) => text.as_str(),
            None => return None,
        }
    };

    Some(format!(
        "<file>\n<path>{}</path>\n<content>\n{}\n</content>\n</file>\n\n",
        file.path.display(),
        content
    ))
}
