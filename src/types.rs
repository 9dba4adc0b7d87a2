/*!
 * Core types and data structures for the DirPrompt application
 */

use std::path::PathBuf;

/// Represents a directory in the file system
#[derive(Debug, Clone)]
pub struct DirectoryNode {
    /// Directory name
    pub name: String,
    /// Relative path from scan root
    pub path: PathBuf,
    /// Directory contents, in tree order
    pub contents: Vec<Node>,
}

/// Represents a file discovered during the scan
#[derive(Debug, Clone)]
pub struct FileNode {
    /// File name
    pub name: String,
    /// Relative path from scan root
    pub path: PathBuf,
    /// Whether the extension filter selected this file for content
    pub selected: bool,
    /// Whether an ignore-file pattern matched (content replaced by placeholder)
    pub ignored: bool,
    /// File content (None when not read, or when the read failed)
    pub content: Option<String>,
}

/// A generic filesystem node
#[derive(Debug, Clone)]
pub enum Node {
    /// Directory node
    Directory(DirectoryNode),
    /// File node
    File(FileNode),
}

impl DirectoryNode {
    /// All file nodes beneath this directory, depth-first in tree order
    pub fn file_nodes(&self) -> Vec<&FileNode> {
        let mut files = Vec::new();
        self.collect_files(&mut files);
        files
    }

    fn collect_files<'a>(&'a self, out: &mut Vec<&'a FileNode>) {
        for node in &self.contents {
            match node {
                Node::Directory(dir) => dir.collect_files(out),
                Node::File(file) => out.push(file),
            }
        }
    }
}
