/*!
 * DirPrompt - Generate a plain-text prompt of directory contents for LLM context
 *
 * This library walks a directory tree, renders it as a glyph diagram, and
 * concatenates the contents of the surviving files into a single text
 * document for use as context for Large Language Models.
 */

pub mod clean;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod filter;
pub mod notebook;
pub mod report;
pub mod scanner;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use config::{Args, Config, IgnoreConfig};
pub use error::{DirPromptError, Result};
pub use filter::{ExtensionFilter, IgnoreRules};
pub use report::{ReportFormat, Reporter, ScanReport};
pub use scanner::Scanner;
pub use types::{DirectoryNode, FileNode, Node};
pub use utils::format_file_size;
pub use writer::PromptWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
