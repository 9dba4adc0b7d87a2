/*!
 * Jupyter notebook flattening for DirPrompt
 *
 * Notebooks are JSON documents with an ordered cell list. For prompt output
 * each cell becomes a separator line naming its index and type, followed by
 * the raw cell source.
 */

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Notebook {
    #[serde(default)]
    cells: Vec<Cell>,
}

#[derive(Debug, Deserialize)]
struct Cell {
    cell_type: String,
    #[serde(default)]
    source: Source,
}

/// Cell source as stored on disk: a single string or a list of lines
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Source {
    Joined(String),
    Lines(Vec<String>),
}

impl Default for Source {
    fn default() -> Self {
        Source::Joined(String::new())
    }
}

impl Source {
    fn text(&self) -> String {
        match self {
            Source::Joined(text) => text.clone(),
            Source::Lines(lines) => lines.concat(),
        }
    }
}

/// Flatten notebook JSON into plain text, one section per cell
pub fn flatten(raw: &str) -> serde_json::Result<String> {
    let notebook: Notebook = serde_json::from_str(raw)?;

    let mut out = String::new();
    for (index, cell) in notebook.cells.iter().enumerate() {
        out.push_str(&format!(
            "---------- Cell {} ({}) ----------\n",
            index + 1,
            cell.cell_type
        ));
        out.push_str(&cell.source.text());
        out.push_str("\n\n");
    }

    Ok(out)
}
