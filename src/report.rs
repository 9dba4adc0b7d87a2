/*!
 * Reporting functionality for DirPrompt
 *
 * Provides functionality for generating formatted reports of run results
 * using the tabled library for clean, consistent table rendering.
 */

use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::utils::format_file_size;

/// Statistics for one prompt-generation run
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Output file path
    pub output_file: String,
    /// Time taken to scan and write
    pub duration: Duration,
    /// Number of files whose content went into the prompt
    pub files_included: usize,
    /// Number of files rendered with the ignored placeholder
    pub files_ignored: usize,
    /// Size of the generated prompt in bytes
    pub prompt_bytes: usize,
    /// Number of characters in the generated prompt
    pub prompt_chars: usize,
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
}

/// Report generator for run results
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Generate a report string based on run statistics
    pub fn generate_report(&self, report: &ScanReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(report),
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &ScanReport) {
        println!("\n{}", self.generate_report(report));
    }

    /// Format a number with human-readable units
    fn format_number(&self, num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    // Generate a console table report
    fn generate_console_report(&self, report: &ScanReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let estimated_tokens = report.prompt_chars / 4;
        let rows: Vec<SummaryRow> = vec![
            ("📂 Output File", report.output_file.clone()),
            ("⏱️ Process Time", format!("{:.4?}", report.duration)),
            ("📄 Files Included", self.format_number(report.files_included)),
            ("🚫 Files Ignored", self.format_number(report.files_ignored)),
            ("💾 Prompt Size", format_file_size(report.prompt_bytes as u64)),
            (
                "📦 LLM Tokens",
                format!("{} tokens (estimated)", self.format_number(estimated_tokens)),
            ),
        ]
        .into_iter()
        .map(|(key, value)| SummaryRow {
            key: key.to_string(),
            value,
        })
        .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        format!("✅  PROMPT GENERATED\n{}", table)
    }
}
