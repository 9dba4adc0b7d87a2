/*!
 * Command-line interface for DirPrompt
 */

use std::io;
use std::process;
use std::time::Instant;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use log::LevelFilter;

use dirprompt::clean::clean_prompts;
use dirprompt::clipboard;
use dirprompt::config::{Args, Config};
use dirprompt::report::{ReportFormat, Reporter, ScanReport};
use dirprompt::scanner::Scanner;
use dirprompt::writer::PromptWriter;
use dirprompt::Result;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Emit shell completions and exit, no scan involved
    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut io::stdout());
        return;
    }

    setup_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Configure the log level from the number of -v flags
fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

fn run(args: Args) -> Result<()> {
    let clean = args.clean;

    // Create and validate configuration
    let config = Config::from_args(args)?;
    config.validate()?;

    if clean {
        return clean_prompts(&config);
    }

    // Time both the scan and the write
    let start_time = Instant::now();

    let scanner = Scanner::new(config.clone());
    let writer = PromptWriter::new(config.clone());

    let root_node = scanner.scan()?;
    let prompt = writer.assemble(&root_node);
    writer.write(&prompt)?;

    let duration = start_time.elapsed();

    if config.tree_only {
        println!("{}", prompt);
    }

    if config.clip {
        clipboard::copy_to_clipboard(&prompt)?;
        println!("Prompt copied to clipboard.");
    }

    if config.tree_only {
        println!("Prompt saved to {}", config.output_file.display());
        return Ok(());
    }

    // Prepare the run report
    let files = root_node.file_nodes();
    let report = ScanReport {
        output_file: config.output_file.display().to_string(),
        duration,
        files_included: files
            .iter()
            .filter(|f| f.selected && !f.ignored && f.content.is_some())
            .count(),
        files_ignored: files.iter().filter(|f| f.selected && f.ignored).count(),
        prompt_bytes: prompt.len(),
        prompt_chars: prompt.chars().count(),
    };

    Reporter::new(ReportFormat::ConsoleTable).print_report(&report);

    Ok(())
}
