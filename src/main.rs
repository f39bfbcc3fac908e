use clap::Parser;

use po_unfuzzy::cli::Cli;
use po_unfuzzy::output::{JsonFormatter, OutputFormat, ReportFormatter, TextFormatter};
use po_unfuzzy::processor::{FileProcessor, ProcessOptions};
use po_unfuzzy::{EXIT_RUNTIME_ERROR, EXIT_SUCCESS};

fn main() {
    let cli = Cli::parse();
    std::process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    match run_impl(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_RUNTIME_ERROR
        }
    }
}

fn run_impl(cli: &Cli) -> po_unfuzzy::Result<i32> {
    let options = ProcessOptions {
        threshold: cli.line_shift_threshold,
        dry_run: cli.dry_run,
        keep_backup: !cli.no_backup,
        debug: cli.debug_line_shift,
    };

    let processor = FileProcessor::new(options);
    let report = processor.process(&cli.file, cli.output.as_deref())?;

    let formatted = match cli.format {
        OutputFormat::Text => TextFormatter::new(cli.verbose).format(&report)?,
        OutputFormat::Json => JsonFormatter.format(&report)?,
    };
    if !cli.quiet {
        println!("{formatted}");
    }

    Ok(EXIT_SUCCESS)
}
