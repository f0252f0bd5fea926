//! Mathtext CLI - LaTeX math to readable plain text

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use mathtext::{
    convert_math_with_report, join_segments, segment_with_report, segments_to_json,
    ConversionReport, ReadableOptions,
};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "mathtext")]
#[command(version)]
#[command(about = "Mathtext - LaTeX math to readable plain text", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// What to produce from the input
    #[arg(short, long, value_enum, default_value_t = Mode::Plain)]
    mode: Mode,

    /// Unwrap nested braces until nothing changes (no depth limit)
    #[arg(long)]
    exhaustive_braces: bool,

    /// Total brace-unwrap passes (ignored with --exhaustive-braces)
    #[arg(long, default_value_t = mathtext::DEFAULT_BRACE_PASSES)]
    brace_passes: usize,

    /// Write a JSON report of dropped unknown commands to this path
    #[arg(long)]
    report: Option<String>,

    /// Pretty print JSON output
    #[arg(short, long)]
    pretty: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Show version and feature info
    Info,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// Mixed text in, one plain string out
    Plain,
    /// Mixed text in, JSON array of segments out
    Segments,
    /// Whole input is one math body (no delimiters)
    Math,
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Some(Commands::Info) = cli.command {
        print_info();
        return Ok(());
    }

    // Read input
    let input = match cli.input_file {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let options = if cli.exhaustive_braces {
        ReadableOptions::exhaustive()
    } else {
        ReadableOptions::new().with_brace_passes(cli.brace_passes)
    };

    let (result, dropped) = match cli.mode {
        Mode::Plain => {
            let report = segment_with_report(&input, &options);
            (join_segments(&report.content), report.dropped)
        }
        Mode::Segments => {
            let report = segment_with_report(&input, &options);
            (segments_to_json(&report.content, cli.pretty)?, report.dropped)
        }
        Mode::Math => {
            let report = convert_math_with_report(&input, &options);
            (report.content, report.dropped)
        }
    };

    if !dropped.is_empty() {
        tracing::info!(count = dropped.len(), "unknown commands dropped");
    }

    if let Some(ref path) = cli.report {
        let report = ConversionReport::new(result.clone(), dropped);
        fs::write(path, report.to_json(true)?)?;
    }

    // Output
    let newline = line_terminator(&result);
    match cli.output {
        Some(path) => {
            let mut file = fs::File::create(&path)?;
            write!(file, "{}{}", result, newline)?;
            eprintln!("✓ Output written to: {}", path);
        }
        None => {
            print!("{}{}", result, newline);
        }
    }

    Ok(())
}

/// Plain-mode output keeps the input's trailing newline; add one only when
/// it is missing.
#[cfg(feature = "cli")]
fn line_terminator(output: &str) -> &'static str {
    if output.ends_with('\n') {
        ""
    } else {
        "\n"
    }
}

#[cfg(feature = "cli")]
fn print_info() {
    println!("Mathtext - LaTeX math to readable plain text");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Delimiters:");
    println!("  \\[ ... \\]   display");
    println!("  $$ ... $$   display");
    println!("  \\( ... \\)   inline");
    println!("  $ ... $     inline");
    println!();
    println!("Modes: plain, segments (JSON), math");
    println!("WASM bindings: {}", cfg!(feature = "wasm"));
    println!();
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install mathtext --features cli");
    eprintln!("  mathtext [OPTIONS] [INPUT_FILE]");
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_line_terminator_not_doubled() {
        let output = join_segments(&mathtext::segment("Area is $\\pi r^2$.\n"));
        assert_eq!(output, "Area is pi r^2.\n");
        assert_eq!(line_terminator(&output), "");
        assert_eq!(line_terminator("(1)/(2)"), "\n");
        assert_eq!(line_terminator(""), "\n");
    }
}
