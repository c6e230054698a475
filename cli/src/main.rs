//! doctext CLI - PDF and DOCX text extraction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use doctext::{
    detect_kind_from_path, extract_resume, extract_with_options, parse_file, render, DocumentKind,
    JsonFormat, ParseOptions,
};

#[derive(Parser)]
#[command(name = "doctext")]
#[command(version)]
#[command(about = "Extract plain text from PDF and DOCX documents", long_about = None)]
struct Cli {
    /// Input document
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Fail on read errors instead of continuing with partial text
    #[arg(long, global = true, env = "DOCTEXT_STRICT")]
    strict: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract PDF text, print it and save it to a text file
    Pdf {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output text file (defaults to <stem>.txt in the working directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Extract a DOCX resume and print it as JSON
    Resume {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Also write the JSON to this file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Extract plain text from any supported document
    Text {
        /// Input document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Document kind (inferred from extension or content if omitted)
        #[arg(long, value_enum)]
        kind: Option<KindArg>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show document information
    Info {
        /// Input document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Document kind (inferred from extension or content if omitted)
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum KindArg {
    /// PDF document
    Pdf,
    /// Word (DOCX) document
    Docx,
}

impl From<KindArg> for DocumentKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Pdf => DocumentKind::Pdf,
            KindArg::Docx => DocumentKind::WordDoc,
        }
    }
}

/// Logger for the binary. Recovered read failures are logged at `warn`,
/// so that is the floor unless `RUST_LOG` says otherwise.
fn logger_builder(env: env_logger::Env) -> env_logger::Builder {
    env_logger::Builder::from_env(env.default_filter_or("warn"))
}

fn main() {
    logger_builder(env_logger::Env::default()).init();

    let cli = Cli::parse();

    let options = if cli.strict {
        ParseOptions::new().strict()
    } else {
        ParseOptions::new().lenient()
    };

    let result = match cli.command {
        Some(Commands::Pdf { input, output }) => cmd_pdf(&input, output.as_deref(), &options),
        Some(Commands::Resume {
            input,
            output,
            compact,
        }) => cmd_resume(&input, output.as_deref(), compact, &options),
        Some(Commands::Text {
            input,
            kind,
            output,
        }) => cmd_text(&input, kind, output.as_deref(), &options),
        Some(Commands::Info { input, kind }) => cmd_info(&input, kind),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            if let Some(input) = cli.input {
                cmd_text(&input, None, None, &options)
            } else {
                println!("{}", "Usage: doctext <FILE>".yellow());
                println!("       doctext --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn resolve_kind(input: &Path, kind: Option<KindArg>) -> doctext::Result<DocumentKind> {
    match kind {
        Some(k) => Ok(k.into()),
        None => detect_kind_from_path(input),
    }
}

/// Default output path for `pdf`: `<stem>.txt` in the working directory.
fn default_text_output(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    PathBuf::from(format!("{}.txt", stem))
}

fn cmd_pdf(
    input: &Path,
    output: Option<&Path>,
    options: &ParseOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = extract_with_options(input, DocumentKind::Pdf, options)?.to_string();

    println!("=== EXTRACTED TEXT ===");
    println!("{}", text);

    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_text_output(input));
    render::write_text(&path, &text)?;

    println!("\n{} {}", "Text has been saved to".green(), path.display());
    Ok(())
}

fn cmd_resume(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    options: &ParseOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let record = extract_resume(input, options)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = render::to_json(&record, format)?;

    println!("Extracted resume data:");
    println!("{}", json);

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    }

    Ok(())
}

fn cmd_text(
    input: &Path,
    kind: Option<KindArg>,
    output: Option<&Path>,
    options: &ParseOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let kind = resolve_kind(input, kind)?;
    let text = extract_with_options(input, kind, options)?.to_string();

    if let Some(path) = output {
        render::write_text(path, &text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        print!("{}", text);
    }

    Ok(())
}

fn cmd_info(input: &Path, kind: Option<KindArg>) -> Result<(), Box<dyn std::error::Error>> {
    let kind = resolve_kind(input, kind)?;
    let doc = parse_file(input, kind)?;
    let meta = &doc.metadata;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    if meta.version.is_empty() {
        println!("{}: {}", "Format".bold(), kind);
    } else {
        println!("{}: {} {}", "Format".bold(), kind, meta.version);
    }
    let unit_label = match kind {
        DocumentKind::Pdf => "Pages",
        DocumentKind::WordDoc => "Paragraphs",
    };
    println!("{}: {}", unit_label.bold(), meta.unit_count);

    if kind == DocumentKind::Pdf {
        println!(
            "{}: {}",
            "Encrypted".bold(),
            if meta.encrypted { "Yes" } else { "No" }
        );
    }

    for (label, value) in [
        ("Title", &meta.title),
        ("Author", &meta.author),
        ("Creator", &meta.creator),
        ("Producer", &meta.producer),
    ] {
        if let Some(value) = value {
            println!("{}: {}", label.bold(), value);
        }
    }
    if let Some(ref created) = meta.created {
        println!("{}: {}", "Created".bold(), created);
    }
    if let Some(ref modified) = meta.modified {
        println!("{}: {}", "Modified".bold(), modified);
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let text = doc.plain_text();
    let words = text.split_whitespace().count();
    let chars = text.chars().count();
    let fragments = doc.extracted_text().len();

    println!("{}: {}", "Text units".bold(), fragments);
    println!("{}: {}", "Words".bold(), words);
    println!("{}: {}", "Characters".bold(), chars);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "doctext".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("PDF and DOCX text extraction tool");
    println!();
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_text_output() {
        let path = default_text_output(Path::new("/docs/Career Overview.pdf"));
        assert_eq!(path, PathBuf::from("Career Overview.txt"));
    }

    #[test]
    fn test_resolve_kind_prefers_flag() {
        let kind = resolve_kind(Path::new("file.pdf"), Some(KindArg::Docx)).unwrap();
        assert_eq!(kind, DocumentKind::WordDoc);

        let kind = resolve_kind(Path::new("file.pdf"), None).unwrap();
        assert_eq!(kind, DocumentKind::Pdf);
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["doctext", "resume", "cv.docx", "--compact"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Resume { compact: true, .. })
        ));

        let cli = Cli::try_parse_from(["doctext", "--strict", "pdf", "a.pdf", "-o", "a.txt"])
            .unwrap();
        assert!(cli.strict);
    }

    #[test]
    fn test_logger_defaults_to_warn() {
        let env = env_logger::Env::new().filter("DOCTEXT_TEST_UNSET_LOG");
        let logger = logger_builder(env).build();
        assert_eq!(logger.filter(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_logger_respects_explicit_filter() {
        let env = env_logger::Env::new()
            .filter("DOCTEXT_TEST_UNSET_LOG")
            .default_filter_or("debug");
        let logger = env_logger::Builder::from_env(env).build();
        assert_eq!(logger.filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_pdf_command_saves_printed_text() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.txt");
        let missing = dir.path().join("missing.pdf");

        // Lenient mode: a missing PDF still produces an (empty) output file.
        cmd_pdf(&missing, Some(&out), &ParseOptions::new().lenient()).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "");

        let result = cmd_pdf(&missing, Some(&out), &ParseOptions::new().strict());
        assert!(result.is_err());
    }
}
