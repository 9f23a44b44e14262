//! transpile CLI - command-line driver for transpile-core
//!
//! ARCHITECTURE: thin I/O layer over transpile-core. This binary handles:
//! - Reading a JSON-encoded AST fixture from a file or stdin
//! - CLI argument parsing (clap)
//! - Writing translated output to stdout or a file
//! - Process exit codes
//!
//! There is no parsing, no glob/directory handling, and no caching here: the
//! host responsible for producing the AST JSON (a parser + type-checker) is
//! out of scope for this workspace. This binary exists to make the library
//! runnable, not to be a complete developer tool.

use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

use transpile_core::ast::Node;
use transpile_core::checker::FixtureChecker;
use transpile_core::{transpile_source_file, TranspileConfig};

/// Maximum input size to prevent memory exhaustion (50MB).
const MAX_INPUT_SIZE: usize = 50 * 1024 * 1024;

/// transpile - translate a type-checked AST into target-language source
///
/// Reads a JSON-encoded AST (produced by a host parser and type-checker) and
/// emits the translated source text.
#[derive(Parser, Debug)]
#[command(name = "transpile")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:\n  \
    transpile ast.json                   Translate ast.json, print to stdout\n  \
    transpile ast.json -o out.lua        Translate and write to a file\n  \
    cat ast.json | transpile -           Read the AST from stdin\n  \
    transpile ast.json --indent-width 2  Use two-space indentation")]
struct Args {
    /// Path to a JSON-encoded AST file, or '-' to read from stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Write output to this file instead of stdout
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Number of spaces per indentation level
    #[arg(long, value_name = "N", default_value_t = 4)]
    indent_width: usize,
}

fn read_input(path: &str) -> anyhow::Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        let bytes_read = io::stdin()
            .take(MAX_INPUT_SIZE as u64 + 1)
            .read_to_string(&mut buffer)
            .context("failed to read AST JSON from stdin")?;

        if bytes_read > MAX_INPUT_SIZE {
            anyhow::bail!(
                "input too large: exceeds maximum of {} bytes ({}MB)",
                MAX_INPUT_SIZE,
                MAX_INPUT_SIZE / 1024 / 1024
            );
        }

        Ok(buffer)
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {path}"))
    }
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse();

    let raw = read_input(&args.input)?;
    let ast_root: Node = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse {} as an AST document", args.input))?;

    let checker = FixtureChecker::new();
    let config = TranspileConfig::default().with_indent_width(args.indent_width);

    let output = transpile_source_file(&ast_root, &checker, config)
        .with_context(|| format!("failed to translate {}", args.input))?;

    match args.output {
        Some(path) => {
            fs::write(&path, output)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            write!(writer, "{output}")?;
            writer.flush()?;
        }
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
