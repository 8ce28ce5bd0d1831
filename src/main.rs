use std::{
    fs::read_to_string,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use anyhow::{Context, Result};
use clap::Parser;
use dlang_lexer::{display_error, lexer::lexer::tokenize};

#[derive(Parser)]
#[command(name = "dlang-lex")]
#[command(version, about = "Lexical analyzer for DLang", long_about = None)]
struct Cli {
    /// Source file to scan; starts an interactive prompt when omitted
    input: Option<PathBuf>,

    /// Also print the line each token starts on
    #[arg(long)]
    lines: bool,

    /// In interactive mode, collect lines until `END` and scan them as one block
    #[arg(long)]
    block: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn log_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_filter(cli.verbose)))
        .init();

    match &cli.input {
        Some(path) => scan_file(path, cli.lines),
        None => {
            repl(cli.lines, cli.block)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn scan_file(path: &Path, show_lines: bool) -> Result<ExitCode> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned());

    let source = read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let start = Instant::now();
    let clean = analyze(&source, Some(file_name), show_lines);
    log::info!("Tokenized in {:?}", start.elapsed());

    Ok(if clean { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn repl(show_lines: bool, block: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    if block {
        println!("Enter DLang code, then `END` on its own line to scan it.");
    }

    loop {
        print!("dlang > ");
        stdout.flush()?;

        let source = if block {
            read_block(&mut input)?
        } else {
            read_single_line(&mut input)?
        };

        let Some(source) = source else {
            println!();
            break;
        };

        if source.trim().eq_ignore_ascii_case("exit") {
            break;
        }

        analyze(&source, None, show_lines);
    }

    println!("Lexical analysis complete.");
    Ok(())
}

/// Reads one line, or `None` at end of input.
fn read_single_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line))
}

/// Reads lines up to a line reading `END`. Returns `None` when input ends
/// before any line was read.
fn read_block<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut lines = Vec::new();

    for line in input.lines() {
        let line = line?;
        if line.trim().eq_ignore_ascii_case("END") {
            return Ok(Some(lines.join("\n")));
        }
        lines.push(line);
    }

    if lines.is_empty() {
        Ok(None)
    } else {
        Ok(Some(lines.join("\n")))
    }
}

/// Prints every token and diagnostic of `source`. Returns whether the scan
/// was free of diagnostics.
fn analyze(source: &str, file: Option<String>, show_lines: bool) -> bool {
    let (tokens, diagnostics) = tokenize(source, file);

    if tokens.is_empty() && diagnostics.is_empty() {
        println!("No tokens found.");
    }

    for token in &tokens {
        if show_lines {
            println!("{}, line={}", token, token.line);
        } else {
            println!("{}", token);
        }
    }

    for diagnostic in &diagnostics {
        display_error(diagnostic, source);
    }

    diagnostics.is_empty()
}
