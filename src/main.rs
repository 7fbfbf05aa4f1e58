//! quillmark - preview highlighted documents in the terminal

mod logging;
mod terminal;

use std::env;
use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process;

use quillmark::{Config, Error, HighlightSession, Result};

fn main() {
    logging::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut config_path: Option<PathBuf> = None;
    let mut input: Option<PathBuf> = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-V" => {
                print_version();
                return Ok(());
            }
            "--config" | "-c" => match args.next() {
                Some(path) => config_path = Some(PathBuf::from(path)),
                None => return Err(Error::Message("--config needs a file argument".to_string())),
            },
            _ => input = Some(PathBuf::from(arg)),
        }
    }

    let config = match &config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let session = HighlightSession::new(&config)?;

    let text = match &input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        }
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for line in text.lines() {
        terminal::write_block(&mut out, line, &session.highlight_block(line))?;
    }
    out.flush()?;

    Ok(())
}

fn print_usage() {
    println!("quillmark {} - highlight novel-style Markdown", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: quillmark [OPTIONS] [FILE]");
    println!();
    println!("Reads FILE (or standard input) and prints it with highlighting.");
    println!();
    println!("Options:");
    println!("  -c, --config FILE  Read quote pairs and text size from a TOML file");
    println!("  -h, --help         Show this help message");
    println!("  -V, --version      Show version information");
    println!();
    println!("Set RUST_LOG=debug for diagnostic output on stderr.");
}

fn print_version() {
    println!("quillmark {}", env!("CARGO_PKG_VERSION"));
}
