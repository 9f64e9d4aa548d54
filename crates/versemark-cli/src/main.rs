//! Parses verse markup and prints the structured result.
//!
//! One verse per input line. Input comes from a file argument or stdin; a
//! file that does not exist locally is also tried inside the configured
//! module library. `--clean` prints clean text only instead of JSON.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;
use std::{env, process};
use versemark_config::Config;
use versemark_engine::parse_verse;

struct Args {
    input: Option<PathBuf>,
    clean_only: bool,
}

fn parse_args() -> Args {
    let mut args = Args {
        input: None,
        clean_only: false,
    };
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--clean" => args.clean_only = true,
            "--help" | "-h" => {
                eprintln!("usage: versemark [--clean] [FILE]");
                eprintln!();
                eprintln!("Parses verse markup, one verse per line, from FILE or stdin.");
                eprintln!("  --clean   print clean text only instead of JSON");
                process::exit(0);
            }
            _ if arg.starts_with('-') => {
                eprintln!("unknown option: {arg}");
                process::exit(2);
            }
            _ => args.input = Some(PathBuf::from(arg)),
        }
    }
    args
}

/// Resolves an input path, falling back to the configured module library
/// when the file is not found where given.
fn resolve_input(path: PathBuf) -> PathBuf {
    if path.exists() {
        return path;
    }
    if let Ok(Some(config)) = Config::load()
        && let Some(name) = path.file_name()
    {
        let in_library = config.version_path(&name.to_string_lossy());
        if in_library.exists() {
            return in_library;
        }
    }
    path
}

fn read_input(input: Option<PathBuf>) -> Result<String> {
    match input {
        Some(path) => {
            let path = resolve_input(path);
            std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn main() -> Result<()> {
    let args = parse_args();
    let content = read_input(args.input)?;

    for line in content.lines().filter(|line| !line.trim().is_empty()) {
        let parsed = parse_verse(line);
        if args.clean_only {
            println!("{}", parsed.clean_text);
        } else {
            println!("{}", serde_json::to_string(&parsed)?);
        }
    }

    Ok(())
}
