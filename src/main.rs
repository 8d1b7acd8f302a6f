use log::{Level, LevelFilter, Log, Metadata, Record};
use std::env;
use std::fs;
use std::process;

use phraselib::{DisplayConfig, PhraseError};

const USAGE: &str = "Usage: phraselib [-v] parse <input.abc>
       phraselib [-v] key <input.abc>
       phraselib [-v] transpose <from-key> <to-key>
       phraselib [-v] keys <input.abc> [--config <display.yaml>]";

/// Writes log records to stderr
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let level = match record.level() {
                Level::Error => "error",
                Level::Warn => "warning",
                Level::Info => "info",
                Level::Debug => "debug",
                Level::Trace => "trace",
            };
            eprintln!("{}: {}", level, record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn usage() -> ! {
    eprintln!("{}", USAGE);
    process::exit(1);
}

fn read_source(path: &str) -> String {
    match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", path, e);
            process::exit(1);
        }
    }
}

fn main() {
    let mut args: Vec<String> = env::args().skip(1).collect();

    let verbose = args.first().map_or(false, |a| a == "-v" || a == "--verbose");
    if verbose {
        args.remove(0);
    }
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(if verbose { LevelFilter::Debug } else { LevelFilter::Warn });
    }

    let command = args.first().map(String::as_str);
    match command {
        Some("parse") => {
            let path = args.get(1).unwrap_or_else(|| usage());
            run_parse(&read_source(path));
        }
        Some("key") => {
            let path = args.get(1).unwrap_or_else(|| usage());
            println!("{}", phraselib::original_key_for(&read_source(path)));
        }
        Some("transpose") => {
            let (from, to) = match (args.get(1), args.get(2)) {
                (Some(from), Some(to)) => (from, to),
                _ => usage(),
            };
            println!("{}", phraselib::get_transpose_amount(from, to));
        }
        Some("keys") => {
            let path = args.get(1).unwrap_or_else(|| usage());
            let config = match (args.get(2).map(String::as_str), args.get(3)) {
                (Some("--config"), Some(config_path)) => load_config(config_path),
                (None, _) => DisplayConfig::default(),
                _ => usage(),
            };
            run_keys(&read_source(path), &config);
        }
        _ => usage(),
    }
}

fn load_config(path: &str) -> DisplayConfig {
    match DisplayConfig::load(path) {
        Ok(config) => config,
        Err(PhraseError::Io { path, source }) => {
            eprintln!("Error reading config '{}': {}", path, source);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}

fn run_parse(source: &str) {
    let parsed = match phraselib::parse(source) {
        Some(parsed) => parsed,
        None => {
            eprintln!("Nothing to parse: input is empty");
            process::exit(1);
        }
    };

    if parsed.header.is_empty() {
        println!("# no header fields");
    } else {
        match serde_yaml::to_string(&parsed.header) {
            Ok(yaml) => print!("{}", yaml),
            Err(e) => {
                eprintln!("Error formatting header: {}", e);
                process::exit(1);
            }
        }
    }
    println!("---");
    println!("{}", parsed.body);
}

fn run_keys(source: &str, config: &DisplayConfig) {
    let views = phraselib::render_all_keys(source, config);
    for (i, view) in views.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("% Key: {} (transpose {:+})", view.key, view.transpose);
        println!("{}", view.notation);
    }
}
