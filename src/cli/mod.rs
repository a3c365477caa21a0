//! Command-line front end: log one message, JSON document or XML document.
//!
//! Shell scripts get the same framed output as the library, including file
//! output, without writing any Rust.

use crate::config::{Config, LoadReport, Settings};
use crate::internal;
use crate::level::Level;
use crate::printer::Printer;
use clap::Parser;
use std::io::{self, Read};
use std::path::PathBuf;

/// framelog - Log a message from the command line.
#[derive(Debug, Parser)]
#[command(
    name = "framelog",
    version,
    about = "Log a message, JSON or XML document as a framelog entry"
)]
pub struct Cli {
    /// Message or document (reads stdin if omitted or "-")
    pub content: Option<String>,

    /// Treat the content as JSON and pretty-print it (logged at debug)
    #[arg(long, conflicts_with = "xml")]
    pub json: bool,

    /// Treat the content as XML and re-indent it (logged at debug)
    #[arg(long)]
    pub xml: bool,

    /// Level for plain messages
    #[arg(short, long, default_value = "info")]
    pub level: Level,

    /// Tag for this entry
    #[arg(short, long)]
    pub tag: Option<String>,

    /// Caller frames to show in the header
    #[arg(short, long)]
    pub method: Option<u8>,

    /// Also write to the file backend
    #[arg(short, long)]
    pub file: bool,

    /// Settings file to use instead of the default location
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Loads settings, logs the entry described by `cli` and flushes every backend.
///
/// # Errors
/// Returns error if the settings can't be loaded, stdin can't be read, or a
/// backend fails to flush.
pub fn run(cli: &Cli) -> Result<(), crate::Error> {
    let path = match &cli.config {
        Some(path) => path.clone(),
        None => Settings::get_config_path()?,
    };
    let settings = Settings::load_from(&path)?;
    internal::init_with(&settings);
    if path.exists() {
        LoadReport::Loaded(path).log();
    } else {
        LoadReport::Missing(path).log();
    }

    let content = match cli.content.as_deref() {
        Some(text) if text != "-" => text.to_string(),
        _ => read_stdin()?,
    };

    let printer = Printer::new(Config::from_settings(&settings));
    if let Some(tag) = &cli.tag {
        printer.tag(tag);
    }
    if let Some(count) = cli.method {
        printer.method(i32::from(count));
    }
    if cli.file {
        printer.file(true);
    }

    if cli.json {
        printer.json(&content);
    } else if cli.xml {
        printer.xml(&content);
    } else {
        printer.log(cli.level, &content, &[]);
    }

    printer.flush()
}

/// Piped input usually ends with a newline that isn't part of the message.
fn read_stdin() -> Result<String, crate::Error> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf.trim_end_matches(['\r', '\n']).to_string())
}
