#![forbid(unsafe_code)]

//! `framelog` - Boxed, multi-backend logging facade.
//!
//! Every log call renders either a single bare line or a bordered block holding
//! the calling frames, any appended fragments and the message, then hands each
//! line to every registered backend in order:
//! - Positional argument substitution (`{}`, `{N}`, `%s`, `%d`)
//! - Pretty-printing of JSON, XML and `serde::Serialize` values
//! - Per-thread one-shot overrides (`tag`, `method`, `file`, `append*`)
//! - Pluggable backends with file output gated per call
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use framelog::{Config, Level, MemoryBackend, Printer};
//!
//! let memory = Arc::new(MemoryBackend::new());
//! let mut config = Config::default();
//! config
//!     .tag("APP")
//!     .method_count(0)
//!     .show_thread_info(false)
//!     .log_level(Level::Debug)
//!     .add_logger(memory.clone());
//!
//! let printer = Printer::new(config);
//! printer.info("hello %s", &[&"world"]);
//! printer.verbose("filtered out", &[]);
//!
//! assert_eq!(memory.lines(), vec!["hello world"]);
//! ```
//!
//! # Features
//!
//! - `cli` (default): builds the `framelog` command-line tool

pub mod config;
pub mod error;
pub mod facade;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod output;
pub mod overlay;
pub mod printer;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use config::{Config, DEFAULT_TAG, LoadReport, Settings, SuppressionRule, is_host_unreachable};
pub use error::Error;
pub use level::{Level, ParseLevelError};
pub use output::{Backend, ConsoleBackend, FileBackend, MemoryBackend, MemoryRecord};
pub use overlay::Overlay;
pub use printer::{CallStack, Entry, Frame, Printer, stack_trace_string};
