//! Caller identification for the boxed header.
//!
//! Stack walking is platform specific, so the printer only sees the
//! [`CallStack`] capability. The default implementation resolves symbols with
//! the `backtrace` crate; tests plug in fixed frames.

use std::path::Path;

/// One resolved stack frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Demangled symbol path without hash, e.g. `my_app::server::Server::start`.
    pub path: String,
    /// Source file as recorded in debug info, possibly absolute.
    pub file: String,
    pub line: u32,
}

impl Frame {
    #[must_use]
    pub fn new(path: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self {
            path: path.into(),
            file: file.into(),
            line,
        }
    }

    /// Last path segment: the function or method name.
    #[must_use]
    pub fn method_name(&self) -> &str {
        self.path.rsplit("::").next().unwrap_or(&self.path)
    }

    /// Owner of the method: the type for methods, the module for free functions.
    ///
    /// Trait impls demangle as `<my_app::Cart as my_app::Step>::run`; the
    /// implementing type (`Cart`) is the owner there, not the trait.
    #[must_use]
    pub fn type_name(&self) -> &str {
        let owner = self.path.rsplit_once("::").map_or("", |(owner, _)| owner);
        let owner = owner
            .strip_prefix('<')
            .and_then(|qualified| qualified.strip_suffix('>'))
            .map_or(owner, |qualified| {
                qualified.split_once(" as ").map_or(qualified, |(ty, _)| ty)
            });
        owner.rsplit("::").next().unwrap_or(owner)
    }

    /// File name without directories.
    #[must_use]
    pub fn file_name(&self) -> &str {
        Path::new(&self.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.file)
    }

    /// True when the frame's symbol lives under `module` (`crate::path` form).
    #[must_use]
    pub fn is_in(&self, module: &str) -> bool {
        self.path
            .trim_start_matches('<')
            .strip_prefix(module)
            .is_some_and(|rest| rest.starts_with("::"))
    }
}

/// Source of the current call stack, innermost frame first.
pub trait CallStack: Send + Sync {
    /// Frames of the calling thread, starting no further out than the printer's own
    /// frames. Frames belonging to the capture machinery may be omitted.
    fn capture(&self) -> Vec<Frame>;
}

/// Symbolizes the live stack with the `backtrace` crate.
///
/// Needs debug info for file and line numbers; without it frames come back with
/// an empty file and line 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktraceStack;

impl CallStack for BacktraceStack {
    fn capture(&self) -> Vec<Frame> {
        let mut frames = Vec::new();
        backtrace::trace(|raw| {
            backtrace::resolve_frame(raw, |symbol| {
                let Some(name) = symbol.name() else {
                    return;
                };
                frames.push(Frame {
                    path: format!("{name:#}"),
                    file: symbol
                        .filename()
                        .map(|p| p.display().to_string())
                        .unwrap_or_default(),
                    line: symbol.lineno().unwrap_or(0),
                });
            });
            true
        });

        // Everything above our own crate is the unwinder itself
        let own = frames
            .iter()
            .position(|f| f.is_in(env!("CARGO_CRATE_NAME")))
            .unwrap_or(0);
        frames.split_off(own)
    }
}

/// Index of the immediate caller: the first frame after the printer's own frames.
///
/// The scan starts at the first frame that belongs to one of the `internal`
/// modules (or at the top when none does) and stops at the first frame outside
/// them. Returns `trace.len()` when no caller frame remains.
#[must_use]
pub fn caller_index(trace: &[Frame], internal: &[&str]) -> usize {
    let is_internal = |frame: &Frame| internal.iter().any(|module| frame.is_in(module));
    let first_internal = trace.iter().position(is_internal).unwrap_or(0);

    trace
        .iter()
        .skip(first_internal)
        .position(|f| !is_internal(f))
        .map_or(trace.len(), |i| i + first_internal)
}

/// Up to `depth` caller frames, most recent first, clamped to what the stack holds.
#[must_use]
pub fn callers<'a>(trace: &'a [Frame], internal: &[&str], depth: usize) -> &'a [Frame] {
    let start = caller_index(trace, internal).min(trace.len());
    let end = start.saturating_add(depth).min(trace.len());
    &trace[start..end]
}
