//! Line layout for one log call: either the bare message, or a bordered block
//! with caller frames, appended fragments and the message.

use super::stack::Frame;

/// First line of a boxed entry.
pub const TOP_BORDER: &str = "╔════════════════════════════════════════════════════════════════════════════════════════";
/// Last line of a boxed entry.
pub const BOTTOM_BORDER: &str = "╚════════════════════════════════════════════════════════════════════════════════════════";
/// Separates the header and each fragment from what follows.
pub const MIDDLE_BORDER: &str = "╟────────────────────────────────────────────────────────────────────────────────────────";
/// Prefix of every content line inside the box.
pub const CONTENT_PREFIX: &str = "║ ";

const HEADER_INDENT: &str = "   ";

/// A bare line is only used when there is nothing to frame.
#[must_use]
pub fn is_single_line(method_count: usize, fragments: &[String], message: &str) -> bool {
    method_count == 0 && fragments.is_empty() && !message.contains('\n')
}

/// Lays out every line for one call, in dispatch order.
///
/// `callers` holds the frames to print in the header, most recent first; it may be
/// shorter than `method_count` when the stack is shallow, but the divider after the
/// header depends only on `method_count`.
#[must_use]
pub fn render_lines(
    message: &str,
    fragments: &[String],
    method_count: usize,
    callers: &[Frame],
) -> Vec<String> {
    if is_single_line(method_count, fragments, message) {
        return vec![message.to_string()];
    }

    let mut lines = vec![TOP_BORDER.to_string()];
    lines.extend(header_lines(callers));
    if method_count > 0 {
        lines.push(MIDDLE_BORDER.to_string());
    }
    for fragment in fragments {
        lines.extend(content_lines(fragment));
        lines.push(MIDDLE_BORDER.to_string());
    }
    lines.extend(content_lines(message));
    lines.push(BOTTOM_BORDER.to_string());
    lines
}

/// `║ Type.method (file.rs:42)`, each frame nested three spaces deeper than the last.
#[must_use]
pub fn header_lines(callers: &[Frame]) -> Vec<String> {
    callers
        .iter()
        .enumerate()
        .map(|(depth, frame)| {
            format!(
                "{CONTENT_PREFIX}{}{}.{} ({}:{})",
                HEADER_INDENT.repeat(depth),
                frame.type_name(),
                frame.method_name(),
                frame.file_name(),
                frame.line
            )
        })
        .collect()
}

fn content_lines(chunk: &str) -> impl Iterator<Item = String> + '_ {
    chunk.lines().map(|line| format!("{CONTENT_PREFIX}{line}"))
}
