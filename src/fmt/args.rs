//! Positional substitution of caller arguments into a message template.

use regex::{Captures, Regex};
use std::fmt::Display;
use std::sync::LazyLock;

/// Escapes first so `{{` never reads as the start of a placeholder.
static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{|\}\}|%%|\{(\d*)\}|%[sd]").expect("Invalid placeholder regex")
});

/// Substitutes `args` into `message`.
///
/// `{}`, `%s` and `%d` take the next argument in order, `{N}` takes the N-th
/// argument without advancing. `{{`, `}}` and `%%` produce a literal brace or
/// percent sign. Placeholders without a matching argument stay as written.
///
/// With no arguments the message is returned untouched, escapes included.
#[must_use]
pub fn substitute(message: &str, args: &[&dyn Display]) -> String {
    if args.is_empty() {
        return message.to_string();
    }

    let mut next = 0;
    PLACEHOLDER_REGEX
        .replace_all(message, |caps: &Captures<'_>| {
            let token = &caps[0];
            match token {
                "{{" => "{".to_string(),
                "}}" => "}".to_string(),
                "%%" => "%".to_string(),
                _ => {
                    let index = match caps.get(1) {
                        Some(explicit) if !explicit.as_str().is_empty() => {
                            explicit.as_str().parse::<usize>().ok()
                        }
                        _ => {
                            let index = next;
                            next += 1;
                            Some(index)
                        }
                    };
                    index
                        .and_then(|i| args.get(i))
                        .map_or_else(|| token.to_string(), |arg| arg.to_string())
                }
            }
        })
        .into_owned()
}
