//! Message text preparation: argument substitution and the content formatters
//! that turn JSON, XML and serializable values into display text.
//!
//! The formatters never fail. Bad input comes back as a fixed placeholder string
//! so a malformed payload still produces a readable log entry.

mod args;
mod json;
mod object;
mod xml;

pub use args::substitute;
pub use json::{EMPTY_JSON, INVALID_JSON, format_json};
pub use object::{INVALID_OBJECT, NULL_OBJECT, format_object};
pub use xml::{EMPTY_XML, INVALID_XML, format_xml};
