//! XML text re-indentation.

use crate::Error;
use quick_xml::events::Event;
use quick_xml::{Reader, Writer};

/// Returned for empty input.
pub const EMPTY_XML: &str = "Empty/Null xml content";
/// Returned for input that isn't a single well-formed XML document.
pub const INVALID_XML: &str = "Invalid xml content";

/// Re-serializes an XML document with two-space indentation.
///
/// Whitespace-only text between elements is dropped and an `<?xml ...?>`
/// declaration always ends its own line. A declaration is only written when the
/// input has one; documents without it come back without it. Never fails: empty
/// input yields [`EMPTY_XML`], malformed input yields [`INVALID_XML`].
#[must_use]
pub fn format_xml(xml: &str) -> String {
    if xml.is_empty() {
        return EMPTY_XML.to_string();
    }
    pretty_xml(xml).unwrap_or_else(|_| INVALID_XML.to_string())
}

fn pretty_xml(xml: &str) -> Result<String, Error> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    let mut depth = 0usize;
    let mut roots = 0usize;
    loop {
        let event = reader.read_event()?;
        match &event {
            Event::Eof => break,
            Event::Start(_) => {
                if depth == 0 {
                    roots += 1;
                }
                depth += 1;
            }
            Event::End(_) => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| Error::Format("closing tag without opening tag".to_string()))?;
            }
            Event::Empty(_) if depth == 0 => roots += 1,
            Event::Text(_) | Event::CData(_) if depth == 0 => {
                return Err(Error::Format("text outside the root element".to_string()));
            }
            _ => {}
        }
        writer.write_event(event)?;
    }

    if depth != 0 {
        return Err(Error::Format("unclosed element".to_string()));
    }
    if roots != 1 {
        return Err(Error::Format(format!("expected one root element, found {roots}")));
    }

    let mut out = String::from_utf8(writer.into_inner()).map_err(|e| Error::Format(e.to_string()))?;
    if out.starts_with("<?xml")
        && let Some(end) = out.find('>')
        && !out[end + 1..].starts_with('\n')
        && end + 1 < out.len()
    {
        out.insert(end + 1, '\n');
    }
    Ok(out)
}
