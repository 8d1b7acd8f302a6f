use crate::lexer::{LineKind, LineScanner};
use crate::notation::{ParsedHeader, ParsedNotation};

/// Parse the header block of an ABC notation string.
///
/// Header, comment and blank lines are consumed until the first line that is none of
/// these; that line starts the body and scanning stops there, so a later line that looks
/// like a header belongs to the body. Returns `None` for empty input.
pub fn parse(source: &str) -> Option<ParsedNotation> {
    if source.is_empty() {
        return None;
    }

    let mut header = ParsedHeader::default();
    let mut body_start = None;

    for line in LineScanner::new(source) {
        match line.kind {
            LineKind::Header { tag, value } => header.set(tag, value),
            LineKind::Comment | LineKind::Blank => {}
            LineKind::Body => {
                log::debug!("Body starts at line {}", line.index + 1);
                body_start = Some(line.offset);
                break;
            }
        }
    }

    // Without a body line the whole input is kept as the body
    let body = match body_start {
        Some(offset) => &source[offset..],
        None => source,
    };

    Some(ParsedNotation {
        header,
        body: body.to_string(),
        full_notation: source.to_string(),
    })
}
