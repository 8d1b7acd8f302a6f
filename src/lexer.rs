use crate::notation::HeaderTag;

/// Classification of a single notation line
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind<'a> {
    /// `TAG:value` at the start of the trimmed line; value is trimmed
    Header { tag: HeaderTag, value: &'a str },
    Comment, // %...
    Blank,
    /// Anything else: melodic content or unrecognized text
    Body,
}

/// A classified line with its position in the source
#[derive(Debug, Clone)]
pub struct LocatedLine<'a> {
    pub kind: LineKind<'a>,
    /// 0-based line index
    pub index: usize,
    /// Byte offset of the first character of the raw line
    pub offset: usize,
}

/// Line-oriented scanner for ABC notation.
/// Lines are split on `\n` only; a trailing `\r` or a leading byte-order mark is removed
/// by trimming.
pub struct LineScanner<'a> {
    lines: std::str::Split<'a, char>,
    index: usize,
    offset: usize,
}

impl<'a> LineScanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: input.split('\n'),
            index: 0,
            offset: 0,
        }
    }
}

impl<'a> Iterator for LineScanner<'a> {
    type Item = LocatedLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let raw = self.lines.next()?;
        let located = LocatedLine {
            kind: classify(raw),
            index: self.index,
            offset: self.offset,
        };
        self.index += 1;
        self.offset += raw.len() + 1;
        Some(located)
    }
}

/// Trim whitespace and any byte-order mark from both ends
fn trim_line(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Classify one raw line
pub fn classify(raw: &str) -> LineKind<'_> {
    let line = trim_line(raw);
    if line.is_empty() {
        return LineKind::Blank;
    }
    if let Some((tag, value)) = header_field(line) {
        return LineKind::Header { tag, value };
    }
    if line.starts_with('%') {
        LineKind::Comment
    } else {
        LineKind::Body
    }
}

/// Split `TAG:value` into its tag and trimmed value.
/// The tag must be the very first character and the colon must follow it directly.
pub fn header_field(line: &str) -> Option<(HeaderTag, &str)> {
    let mut chars = line.chars();
    let tag = chars.next().and_then(HeaderTag::from_char)?;
    let rest = chars.as_str().strip_prefix(':')?;
    Some((tag, trim_line(rest)))
}
