use crate::entry::{Table, Value};
use crate::error::{ParseWarning, WarningKind};
use crate::reader::quoted_string;
use crate::scanner::{warn, Segment};
use logos::Span;

/// A segment's content lines joined by single spaces.
///
/// Keeps enough bookkeeping to map positions back into the source and to find line ends.
#[derive(Debug)]
pub(crate) struct Flattened {
    pub text: String,
    /// `(position in text, position in source)` for the start of every line
    lines: Vec<(usize, usize)>,
}

impl Flattened {
    pub fn new(source: &str, lines: &[Span]) -> Self {
        let mut text = String::new();
        let mut starts = Vec::with_capacity(lines.len());
        for (index, line) in lines.iter().enumerate() {
            // empty lines still get their separator
            if index > 0 {
                text.push(' ');
            }
            starts.push((text.len(), line.start));
            text.push_str(&source[line.clone()]);
        }
        Flattened {
            text,
            lines: starts,
        }
    }

    fn line_index(&self, pos: usize) -> usize {
        match self.lines.binary_search_by_key(&pos, |(start, _)| *start) {
            Ok(index) => index,
            Err(index) => index.saturating_sub(1),
        }
    }

    /// Translate a position in the flattened text into a source offset.
    pub fn source_offset(&self, pos: usize) -> usize {
        match self.lines.get(self.line_index(pos)) {
            Some((start, source_start)) => source_start + (pos - start),
            None => pos,
        }
    }

    pub fn source_span(&self, span: Span) -> Span {
        self.source_offset(span.start)..self.source_offset(span.end)
    }

    /// End of the source line that `pos` sits on, in flattened coordinates.
    fn line_end(&self, pos: usize) -> usize {
        match self.lines.get(self.line_index(pos) + 1) {
            // the joining space is not part of the line
            Some((next, _)) => next - 1,
            None => self.text.len(),
        }
    }
}

/// A key followed by its `=`, positions are in flattened coordinates.
#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) struct KeyMark {
    pub key: Span,
    pub equals: usize,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum State {
    /// Looking for the start of a word that might be a key.
    SeekKey,
    /// Found a word, waiting to see if an `=` follows.
    SeekEquals { start: usize, end: usize },
    /// Just past an `=`, the value starts at the next non-whitespace character.
    SeekValue,
}

/// Finds keys in a flattened segment with a forward scan.
pub(crate) struct KeyScanner<'a> {
    flat: &'a Flattened,
    source: &'a str,
}

impl<'a> KeyScanner<'a> {
    pub fn new(flat: &'a Flattened, source: &'a str) -> Self {
        KeyScanner { flat, source }
    }

    pub fn scan(&self, warnings: &mut Vec<ParseWarning>) -> Vec<KeyMark> {
        let text = self.flat.text.as_str();
        let mut marks: Vec<KeyMark> = Vec::new();
        let mut state = State::SeekKey;
        let mut pos = 0;

        while let Some(c) = text[pos..].chars().next() {
            match state {
                State::SeekKey => {
                    if c.is_whitespace() {
                        pos += c.len_utf8();
                    } else if c == '=' {
                        if marks.is_empty() {
                            self.warn(warnings, WarningKind::MissingKey, pos..pos + 1);
                        }
                        pos += 1;
                    } else {
                        let end = word_end(text, pos);
                        state = State::SeekEquals { start: pos, end };
                        pos = end;
                    }
                }
                State::SeekEquals { start, end } => {
                    if c.is_whitespace() {
                        pos += c.len_utf8();
                    } else if c == '=' {
                        marks.push(KeyMark {
                            key: start..end,
                            equals: pos,
                        });
                        pos += 1;
                        state = State::SeekValue;
                    } else {
                        // not a key after all, reprocess this character as a word start
                        if marks.is_empty() {
                            self.warn(warnings, WarningKind::DanglingText, start..end);
                        }
                        state = State::SeekKey;
                    }
                }
                State::SeekValue => {
                    if c.is_whitespace() {
                        pos += c.len_utf8();
                        continue;
                    }
                    if c == '"' || c == '\'' {
                        match self.closing_quote(pos, c) {
                            Some(close) => pos = close + 1,
                            None => {
                                let end = self.flat.line_end(pos);
                                self.warn(warnings, WarningKind::UnterminatedQuote, pos..end);
                            }
                        }
                    }
                    state = State::SeekKey;
                }
            }
        }

        if let State::SeekEquals { start, end } = state {
            if marks.is_empty() {
                self.warn(warnings, WarningKind::DanglingText, start..end);
            }
        }

        marks
    }

    /// Position of the matching quote on the same source line.
    fn closing_quote(&self, open: usize, quote: char) -> Option<usize> {
        let end = self.flat.line_end(open);
        self.flat.text[open + 1..end]
            .find(quote)
            .map(|offset| open + 1 + offset)
    }

    fn warn(&self, warnings: &mut Vec<ParseWarning>, kind: WarningKind, span: Span) {
        warn(warnings, kind, self.flat.source_span(span), self.source);
    }
}

fn word_end(text: &str, start: usize) -> usize {
    text[start..]
        .find(|c: char| c.is_whitespace() || c == '=')
        .map_or(text.len(), |offset| start + offset)
}

/// Slice the values between consecutive keys.
///
/// Values are trimmed and stripped of one pair of surrounding quotes, empty values are left out.
pub(crate) fn entries<'t>(text: &'t str, marks: &[KeyMark]) -> Vec<(&'t str, &'t str)> {
    marks
        .iter()
        .enumerate()
        .filter_map(|(index, mark)| {
            let end = marks
                .get(index + 1)
                .map_or(text.len(), |next| next.key.start);
            let key = &text[mark.key.clone()];
            let value = strip_value(&text[mark.equals + 1..end]);
            if value.trim().is_empty() {
                tracing::debug!("dropping key {key:?} with an empty value");
                None
            } else {
                Some((key, value))
            }
        })
        .collect()
}

fn strip_value(raw: &str) -> &str {
    quoted_string(raw.trim())
}

/// Extract the entries of one segment into `table`.
pub(crate) fn build(
    segment: &Segment,
    source: &str,
    table: &mut Table,
    warnings: &mut Vec<ParseWarning>,
) {
    let flat = Flattened::new(source, &segment.lines);
    let marks = KeyScanner::new(&flat, source).scan(warnings);
    for (key, value) in entries(&flat.text, &marks) {
        table.insert(key, Value::from(value));
    }
}
