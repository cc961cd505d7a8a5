use crate::event::{ContentEvent, Event, HeaderEvent};
use crate::Token;
use logos::Logos;
use std::str::SplitInclusive;

/// A line based reader, turning source text into one [`Event`] per line.
pub struct Reader<'a> {
    pub(crate) content: &'a str,
    lines: SplitInclusive<'a, char>,
    offset: usize,
}

impl<'a> From<&'a str> for Reader<'a> {
    fn from(content: &'a str) -> Self {
        // spans stay relative to `content`, byte order mark included
        let body = content.strip_prefix('\u{feff}').unwrap_or(content);
        Reader {
            content,
            lines: body.split_inclusive('\n'),
            offset: content.len() - body.len(),
        }
    }
}

impl<'a> Reader<'a> {
    pub fn source(&self) -> &'a str {
        self.content
    }

    fn classify(&self, line: &'a str, start: usize) -> Event<'a> {
        let span = start..start + line.len();
        let mut lexer = Token::lexer(line).spanned();

        let (first, first_span) = match lexer.next() {
            None => return Event::Blank { span },
            Some((token, first_span)) => (token, first_span),
        };

        match first {
            Ok(Token::Comment) => Event::Comment { span },
            Ok(Token::Header) if lexer.next().is_none() => {
                let bracketed = &line[first_span.clone()];
                Event::Header(HeaderEvent {
                    name: quoted_string(&bracketed[1..bracketed.len() - 1]),
                    span: start + first_span.start..start + first_span.end,
                })
            }
            _ => Event::Content(ContentEvent {
                span: start..start + line.trim_end_matches(['\n', '\r']).len(),
                malformed_header: first == Ok(Token::Header)
                    || (line[first_span].starts_with('[') && !line.contains('=')),
            }),
        }
    }
}

impl<'a> Iterator for Reader<'a> {
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        let start = self.offset;
        self.offset += line.len();
        Some(self.classify(line, start))
    }
}

/// Strip one pair of matching single or double quotes surrounding `source`.
///
/// Only the outermost characters are inspected, nothing inside is unescaped.
pub(crate) fn quoted_string(source: &str) -> &str {
    let bytes = source.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(&open), Some(&close))
            if bytes.len() >= 2 && open == close && (open == b'"' || open == b'\'') =>
        {
            &source[1..source.len() - 1]
        }
        _ => source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventType;

    fn events(input: &str) -> Vec<Event> {
        Reader::from(input).collect()
    }

    #[test]
    fn test_quoted_string() {
        assert_eq!(quoted_string("\"test\""), "test");
        assert_eq!(quoted_string("'test'"), "test");
        assert_eq!(quoted_string("\"\""), "");
        assert_eq!(quoted_string("\"test'"), "\"test'");
        assert_eq!(quoted_string("\""), "\"");
        assert_eq!(quoted_string("\"a\"b\""), "a\"b");
        assert_eq!(quoted_string("test"), "test");
        assert_eq!(quoted_string(""), "");
    }

    #[test]
    fn test_lines() {
        let input = "# comment\n[a]\n  key = 1\r\n\n[\"b\"]  \n[broken\n";
        assert_eq!(
            events(input),
            vec![
                Event::Comment { span: 0..10 },
                Event::Header(HeaderEvent {
                    name: "a",
                    span: 10..13
                }),
                Event::Content(ContentEvent {
                    span: 14..23,
                    malformed_header: false
                }),
                Event::Blank { span: 25..26 },
                Event::Header(HeaderEvent {
                    name: "b",
                    span: 26..31
                }),
                Event::Content(ContentEvent {
                    span: 34..41,
                    malformed_header: true
                }),
            ]
        );
    }

    #[test]
    fn test_header_with_trailing_text() {
        assert_eq!(
            events("[a] b = 1"),
            vec![Event::Content(ContentEvent {
                span: 0..9,
                malformed_header: true
            })]
        );
    }

    #[test]
    fn test_bracketed_key_is_content() {
        assert_eq!(
            events("[x]=1\n[y] = 2\n"),
            vec![
                Event::Content(ContentEvent {
                    span: 0..5,
                    malformed_header: false
                }),
                Event::Content(ContentEvent {
                    span: 6..13,
                    malformed_header: true
                }),
            ]
        );
    }

    #[test]
    fn test_byte_order_mark() {
        let input = "\u{feff}[a]\nk = 1\n";
        let events = events(input);
        assert_eq!(
            events[0],
            Event::Header(HeaderEvent {
                name: "a",
                span: 3..6
            })
        );
        assert_eq!(&input[events[1].span()], "k = 1");
    }

    #[test]
    fn test_no_trailing_newline() {
        let events = events("[a]\nk = 1");
        let types: Vec<_> = events.iter().map(Event::ty).collect();
        assert_eq!(types, vec![EventType::Header, EventType::Content]);
        assert_eq!(events[1].span(), 4..9);
    }
}
