use crate::error::{ParseWarning, WarningKind};
use crate::event::{ContentEvent, HeaderEvent};
use crate::{Event, Reader};
use logos::Span;

/// The content lines belonging to one table header.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Segment<'a> {
    pub name: &'a str,
    pub header: Span,
    /// Content and blank lines in source order without terminators, comments are already gone.
    pub lines: Vec<Span>,
}

/// Split the reader's lines into one [`Segment`] per header, in file order.
///
/// Repeated headers produce separate segments with the same name.
pub fn scan<'a>(reader: Reader<'a>, warnings: &mut Vec<ParseWarning>) -> Vec<Segment<'a>> {
    let source = reader.source();
    let mut segments = Vec::new();
    let mut current: Option<Segment> = None;

    for event in reader {
        match event {
            Event::Header(HeaderEvent { name, span }) => {
                segments.extend(current.take());
                if name.is_empty() {
                    warn(warnings, WarningKind::EmptyHeaderName, span.clone(), source);
                }
                current = Some(Segment {
                    name,
                    header: span,
                    lines: Vec::new(),
                });
            }
            Event::Content(ContentEvent {
                span,
                malformed_header,
            }) => {
                if malformed_header {
                    warn(warnings, WarningKind::MalformedHeader, span.clone(), source);
                }
                match current.as_mut() {
                    Some(segment) => segment.lines.push(span),
                    None => warn(warnings, WarningKind::OutsideTable, span, source),
                }
            }
            // blank lines still count as a line break when the segment is flattened
            Event::Blank { span } => {
                if let Some(segment) = current.as_mut() {
                    let line = source[span.clone()].trim_end_matches(['\n', '\r']);
                    segment.lines.push(span.start..span.start + line.len());
                }
            }
            Event::Comment { .. } => {}
        }
    }

    segments.extend(current);
    segments
}

pub(crate) fn warn(warnings: &mut Vec<ParseWarning>, kind: WarningKind, span: Span, source: &str) {
    tracing::warn!(
        "{kind} at {}..{}: {:?}",
        span.start,
        span.end,
        &source[span.clone()]
    );
    warnings.push(ParseWarning::new(kind, span, source));
}
