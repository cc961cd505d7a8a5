use logos::Span;

/// Reader event, one per source line.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Event<'a> {
    /// A table with the given name is starting.
    Header(HeaderEvent<'a>),

    /// A line that belongs to the current table.
    Content(ContentEvent),

    /// A comment line, dropped before segmentation.
    Comment { span: Span },

    /// A line with nothing but whitespace.
    Blank { span: Span },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EventType {
    Header,
    Content,
    Comment,
    Blank,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct HeaderEvent<'a> {
    /// The header name with surrounding quotes removed.
    pub name: &'a str,
    /// The bracketed text, `[` and `]` included.
    pub span: Span,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ContentEvent {
    /// The line without its line terminator.
    pub span: Span,
    /// Set when the line looks like a header but doesn't match the header syntax.
    pub malformed_header: bool,
}

impl Event<'_> {
    pub fn span(&self) -> Span {
        match self {
            Event::Header(HeaderEvent { span, .. }) => span.clone(),
            Event::Content(ContentEvent { span, .. }) => span.clone(),
            Event::Comment { span } => span.clone(),
            Event::Blank { span } => span.clone(),
        }
    }

    pub fn ty(&self) -> EventType {
        match self {
            Event::Header(_) => EventType::Header,
            Event::Content(_) => EventType::Content,
            Event::Comment { .. } => EventType::Comment,
            Event::Blank { .. } => EventType::Blank,
        }
    }
}
