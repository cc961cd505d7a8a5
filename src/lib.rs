mod builder;
mod de;
mod document;
pub mod entry;
pub mod error;
mod event;
mod lexer;
mod reader;
mod scanner;

pub use de::{from_document, from_str};
pub use document::Document;
pub use error::{ConfError, ParseWarning, WarningKind};

pub type Result<T, E = ConfError> = std::result::Result<T, E>;
pub use event::{ContentEvent, Event, EventType, HeaderEvent};
pub use lexer::Token;
pub use reader::Reader;
pub use scanner::{scan, Segment};

/// Parse a configuration file's contents.
pub fn parse(source: &str) -> Document {
    Document::parse(source)
}
