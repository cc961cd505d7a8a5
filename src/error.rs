use logos::Span;
use miette::{Diagnostic, SourceSpan};
use parse_display::Display;
use std::path::PathBuf;
use thiserror::Error;

/// Any error that stops a configuration file from being loaded or read out
#[derive(Error, Debug, Diagnostic)]
pub enum ConfError {
    /// The input file does not exist or could not be read
    #[error("failed to read {}", path.display())]
    #[diagnostic(code(table_conf::missing_file))]
    MissingFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The default file could not be written
    #[error("failed to write default file {}", path.display())]
    #[diagnostic(code(table_conf::write_default))]
    WriteDefault {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    #[diagnostic(transparent)]
    /// A stored value could not be converted to the requested type
    ParseValue(#[from] ParseValueError),
    /// The document doesn't have the shape the target type expects
    #[error("{0}")]
    #[diagnostic(code(table_conf::deserialize))]
    Deserialize(String),
}

/// What went wrong with a fragment of the input that was skipped.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Display)]
pub enum WarningKind {
    #[display("malformed table header")]
    MalformedHeader,
    #[display("table header with an empty name")]
    EmptyHeaderName,
    #[display("content outside of any table")]
    OutsideTable,
    #[display("`=` without a preceding key")]
    MissingKey,
    #[display("text before the first key of the table")]
    DanglingText,
    #[display("quoted value is not closed on its line")]
    UnterminatedQuote,
}

/// A non-fatal problem found while parsing, the rest of the document is still parsed
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
#[diagnostic(code(table_conf::parse_warning), severity(Warning))]
#[error("{kind}")]
pub struct ParseWarning {
    pub kind: WarningKind,
    #[label("{}", self.kind)]
    err_span: SourceSpan,
    #[source_code]
    src: String,
}

impl ParseWarning {
    pub fn new(kind: WarningKind, span: Span, src: &str) -> Self {
        ParseWarning {
            kind,
            err_span: span.into(),
            src: src.into(),
        }
    }

    /// Byte range of the offending fragment in the parsed source
    pub fn span(&self) -> Span {
        let start = self.err_span.offset();
        start..start + self.err_span.len()
    }

    /// The offending fragment itself
    pub fn fragment(&self) -> &str {
        &self.src[self.span()]
    }
}

/// A value that couldn't be parsed as the requested type
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
#[diagnostic(code(table_conf::parse_value))]
#[error("Can't parse {value:?} as {ty}")]
pub struct ParseValueError {
    pub ty: &'static str,
    pub value: String,
}

impl ParseValueError {
    pub fn new(ty: &'static str, value: &str) -> Self {
        ParseValueError {
            ty,
            value: value.into(),
        }
    }
}
