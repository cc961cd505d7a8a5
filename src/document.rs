use crate::builder::build;
use crate::entry::{Table, Value};
use crate::error::{ConfError, ParseWarning};
use crate::scanner::scan;
use crate::{Reader, Result};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// A parsed configuration file.
///
/// Built in one go by [`Document::parse`] and never modified afterwards.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Document {
    order: Vec<String>,
    tables: HashMap<String, Table>,
    warnings: Vec<ParseWarning>,
}

impl Document {
    /// Parse a document from source text.
    ///
    /// Parsing never fails, fragments that can't be understood are skipped and reported in
    /// [`Document::warnings`].
    pub fn parse(source: &str) -> Document {
        let mut document = Document::default();
        let segments = scan(Reader::from(source), &mut document.warnings);

        for segment in &segments {
            let name = segment.name;
            if !document.tables.contains_key(name) {
                document.order.push(name.to_string());
            }
            let table = document.tables.entry(name.to_string()).or_default();
            build(segment, source, table, &mut document.warnings);
        }
        document.warnings.sort_by_key(|warning| warning.span().start);

        tracing::debug!(
            segments = segments.len(),
            tables = document.order.len(),
            warnings = document.warnings.len(),
            "parsed document"
        );
        document
    }

    /// Read and parse the file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Document> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfError::MissingFile {
            path: path.into(),
            source,
        })?;
        Ok(Document::parse(&source))
    }

    /// Read and parse the file at `path`, writing `default` to it first if it doesn't exist yet.
    pub fn load_or_init<P: AsRef<Path>>(path: P, default: &str) -> Result<Document> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!("writing default configuration to {}", path.display());
            fs::write(path, default).map_err(|source| ConfError::WriteDefault {
                path: path.into(),
                source,
            })?;
        }
        Document::load(path)
    }

    /// All table names, in order of first appearance.
    pub fn tables(&self) -> &[String] {
        &self.order
    }

    pub fn table<S: AsRef<str>>(&self, name: S) -> Option<&Table> {
        self.tables.get(name.as_ref())
    }

    /// The keys recorded for `table`, empty if the table doesn't exist.
    pub fn keys<S: AsRef<str>>(&self, table: S) -> &[String] {
        self.table(table).map(Table::keys).unwrap_or_default()
    }

    pub fn get<T: AsRef<str>, K: AsRef<str>>(&self, table: T, key: K) -> Option<&Value> {
        self.table(table)?.get(key)
    }

    /// Lookup a value with a `table.key` path.
    ///
    /// Every `.` is tried as the separator from left to right, so dotted table names and keys
    /// still resolve.
    pub fn lookup<S: AsRef<str>>(&self, path: S) -> Option<&Value> {
        let path = path.as_ref();
        path.match_indices('.')
            .find_map(|(index, _)| self.get(&path[..index], &path[index + 1..]))
    }

    /// Iterate over the tables in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Table)> + '_ {
        self.order
            .iter()
            .filter_map(move |name| Some((name.as_str(), self.tables.get(name)?)))
    }

    /// Everything that was skipped while parsing, in source order.
    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.order.len()))?;
        for (name, table) in self.iter() {
            map.serialize_entry(name, table)?;
        }
        map.end()
    }
}
