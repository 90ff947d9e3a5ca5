//! Lazy reader for the product metadata dump
//!
//! The dump is a sequence of blocks, each opened by an `Id:` line and
//! carrying optional `title:` and `group:` lines among many others we do not
//! use (`ASIN:`, `salesrank:`, review lines, ...). A record is emitted once
//! the next `Id:` line (or end of input) closes it, and only if it has a
//! group.

use std::io::BufRead;

const ID_PREFIX: &str = "Id:";
const TITLE_PREFIX: &str = "title:";
const GROUP_PREFIX: &str = "group:";

/// One product record parsed from the metadata dump
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaRecord {
    /// Original product id
    pub id: String,
    /// Product title, if the block had one
    pub title: Option<String>,
    /// Category group
    pub group: String,
}

impl MetaRecord {
    pub fn new(id: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            group: group.into(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Title to display, synthesizing `Product_<id>` when absent
    pub fn display_title(&self) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => format!("Product_{}", self.id),
        }
    }
}

/// A record under construction between two `Id:` lines
#[derive(Debug, Default)]
struct PartialRecord {
    id: String,
    title: Option<String>,
    group: Option<String>,
}

impl PartialRecord {
    fn finish(self) -> Option<MetaRecord> {
        let group = self.group?;
        Some(MetaRecord {
            id: self.id,
            title: self.title,
            group,
        })
    }
}

/// Second `:`-separated token of a line, trimmed
fn second_token(line: &str) -> String {
    line.split(':').nth(1).unwrap_or("").trim().to_string()
}

/// Everything after the first `:`, trimmed
fn after_first_colon(line: &str) -> String {
    line.split_once(':')
        .map(|(_, rest)| rest.trim())
        .unwrap_or("")
        .to_string()
}

/// Iterator over complete [`MetaRecord`]s in file order
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
/// failing the read. Read errors are yielded once and end the stream.
pub struct MetaRecords<R> {
    reader: R,
    current: Option<PartialRecord>,
    buf: Vec<u8>,
    done: bool,
}

impl<R: BufRead> MetaRecords<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            current: None,
            buf: Vec::new(),
            done: false,
        }
    }

    /// Apply one trimmed line; returns a record if this line closed one
    fn apply_line(&mut self, line: &str) -> Option<MetaRecord> {
        if line.starts_with(ID_PREFIX) {
            let next = PartialRecord {
                id: second_token(line),
                ..Default::default()
            };
            return self.current.replace(next).and_then(PartialRecord::finish);
        }

        let current = self.current.as_mut()?;
        if line.starts_with(TITLE_PREFIX) {
            current.title = Some(after_first_colon(line));
        } else if line.starts_with(GROUP_PREFIX) {
            current.group = Some(second_token(line));
        } else {
            tracing::trace!(line, "ignoring metadata line");
        }
        None
    }
}

impl<R: BufRead> Iterator for MetaRecords<R> {
    type Item = std::io::Result<MetaRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => {
                    self.done = true;
                    if let Some(record) = self.current.take().and_then(PartialRecord::finish) {
                        return Some(Ok(record));
                    }
                }
                Ok(_) => {
                    let text = String::from_utf8_lossy(&self.buf).into_owned();
                    if let Some(record) = self.apply_line(text.trim()) {
                        return Some(Ok(record));
                    }
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
        None
    }
}
