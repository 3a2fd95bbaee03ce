//! Deterministic record synthesis.
//!
//! A records template is a comma separated list of `NAME:VALUE` entries:
//!
//! ```text
//! id:ID-$,title:Item $ of the catalogue,note:commas need \, escaping
//! ```
//!
//! Every `$` in a value is replaced by the record index when the template is
//! rendered. A comma preceded by a backslash belongs to the value and the
//! backslash is dropped.

use std::ops::Range;

use bridgehub_core::{parameter_keys, BridgeError, BridgeRequest, BridgeResult, Record};

/// Token replaced by the record index inside attribute values.
pub const INDEX_TOKEN: char = '$';

const SEPARATOR: char = ',';
const ESCAPE: char = '\\';

/// Splits a records template into entries on unescaped commas.
///
/// `\,` yields a literal comma inside the current entry. Any other backslash
/// is kept as-is. Trailing empty entries are discarded.
#[must_use]
pub fn split_attributes(template: &str) -> Vec<String> {
    let mut entries = Vec::new();
    let mut current = String::new();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ESCAPE if chars.peek() == Some(&SEPARATOR) => {
                current.push(SEPARATOR);
                chars.next();
            }
            SEPARATOR => entries.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    entries.push(current);

    while entries.last().is_some_and(String::is_empty) {
        entries.pop();
    }
    entries
}

/// Builds the implicit template for a field list: `f:f $` per field.
#[must_use]
pub fn default_template(fields: &[String]) -> String {
    fields
        .iter()
        .map(|field| format!("{field}:{field} {INDEX_TOKEN}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Parsed records template, ready to render at any index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordTemplate {
    attributes: Vec<(String, String)>,
}

impl RecordTemplate {
    /// Parses `NAME:VALUE` entries. Only the first colon separates name from
    /// value.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::InvalidAttribute`] for an entry without a colon.
    pub fn parse(template: &str) -> BridgeResult<Self> {
        let attributes = split_attributes(template)
            .into_iter()
            .map(|entry| match entry.split_once(':') {
                Some((name, value)) => Ok((name.to_string(), value.to_string())),
                None => Err(BridgeError::InvalidAttribute { attribute: entry }),
            })
            .collect::<BridgeResult<Vec<_>>>()?;
        Ok(Self { attributes })
    }

    /// Chooses the template for a request: the `records` parameter verbatim,
    /// else one attribute per requested field, else nothing.
    ///
    /// # Errors
    ///
    /// Propagates [`RecordTemplate::parse`] failures.
    pub fn from_request(request: &BridgeRequest) -> BridgeResult<Self> {
        match request.parameter(parameter_keys::RECORDS) {
            Some(records) => Self::parse(records),
            None => Self::parse(&default_template(request.fields())),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Renders one record, substituting `index` for every `$`.
    ///
    /// Attributes keep declaration order; a repeated name keeps its first value.
    #[must_use]
    pub fn render(&self, index: usize) -> Record {
        let index = index.to_string();
        let mut record = Record::new();
        for (name, value) in &self.attributes {
            record.insert(name.as_str(), value.replace(INDEX_TOKEN, &index));
        }
        record
    }

    /// Renders one record per index in ascending order.
    #[must_use]
    pub fn render_range(&self, indices: Range<usize>) -> Vec<Record> {
        indices.map(|index| self.render(index)).collect()
    }
}
