use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Placeholder name to value. Sorted for deterministic iteration.
pub type Parameters = BTreeMap<String, String>;

/// Pagination and control hints attached to requests and results.
pub type Metadata = BTreeMap<String, String>;

/// Well-known request parameter keys.
pub mod parameter_keys {
    /// Simulate a failure; the value becomes the error message.
    pub const ERROR: &str = "error";
    /// Result of the count operation.
    pub const COUNT: &str = "count";
    /// Explicit records template (`NAME:VALUE,...`).
    pub const RECORDS: &str = "records";
}

/// Well-known metadata keys.
pub mod metadata_keys {
    pub const OFFSET: &str = "offset";
    pub const PAGE_SIZE: &str = "pageSize";
    pub const COUNT: &str = "count";
    pub const SIZE: &str = "size";
}

// ---------------------------------------------------------------------------
// BridgeRequest
// ---------------------------------------------------------------------------

/// Structured query handed to an adapter by the host.
///
/// Immutable apart from [`set_query`](BridgeRequest::set_query), which the
/// adapter calls once with the substituted query before doing any work.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeRequest {
    /// Logical record type being queried.
    pub structure: String,
    /// Requested field names, order-significant. Empty means "infer".
    #[serde(default)]
    pub fields: Vec<String>,
    /// Query template, possibly containing parameter placeholders.
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub parameters: Parameters,
    #[serde(default)]
    pub metadata: Metadata,
}

impl BridgeRequest {
    /// Creates a request against `structure` with no fields, query, or maps.
    #[must_use]
    pub fn new(structure: impl Into<String>) -> Self {
        Self {
            structure: structure.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    #[must_use]
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn structure(&self) -> &str {
        &self.structure
    }

    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    #[must_use]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Looks up a single parameter value.
    #[must_use]
    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).map(String::as_str)
    }

    /// Looks up a single metadata value.
    #[must_use]
    pub fn metadata_value(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    /// Requested fields joined with commas, for log output.
    #[must_use]
    pub fn field_string(&self) -> String {
        self.fields.join(",")
    }

    /// Replaces the query with its substituted form.
    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// A single result row: ordered `name -> value` attributes.
///
/// Attribute order is declaration order. Names are unique; inserting a name
/// that is already present leaves the first value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    attributes: Vec<(String, String)>,
    metadata: Option<Metadata>,
}

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches result metadata (used by single-record retrieval).
    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Adds an attribute unless `name` is already present.
    ///
    /// Returns `true` if the attribute was inserted.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> bool {
        let name = name.into();
        if self.get(&name).is_some() {
            return false;
        }
        self.attributes.push((name, value.into()));
        true
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Attribute names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    #[must_use]
    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }
}

/// Borrowed view that serializes attributes as a map in declaration order.
struct OrderedAttributes<'a>(&'a [(String, String)]);

impl Serialize for OrderedAttributes<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.metadata.is_some() { 2 } else { 1 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("attributes", &OrderedAttributes(&self.attributes))?;
        if let Some(metadata) = &self.metadata {
            map.serialize_entry("metadata", metadata)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// RecordList / Count
// ---------------------------------------------------------------------------

/// A page of records returned by a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordList {
    /// Field list exactly as requested.
    pub fields: Vec<String>,
    pub records: Vec<Record>,
    /// Request metadata plus normalized pagination, `size` and `count`.
    pub metadata: Metadata,
}

impl RecordList {
    #[must_use]
    pub fn new(fields: Vec<String>, records: Vec<Record>, metadata: Metadata) -> Self {
        Self {
            fields,
            records,
            metadata,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Result of a count operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Count {
    pub value: u64,
    pub metadata: Metadata,
}

impl Count {
    #[must_use]
    pub fn new(value: u64, metadata: Metadata) -> Self {
        Self { value, metadata }
    }
}
