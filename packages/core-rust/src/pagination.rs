//! Pagination metadata handling shared by all adapters.
//!
//! Hosts express paging as string metadata (`offset`, `pageSize`). A page
//! size of `0` means "everything from `offset` onwards".

use std::ops::Range;

use crate::error::{BridgeError, BridgeResult};
use crate::types::{metadata_keys, Metadata};

/// Validated paging window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Index of the first entry in the page.
    pub offset: usize,
    /// Maximum entries in the page. `0` means unbounded.
    pub page_size: usize,
}

impl Pagination {
    /// Reads `offset` and `pageSize` from metadata. Missing or empty values
    /// default to `0`.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Pagination`] if either value is negative or not
    /// an integer.
    pub fn parse(metadata: &Metadata) -> BridgeResult<Self> {
        Ok(Self {
            offset: parse_non_negative(metadata, metadata_keys::OFFSET)?,
            page_size: parse_non_negative(metadata, metadata_keys::PAGE_SIZE)?,
        })
    }

    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.page_size == 0
    }

    /// Index range of the page within a result set of `total` entries.
    ///
    /// Empty when `offset` is at or past the end.
    #[must_use]
    pub fn bounds(&self, total: usize) -> Range<usize> {
        let end = if self.is_unbounded() {
            total
        } else {
            self.offset.saturating_add(self.page_size).min(total)
        };
        self.offset..end.max(self.offset)
    }
}

fn parse_non_negative(metadata: &Metadata, key: &str) -> BridgeResult<usize> {
    let raw = match metadata.get(key) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Ok(0),
    };
    let invalid = |reason: &str| BridgeError::Pagination {
        key: key.to_string(),
        value: raw.clone(),
        reason: reason.to_string(),
    };
    let value: i64 = raw.parse().map_err(|_| invalid("not an integer"))?;
    if value < 0 {
        return Err(invalid("must not be negative"));
    }
    usize::try_from(value).map_err(|_| invalid("out of range"))
}

/// Validates paging metadata and writes back canonical `offset`/`pageSize`.
///
/// All other keys are copied through untouched.
///
/// # Errors
///
/// Returns [`BridgeError::Pagination`] for negative or non-integer values.
pub fn normalize_pagination_metadata(metadata: &Metadata) -> BridgeResult<Metadata> {
    let pagination = Pagination::parse(metadata)?;
    let mut normalized = metadata.clone();
    normalized.insert(metadata_keys::OFFSET.to_string(), pagination.offset.to_string());
    normalized.insert(
        metadata_keys::PAGE_SIZE.to_string(),
        pagination.page_size.to_string(),
    );
    Ok(normalized)
}
