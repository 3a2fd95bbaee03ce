//! Mock [`BridgeAdapter`] implementation.
//!
//! [`MockBridgeAdapter`] never contacts a backend. It substitutes the query
//! (so template errors still surface), honours the `error` parameter, and
//! synthesizes records from a template. Useful for exercising host code that
//! is written against the bridge contract.

use std::ops::Range;

use bridgehub_core::{
    metadata_keys, normalize_pagination_metadata, parameter_keys, AdapterRegistry, BridgeAdapter,
    BridgeError, BridgeRequest, BridgeResult, ConfigurablePropertyMap, Count, Metadata,
    Pagination, Parameters, Record, RecordList,
};
use tracing::{info_span, trace, Span};

use crate::config::MockSettings;
use crate::qualification::substitute;
use crate::synthesis::RecordTemplate;

/// Stateless mock data source.
///
/// Declares no configurable properties; every call is a pure function of the
/// request and the [`MockSettings`] supplied at construction.
#[derive(Debug)]
pub struct MockBridgeAdapter {
    settings: MockSettings,
    properties: ConfigurablePropertyMap,
    span: Span,
}

impl MockBridgeAdapter {
    /// Adapter display name.
    pub const NAME: &'static str = "Mock Bridge";
    /// Adapter version.
    pub const VERSION: &'static str = "1.0.0";

    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(MockSettings::default())
    }

    #[must_use]
    pub fn with_settings(settings: MockSettings) -> Self {
        Self {
            settings,
            properties: ConfigurablePropertyMap::new(),
            span: info_span!("bridge_adapter", adapter = Self::NAME),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &MockSettings {
        &self.settings
    }

    /// Substitutes the query in place, then honours a simulated error.
    fn prepare(request: &mut BridgeRequest) -> BridgeResult<()> {
        let resolved = substitute(request.query(), request.parameters())?;
        request.set_query(resolved);
        match request.parameter(parameter_keys::ERROR) {
            Some(message) => Err(BridgeError::simulated(message)),
            None => Ok(()),
        }
    }

    /// Total result-set size for search: metadata `count`, else the default.
    ///
    /// The value must be a non-negative 32-bit integer.
    fn search_total(&self, request: &BridgeRequest) -> BridgeResult<usize> {
        match request.metadata_value(metadata_keys::COUNT) {
            Some(raw) if !raw.is_empty() => raw
                .parse::<i32>()
                .ok()
                .and_then(|total| usize::try_from(total).ok())
                .ok_or_else(|| BridgeError::InvalidParameter {
                    name: metadata_keys::COUNT.to_string(),
                    value: raw.to_string(),
                }),
            _ => Ok(self.settings.default_search_total),
        }
    }

    /// Rejects pages larger than [`MockSettings::max_page_records`].
    fn check_page_len(&self, page: &Range<usize>, metadata: &Metadata) -> BridgeResult<()> {
        if page.len() <= self.settings.max_page_records {
            return Ok(());
        }
        Err(BridgeError::Pagination {
            key: metadata_keys::PAGE_SIZE.to_string(),
            value: metadata
                .get(metadata_keys::PAGE_SIZE)
                .cloned()
                .unwrap_or_default(),
            reason: format!(
                "page of {} records exceeds the limit of {}",
                page.len(),
                self.settings.max_page_records
            ),
        })
    }
}

impl Default for MockBridgeAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl BridgeAdapter for MockBridgeAdapter {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn version(&self) -> &'static str {
        Self::VERSION
    }

    fn properties(&self) -> &ConfigurablePropertyMap {
        &self.properties
    }

    fn configure(&mut self, options: &Parameters) -> BridgeResult<()> {
        self.properties.set_values(options);
        Ok(())
    }

    fn initialize(&mut self) -> BridgeResult<()> {
        self.properties.validate()
    }

    fn count(&self, request: &mut BridgeRequest) -> BridgeResult<Count> {
        let _entered = self.span.enter();
        Self::prepare(request)?;
        trace!(
            structure = request.structure(),
            query = request.query(),
            "counting the records"
        );

        let value = match request.parameter(parameter_keys::COUNT) {
            Some(raw) => raw.parse::<u64>().map_err(|_| BridgeError::InvalidParameter {
                name: parameter_keys::COUNT.to_string(),
                value: raw.to_string(),
            })?,
            None => self.settings.default_count,
        };
        Ok(Count::new(value, request.metadata().clone()))
    }

    fn retrieve(&self, request: &mut BridgeRequest) -> BridgeResult<Record> {
        let _entered = self.span.enter();
        Self::prepare(request)?;
        trace!(
            structure = request.structure(),
            fields = %request.field_string(),
            query = request.query(),
            "retrieving a record"
        );

        let record = RecordTemplate::from_request(request)?.render(self.settings.retrieve_index);
        Ok(record.with_metadata(request.metadata().clone()))
    }

    fn search(&self, request: &mut BridgeRequest) -> BridgeResult<RecordList> {
        let _entered = self.span.enter();
        Self::prepare(request)?;
        trace!(
            structure = request.structure(),
            fields = %request.field_string(),
            query = request.query(),
            "searching the records"
        );

        let total = self.search_total(request)?;
        let mut metadata = normalize_pagination_metadata(request.metadata())?;
        let page = Pagination::parse(&metadata)?.bounds(total);
        self.check_page_len(&page, &metadata)?;

        // Template errors only surface when a record is actually built.
        let records = if page.is_empty() {
            Vec::new()
        } else {
            RecordTemplate::from_request(request)?.render_range(page)
        };
        trace!(total, size = records.len(), "synthesized page");

        metadata.insert(metadata_keys::SIZE.to_string(), records.len().to_string());
        metadata.insert(metadata_keys::COUNT.to_string(), total.to_string());
        Ok(RecordList::new(request.fields().to_vec(), records, metadata))
    }
}

/// Registers the mock adapter with default settings under
/// [`MockBridgeAdapter::NAME`].
pub fn register(registry: &AdapterRegistry) {
    register_with_settings(registry, MockSettings::default());
}

/// Registers the mock adapter; every instance is built with `settings`.
pub fn register_with_settings(registry: &AdapterRegistry, settings: MockSettings) {
    registry.register(MockBridgeAdapter::NAME, move || {
        Box::new(MockBridgeAdapter::with_settings(settings.clone())) as Box<dyn BridgeAdapter>
    });
}
