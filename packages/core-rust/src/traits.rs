use crate::config::ConfigurablePropertyMap;
use crate::error::BridgeResult;
use crate::types::{BridgeRequest, Count, Parameters, Record, RecordList};

/// Pluggable data source behind the bridge contract.
///
/// Hosts drive every adapter through the same lifecycle: construct,
/// [`configure`](BridgeAdapter::configure), [`initialize`](BridgeAdapter::initialize),
/// then serve queries. Query operations are synchronous and take the request
/// mutably so the adapter can record the substituted query on it.
///
/// Used as `Arc<dyn BridgeAdapter>` once initialized.
pub trait BridgeAdapter: Send + Sync {
    /// Display name of the adapter (e.g., `"Mock Bridge"`).
    fn name(&self) -> &'static str;

    /// Adapter version string.
    fn version(&self) -> &'static str;

    /// Declared properties and their current values.
    fn properties(&self) -> &ConfigurablePropertyMap;

    /// Apply host-supplied property values.
    ///
    /// # Errors
    ///
    /// Implementations may reject values they cannot accept.
    fn configure(&mut self, options: &Parameters) -> BridgeResult<()>;

    /// One-time setup after configuration (validate properties, open clients).
    ///
    /// # Errors
    ///
    /// Returns an error if the adapter cannot serve requests.
    fn initialize(&mut self) -> BridgeResult<()>;

    /// Count records matching the request.
    ///
    /// # Errors
    ///
    /// Any [`BridgeError`](crate::BridgeError) the backend raises.
    fn count(&self, request: &mut BridgeRequest) -> BridgeResult<Count>;

    /// Retrieve a single record.
    ///
    /// # Errors
    ///
    /// Any [`BridgeError`](crate::BridgeError) the backend raises.
    fn retrieve(&self, request: &mut BridgeRequest) -> BridgeResult<Record>;

    /// Retrieve one page of records.
    ///
    /// # Errors
    ///
    /// Any [`BridgeError`](crate::BridgeError) the backend raises.
    fn search(&self, request: &mut BridgeRequest) -> BridgeResult<RecordList>;
}
