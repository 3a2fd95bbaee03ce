//! Bridgehub Core — the contract between hosts and pluggable bridge adapters.
//!
//! Defines the request/record data model, the [`BridgeAdapter`] trait, the
//! shared error taxonomy, query placeholder parsing, pagination metadata
//! handling, configurable properties, and the [`AdapterRegistry`] hosts use
//! to compose adapters.

pub mod config;
pub mod error;
pub mod pagination;
pub mod qualification;
pub mod registry;
pub mod traits;
pub mod types;

pub use config::{ConfigurableProperty, ConfigurablePropertyMap};
pub use error::{BridgeError, BridgeResult};
pub use pagination::{normalize_pagination_metadata, Pagination};
pub use qualification::QualificationParser;
pub use registry::{AdapterFactory, AdapterRegistry};
pub use traits::BridgeAdapter;
pub use types::{
    metadata_keys, parameter_keys, BridgeRequest, Count, Metadata, Parameters, Record, RecordList,
};
