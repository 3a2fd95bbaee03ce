//! Bridgehub Mock — a test-double bridge adapter.
//!
//! Synthesizes deterministic records instead of querying a backend so that
//! host integrations built on the bridge contract can be exercised without a
//! live system. Requests control the output:
//!
//! - `error` parameter: fail with that message
//! - `count` parameter: result of the count operation
//! - `records` parameter: `NAME:VALUE` template, `$` replaced by record index
//! - `count`/`offset`/`pageSize` metadata: size of the search result set and page

pub mod adapter;
pub mod config;
pub mod qualification;
pub mod synthesis;

pub use adapter::{register, register_with_settings, MockBridgeAdapter};
pub use config::MockSettings;
pub use qualification::{substitute, MockQualificationParser};
pub use synthesis::{default_template, split_attributes, RecordTemplate, INDEX_TOKEN};
