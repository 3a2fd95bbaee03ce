//! Query substitution for the mock backend.

use bridgehub_core::{BridgeResult, Parameters, QualificationParser};

/// Inserts parameter values into the query exactly as supplied.
///
/// The mock never sends the query anywhere, so no quoting or escaping is
/// applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockQualificationParser;

impl QualificationParser for MockQualificationParser {
    fn encode_parameter(&self, _name: &str, value: &str) -> String {
        value.to_string()
    }
}

/// Replaces `<%= parameter["NAME"] %>` placeholders in `template` with the
/// matching values from `parameters`.
///
/// Placeholders without a matching parameter are kept verbatim.
///
/// # Errors
///
/// Returns [`BridgeError::Template`](bridgehub_core::BridgeError::Template)
/// for unterminated or unsupported placeholders.
pub fn substitute(template: &str, parameters: &Parameters) -> BridgeResult<String> {
    MockQualificationParser.parse(template, parameters)
}
