//! Placeholder scanning for bridge query templates.
//!
//! A qualification is the query string a bridge passes to its backend. Hosts
//! embed request parameters in it with ERB-style placeholders:
//!
//! ```text
//! name = '<%= parameter["Name"] %>' AND status = 'Active'
//! ```
//!
//! [`QualificationParser::parse`] replaces each placeholder with the encoded
//! parameter value. Backends only decide how a value is encoded (quoting,
//! escaping); the scan itself is shared.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{BridgeError, BridgeResult};
use crate::types::Parameters;

/// Opening delimiter of a placeholder.
pub const PLACEHOLDER_OPEN: &str = "<%=";
/// Closing delimiter of a placeholder.
pub const PLACEHOLDER_CLOSE: &str = "%>";

/// Matches the body between the delimiters: `parameter["NAME"]`.
fn parameter_expression() -> &'static Regex {
    static EXPRESSION: OnceLock<Regex> = OnceLock::new();
    EXPRESSION.get_or_init(|| {
        Regex::new(r#"^\s*parameter\[\s*"([^"]*)"\s*\]\s*$"#).expect("static regex is valid")
    })
}

/// Backend-specific query rewriting.
pub trait QualificationParser {
    /// Encodes a parameter value for insertion into the backend query language.
    fn encode_parameter(&self, name: &str, value: &str) -> String;

    /// Substitutes every `<%= parameter["NAME"] %>` placeholder in `query`.
    ///
    /// Placeholders naming a parameter that is not in `parameters` are kept
    /// verbatim. Text outside placeholders is copied unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Template`] if a placeholder is never closed or
    /// its body is not a `parameter["NAME"]` expression.
    fn parse(&self, query: &str, parameters: &Parameters) -> BridgeResult<String> {
        let mut output = String::with_capacity(query.len());
        let mut cursor = 0;

        while let Some(found) = query[cursor..].find(PLACEHOLDER_OPEN) {
            let open = cursor + found;
            let body_start = open + PLACEHOLDER_OPEN.len();
            let Some(body_len) = query[body_start..].find(PLACEHOLDER_CLOSE) else {
                return Err(BridgeError::Template {
                    position: open,
                    reason: format!("unterminated placeholder, expected '{PLACEHOLDER_CLOSE}'"),
                });
            };
            let close = body_start + body_len + PLACEHOLDER_CLOSE.len();
            let body = &query[body_start..body_start + body_len];

            let Some(captures) = parameter_expression().captures(body) else {
                return Err(BridgeError::Template {
                    position: open,
                    reason: format!("unsupported placeholder expression '{}'", body.trim()),
                });
            };
            let name = captures.get(1).map_or("", |m| m.as_str());

            output.push_str(&query[cursor..open]);
            match parameters.get(name) {
                Some(value) => output.push_str(&self.encode_parameter(name, value)),
                None => {
                    tracing::debug!(parameter = name, "placeholder left unresolved");
                    output.push_str(&query[open..close]);
                }
            }
            cursor = close;
        }

        output.push_str(&query[cursor..]);
        Ok(output)
    }
}
