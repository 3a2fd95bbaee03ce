//! Configurable property bag exposed by every adapter.
//!
//! Hosts read the declared properties before configuring an adapter (to build
//! forms, show defaults) and then push values with
//! [`ConfigurablePropertyMap::set_values`].

use std::fmt;

use crate::error::{BridgeError, BridgeResult};
use crate::types::Parameters;

/// Single declared adapter property.
#[derive(Clone, PartialEq, Eq)]
pub struct ConfigurableProperty {
    pub name: String,
    pub description: String,
    pub default_value: Option<String>,
    /// Initialization fails when a required property has no value.
    pub required: bool,
    /// Sensitive values are redacted from `Debug` output.
    pub sensitive: bool,
    value: Option<String>,
}

impl ConfigurableProperty {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            default_value: None,
            required: false,
            sensitive: false,
            value: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_default(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    /// Current value, falling back to the default.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref().or(self.default_value.as_deref())
    }
}

impl fmt::Debug for ConfigurableProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = if self.sensitive && self.value.is_some() {
            Some("<redacted>")
        } else {
            self.value.as_deref()
        };
        f.debug_struct("ConfigurableProperty")
            .field("name", &self.name)
            .field("required", &self.required)
            .field("sensitive", &self.sensitive)
            .field("default_value", &self.default_value)
            .field("value", &value)
            .finish_non_exhaustive()
    }
}

/// Ordered collection of declared properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigurablePropertyMap {
    properties: Vec<ConfigurableProperty>,
}

impl ConfigurablePropertyMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a property. A later declaration with the same name replaces
    /// the earlier one in place.
    #[must_use]
    pub fn with_property(mut self, property: ConfigurableProperty) -> Self {
        match self.properties.iter_mut().find(|p| p.name == property.name) {
            Some(existing) => *existing = property,
            None => self.properties.push(property),
        }
        self
    }

    /// Applies host-supplied values. Keys that match no declared property are
    /// ignored.
    pub fn set_values(&mut self, values: &Parameters) {
        for (name, value) in values {
            match self.properties.iter_mut().find(|p| &p.name == name) {
                Some(property) => property.value = Some(value.clone()),
                None => tracing::warn!(property = %name, "ignoring undeclared adapter property"),
            }
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ConfigurableProperty> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Effective value of a property (set value, else default).
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(ConfigurableProperty::value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigurableProperty> {
        self.properties.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Checks that every required property has a non-empty effective value.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Configuration`] listing the missing properties.
    pub fn validate(&self) -> BridgeResult<()> {
        let missing: Vec<&str> = self
            .properties
            .iter()
            .filter(|p| p.required && p.value().is_none_or(str::is_empty))
            .map(|p| p.name.as_str())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(BridgeError::Configuration(format!(
                "missing required properties: {}",
                missing.join(", ")
            )))
        }
    }
}
