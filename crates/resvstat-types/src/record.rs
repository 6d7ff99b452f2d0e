use serde::{Deserialize, Serialize};

use crate::fields::ATTR_MAX_SEQUENCE_ID;

/// Reservation sequence ids at or below this value fit the narrow columns.
pub const DEFAULT_MAX_SEQUENCE_ID: u64 = 9_999_999;

/// One `(name, resource, value)` triple as delivered by the server.
///
/// `resource` is present only for resource-scoped attributes; `name` is not
/// guaranteed unique when `resource` differs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resource: None,
            value: value.into(),
        }
    }

    pub fn scoped(
        name: impl Into<String>,
        resource: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            resource: Some(resource.into()),
            value: value.into(),
        }
    }
}

/// One reservation as returned by a status query.
///
/// Attribute order is preserved as delivered; long-form display walks it
/// in that order. Records are constructed fresh per response and discarded
/// after rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRecord {
    pub id: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl ReservationRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: Vec::new(),
        }
    }

    /// Value of the first unscoped attribute with this name.
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.resource.is_none() && a.name == name)
            .map(|a| a.value.as_str())
    }
}

/// Server-level attributes returned by the capability probe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityRecord {
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl CapabilityRecord {
    /// The server's maximum reservation sequence id, if it reports one.
    pub fn max_sequence_id(&self) -> Option<u64> {
        self.attributes
            .iter()
            .find(|a| a.resource.is_none() && a.name == ATTR_MAX_SEQUENCE_ID)
            .and_then(|a| a.value.parse().ok())
    }

    /// Whether identifier columns need the wide layout.
    pub fn wide_ids(&self) -> bool {
        self.max_sequence_id()
            .is_some_and(|v| v > DEFAULT_MAX_SEQUENCE_ID)
    }
}
