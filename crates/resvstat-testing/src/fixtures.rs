//! Builders for the records tests feed through the projector, renderer and
//! orchestrator.

use resvstat_types::{
    ATTR_DURATION, ATTR_END, ATTR_MAX_SEQUENCE_ID, ATTR_OWNER, ATTR_QUEUE, ATTR_START, ATTR_STATE,
    Attribute, CapabilityRecord, ReservationRecord,
};

/// Unscoped attribute triple.
pub fn attr(name: &str, value: impl ToString) -> Attribute {
    Attribute::new(name, value.to_string())
}

/// Resource-scoped attribute triple.
pub fn scoped_attr(name: &str, resource: &str, value: impl ToString) -> Attribute {
    Attribute::scoped(name, resource, value.to_string())
}

/// A record with the given id and attributes, in delivery order.
pub fn record(id: &str, attributes: Vec<Attribute>) -> ReservationRecord {
    ReservationRecord {
        id: id.to_string(),
        attributes,
    }
}

/// A confirmed one-hour reservation carrying every short-table field.
pub fn confirmed_record(id: &str) -> ReservationRecord {
    record(
        id,
        vec![
            attr(ATTR_QUEUE, "workq"),
            attr(ATTR_OWNER, "alice"),
            attr(ATTR_STATE, 2),
            attr(ATTR_START, 1_700_000_000_i64),
            attr(ATTR_DURATION, 3600),
            attr(ATTR_END, 1_700_003_600_i64),
        ],
    )
}

/// Server capabilities reporting the given maximum sequence id.
pub fn capability_record(max_sequence_id: u64) -> CapabilityRecord {
    CapabilityRecord {
        attributes: vec![attr(ATTR_MAX_SEQUENCE_ID, max_sequence_id)],
    }
}
