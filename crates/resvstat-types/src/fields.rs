//! Attribute-name vocabulary and display classification.
//!
//! Matching is exact-string and case-sensitive everywhere; there is no
//! normalization pass on server-supplied names.

pub const ATTR_QUEUE: &str = "queue";
pub const ATTR_OWNER: &str = "owner";
pub const ATTR_STATE: &str = "state";
pub const ATTR_START: &str = "start";
pub const ATTR_END: &str = "end";
pub const ATTR_DURATION: &str = "duration";
pub const ATTR_CTIME: &str = "ctime";
pub const ATTR_MTIME: &str = "mtime";
pub const ATTR_RETRY: &str = "retry";
pub const ATTR_NODES: &str = "nodes";
pub const ATTR_STANDING: &str = "standing";
pub const ATTR_TIMEZONE: &str = "timezone";
pub const ATTR_COUNT: &str = "count";
pub const ATTR_RRULE: &str = "rrule";
pub const ATTR_INDEX: &str = "index";

/// Server capability attribute read by the width probe.
pub const ATTR_MAX_SEQUENCE_ID: &str = "max_sequence_id";

/// How an attribute value is rendered in long-form output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Run through the state translator.
    State,
    /// Epoch seconds, rendered as local calendar time.
    Timestamp,
    /// Integer seconds, shown without unit conversion.
    Duration,
    /// Never shown at this display level.
    Suppressed,
    /// Shown as-is.
    PlainText,
}

/// Classify an unscoped attribute name.
pub fn field_kind(name: &str) -> FieldKind {
    match name {
        ATTR_STATE => FieldKind::State,
        ATTR_START | ATTR_END | ATTR_CTIME | ATTR_MTIME | ATTR_RETRY => FieldKind::Timestamp,
        ATTR_DURATION => FieldKind::Duration,
        ATTR_NODES | ATTR_STANDING | ATTR_TIMEZONE => FieldKind::Suppressed,
        _ => FieldKind::PlainText,
    }
}
