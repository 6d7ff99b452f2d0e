//! Attribute projection: pull the fields each display mode needs out of a
//! record's attribute list and format the values.
//!
//! Malformed values never error here; they degrade to the documented
//! fallbacks so one corrupt record cannot blank a whole report.

use chrono::{Local, TimeZone};

use resvstat_types::{
    ATTR_DURATION, ATTR_END, ATTR_OWNER, ATTR_QUEUE, ATTR_START, ATTR_STATE, Attribute, FieldKind,
    escape_nonprint, field_kind, translate,
};

/// Calendar format shared by every timestamp attribute: weekday, month,
/// day, time, year, in the local time zone.
pub const TIME_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

/// Fields of the short one-line summary. Unset fields stay empty; an unset
/// duration stays zero.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ShortFields {
    pub queue: String,
    pub owner: String,
    pub state: String,
    pub start: String,
    pub duration: i64,
    pub end: String,
}

/// Project one record's attributes into the short summary fields.
pub fn short_fields(attributes: &[Attribute]) -> ShortFields {
    let mut out = ShortFields::default();
    for attr in attributes {
        match attr.name.as_str() {
            ATTR_QUEUE => out.queue = escape_nonprint(&attr.value),
            ATTR_OWNER => out.owner = escape_nonprint(&attr.value),
            ATTR_STATE => out.state = escape_nonprint(translate(&attr.value, false)),
            ATTR_START => out.start = format_timestamp(&attr.value),
            ATTR_END => out.end = format_timestamp(&attr.value),
            ATTR_DURATION => out.duration = attr.value.parse().unwrap_or(0),
            _ => {}
        }
    }
    out
}

/// Ordered `(label, value)` pairs for the full listing, produced lazily.
///
/// Resource-scoped attributes always appear as `name.resource`; unscoped
/// ones go through the field-kind table, which drops the suppressed names.
pub fn full_pairs(attributes: &[Attribute]) -> impl Iterator<Item = (String, String)> + '_ {
    attributes.iter().filter_map(|attr| {
        if let Some(resource) = &attr.resource {
            let label = format!("{}.{}", attr.name, resource);
            return Some((label, escape_nonprint(&attr.value)));
        }

        let value = match field_kind(&attr.name) {
            FieldKind::Suppressed => return None,
            FieldKind::State => translate(&attr.value, true).to_string(),
            FieldKind::Timestamp => format_timestamp(&attr.value),
            FieldKind::Duration | FieldKind::PlainText => attr.value.clone(),
        };
        Some((attr.name.clone(), escape_nonprint(&value)))
    })
}

/// Render epoch seconds as local calendar time. A value that fails to
/// parse as an integer is treated as epoch 0.
pub fn format_timestamp(value: &str) -> String {
    let secs = value.parse::<i64>().unwrap_or(0);
    Local
        .timestamp_opt(secs, 0)
        .earliest()
        .map(|t| t.format(TIME_FORMAT).to_string())
        .unwrap_or_default()
}
