use resvstat_types::{CapabilityRecord, ReservationRecord};

use crate::error::{Error, Result};

/// Records returned by a status query, plus the non-fatal error (if any)
/// that accompanied them. A query can fail and still deliver records.
#[derive(Debug, Default)]
pub struct StatusReply {
    pub records: Vec<ReservationRecord>,
    pub error: Option<Error>,
}

/// One authenticated exchange with a scheduler-managing server.
///
/// The transport behind this trait is an external collaborator; the
/// orchestrator only ever talks through it.
pub trait ServerSession {
    /// Server-level capability attributes (used for the width probe).
    fn capabilities(&mut self) -> Result<CapabilityRecord>;

    /// Status of one reservation, or of every reservation when `id` is
    /// `None`.
    fn reservations(&mut self, id: Option<&str>) -> Result<StatusReply>;

    /// Human-readable explanation for the most recent error on this
    /// connection, when the server supplied one.
    fn last_error_message(&mut self) -> Option<String>;
}

/// Opens authenticated sessions. `None` selects the configured default
/// server. One session per target; sessions are never reused.
pub trait Connector {
    type Session: ServerSession;

    fn connect(&self, server: Option<&str>) -> Result<Self::Session>;
}
