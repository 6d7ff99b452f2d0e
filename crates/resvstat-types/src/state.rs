/// Lifecycle phase of a reservation as reported by the server.
///
/// The wire form is a stringified small integer in `0..=12`; anything else
/// is passed through [`translate`] verbatim rather than rejected, because
/// downstream consumers may rely on seeing the raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationState {
    None,
    Unconfirmed,
    Confirmed,
    Wait,
    TimeToRun,
    Running,
    Finished,
    BeingDeleted,
    Deleted,
    DeletingJobs,
    Degraded,
    BeingAltered,
    InConflict,
}

struct StateLabels {
    short: &'static str,
    long: &'static str,
}

const STATE_LABELS: [StateLabels; 13] = [
    StateLabels { short: "NO", long: "RESV_NONE" },
    StateLabels { short: "UN", long: "RESV_UNCONFIRMED" },
    StateLabels { short: "CO", long: "RESV_CONFIRMED" },
    StateLabels { short: "WT", long: "RESV_WAIT" },
    StateLabels { short: "TR", long: "RESV_TIME_TO_RUN" },
    StateLabels { short: "RN", long: "RESV_RUNNING" },
    StateLabels { short: "FN", long: "RESV_FINISHED" },
    StateLabels { short: "BD", long: "RESV_BEING_DELETED" },
    StateLabels { short: "DE", long: "RESV_DELETED" },
    StateLabels { short: "DJ", long: "RESV_DELETING_JOBS" },
    StateLabels { short: "DG", long: "RESV_DEGRADED" },
    StateLabels { short: "AL", long: "RESV_BEING_ALTERED" },
    StateLabels { short: "IC", long: "RESV_IN_CONFLICT" },
];

const ALL_STATES: [ReservationState; 13] = [
    ReservationState::None,
    ReservationState::Unconfirmed,
    ReservationState::Confirmed,
    ReservationState::Wait,
    ReservationState::TimeToRun,
    ReservationState::Running,
    ReservationState::Finished,
    ReservationState::BeingDeleted,
    ReservationState::Deleted,
    ReservationState::DeletingJobs,
    ReservationState::Degraded,
    ReservationState::BeingAltered,
    ReservationState::InConflict,
];

impl ReservationState {
    /// Validate a wire code before the label table is indexed.
    pub fn from_code(code: i64) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|i| ALL_STATES.get(i).copied())
    }

    /// Fixed 2-letter code, e.g. `CO`.
    pub fn short_label(self) -> &'static str {
        STATE_LABELS[self as usize].short
    }

    /// Long symbolic name, e.g. `RESV_CONFIRMED`.
    pub fn long_label(self) -> &'static str {
        STATE_LABELS[self as usize].long
    }
}

/// Convert a wire state code into a human-readable label.
///
/// Returns the short 2-letter code or the long symbolic name per `long`.
/// Non-numeric or out-of-range input comes back unchanged; this never fails.
pub fn translate(code: &str, long: bool) -> &str {
    match code.parse::<i64>().ok().and_then(ReservationState::from_code) {
        Some(state) if long => state.long_label(),
        Some(state) => state.short_label(),
        None => code,
    }
}
