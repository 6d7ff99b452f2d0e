//! Fixed-geometry text output for reservation records.

use std::io::{self, Write};

use resvstat_types::{DisplayMode, ReservationRecord, escape_nonprint};

use crate::project::{full_pairs, short_fields};

/// Column widths for the short table: id, queue, user, state.
#[derive(Debug, Clone, Copy)]
struct Columns {
    id: usize,
    queue: usize,
    user: usize,
    state: usize,
    rule: usize,
}

const NARROW: Columns = Columns {
    id: 10,
    queue: 8,
    user: 8,
    state: 5,
    rule: 69,
};

const WIDE: Columns = Columns {
    id: 15,
    queue: 13,
    user: 8,
    state: 5,
    rule: 79,
};

const TIME_WIDTH: usize = 17;

/// Writes rendered records to `out`.
///
/// The header flag lives here, not in a process static, so one run prints
/// the short-table header exactly once across all its targets.
pub struct Renderer<W> {
    out: W,
    mode: DisplayMode,
    header_printed: bool,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, mode: DisplayMode) -> Self {
        Self {
            out,
            mode,
            header_printed: false,
        }
    }

    /// Render one target's records with the run's current width hint.
    pub fn render(&mut self, records: &[ReservationRecord], wide: bool) -> io::Result<()> {
        if records.is_empty() {
            return Ok(());
        }

        match self.mode {
            DisplayMode::NamesOnly => {
                for record in records {
                    writeln!(self.out, "Resv ID: {}", escape_nonprint(&record.id))?;
                }
            }
            DisplayMode::Default => {
                let cols = if wide { WIDE } else { NARROW };
                if !self.header_printed {
                    self.header(cols)?;
                    self.header_printed = true;
                }
                for record in records {
                    self.short_line(record, cols)?;
                }
            }
            DisplayMode::Full => {
                for record in records {
                    self.full_record(record)?;
                }
            }
        }
        Ok(())
    }

    fn header(&mut self, cols: Columns) -> io::Result<()> {
        writeln!(
            self.out,
            "{} {} {} {} {} / Duration / {}",
            fit_left("Resv ID", cols.id),
            fit_left("Queue", cols.queue),
            fit_left("User", cols.user),
            fit_left("State", cols.state),
            fit_right("Start", TIME_WIDTH),
            fit_left("End", TIME_WIDTH),
        )?;
        writeln!(self.out, "{}", "-".repeat(cols.rule))
    }

    fn short_line(&mut self, record: &ReservationRecord, cols: Columns) -> io::Result<()> {
        let fields = short_fields(&record.attributes);
        writeln!(
            self.out,
            "{} {} {} {} {} / {} / {}",
            fit_left(&escape_nonprint(&record.id), cols.id),
            fit_left(&fields.queue, cols.queue),
            fit_left(&fields.owner, cols.user),
            fit_left(&fields.state, cols.state),
            fit_right(&fields.start, TIME_WIDTH),
            fields.duration,
            fit_left(&fields.end, TIME_WIDTH),
        )
    }

    fn full_record(&mut self, record: &ReservationRecord) -> io::Result<()> {
        writeln!(self.out, "Resv ID: {}", escape_nonprint(&record.id))?;
        for (label, value) in full_pairs(&record.attributes) {
            writeln!(self.out, "{} = {}", label, value)?;
        }
        writeln!(self.out)
    }
}

/// Left-justify into exactly `width` columns; over-width values truncate.
fn fit_left(s: &str, width: usize) -> String {
    format!("{:<width$}", clip(s, width))
}

/// Right-justify into exactly `width` columns; over-width values truncate.
fn fit_right(s: &str, width: usize) -> String {
    format!("{:>width$}", clip(s, width))
}

fn clip(s: &str, width: usize) -> &str {
    match s.char_indices().nth(width) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
