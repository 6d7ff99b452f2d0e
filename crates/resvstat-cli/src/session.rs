//! Per-run query orchestration.
//!
//! One `Session` value carries everything a run is allowed to remember:
//! the renderer (which owns the header flag) and the width hint, computed
//! at most once no matter how many targets the command line names.

use std::io::Write;

use resvstat_client::{Connector, Error, ServerSession, StatusReply, Target, resolve_identifier};
use resvstat_types::DisplayMode;

use crate::render::Renderer;

/// Prefix on every diagnostic line.
pub const TOOL: &str = "resvstat";

/// A failed connection aborts the whole run; without any connection no
/// later target can succeed either. The caller maps `code` to the process
/// exit status at the top-level boundary.
#[derive(Debug, PartialEq, Eq)]
pub struct FatalError {
    pub code: i32,
}

pub struct Session<C, W, E> {
    connector: C,
    renderer: Renderer<W>,
    err: E,
    wide: Option<bool>,
}

impl<C, W, E> Session<C, W, E>
where
    C: Connector,
    W: Write,
    E: Write,
{
    pub fn new(connector: C, mode: DisplayMode, out: W, err: E) -> Self {
        Self {
            connector,
            renderer: Renderer::new(out, mode),
            err,
            wide: None,
        }
    }

    /// Process every target in command-line order, strictly sequentially.
    ///
    /// Returns the exit status: 0, or 1 when any identifier failed to
    /// resolve. A malformed identifier skips its target only; later
    /// targets still run and render.
    pub fn run(&mut self, args: &[String]) -> Result<i32, FatalError> {
        if args.is_empty() {
            self.handle_target(&Target::all_at_default())?;
            return Ok(0);
        }

        let mut bad_identifier = false;
        for arg in args {
            match resolve_identifier(arg) {
                Ok(target) => self.handle_target(&target)?,
                Err(e) => {
                    let _ = writeln!(self.err, "{}: {}", TOOL, e);
                    bad_identifier = true;
                }
            }
        }
        Ok(if bad_identifier { 1 } else { 0 })
    }

    /// Connect, probe the width hint if still unknown, query, render. The
    /// connection lives for exactly this one target.
    fn handle_target(&mut self, target: &Target) -> Result<(), FatalError> {
        let mut session = match self.connector.connect(target.server.as_deref()) {
            Ok(session) => session,
            Err(e) => {
                let _ = writeln!(self.err, "{}: {}", TOOL, e);
                return Err(FatalError {
                    code: e.native_code(),
                });
            }
        };

        if self.wide.is_none() {
            match session.capabilities() {
                Ok(caps) => self.wide = Some(caps.wide_ids()),
                Err(e) => {
                    // Hint stays unknown so the next target retries the probe.
                    self.report_query_error(&mut session, &e);
                    return Ok(());
                }
            }
        }

        let reply = match session.reservations(target.reservation.as_deref()) {
            Ok(reply) => reply,
            Err(e) => StatusReply {
                records: Vec::new(),
                error: Some(e),
            },
        };
        if let Some(e) = &reply.error {
            self.report_query_error(&mut session, e);
        }

        // A dead stdout is not reportable anywhere useful.
        let _ = self
            .renderer
            .render(&reply.records, self.wide.unwrap_or(false));
        Ok(())
    }

    /// Prefer the server-supplied message; fall back to `Error <code>`.
    fn report_query_error(&mut self, session: &mut C::Session, error: &Error) {
        match session.last_error_message() {
            Some(message) => {
                let _ = writeln!(self.err, "{}: {}", TOOL, message);
            }
            None => {
                let _ = writeln!(self.err, "{}: {}", TOOL, error);
            }
        }
    }
}
