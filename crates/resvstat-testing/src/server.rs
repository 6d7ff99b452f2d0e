//! Server doubles.
//!
//! `ScriptedConnector` fakes the collaborator interface in-process so
//! orchestrator tests can script per-connection outcomes and count probe
//! calls. `WireFixture` is a real loopback TCP server speaking the wire
//! protocol, for end-to-end tests that drive the installed binary.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::rc::Rc;
use std::thread;

use resvstat_client::wire::{CapabilitiesReply, Request, ReservationsReply, WireError};
use resvstat_client::{Connector, Error, Result, ServerSession, StatusReply};
use resvstat_types::{CapabilityRecord, ReservationRecord};

/// Script for one expected connection.
#[derive(Debug, Clone)]
pub struct SessionPlan {
    /// Refuse the connection with this native code.
    pub fail_connect: Option<i32>,
    /// Capability reply, or the server code for a failed probe.
    pub capabilities: std::result::Result<CapabilityRecord, i32>,
    /// Records returned by the status query.
    pub records: Vec<ReservationRecord>,
    /// Non-fatal server code accompanying the records.
    pub query_error: Option<i32>,
    /// What `last_error_message` reports after any error.
    pub error_message: Option<String>,
}

impl Default for SessionPlan {
    fn default() -> Self {
        Self {
            fail_connect: None,
            capabilities: Ok(CapabilityRecord::default()),
            records: Vec::new(),
            query_error: None,
            error_message: None,
        }
    }
}

impl SessionPlan {
    pub fn with_records(records: Vec<ReservationRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }
}

/// Hands out one scripted session per `connect` call, in order.
pub struct ScriptedConnector {
    plans: RefCell<VecDeque<SessionPlan>>,
    capability_calls: Rc<Cell<usize>>,
}

impl ScriptedConnector {
    pub fn new(plans: Vec<SessionPlan>) -> Self {
        Self {
            plans: RefCell::new(plans.into()),
            capability_calls: Rc::new(Cell::new(0)),
        }
    }

    /// Shared counter of capability probes across every session; clone it
    /// before handing the connector to the orchestrator.
    pub fn capability_calls(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.capability_calls)
    }
}

impl Connector for ScriptedConnector {
    type Session = ScriptedSession;

    fn connect(&self, server: Option<&str>) -> Result<ScriptedSession> {
        let plan = self
            .plans
            .borrow_mut()
            .pop_front()
            .expect("unexpected connection: script exhausted");

        if let Some(code) = plan.fail_connect {
            return Err(Error::Connect {
                server: server.unwrap_or("default").to_string(),
                code,
            });
        }

        Ok(ScriptedSession {
            plan,
            capability_calls: Rc::clone(&self.capability_calls),
        })
    }
}

pub struct ScriptedSession {
    plan: SessionPlan,
    capability_calls: Rc<Cell<usize>>,
}

impl ServerSession for ScriptedSession {
    fn capabilities(&mut self) -> Result<CapabilityRecord> {
        self.capability_calls.set(self.capability_calls.get() + 1);
        self.plan
            .capabilities
            .clone()
            .map_err(|code| Error::Query { code })
    }

    fn reservations(&mut self, _id: Option<&str>) -> Result<StatusReply> {
        Ok(StatusReply {
            records: self.plan.records.clone(),
            error: self.plan.query_error.map(|code| Error::Query { code }),
        })
    }

    fn last_error_message(&mut self) -> Option<String> {
        self.plan.error_message.clone()
    }
}

/// Code the fixture reports for a reservation id it does not know.
pub const CODE_UNKNOWN_RESERVATION: i32 = 15007;

/// A loopback TCP server speaking the wire protocol. Serves connections
/// until the test process exits.
pub struct WireFixture {
    addr: String,
}

impl WireFixture {
    /// Serve the given capability value and records on an ephemeral port.
    pub fn start(max_sequence_id: u64, records: Vec<ReservationRecord>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let addr = listener.local_addr().expect("local addr").to_string();
        let capabilities = crate::fixtures::capability_record(max_sequence_id);

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { break };
                serve_connection(stream, &capabilities, &records);
            }
        });

        Self { addr }
    }

    /// `host:port` to point `RESVSTAT_SERVER` at.
    pub fn addr(&self) -> &str {
        &self.addr
    }
}

fn serve_connection(
    stream: TcpStream,
    capabilities: &CapabilityRecord,
    records: &[ReservationRecord],
) {
    let mut reader = BufReader::new(match stream.try_clone() {
        Ok(clone) => clone,
        Err(_) => return,
    });
    let mut stream = stream;

    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).unwrap_or(0) == 0 {
            return;
        }
        let Ok(request) = serde_json::from_str::<Request>(&line) else {
            return;
        };

        let reply = match request {
            Request::Capabilities => serde_json::to_string(&CapabilitiesReply {
                attributes: capabilities.attributes.clone(),
                error: None,
            }),
            Request::Reservations { id } => serde_json::to_string(&respond(records, id)),
        };
        let Ok(reply) = reply else { return };
        if writeln!(stream, "{}", reply).is_err() {
            return;
        }
    }
}

fn respond(records: &[ReservationRecord], id: Option<String>) -> ReservationsReply {
    match id {
        None => ReservationsReply {
            records: records.to_vec(),
            error: None,
        },
        Some(id) => {
            let matched: Vec<_> = records.iter().filter(|r| r.id == id).cloned().collect();
            if matched.is_empty() {
                ReservationsReply {
                    records: Vec::new(),
                    error: Some(WireError {
                        code: CODE_UNKNOWN_RESERVATION,
                        message: Some(format!("Unknown reservation id {}", id)),
                    }),
                }
            } else {
                ReservationsReply {
                    records: matched,
                    error: None,
                }
            }
        }
    }
}
