//! Default transport: one JSON document per line over a blocking TCP
//! stream. The run is strictly sequential (one request in flight at a
//! time), so there is no framing beyond the newline and no executor.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpStream;

use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;

use resvstat_types::{Attribute, CapabilityRecord, ReservationRecord};

use crate::api::{Connector, ServerSession, StatusReply};
use crate::error::{Error, Result};

/// Code reported for local stream or framing failures, where the server
/// never supplied one. Matches errno EPROTO on Linux.
const CODE_PROTOCOL: i32 = 71;

/// One request frame.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    Capabilities,
    Reservations {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
    },
}

/// Error object embedded in a reply frame.
#[derive(Debug, Serialize, Deserialize)]
pub struct WireError {
    pub code: i32,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CapabilitiesReply {
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub error: Option<WireError>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ReservationsReply {
    #[serde(default)]
    pub records: Vec<ReservationRecord>,
    #[serde(default)]
    pub error: Option<WireError>,
}

/// Opens one wire session per target against `host:port` addresses.
pub struct WireConnector {
    default_server: String,
}

impl WireConnector {
    pub fn new(default_server: impl Into<String>) -> Self {
        Self {
            default_server: default_server.into(),
        }
    }
}

impl Connector for WireConnector {
    type Session = WireSession;

    fn connect(&self, server: Option<&str>) -> Result<WireSession> {
        let server = server.unwrap_or(&self.default_server);
        let connect_err = |e: &std::io::Error| Error::Connect {
            server: server.to_string(),
            code: e.raw_os_error().unwrap_or(1),
        };

        let stream = TcpStream::connect(server).map_err(|e| connect_err(&e))?;
        let reader = BufReader::new(stream.try_clone().map_err(|e| connect_err(&e))?);
        Ok(WireSession {
            stream,
            reader,
            last_error: None,
        })
    }
}

#[derive(Debug)]
pub struct WireSession {
    stream: TcpStream,
    reader: BufReader<TcpStream>,
    last_error: Option<String>,
}

fn protocol_err<E>(_: E) -> Error {
    Error::Query {
        code: CODE_PROTOCOL,
    }
}

impl WireSession {
    fn exchange<T: DeserializeOwned>(&mut self, request: &Request) -> Result<T> {
        let frame = serde_json::to_string(request).map_err(protocol_err)?;
        writeln!(self.stream, "{}", frame).map_err(protocol_err)?;
        self.stream.flush().map_err(protocol_err)?;

        let mut line = String::new();
        let n = self.reader.read_line(&mut line).map_err(protocol_err)?;
        if n == 0 {
            // Server hung up without replying.
            return Err(Error::Query {
                code: CODE_PROTOCOL,
            });
        }
        serde_json::from_str(&line).map_err(protocol_err)
    }

    fn note_error(&mut self, error: &Option<WireError>) -> Option<Error> {
        let error = error.as_ref()?;
        self.last_error = error.message.clone();
        Some(Error::Query { code: error.code })
    }
}

impl ServerSession for WireSession {
    fn capabilities(&mut self) -> Result<CapabilityRecord> {
        let reply: CapabilitiesReply = self.exchange(&Request::Capabilities)?;
        if let Some(err) = self.note_error(&reply.error) {
            return Err(err);
        }
        Ok(CapabilityRecord {
            attributes: reply.attributes,
        })
    }

    fn reservations(&mut self, id: Option<&str>) -> Result<StatusReply> {
        let request = Request::Reservations {
            id: id.map(str::to_string),
        };
        let reply: ReservationsReply = self.exchange(&request)?;
        let error = self.note_error(&reply.error);
        Ok(StatusReply {
            records: reply.records,
            error,
        })
    }

    fn last_error_message(&mut self) -> Option<String> {
        self.last_error.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_frames_are_op_tagged() {
        let frame = serde_json::to_string(&Request::Capabilities).unwrap();
        assert_eq!(frame, r#"{"op":"capabilities"}"#);

        let frame = serde_json::to_string(&Request::Reservations {
            id: Some("R7".to_string()),
        })
        .unwrap();
        assert_eq!(frame, r#"{"op":"reservations","id":"R7"}"#);

        // The id key is omitted for the show-everything query.
        let frame = serde_json::to_string(&Request::Reservations { id: None }).unwrap();
        assert_eq!(frame, r#"{"op":"reservations"}"#);
    }

    #[test]
    fn replies_tolerate_missing_fields() {
        let reply: ReservationsReply = serde_json::from_str("{}").unwrap();
        assert!(reply.records.is_empty());
        assert!(reply.error.is_none());

        let reply: CapabilitiesReply =
            serde_json::from_str(r#"{"error":{"code":15007}}"#).unwrap();
        let error = reply.error.unwrap();
        assert_eq!(error.code, 15007);
        assert_eq!(error.message, None);
    }
}
