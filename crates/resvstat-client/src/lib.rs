pub mod api;
pub mod config;
pub mod error;
pub mod target;
pub mod wire;

pub use api::{Connector, ServerSession, StatusReply};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use target::{Target, resolve_identifier};
pub use wire::WireConnector;
