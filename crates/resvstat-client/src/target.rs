use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

/// Query scope resolved from one command-line argument.
///
/// `reservation: None` means every reservation at the server;
/// `server: None` means the configured default server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub reservation: Option<String>,
    pub server: Option<String>,
}

impl Target {
    /// The no-argument case: all reservations at the default server.
    pub fn all_at_default() -> Self {
        Self {
            reservation: None,
            server: None,
        }
    }
}

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.-]*$").expect("name pattern"));
static SERVER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.:-]*$").expect("server pattern"));

/// Split a user-supplied identifier into a query scope.
///
/// Accepted forms: `name` (owning server is the default), `name@server`,
/// and the wildcard `@server` for every reservation at that server.
pub fn resolve_identifier(raw: &str) -> Result<Target> {
    let malformed = || Error::BadIdentifier(raw.to_string());

    let (name, server) = match raw.split_once('@') {
        Some((name, server)) => (name, Some(server)),
        None => (raw, None),
    };

    if let Some(server) = server
        && !SERVER_RE.is_match(server)
    {
        return Err(malformed());
    }

    let reservation = if name.is_empty() {
        if server.is_none() {
            return Err(malformed());
        }
        None
    } else {
        if !NAME_RE.is_match(name) {
            return Err(malformed());
        }
        Some(name.to_string())
    };

    Ok(Target {
        reservation,
        server: server.map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_name_targets_default_server() {
        let target = resolve_identifier("R123.central").unwrap();
        assert_eq!(target.reservation.as_deref(), Some("R123.central"));
        assert_eq!(target.server, None);
    }

    #[test]
    fn at_suffix_selects_the_server() {
        let target = resolve_identifier("R123@backup:15001").unwrap();
        assert_eq!(target.reservation.as_deref(), Some("R123"));
        assert_eq!(target.server.as_deref(), Some("backup:15001"));
    }

    #[test]
    fn bare_at_is_a_server_wildcard() {
        let target = resolve_identifier("@backup").unwrap();
        assert_eq!(target.reservation, None);
        assert_eq!(target.server.as_deref(), Some("backup"));
    }

    #[test]
    fn malformed_identifiers_are_rejected() {
        for raw in ["not a resv!", "", "@", "R1@@host", "R1@ho st", "-R1", "R1@"] {
            let err = resolve_identifier(raw).unwrap_err();
            assert!(
                matches!(err, Error::BadIdentifier(ref s) if s == raw),
                "expected BadIdentifier for {:?}",
                raw
            );
        }
    }
}
