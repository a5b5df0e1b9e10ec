//! Module `identity`
//!
//! Who and where an audit line comes from.

use log::debug;
use std::net::UdpSocket;

/// Machine and user details stamped on every audit line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostIdentity {
    pub hostname: String,
    pub username: String,
    pub local_ip: String,
}

impl HostIdentity {
    pub fn new(
        hostname: impl Into<String>,
        username: impl Into<String>,
        local_ip: impl Into<String>,
    ) -> Self {
        Self {
            hostname: hostname.into(),
            username: username.into(),
            local_ip: local_ip.into(),
        }
    }

    /// Reads the current machine's identity. Unknown parts are left empty.
    pub fn detect() -> Self {
        let hostname = hostname::get()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        Self {
            hostname,
            username: whoami::username(),
            local_ip: local_ip().unwrap_or_default(),
        }
    }
}

/// Address of the interface that would route outbound traffic.
///
/// Connecting a UDP socket only selects a route; no packet is sent.
fn local_ip() -> Option<String> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    if let Err(e) = socket.connect("8.8.8.8:80") {
        debug!("No route for local address lookup: {}", e);
        return None;
    }
    socket.local_addr().ok().map(|addr| addr.ip().to_string())
}
