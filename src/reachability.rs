//! Connectivity checks consulted before every network attempt.

use crate::config;
use reqwest::Url;
use std::net::TcpStream;
use std::time::Duration;

/// Answers "is the device currently connected?".
pub trait Reachability: Send + Sync {
    fn is_connected(&self) -> bool;
}

impl<F> Reachability for F
where
    F: Fn() -> bool + Send + Sync,
{
    fn is_connected(&self) -> bool {
        self()
    }
}

/// A constant answer. `Fixed(false)` is offline mode.
#[derive(Debug, Clone, Copy)]
pub struct Fixed(pub bool);

impl Reachability for Fixed {
    fn is_connected(&self) -> bool {
        self.0
    }
}

/// Probes connectivity by opening a TCP connection to the API host.
///
/// The host is resolved on every check; a DNS failure counts as offline.
#[derive(Debug, Clone)]
pub struct TcpProbe {
    url: Url,
    timeout: Duration,
}

impl TcpProbe {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            timeout: config::PROBE_TIMEOUT,
        }
    }

    /// Override the per-address connect timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Reachability for TcpProbe {
    fn is_connected(&self) -> bool {
        let addrs = match self.url.socket_addrs(|| None) {
            Ok(addrs) => addrs,
            Err(e) => {
                tracing::debug!("Could not resolve {}: {}", self.url, e);
                return false;
            }
        };
        addrs
            .iter()
            .any(|addr| TcpStream::connect_timeout(addr, self.timeout).is_ok())
    }
}
