//! Adaptor configuration: the knobs the original hard-coded as constants,
//! exposed here as explicit fields (O-5).

use std::time::Duration;

/// Tunables for a single adaptor instance. All fields have defaults matching
/// the original constants, except the receive-buffer cap, which follows the
/// externally documented 2000-byte limit (see crate-level docs for the
/// discrepancy with the original 500-byte buffer).
#[derive(Debug, Clone)]
pub struct AdaptorConfig {
    /// Local path this adaptor binds its datagram endpoint to.
    pub client_path: String,
    /// Path of the AVS daemon's datagram endpoint.
    pub server_path: String,
    /// How long a single façade call waits for a matching reply.
    pub command_timeout: Duration,
    /// Maximum datagram payload the receiver will accept; larger datagrams
    /// are truncated and treated as decode failures.
    pub recv_buffer_size: usize,
}

impl Default for AdaptorConfig {
    fn default() -> Self {
        Self {
            client_path: "/tmp/GSTmp".to_string(),
            server_path: "/tmp/GSSFUSrv".to_string(),
            command_timeout: Duration::from_secs(5),
            recv_buffer_size: 2000,
        }
    }
}
