//! Datagram transport: one fixed-path Unix datagram socket, a send
//! operation, and a background receiver task that hands raw datagrams off
//! to whoever is listening.
//!
//! Mirrors the original's socket setup (bind client path, unlink a stale
//! file first, `sendto` the server path) but the receive side forwards into
//! an mpsc channel rather than calling back into global state directly, so
//! the dispatcher can own its own processing loop.

use std::path::Path;
use std::sync::Arc;

use tokio::net::UnixDatagram;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::AdaptorConfig;
use crate::error::AdsError;

/// Cheap to clone: `socket` is an `Arc`, `server_path` a small owned string.
/// Cloning hands out another handle to the same bound socket without
/// needing to hold a lock across an `.await`.
#[derive(Clone)]
pub struct Transport {
    socket: Arc<UnixDatagram>,
    server_path: String,
}

impl Transport {
    /// Binds the local endpoint at `config.client_path`, removing a stale
    /// socket file there first.
    pub fn bind(config: &AdaptorConfig) -> Result<Self, AdsError> {
        let client_path = Path::new(&config.client_path);
        if client_path.exists() {
            std::fs::remove_file(client_path)
                .map_err(|e| AdsError::Transport(format!("failed to remove stale socket {}: {e}", config.client_path)))?;
        }
        let socket = UnixDatagram::bind(client_path)
            .map_err(|e| AdsError::Transport(format!("failed to bind {}: {e}", config.client_path)))?;
        Ok(Self { socket: Arc::new(socket), server_path: config.server_path.clone() })
    }

    /// Sends exactly one datagram to the AVS daemon's fixed path.
    pub async fn send(&self, datagram: &[u8]) -> Result<(), AdsError> {
        self.socket
            .send_to(datagram, &self.server_path)
            .await
            .map_err(|e| AdsError::TransportSend(e.to_string()))?;
        Ok(())
    }

    /// Spawns the background receiver loop: reads datagrams up to
    /// `recv_buffer_size` bytes and forwards each payload on `sink`.
    /// Datagrams larger than the buffer are truncated (`recv_from` caps the
    /// read at the buffer length); the dispatcher treats the truncated
    /// payload as an ordinary decode failure.
    pub fn spawn_receiver(&self, recv_buffer_size: usize, sink: mpsc::UnboundedSender<Vec<u8>>) -> JoinHandle<()> {
        let socket = Arc::clone(&self.socket);
        tokio::spawn(async move {
            let mut buf = vec![0u8; recv_buffer_size];
            loop {
                match socket.recv(&mut buf).await {
                    Ok(n) => {
                        if sink.send(buf[..n].to_vec()).is_err() {
                            log::debug!("receiver: dispatcher channel closed, exiting");
                            break;
                        }
                    }
                    Err(e) => {
                        log::warn!("receiver: recv failed: {e}");
                        break;
                    }
                }
            }
        })
    }
}
