//! Error taxonomy for the AVS adaptor.
//!
//! `AdsError` is the Rust rendering of the original `AVS_CMD_RESULT` three-value
//! result (`SUCCESS` / `ERROR` / `LINK_DISCONNECT`): `Success` becomes `Ok(_)`,
//! and the two failure cases become distinguished error variants so callers can
//! match on `LinkDisconnect` without parsing a message string.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdsError {
    /// A request field was outside its permitted range, or a codec enum had no
    /// wire-string mapping. No datagram was sent.
    #[error("request field out of range: {0}")]
    Encode(String),

    /// The datagram write to AVS failed.
    #[error("transport send failed: {0}")]
    TransportSend(String),

    /// No decodable reply arrived before the command deadline.
    #[error("command timed out waiting for AVS reply")]
    Timeout,

    /// A reply arrived but could not be decoded into the expected response shape.
    #[error("failed to decode AVS reply: {0}")]
    Decode(String),

    /// The transport endpoint is unusable (socket closed, or a call raced with
    /// `shutdown()`).
    #[error("AVS transport link is disconnected")]
    LinkDisconnect,

    /// Binding or initializing the local transport failed.
    #[error("failed to initialize transport: {0}")]
    Transport(String),
}

pub type AdsResult<T> = Result<T, AdsError>;
