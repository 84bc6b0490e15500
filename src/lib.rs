//! avs-adaptor - bridges a conference manager to an external Audio/Video
//! Service daemon over a local Unix datagram socket.
//!
//! The adaptor exposes a request-per-call async API (`AdsClient`); every
//! call is translated into exactly one JSON command datagram and resolves
//! once a matching reply arrives or the command times out. At most one
//! command is ever in flight between this process and AVS.

pub mod codec;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod facade;
pub mod request;
pub mod response;
pub mod transport;
pub mod types;

pub use config::AdaptorConfig;
pub use error::{AdsError, AdsResult};
pub use facade::AdsClient;
pub use response::{AllocPortIceResponse, AllocPortNormalResponse, CommonResponse, Response};
pub use types::{AudioCodec, CommandKind, IceRole, Media, PlayMode, RunCtrlOp, SslRole, Transmode, VideoCodec};
