//! Typed response records decoded from AVS replies.
//!
//! Every reply carries at least the common envelope (`code`, `message`,
//! echoed `comm_id`); a handful of commands carry extra fields on success.
//! A non-zero `code` is still a successfully *decoded* reply -- it is an
//! application-level outcome the caller inspects, not a transport error.

/// Fields present on every AVS reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonResponse {
    pub comm_id: String,
    pub code: u32,
    pub message: String,
}

impl CommonResponse {
    pub fn is_ok(&self) -> bool {
        self.code == 0
    }
}

/// Reply to `AllocPortNormal`: the allocated port's id and RTP/RTCP ports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocPortNormalResponse {
    pub common: CommonResponse,
    pub port_id: String,
    pub rtp_port: u16,
    pub rtcp_port: u16,
    pub fingerprint: String,
}

/// Reply to `AllocPortIce`: the allocated port's id plus ICE credentials and
/// the ordered candidate lines AVS gathered for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocPortIceResponse {
    pub common: CommonResponse,
    pub port_id: String,
    pub ice_ufrag: String,
    pub ice_pwd: String,
    pub fingerprint: String,
    pub candidates: Vec<String>,
}

/// The decoded shape of a reply, tagged by which command it answers. The
/// dispatcher picks the decoder for the in-flight command's kind and stores
/// the result here until the waiting call picks it up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Common(CommonResponse),
    AllocPortNormal(AllocPortNormalResponse),
    AllocPortIce(AllocPortIceResponse),
}

impl Response {
    pub fn common(&self) -> &CommonResponse {
        match self {
            Response::Common(r) => r,
            Response::AllocPortNormal(r) => &r.common,
            Response::AllocPortIce(r) => &r.common,
        }
    }

    pub fn comm_id(&self) -> &str {
        &self.common().comm_id
    }

    pub fn is_ok(&self) -> bool {
        self.common().is_ok()
    }
}
