//! Typed request records. One struct per command kind, matching §3 of the
//! adaptor contract. Fields are caller-owned; the codec copies them into JSON
//! at encode time and never mutates the caller's struct.

use crate::types::{AudioCodec, CommandKind, IceRole, Media, PlayMode, RunCtrlOp, SslRole, Transmode, VideoCodec};

#[derive(Debug, Clone)]
pub struct GlobalParamRequest {
    pub stun_addr: String,
    pub stun_port: u16,
    pub turn_addr: String,
    pub turn_port: u16,
    pub turn_user: String,
    pub turn_pass: String,
    pub comm_id: String,
}

#[derive(Debug, Clone)]
pub struct AllocPortNormalRequest {
    pub conf_id: String,
    pub chan_id: String,
    pub enable_dtls: bool,
    pub comm_id: String,
}

#[derive(Debug, Clone)]
pub struct AllocPortIceRequest {
    pub conf_id: String,
    pub chan_id: String,
    pub enable_dtls: bool,
    pub comm_id: String,
}

#[derive(Debug, Clone)]
pub struct DeallocPortRequest {
    pub conf_id: String,
    pub chan_id: String,
    pub port_id: String,
    pub comm_id: String,
}

#[derive(Debug, Clone)]
pub struct PeerPortNormalRequest {
    pub conf_id: String,
    pub chan_id: String,
    pub port_id: String,
    pub rtcpmux: bool,
    pub symrtp: bool,
    /// Encryption method: 2=AES256_CM_SHA1_80, 3=AES256_CM_SHA1_32, 4=AES128_CM_SHA1_80, 5=AES128_CM_SHA1_32.
    pub srtpmode: u8,
    pub qos: u8,
    pub srtp_send_key: String,
    pub srtp_recv_key: String,
    /// "ip:port" of where AVS should send media.
    pub target_addr: String,
    pub fingerprint: String,
    pub comm_id: String,
}

#[derive(Debug, Clone)]
pub struct PeerPortIceRequest {
    pub conf_id: String,
    pub chan_id: String,
    pub port_id: String,
    pub ice_role: IceRole,
    pub ssl_role: SslRole,
    pub fingerprint: String,
    pub ice_ufrag: String,
    pub ice_pwd: String,
    pub candidate: String,
    pub comm_id: String,
}

#[derive(Debug, Clone)]
pub struct CodecAudioRequest {
    pub conf_id: String,
    pub chan_id: String,
    pub port_id: String,
    pub codec: AudioCodec,
    pub payload_type: u8,
    pub ptime: u16,
    pub transmode: Transmode,
    pub comm_id: String,
}

#[derive(Debug, Clone)]
pub struct CodecVideoRequest {
    pub conf_id: String,
    pub chan_id: String,
    pub port_id: String,
    pub codec: VideoCodec,
    pub payload_type: u8,
    pub transmode: Transmode,
    pub comm_id: String,
}

#[derive(Debug, Clone)]
pub struct RunCtrlRequest {
    pub conf_id: String,
    pub chan_id: String,
    pub operation: RunCtrlOp,
    pub media: Media,
    pub comm_id: String,
}

#[derive(Debug, Clone)]
pub struct PlaySoundRequest {
    pub conf_id: String,
    pub chan_id: String,
    pub play_mode: PlayMode,
    pub soundfile: String,
    pub comm_id: String,
}

/// Union of every request record, tagged by the command kind it carries.
/// The dispatcher matches on this to pick the encoder and the pending-reply
/// slot shape.
#[derive(Debug, Clone)]
pub enum Request {
    SetGlobalParam(GlobalParamRequest),
    AllocPortNormal(AllocPortNormalRequest),
    AllocPortIce(AllocPortIceRequest),
    DeallocPort(DeallocPortRequest),
    SetPeerPortNormal(PeerPortNormalRequest),
    SetPeerPortIce(PeerPortIceRequest),
    SetAudioCodec(CodecAudioRequest),
    SetVideoCodec(CodecVideoRequest),
    RunCtrlChan(RunCtrlRequest),
    PlaySound(PlaySoundRequest),
}

impl Request {
    pub fn kind(&self) -> CommandKind {
        match self {
            Request::SetGlobalParam(_) => CommandKind::SetGlobalParam,
            Request::AllocPortNormal(_) => CommandKind::AllocPortNormal,
            Request::AllocPortIce(_) => CommandKind::AllocPortIce,
            Request::DeallocPort(_) => CommandKind::DeallocPort,
            Request::SetPeerPortNormal(_) => CommandKind::SetPeerPortNormal,
            Request::SetPeerPortIce(_) => CommandKind::SetPeerPortIce,
            Request::SetAudioCodec(_) => CommandKind::SetAudioCodec,
            Request::SetVideoCodec(_) => CommandKind::SetVideoCodec,
            Request::RunCtrlChan(_) => CommandKind::RunCtrlChan,
            Request::PlaySound(_) => CommandKind::PlaySound,
        }
    }

    pub fn comm_id(&self) -> &str {
        match self {
            Request::SetGlobalParam(r) => &r.comm_id,
            Request::AllocPortNormal(r) => &r.comm_id,
            Request::AllocPortIce(r) => &r.comm_id,
            Request::DeallocPort(r) => &r.comm_id,
            Request::SetPeerPortNormal(r) => &r.comm_id,
            Request::SetPeerPortIce(r) => &r.comm_id,
            Request::SetAudioCodec(r) => &r.comm_id,
            Request::SetVideoCodec(r) => &r.comm_id,
            Request::RunCtrlChan(r) => &r.comm_id,
            Request::PlaySound(r) => &r.comm_id,
        }
    }
}
