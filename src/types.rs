//! Domain enumerations and field-length limits shared by requests and responses.
//!
//! The numeric limits mirror the `MAX_*` constants from the AVS wire contract;
//! they exist so the codec can reject an out-of-range request before any
//! datagram is sent (see `AdsError::Encode`).

pub const MAX_CONF_ID_LEN: usize = 20;
pub const MAX_CHAN_ID_LEN: usize = 20;
pub const MAX_PORT_ID_LEN: usize = 20;
pub const MAX_COMM_ID_LEN: usize = 20;
pub const MAX_MESSAGE_LEN: usize = 50;
pub const MAX_FINGERPRINT_LEN: usize = 70;
pub const MAX_ICE_UFRAG_LEN: usize = 5;
pub const MAX_ICE_PWD_LEN: usize = 23;
pub const MAX_SRTP_KEY_LEN: usize = 100;
pub const MAX_SOUNDFILE_LEN: usize = 20;
pub const MAX_TURN_USER_LEN: usize = 20;
pub const MAX_TURN_PASS_LEN: usize = 20;
pub const MAX_IPADDR_LEN: usize = 16;
pub const MAX_IPPORTADDR_LEN: usize = 22;

/// Tagged enumeration over the commands the adaptor can send to AVS, plus
/// `Idle` for "no command in flight". Drives the dispatcher's pending-reply
/// slot and the wire codec's command-key lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    SetGlobalParam,
    AllocPortNormal,
    AllocPortIce,
    DeallocPort,
    SetPeerPortNormal,
    SetPeerPortIce,
    SetAudioCodec,
    SetVideoCodec,
    RunCtrlChan,
    PlaySound,
    Idle,
}

impl CommandKind {
    pub fn is_idle(self) -> bool {
        matches!(self, CommandKind::Idle)
    }
}

/// Audio codecs AVS can be asked to use on a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCodec {
    Pcmu,
    Pcma,
    Gsm,
    Ilbc,
    G722,
    G7221,
    G7221C,
    G729,
    G7231,
    G726,
    Opus,
}

impl AudioCodec {
    pub fn wire_str(self) -> &'static str {
        match self {
            AudioCodec::Pcmu => "audio/pcmu",
            AudioCodec::Pcma => "audio/pcma",
            AudioCodec::Gsm => "audio/gsm",
            AudioCodec::Ilbc => "audio/ilbc",
            AudioCodec::G722 => "audio/g722",
            AudioCodec::G7221 => "audio/g722.1",
            AudioCodec::G7221C => "audio/g722.1c",
            AudioCodec::G729 => "audio/g729",
            AudioCodec::G7231 => "audio/g723.1",
            AudioCodec::G726 => "audio/adpcm32",
            AudioCodec::Opus => "audio/opus",
        }
    }
}

/// Video codecs AVS can be asked to use on a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoCodec {
    H264,
    H265,
    Vp8,
    Vp9,
}

impl VideoCodec {
    pub fn wire_str(self) -> &'static str {
        match self {
            VideoCodec::H264 => "video/avc",
            VideoCodec::H265 => "video/hevc",
            VideoCodec::Vp8 => "video/vp8",
            VideoCodec::Vp9 => "video/vp9",
        }
    }
}

/// Media transmit/receive direction for a codec track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transmode {
    SendRecv,
    SendOnly,
    RecvOnly,
}

impl Transmode {
    pub fn wire_str(self) -> &'static str {
        match self {
            Transmode::SendRecv => "sendRecv",
            Transmode::SendOnly => "sendOnly",
            Transmode::RecvOnly => "recvOnly",
        }
    }
}

/// ICE agent role for a peer port set up in ICE mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IceRole {
    Controlling,
    Controlled,
}

impl IceRole {
    pub fn wire_str(self) -> &'static str {
        match self {
            IceRole::Controlling => "0",
            IceRole::Controlled => "1",
        }
    }
}

/// DTLS role for a peer port set up in ICE mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SslRole {
    Client,
    Server,
}

impl SslRole {
    pub fn wire_str(self) -> &'static str {
        match self {
            SslRole::Client => "0",
            SslRole::Server => "1",
        }
    }
}

/// Run-control operation applied to a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunCtrlOp {
    Start,
    Reset,
    Suspend,
    Resume,
}

impl RunCtrlOp {
    pub fn wire_str(self) -> &'static str {
        match self {
            RunCtrlOp::Start => "start",
            RunCtrlOp::Reset => "reset",
            RunCtrlOp::Suspend => "suspend",
            RunCtrlOp::Resume => "resume",
        }
    }
}

/// Media scope a run-control operation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Media {
    Audio,
    Video,
    All,
}

impl Media {
    pub fn wire_str(self) -> &'static str {
        match self {
            Media::Audio => "audio",
            Media::Video => "video",
            Media::All => "all",
        }
    }
}

/// Sound playback scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayMode {
    /// Play on the named channel only.
    Single,
    /// Play on every channel in the conference except the named one.
    AllExcept,
}

impl PlayMode {
    pub fn wire_str(self) -> &'static str {
        match self {
            PlayMode::Single => "single",
            PlayMode::AllExcept => "all_except",
        }
    }
}
