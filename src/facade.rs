//! Caller-facing API: one async method per command kind. Every method
//! builds a typed request, hands it to the `Dispatcher`, and unwraps the
//! `Response` variant it expects back.

use crate::config::AdaptorConfig;
use crate::dispatcher::Dispatcher;
use crate::error::AdsError;
use crate::request::{
    AllocPortIceRequest, AllocPortNormalRequest, CodecAudioRequest, CodecVideoRequest, DeallocPortRequest,
    GlobalParamRequest, PeerPortIceRequest, PeerPortNormalRequest, PlaySoundRequest, Request, RunCtrlRequest,
};
use crate::response::{AllocPortIceResponse, AllocPortNormalResponse, CommonResponse, Response};
use crate::transport::Transport;
use crate::types::{AudioCodec, IceRole, Media, PlayMode, RunCtrlOp, SslRole, Transmode, VideoCodec};

/// A connected handle to the AVS adaptor. Cloning is not supported; share a
/// handle behind an `Arc` if multiple callers need it concurrently -- they
/// will serialize at the dispatcher's gate regardless.
pub struct AdsClient {
    dispatcher: Dispatcher,
}

fn unwrap_common(response: Response) -> Result<CommonResponse, AdsError> {
    match response {
        Response::Common(r) => Ok(r),
        other => Err(AdsError::Decode(format!("expected a common reply, got {other:?}"))),
    }
}

fn unwrap_alloc_normal(response: Response) -> Result<AllocPortNormalResponse, AdsError> {
    match response {
        Response::AllocPortNormal(r) => Ok(r),
        other => Err(AdsError::Decode(format!("expected an AllocPortNormal reply, got {other:?}"))),
    }
}

fn unwrap_alloc_ice(response: Response) -> Result<AllocPortIceResponse, AdsError> {
    match response {
        Response::AllocPortIce(r) => Ok(r),
        other => Err(AdsError::Decode(format!("expected an AllocPortIce reply, got {other:?}"))),
    }
}

impl AdsClient {
    /// Binds the transport, spawns the receiver and processor tasks.
    pub fn connect(config: &AdaptorConfig) -> Result<Self, AdsError> {
        let transport = Transport::bind(config)?;
        let dispatcher = Dispatcher::spawn(transport, config.recv_buffer_size, config.command_timeout);
        Ok(Self { dispatcher })
    }

    /// Aborts the receiver/processor tasks and marks the client unusable.
    /// Calling it twice is a no-op the second time.
    pub fn shutdown(&self) {
        self.dispatcher.shutdown();
    }

    pub async fn set_global_param(
        &self,
        stun_addr: impl Into<String>,
        stun_port: u16,
        turn_addr: impl Into<String>,
        turn_port: u16,
        turn_user: impl Into<String>,
        turn_pass: impl Into<String>,
        comm_id: impl Into<String>,
    ) -> Result<CommonResponse, AdsError> {
        let request = Request::SetGlobalParam(GlobalParamRequest {
            stun_addr: stun_addr.into(),
            stun_port,
            turn_addr: turn_addr.into(),
            turn_port,
            turn_user: turn_user.into(),
            turn_pass: turn_pass.into(),
            comm_id: comm_id.into(),
        });
        unwrap_common(self.dispatcher.call(request).await?)
    }

    pub async fn alloc_port_normal(
        &self,
        conf_id: impl Into<String>,
        chan_id: impl Into<String>,
        enable_dtls: bool,
        comm_id: impl Into<String>,
    ) -> Result<AllocPortNormalResponse, AdsError> {
        let request = Request::AllocPortNormal(AllocPortNormalRequest {
            conf_id: conf_id.into(),
            chan_id: chan_id.into(),
            enable_dtls,
            comm_id: comm_id.into(),
        });
        unwrap_alloc_normal(self.dispatcher.call(request).await?)
    }

    pub async fn alloc_port_ice(
        &self,
        conf_id: impl Into<String>,
        chan_id: impl Into<String>,
        enable_dtls: bool,
        comm_id: impl Into<String>,
    ) -> Result<AllocPortIceResponse, AdsError> {
        let request = Request::AllocPortIce(AllocPortIceRequest {
            conf_id: conf_id.into(),
            chan_id: chan_id.into(),
            enable_dtls,
            comm_id: comm_id.into(),
        });
        unwrap_alloc_ice(self.dispatcher.call(request).await?)
    }

    pub async fn dealloc_port(
        &self,
        conf_id: impl Into<String>,
        chan_id: impl Into<String>,
        port_id: impl Into<String>,
        comm_id: impl Into<String>,
    ) -> Result<CommonResponse, AdsError> {
        let request = Request::DeallocPort(DeallocPortRequest {
            conf_id: conf_id.into(),
            chan_id: chan_id.into(),
            port_id: port_id.into(),
            comm_id: comm_id.into(),
        });
        unwrap_common(self.dispatcher.call(request).await?)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn set_peerport_normal(
        &self,
        conf_id: impl Into<String>,
        chan_id: impl Into<String>,
        port_id: impl Into<String>,
        rtcpmux: bool,
        symrtp: bool,
        srtpmode: u8,
        qos: u8,
        srtp_send_key: impl Into<String>,
        srtp_recv_key: impl Into<String>,
        target_addr: impl Into<String>,
        fingerprint: impl Into<String>,
        comm_id: impl Into<String>,
    ) -> Result<CommonResponse, AdsError> {
        let request = Request::SetPeerPortNormal(PeerPortNormalRequest {
            conf_id: conf_id.into(),
            chan_id: chan_id.into(),
            port_id: port_id.into(),
            rtcpmux,
            symrtp,
            srtpmode,
            qos,
            srtp_send_key: srtp_send_key.into(),
            srtp_recv_key: srtp_recv_key.into(),
            target_addr: target_addr.into(),
            fingerprint: fingerprint.into(),
            comm_id: comm_id.into(),
        });
        unwrap_common(self.dispatcher.call(request).await?)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn set_peerport_ice(
        &self,
        conf_id: impl Into<String>,
        chan_id: impl Into<String>,
        port_id: impl Into<String>,
        ice_role: IceRole,
        ssl_role: SslRole,
        fingerprint: impl Into<String>,
        ice_ufrag: impl Into<String>,
        ice_pwd: impl Into<String>,
        candidate: impl Into<String>,
        comm_id: impl Into<String>,
    ) -> Result<CommonResponse, AdsError> {
        let request = Request::SetPeerPortIce(PeerPortIceRequest {
            conf_id: conf_id.into(),
            chan_id: chan_id.into(),
            port_id: port_id.into(),
            ice_role,
            ssl_role,
            fingerprint: fingerprint.into(),
            ice_ufrag: ice_ufrag.into(),
            ice_pwd: ice_pwd.into(),
            candidate: candidate.into(),
            comm_id: comm_id.into(),
        });
        unwrap_common(self.dispatcher.call(request).await?)
    }

    pub async fn set_audio_codec(
        &self,
        conf_id: impl Into<String>,
        chan_id: impl Into<String>,
        port_id: impl Into<String>,
        codec: AudioCodec,
        payload_type: u8,
        ptime: u16,
        transmode: Transmode,
        comm_id: impl Into<String>,
    ) -> Result<CommonResponse, AdsError> {
        let request = Request::SetAudioCodec(CodecAudioRequest {
            conf_id: conf_id.into(),
            chan_id: chan_id.into(),
            port_id: port_id.into(),
            codec,
            payload_type,
            ptime,
            transmode,
            comm_id: comm_id.into(),
        });
        unwrap_common(self.dispatcher.call(request).await?)
    }

    pub async fn set_video_codec(
        &self,
        conf_id: impl Into<String>,
        chan_id: impl Into<String>,
        port_id: impl Into<String>,
        codec: VideoCodec,
        payload_type: u8,
        transmode: Transmode,
        comm_id: impl Into<String>,
    ) -> Result<CommonResponse, AdsError> {
        let request = Request::SetVideoCodec(CodecVideoRequest {
            conf_id: conf_id.into(),
            chan_id: chan_id.into(),
            port_id: port_id.into(),
            codec,
            payload_type,
            transmode,
            comm_id: comm_id.into(),
        });
        unwrap_common(self.dispatcher.call(request).await?)
    }

    pub async fn runctrl_chan(
        &self,
        conf_id: impl Into<String>,
        chan_id: impl Into<String>,
        operation: RunCtrlOp,
        media: Media,
        comm_id: impl Into<String>,
    ) -> Result<CommonResponse, AdsError> {
        let request = Request::RunCtrlChan(RunCtrlRequest {
            conf_id: conf_id.into(),
            chan_id: chan_id.into(),
            operation,
            media,
            comm_id: comm_id.into(),
        });
        unwrap_common(self.dispatcher.call(request).await?)
    }

    pub async fn playsound(
        &self,
        conf_id: impl Into<String>,
        chan_id: impl Into<String>,
        play_mode: PlayMode,
        soundfile: impl Into<String>,
        comm_id: impl Into<String>,
    ) -> Result<CommonResponse, AdsError> {
        let request = Request::PlaySound(PlaySoundRequest {
            conf_id: conf_id.into(),
            chan_id: chan_id.into(),
            play_mode,
            soundfile: soundfile.into(),
            comm_id: comm_id.into(),
        });
        unwrap_common(self.dispatcher.call(request).await?)
    }
}
