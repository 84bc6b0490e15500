//! JSON wire codec: typed requests to AVS command strings, and AVS reply
//! datagrams back to typed responses.
//!
//! Mirrors the original `enc_json_*` / `dec_json_*` function pairs one for
//! one, but as a single `encode`/`decode` pair keyed on `CommandKind` rather
//! than one function per struct. Integer- and boolean-semantics fields are
//! written as JSON strings throughout, matching the AVS wire convention --
//! this is not a bug, see the crate-level docs.

use serde_json::{json, Value};

use crate::error::AdsError;
use crate::request::Request;
use crate::response::{AllocPortIceResponse, AllocPortNormalResponse, CommonResponse, Response};
use crate::types::CommandKind;

fn bool_str(b: bool) -> &'static str {
    if b { "1" } else { "0" }
}

/// Serializes a typed request into the compact JSON form AVS expects:
/// `{"<command_key>": {...}, "id": "<comm_id>"}`.
pub fn encode(request: &Request) -> Result<String, AdsError> {
    let (key, payload) = match request {
        Request::SetGlobalParam(r) => (
            "setParam",
            json!({
                "stunserver": [{ "address": r.stun_addr, "port": r.stun_port.to_string() }],
                "turnserver": [{
                    "address": r.turn_addr,
                    "port": r.turn_port.to_string(),
                    "username": r.turn_user,
                    "password": r.turn_pass,
                }],
            }),
        ),
        Request::AllocPortNormal(r) => (
            "addPort",
            json!({
                "conf_id": r.conf_id,
                "chan_id": r.chan_id,
                "ICE": "0",
                "DTLS": bool_str(r.enable_dtls),
            }),
        ),
        Request::AllocPortIce(r) => (
            "addPort",
            json!({
                "conf_id": r.conf_id,
                "chan_id": r.chan_id,
                "ICE": "1",
                "DTLS": bool_str(r.enable_dtls),
            }),
        ),
        Request::DeallocPort(r) => (
            "delPort",
            json!({
                "conf_id": r.conf_id,
                "chan_id": r.chan_id,
                "port_id": r.port_id,
            }),
        ),
        Request::SetPeerPortNormal(r) => {
            if !(2..=5).contains(&r.srtpmode) {
                return Err(AdsError::Encode(format!("srtpmode {} out of range 2..=5", r.srtpmode)));
            }
            (
                "setPortParam",
                json!({
                    "conf_id": r.conf_id,
                    "chan_id": r.chan_id,
                    "port_id": r.port_id,
                    "InfoPort": {
                        "targetAddr": r.target_addr,
                        "RtcpMux": bool_str(r.rtcpmux),
                        "SymRTP": bool_str(r.symrtp),
                        "Qos": r.qos.to_string(),
                        "srtpMode": r.srtpmode.to_string(),
                        "srtpSendKey": r.srtp_send_key,
                        "srtpRecvKey": r.srtp_recv_key,
                        "fingerprint": r.fingerprint,
                    },
                }),
            )
        }
        Request::SetPeerPortIce(r) => (
            "setPortParam",
            json!({
                "conf_id": r.conf_id,
                "chan_id": r.chan_id,
                "port_id": r.port_id,
                "InfoICE": {
                    "IceRole": r.ice_role.wire_str(),
                    "SslRole": r.ssl_role.wire_str(),
                    "fingerprint": r.fingerprint,
                    "ice_ufrag": r.ice_ufrag,
                    "ice_pwd": r.ice_pwd,
                    "candidate": r.candidate,
                },
            }),
        ),
        Request::SetAudioCodec(r) => (
            "addTrack",
            json!({
                "conf_id": r.conf_id,
                "chan_id": r.chan_id,
                "port_id": r.port_id,
                "track_id": r.port_id,
                "mediaType": "audio",
                "audio_tx_param": {
                    "MainCoder": r.codec.wire_str(),
                    "PayloadType": r.payload_type.to_string(),
                    "Ptime": r.ptime.to_string(),
                },
                "audio_rx_param": {
                    "Codecs": [r.codec.wire_str()],
                    "PayloadType": r.payload_type.to_string(),
                },
                "audio_transport": { "audio_transport": r.transmode.wire_str() },
            }),
        ),
        Request::SetVideoCodec(r) => (
            "addTrack",
            json!({
                "conf_id": r.conf_id,
                "chan_id": r.chan_id,
                "port_id": r.port_id,
                "track_id": r.port_id,
                "mediaType": "video",
                "video_tx_param": {
                    "MainCoder": r.codec.wire_str(),
                    "PayloadType": r.payload_type.to_string(),
                },
                "video_rx_param": {
                    "Codecs": [r.codec.wire_str()],
                    "PayloadType": r.payload_type.to_string(),
                },
                "video_transport": { "video_transport": r.transmode.wire_str() },
            }),
        ),
        Request::RunCtrlChan(r) => (
            "runCtrl",
            json!({
                "conf_id": r.conf_id,
                "chan_id": r.chan_id,
                "operation": r.operation.wire_str(),
                "media": r.media.wire_str(),
            }),
        ),
        Request::PlaySound(r) => (
            "playSound",
            json!({
                "conf_id": r.conf_id,
                "chan_id": r.chan_id,
                "play_mode": r.play_mode.wire_str(),
                "soundfile": r.soundfile,
            }),
        ),
    };

    let mut envelope = serde_json::Map::new();
    envelope.insert(key.to_string(), payload);
    envelope.insert("id".to_string(), Value::String(request.comm_id().to_string()));
    serde_json::to_string(&Value::Object(envelope)).map_err(|e| AdsError::Encode(e.to_string()))
}

/// Extracts the correlation id from a raw reply datagram, or `None` if it is
/// absent (an unsolicited notification per the adaptor's correlation policy).
pub fn peek_comm_id(datagram: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(datagram).ok()?;
    value.get("id")?.as_str().map(|s| s.to_string())
}

fn str_field<'a>(obj: &'a Value, key: &str) -> Result<&'a str, AdsError> {
    obj.get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| AdsError::Decode(format!("missing or non-string field `{key}`")))
}

fn opt_str_field(obj: &Value, key: &str) -> String {
    obj.get(key).and_then(Value::as_str).unwrap_or("").to_string()
}

fn parse_port(raw: &str, field: &str) -> Result<u16, AdsError> {
    raw.parse().map_err(|_| AdsError::Decode(format!("field `{field}` is not a valid port number: {raw}")))
}

fn decode_common(value: &Value, comm_id: String) -> Result<CommonResponse, AdsError> {
    let error = value
        .get("error")
        .ok_or_else(|| AdsError::Decode("missing `error` block".to_string()))?;
    let code = error
        .get("code")
        .and_then(Value::as_u64)
        .ok_or_else(|| AdsError::Decode("`error.code` missing or not an integer".to_string()))?;
    let message = error.get("message").and_then(Value::as_str).unwrap_or("").to_string();
    Ok(CommonResponse { comm_id, code: code as u32, message })
}

/// Decodes a raw reply datagram into the typed response matching `kind`, the
/// command currently in flight. The caller (the dispatcher) is responsible
/// for having already matched `comm_id` before calling this.
pub fn decode(kind: CommandKind, comm_id: String, datagram: &[u8]) -> Result<Response, AdsError> {
    let value: Value = serde_json::from_slice(datagram).map_err(|e| AdsError::Decode(e.to_string()))?;

    match kind {
        CommandKind::AllocPortNormal => {
            let port_id = str_field(&value, "port_id")?.to_string();
            let info = value
                .get("InfoPort")
                .ok_or_else(|| AdsError::Decode("missing `InfoPort` block".to_string()))?;
            let rtp_port = parse_port(str_field(info, "rtp_port")?, "rtp_port")?;
            let rtcp_port = parse_port(str_field(info, "rtcp_port")?, "rtcp_port")?;
            let fingerprint = opt_str_field(info, "fingerprint");
            Ok(Response::AllocPortNormal(AllocPortNormalResponse {
                common: decode_common(&value, comm_id)?,
                port_id,
                rtp_port,
                rtcp_port,
                fingerprint,
            }))
        }
        CommandKind::AllocPortIce => {
            let port_id = str_field(&value, "port_id")?.to_string();
            let info = value
                .get("InfoICE")
                .ok_or_else(|| AdsError::Decode("missing `InfoICE` block".to_string()))?;
            let candidates = info
                .get("candidate")
                .and_then(Value::as_array)
                .map(|arr| arr.iter().filter_map(Value::as_str).map(str::to_string).collect())
                .unwrap_or_default();
            Ok(Response::AllocPortIce(AllocPortIceResponse {
                common: decode_common(&value, comm_id)?,
                port_id,
                ice_ufrag: opt_str_field(info, "ice_ufrag"),
                ice_pwd: opt_str_field(info, "ice_pwd"),
                fingerprint: opt_str_field(info, "fingerprint"),
                candidates,
            }))
        }
        _ => Ok(Response::Common(decode_common(&value, comm_id)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{AllocPortNormalRequest, CodecAudioRequest, GlobalParamRequest};
    use crate::types::{AudioCodec, Transmode};

    #[test]
    fn encode_global_param_wraps_ports_as_strings() {
        let req = Request::SetGlobalParam(GlobalParamRequest {
            stun_addr: "192.168.3.3".into(),
            stun_port: 5333,
            turn_addr: "192.168.5.5".into(),
            turn_port: 6333,
            turn_user: "zhoulei".into(),
            turn_pass: "123456789".into(),
            comm_id: "1111111111".into(),
        });
        let wire = encode(&req).unwrap();
        assert!(wire.contains("\"port\":\"5333\""));
        assert!(wire.contains("\"id\":\"1111111111\""));
        assert!(!wire.contains("\"port\":5333"));
    }

    #[test]
    fn encode_alloc_port_normal_sets_ice_and_dtls_flags() {
        let req = Request::AllocPortNormal(AllocPortNormalRequest {
            conf_id: "85883".into(),
            chan_id: "00001".into(),
            enable_dtls: false,
            comm_id: "2222222222".into(),
        });
        let wire = encode(&req).unwrap();
        assert!(wire.contains("\"ICE\":\"0\""));
        assert!(wire.contains("\"DTLS\":\"0\""));
    }

    #[test]
    fn encode_audio_codec_sendonly_matches_scenario_six() {
        let req = Request::SetAudioCodec(CodecAudioRequest {
            conf_id: "1".into(),
            chan_id: "1".into(),
            port_id: "P1".into(),
            codec: AudioCodec::Pcmu,
            payload_type: 0,
            ptime: 20,
            transmode: Transmode::SendOnly,
            comm_id: "3333333333".into(),
        });
        let wire = encode(&req).unwrap();
        assert!(wire.contains("\"MainCoder\":\"audio/pcmu\""));
        assert!(wire.contains("\"PayloadType\":\"0\""));
        assert!(wire.contains("\"Ptime\":\"20\""));
        assert!(wire.contains("\"audio_transport\":\"sendOnly\""));
    }

    #[test]
    fn decode_alloc_port_normal_success() {
        let datagram = br#"{"id":"2222222222","port_id":"P7","InfoPort":{"rtp_port":"40000","rtcp_port":"40001","fingerprint":"sha-256 AA:BB"},"error":{"code":0,"message":"ok"}}"#;
        let resp = decode(CommandKind::AllocPortNormal, "2222222222".into(), datagram).unwrap();
        match resp {
            Response::AllocPortNormal(r) => {
                assert_eq!(r.port_id, "P7");
                assert_eq!(r.rtp_port, 40000);
                assert_eq!(r.rtcp_port, 40001);
                assert_eq!(r.fingerprint, "sha-256 AA:BB");
                assert!(r.common.is_ok());
            }
            other => panic!("unexpected response kind: {other:?}"),
        }
    }

    #[test]
    fn decode_alloc_port_ice_preserves_candidate_order() {
        let datagram = br#"{"id":"x","port_id":"P9","InfoICE":{"candidate":["candidate:1 ...","candidate:2 ..."]},"error":{"code":0,"message":"ok"}}"#;
        let resp = decode(CommandKind::AllocPortIce, "x".into(), datagram).unwrap();
        match resp {
            Response::AllocPortIce(r) => {
                assert_eq!(r.candidates, vec!["candidate:1 ...", "candidate:2 ..."]);
            }
            other => panic!("unexpected response kind: {other:?}"),
        }
    }

    #[test]
    fn decode_malformed_datagram_is_an_error() {
        let err = decode(CommandKind::SetGlobalParam, "x".into(), b"{broken").unwrap_err();
        assert!(matches!(err, AdsError::Decode(_)));
    }

    #[test]
    fn peek_comm_id_returns_none_for_unsolicited_notification() {
        assert_eq!(peek_comm_id(br#"{"event":"linkDown"}"#), None);
        assert_eq!(peek_comm_id(br#"{"id":"42"}"#), Some("42".to_string()));
    }

    #[test]
    fn srtpmode_out_of_range_is_rejected_before_any_encoding() {
        use crate::request::PeerPortNormalRequest;
        let req = Request::SetPeerPortNormal(PeerPortNormalRequest {
            conf_id: "1".into(),
            chan_id: "1".into(),
            port_id: "P1".into(),
            rtcpmux: true,
            symrtp: true,
            srtpmode: 9,
            qos: 0,
            srtp_send_key: String::new(),
            srtp_recv_key: String::new(),
            target_addr: "1.2.3.4:5".into(),
            fingerprint: String::new(),
            comm_id: "c".into(),
        });
        assert!(matches!(encode(&req), Err(AdsError::Encode(_))));
    }
}
