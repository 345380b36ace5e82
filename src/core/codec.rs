//! Tokio codec for framing RCON packets over a byte stream.
//!
//! Decoding reads the 4-byte length prefix first and returns `Ok(None)`
//! until the full frame is buffered, so the transport can keep polling
//! on partial reads. Length validation happens before any allocation.

use bytes::{Buf, BufMut, BytesMut};
use tokio_util::codec::{Decoder, Encoder};
use tracing::trace;

use crate::core::packet::{Packet, PacketKind, FRAME_OVERHEAD, LENGTH_FIELD, MAX_INBOUND_FRAME};
use crate::error::RconError;

/// Stateless length-prefixed codec for [`Packet`] frames.
#[derive(Debug)]
pub struct PacketCodec;

impl Decoder for PacketCodec {
    type Item = Packet;
    type Error = RconError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Packet>, RconError> {
        if src.len() < LENGTH_FIELD {
            return Ok(None);
        }

        let declared = i32::from_le_bytes([src[0], src[1], src[2], src[3]]);
        if declared < 0 {
            return Err(RconError::MalformedPacket(format!(
                "negative declared length {declared}"
            )));
        }
        let declared = declared as usize;
        if declared < FRAME_OVERHEAD {
            return Err(RconError::MalformedPacket(format!(
                "declared length {declared} below the {FRAME_OVERHEAD} byte minimum"
            )));
        }
        if declared > MAX_INBOUND_FRAME {
            return Err(RconError::MalformedPacket(format!(
                "declared length {declared} exceeds the {MAX_INBOUND_FRAME} byte ceiling"
            )));
        }

        if src.len() < LENGTH_FIELD + declared {
            src.reserve(LENGTH_FIELD + declared - src.len());
            return Ok(None);
        }

        src.advance(LENGTH_FIELD);
        let frame = src.split_to(declared);

        let id = i32::from_le_bytes([frame[0], frame[1], frame[2], frame[3]]);
        let raw_kind = i32::from_le_bytes([frame[4], frame[5], frame[6], frame[7]]);
        let kind = PacketKind::from_wire(raw_kind).ok_or_else(|| {
            RconError::MalformedPacket(format!("unknown packet type {raw_kind}"))
        })?;

        if frame[declared - 2] != 0 || frame[declared - 1] != 0 {
            return Err(RconError::MalformedPacket(
                "missing body terminator or trailing pad".into(),
            ));
        }

        let body = frame[8..declared - 2].to_vec();
        trace!(id, ?kind, bytes = body.len(), "decoded frame");
        Ok(Some(Packet { id, kind, body }))
    }
}

impl Encoder<Packet> for PacketCodec {
    type Error = RconError;

    fn encode(&mut self, packet: Packet, dst: &mut BytesMut) -> Result<(), RconError> {
        packet.check_outbound()?;

        let frame_len = packet.frame_len();
        dst.reserve(LENGTH_FIELD + frame_len);
        dst.put_i32_le(frame_len as i32);
        dst.put_i32_le(packet.id);
        dst.put_i32_le(packet.kind.to_wire());
        dst.put_slice(&packet.body);
        dst.put_u8(0);
        dst.put_u8(0);
        trace!(id = packet.id, kind = ?packet.kind, bytes = packet.body.len(), "encoded frame");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_lays_out_little_endian_fields() {
        let mut codec = PacketCodec;
        let mut buf = BytesMut::new();
        codec.encode(Packet::auth(7, "secret"), &mut buf).unwrap();

        // length = 4 + 4 + 6 + 2 = 16
        assert_eq!(&buf[0..4], &16i32.to_le_bytes());
        assert_eq!(&buf[4..8], &7i32.to_le_bytes());
        assert_eq!(&buf[8..12], &3i32.to_le_bytes());
        assert_eq!(&buf[12..18], b"secret");
        assert_eq!(&buf[18..20], &[0, 0]);
        assert_eq!(buf.len(), 20);
    }

    #[test]
    fn decode_consumes_exactly_one_frame() {
        let mut codec = PacketCodec;
        let mut buf = BytesMut::new();
        codec.encode(Packet::exec(1, "list"), &mut buf).unwrap();
        codec.encode(Packet::exec(2, ""), &mut buf).unwrap();

        let first = codec.decode(&mut buf).unwrap().unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(first.body_text(), "list");

        let second = codec.decode(&mut buf).unwrap().unwrap();
        assert_eq!(second.id, 2);
        assert!(second.is_empty_body());

        assert!(buf.is_empty());
        assert!(codec.decode(&mut buf).unwrap().is_none());
    }
}
