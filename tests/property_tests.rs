//! Property-based tests using proptest
//!
//! These tests validate the framing invariants across a wide range of
//! randomly generated inputs.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use bytes::BytesMut;
use proptest::prelude::*;
use rcon_client::core::codec::PacketCodec;
use rcon_client::core::packet::{Packet, PacketKind};
use tokio_util::codec::{Decoder, Encoder};

fn kind_strategy() -> impl Strategy<Value = PacketKind> {
    prop_oneof![
        Just(PacketKind::Auth),
        Just(PacketKind::ExecCommand),
        Just(PacketKind::ResponseValue),
    ]
}

// Property: any well-formed packet with a NUL-free body survives the wire.
// The type survives as its wire value; the shared value 2 is re-read as
// AUTH_RESPONSE on the receiving side.
proptest! {
    #[test]
    fn prop_packet_roundtrip(
        id in any::<i32>(),
        kind in kind_strategy(),
        body in prop::collection::vec(1u8..=255, 0..4096),
    ) {
        let packet = Packet { id, kind, body: body.clone() };

        let mut codec = PacketCodec;
        let mut buf = BytesMut::new();
        codec.encode(packet, &mut buf).expect("encoding should not fail");

        let decoded = codec.decode(&mut buf).expect("decoding should not fail")
            .expect("a complete frame must decode");

        prop_assert_eq!(decoded.id, id);
        prop_assert_eq!(decoded.kind.to_wire(), kind.to_wire());
        prop_assert_eq!(decoded.body, body);
        prop_assert!(buf.is_empty());
    }
}

// Property: every strict prefix of a valid frame is incomplete, never a
// false success and never an error.
proptest! {
    #[test]
    fn prop_strict_prefix_is_always_incomplete(
        id in any::<i32>(),
        body in prop::collection::vec(1u8..=255, 0..512),
        cut in 0.0f64..1.0,
    ) {
        let mut codec = PacketCodec;
        let mut full = BytesMut::new();
        codec
            .encode(Packet { id, kind: PacketKind::ExecCommand, body }, &mut full)
            .expect("encoding should not fail");

        let prefix_len = ((full.len() - 1) as f64 * cut) as usize;
        let mut prefix = BytesMut::from(&full[..prefix_len]);

        let step = codec.decode(&mut prefix).expect("a prefix is never malformed");
        prop_assert!(step.is_none());
    }
}

// Property: the decoder never panics on arbitrary input; it either
// produces a packet, asks for more bytes, or reports a malformed frame.
proptest! {
    #[test]
    fn prop_decoder_never_panics(data in prop::collection::vec(any::<u8>(), 0..2048)) {
        let mut codec = PacketCodec;
        let mut buf = BytesMut::from(&data[..]);
        let _ = codec.decode(&mut buf);
    }
}

// Property: encoding is deterministic.
proptest! {
    #[test]
    fn prop_encoding_deterministic(
        id in any::<i32>(),
        body in prop::collection::vec(1u8..=255, 0..1024),
    ) {
        let mut codec = PacketCodec;
        let mut first = BytesMut::new();
        let mut second = BytesMut::new();

        codec
            .encode(Packet { id, kind: PacketKind::Auth, body: body.clone() }, &mut first)
            .expect("encoding should not fail");
        codec
            .encode(Packet { id, kind: PacketKind::Auth, body }, &mut second)
            .expect("encoding should not fail");

        prop_assert_eq!(first, second);
    }
}
