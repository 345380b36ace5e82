//! RCON packet model.
//!
//! A packet is a request-id tagged, type-tagged frame carrying a
//! null-terminated Latin-1 text body:
//!
//! ```text
//! ┌───────────┬──────────────┬──────────┬──────────┬──────┬──────┐
//! │ Length(4) │ RequestId(4) │ Type(4)  │ Body(N)  │ 0x00 │ 0x00 │
//! └───────────┴──────────────┴──────────┴──────────┴──────┴──────┘
//! ```
//!
//! The length field counts the bytes following it:
//! `length == 4 + 4 + body.len() + 2`.

use crate::error::{RconError, Result};

/// Protocol cap on a single outbound packet body.
pub const MAX_OUTBOUND_BODY: usize = 4096;

/// Hard ceiling on the declared length of an inbound frame. Fragments of
/// a multi-packet response may legally exceed the nominal 4096-byte cap,
/// so inbound frames get headroom; declared lengths beyond this are
/// treated as corruption.
pub const MAX_INBOUND_FRAME: usize = 64 * 1024;

/// Bytes the length field covers around the body: request id (4),
/// type (4), body terminator (1), trailing pad (1). Also the smallest
/// legal value of the length field.
pub const FRAME_OVERHEAD: usize = 10;

/// Size of the length field itself.
pub const LENGTH_FIELD: usize = 4;

/// Packet type tag, kept as a closed variant rather than a raw integer.
///
/// `ExecCommand` and `AuthResponse` share the wire value 2 and are
/// disambiguated by direction: a client only ever sends the former and
/// only ever receives the latter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketKind {
    /// Login request carrying the passphrase (client → server, type 3).
    Auth,
    /// Command request (client → server, type 2).
    ExecCommand,
    /// Login verdict (server → client, type 2).
    AuthResponse,
    /// Command output fragment (server → client, type 0).
    ResponseValue,
}

impl PacketKind {
    /// Wire value of this packet type.
    pub const fn to_wire(self) -> i32 {
        match self {
            Self::Auth => 3,
            Self::ExecCommand | Self::AuthResponse => 2,
            Self::ResponseValue => 0,
        }
    }

    /// Classify a type value received from the server. The shared value 2
    /// resolves to `AuthResponse` since a client never receives an
    /// `ExecCommand`.
    pub fn from_wire(raw: i32) -> Option<Self> {
        match raw {
            3 => Some(Self::Auth),
            2 => Some(Self::AuthResponse),
            0 => Some(Self::ResponseValue),
            _ => None,
        }
    }
}

/// One logical unit of the wire protocol. The length field and trailing
/// null bytes exist only on the wire; they are recomputed on every encode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    /// Caller-chosen correlation token echoed by the server.
    pub id: i32,
    /// Packet type tag.
    pub kind: PacketKind,
    /// Body text as raw Latin-1 bytes, without the terminator.
    pub body: Vec<u8>,
}

impl Packet {
    /// Build a login packet carrying the passphrase.
    pub fn auth(id: i32, passphrase: &str) -> Self {
        Self {
            id,
            kind: PacketKind::Auth,
            body: encode_latin1(passphrase),
        }
    }

    /// Build a command packet. An empty command doubles as the
    /// reassembly probe.
    pub fn exec(id: i32, command: &str) -> Self {
        Self {
            id,
            kind: PacketKind::ExecCommand,
            body: encode_latin1(command),
        }
    }

    /// Whether the body carries no payload.
    pub fn is_empty_body(&self) -> bool {
        self.body.is_empty()
    }

    /// Decode the body as Latin-1 text. Every byte maps to the code point
    /// of the same value, so this cannot fail.
    pub fn body_text(&self) -> String {
        self.body.iter().map(|&b| char::from(b)).collect()
    }

    /// Value of the wire length field for this packet.
    pub fn frame_len(&self) -> usize {
        FRAME_OVERHEAD + self.body.len()
    }

    /// Validate that the body will survive framing: it must not contain
    /// an embedded NUL (which would truncate it at the terminator) and
    /// must fit the outbound payload cap.
    pub(crate) fn check_outbound(&self) -> Result<()> {
        if self.body.contains(&0) {
            return Err(RconError::MalformedPacket(
                "body contains an embedded NUL".into(),
            ));
        }
        if self.body.len() > MAX_OUTBOUND_BODY {
            return Err(RconError::MalformedPacket(format!(
                "body of {} bytes exceeds the {} byte payload cap",
                self.body.len(),
                MAX_OUTBOUND_BODY
            )));
        }
        Ok(())
    }
}

/// Encode text as Latin-1. Characters outside the Latin-1 range become
/// `?`, matching the replacement behavior of ISO-8859-1 charset encoders
/// in other RCON clients.
fn encode_latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_wire_values() {
        assert_eq!(PacketKind::Auth.to_wire(), 3);
        assert_eq!(PacketKind::ExecCommand.to_wire(), 2);
        assert_eq!(PacketKind::AuthResponse.to_wire(), 2);
        assert_eq!(PacketKind::ResponseValue.to_wire(), 0);
    }

    #[test]
    fn kind_from_wire_resolves_shared_value_to_auth_response() {
        assert_eq!(PacketKind::from_wire(2), Some(PacketKind::AuthResponse));
        assert_eq!(PacketKind::from_wire(0), Some(PacketKind::ResponseValue));
        assert_eq!(PacketKind::from_wire(3), Some(PacketKind::Auth));
        assert_eq!(PacketKind::from_wire(7), None);
        assert_eq!(PacketKind::from_wire(-1), None);
    }

    #[test]
    fn latin1_round_trip() {
        let packet = Packet::exec(1, "say grüß dich");
        assert_eq!(packet.body_text(), "say grüß dich");
    }

    #[test]
    fn non_latin1_characters_become_replacement() {
        let packet = Packet::exec(1, "say 日本");
        assert_eq!(packet.body_text(), "say ??");
    }

    #[test]
    fn frame_len_counts_overhead_and_body() {
        assert_eq!(Packet::exec(1, "").frame_len(), 10);
        assert_eq!(Packet::exec(1, "list").frame_len(), 14);
    }

    #[test]
    fn outbound_check_rejects_embedded_nul() {
        let packet = Packet {
            id: 1,
            kind: PacketKind::ExecCommand,
            body: b"li\0st".to_vec(),
        };
        assert!(packet.check_outbound().is_err());
    }
}
