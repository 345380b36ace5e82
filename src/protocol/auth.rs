//! Authentication handshake.
//!
//! The client sends an `Auth` packet carrying the passphrase under a
//! fresh non-negative request id. The server answers with an
//! `AuthResponse`: echoing the same id means the login was accepted,
//! echoing `-1` means it was rejected. Some servers additionally send an
//! empty `ResponseValue` ahead of the verdict; those are discarded rather
//! than misread as the auth result.

use tracing::{debug, instrument};

use crate::core::packet::{Packet, PacketKind};
use crate::error::{RconError, Result};
use crate::transport::Connection;

/// Request id servers echo on a rejected login.
pub const AUTH_REJECTED_ID: i32 = -1;

/// Result of the login exchange. A protocol-level rejection, as opposed
/// to the transport errors carried in [`RconError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    /// The server accepted the passphrase.
    Success,
    /// The server rejected the passphrase.
    Failure,
}

impl AuthOutcome {
    /// Whether the server accepted the passphrase.
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Perform the login exchange on an open connection.
///
/// Transport failures (peer gone, timeout) surface as errors; a rejected
/// passphrase is an [`AuthOutcome::Failure`] value. The caller decides
/// what happens to the connection in either case.
#[instrument(skip(conn, passphrase))]
pub async fn authenticate(
    conn: &mut Connection,
    request_id: i32,
    passphrase: &str,
) -> Result<AuthOutcome> {
    conn.send(Packet::auth(request_id, passphrase)).await?;

    loop {
        let packet = conn.receive().await?;
        match packet.kind {
            PacketKind::AuthResponse => {
                return if packet.id == request_id {
                    debug!("authentication accepted");
                    Ok(AuthOutcome::Success)
                } else {
                    if packet.id != AUTH_REJECTED_ID {
                        debug!(echoed = packet.id, "verdict echoed an unknown id");
                    }
                    debug!("authentication rejected");
                    Ok(AuthOutcome::Failure)
                };
            }
            PacketKind::ResponseValue => {
                // Some servers send an empty RESPONSE_VALUE ahead of the
                // real verdict.
                debug!(id = packet.id, "discarding interstitial packet during handshake");
            }
            other => {
                return Err(RconError::MalformedPacket(format!(
                    "unexpected {other:?} packet during handshake"
                )));
            }
        }
    }
}
