//! Command exchange.
//!
//! Sends the real command followed immediately by the empty probe
//! command, then drives the reassembler until the probe's echo (or an
//! empty follow-up fragment) marks the response complete. The whole
//! exchange runs under the configured command timeout.

use tracing::{debug, instrument};

use crate::config::ClientConfig;
use crate::core::packet::Packet;
use crate::error::Result;
use crate::protocol::reassembly::{PendingResponse, ReassemblyStep};
use crate::transport::Connection;
use crate::utils::timeout::with_timeout;

/// Send one command and return its fully reassembled output.
///
/// A command that legitimately produces no output returns an empty
/// string. The ids must be distinct: the probe id is what marks the end
/// of the response.
#[instrument(skip(conn, config))]
pub async fn execute(
    conn: &mut Connection,
    command: &str,
    command_id: i32,
    probe_id: i32,
    config: &ClientConfig,
) -> Result<String> {
    conn.send(Packet::exec(command_id, command)).await?;
    conn.send(Packet::exec(probe_id, "")).await?;

    let mut pending = PendingResponse::new(
        command_id,
        probe_id,
        config.max_fragments,
        config.max_response_bytes,
    );

    let drive = async {
        loop {
            let packet = conn.receive().await?;
            if let ReassemblyStep::Complete(text) = pending.accept(&packet)? {
                debug!(bytes = text.len(), "response complete");
                return Ok(text);
            }
        }
    };

    with_timeout(config.command_timeout, drive).await?
}
