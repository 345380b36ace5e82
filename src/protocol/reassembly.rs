//! Reassembly of fragmented responses.
//!
//! Some server implementations split a single logical response across
//! multiple `ResponseValue` packets without signalling completion. The
//! client compensates by following every real command with an empty probe
//! command: servers answer packets in order, so the probe's echo marks
//! the end of the fragmented response. Servers that never fragment make
//! this a pass-through that completes on the first observation.
//!
//! This module is pure state-machine code with no I/O, which is what
//! makes the fragmentation rules unit-testable without a socket.

use tracing::{debug, warn};

use crate::core::packet::{Packet, PacketKind};
use crate::error::{RconError, Result};

/// Outcome of feeding one packet to a [`PendingResponse`].
#[derive(Debug)]
pub enum ReassemblyStep {
    /// More packets are needed.
    Incomplete,
    /// The response is complete; fragments concatenated in arrival order.
    Complete(String),
}

/// In-progress reassembly for a single logical exchange.
///
/// Owns the fragments accumulated for one command id until one of the
/// completion signals is observed: a packet carrying the probe id, or an
/// empty-payload `ResponseValue` after at least one prior fragment.
pub struct PendingResponse {
    command_id: i32,
    probe_id: i32,
    fragments: Vec<Vec<u8>>,
    total_bytes: usize,
    max_fragments: usize,
    max_bytes: usize,
}

impl PendingResponse {
    /// Start a reassembly for the given command/probe id pair.
    pub fn new(command_id: i32, probe_id: i32, max_fragments: usize, max_bytes: usize) -> Self {
        Self {
            command_id,
            probe_id,
            fragments: Vec::new(),
            total_bytes: 0,
            max_fragments,
            max_bytes,
        }
    }

    /// Feed one received packet into the reassembly.
    ///
    /// Packets carrying neither the command id nor the probe id are
    /// discarded; ids correlate strictly and a stray packet must never
    /// leak into another exchange's output.
    pub fn accept(&mut self, packet: &Packet) -> Result<ReassemblyStep> {
        if packet.id == self.probe_id {
            debug!(fragments = self.fragments.len(), "probe echo observed");
            return Ok(ReassemblyStep::Complete(self.concatenate()));
        }

        if packet.id != self.command_id {
            warn!(id = packet.id, "discarding packet with foreign request id");
            return Ok(ReassemblyStep::Incomplete);
        }

        if packet.kind != PacketKind::ResponseValue {
            warn!(kind = ?packet.kind, "discarding non-response packet during reassembly");
            return Ok(ReassemblyStep::Incomplete);
        }

        if packet.is_empty_body() && !self.fragments.is_empty() {
            debug!(fragments = self.fragments.len(), "empty follow-up fragment observed");
            return Ok(ReassemblyStep::Complete(self.concatenate()));
        }

        self.total_bytes += packet.body.len();
        self.fragments.push(packet.body.clone());

        if self.fragments.len() > self.max_fragments || self.total_bytes > self.max_bytes {
            warn!(
                fragments = self.fragments.len(),
                bytes = self.total_bytes,
                "reassembly ceiling exceeded"
            );
            return Err(RconError::ResponseTooLarge {
                fragments: self.fragments.len(),
                bytes: self.total_bytes,
            });
        }

        Ok(ReassemblyStep::Incomplete)
    }

    /// Concatenate fragments in arrival order and decode as Latin-1.
    fn concatenate(&mut self) -> String {
        let mut text = String::with_capacity(self.total_bytes);
        for fragment in self.fragments.drain(..) {
            text.extend(fragment.iter().map(|&b| char::from(b)));
        }
        text
    }
}
