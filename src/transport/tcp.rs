//! TCP transport session.
//!
//! Wraps a [`Framed`] TCP stream in the packet codec and enforces the
//! session's timeout bounds. Partial reads are handled inside the codec:
//! `receive` keeps polling until a full frame is decodable or the peer
//! closes the stream.

use futures::{SinkExt, StreamExt};
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio_util::codec::Framed;
use tracing::{debug, instrument, trace};

use crate::config::ClientConfig;
use crate::core::codec::PacketCodec;
use crate::core::packet::Packet;
use crate::error::{RconError, Result};
use crate::utils::timeout::with_timeout;

/// One TCP connection to an RCON server.
///
/// The socket is owned exclusively; dropping the connection releases it.
/// After [`close`](Connection::close) (or any transport error followed by
/// close), `send` and `receive` report [`RconError::ConnectionLost`]
/// without attempting I/O.
#[derive(Debug)]
pub struct Connection {
    framed: Option<Framed<TcpStream, PacketCodec>>,
    read_timeout: Duration,
}

impl Connection {
    /// Establish a TCP connection bounded by the configured connect
    /// timeout.
    #[instrument(skip(config))]
    pub async fn open(host: &str, port: u16, config: &ClientConfig) -> Result<Self> {
        let addr = format!("{host}:{port}");
        let stream = tokio::time::timeout(config.connect_timeout, TcpStream::connect(&addr))
            .await
            .map_err(|_| RconError::ConnectTimeout(config.connect_timeout))?
            .map_err(RconError::Connect)?;

        // Request/response exchanges are latency-bound, not throughput-bound.
        stream.set_nodelay(true).map_err(RconError::Connect)?;

        debug!(%addr, "connection established");
        Ok(Self {
            framed: Some(Framed::new(stream, PacketCodec)),
            read_timeout: config.read_timeout,
        })
    }

    /// Write one packet and flush it.
    pub async fn send(&mut self, packet: Packet) -> Result<()> {
        let framed = self.framed.as_mut().ok_or(RconError::ConnectionLost)?;
        trace!(id = packet.id, kind = ?packet.kind, "sending packet");
        framed
            .send(packet)
            .await
            .map_err(RconError::into_transport)
    }

    /// Read the next full frame, looping on partial reads. The peer
    /// closing the stream surfaces as [`RconError::ConnectionLost`]; no
    /// data within the read timeout surfaces as [`RconError::Timeout`].
    pub async fn receive(&mut self) -> Result<Packet> {
        let limit = self.read_timeout;
        let framed = self.framed.as_mut().ok_or(RconError::ConnectionLost)?;
        match with_timeout(limit, framed.next()).await? {
            Some(Ok(packet)) => {
                trace!(id = packet.id, kind = ?packet.kind, "received packet");
                Ok(packet)
            }
            Some(Err(e)) => Err(e.into_transport()),
            None => Err(RconError::ConnectionLost),
        }
    }

    /// Release the socket. Idempotent and safe to call after any error;
    /// the shutdown itself is best-effort since the peer may already be
    /// gone.
    pub async fn close(&mut self) {
        if let Some(mut framed) = self.framed.take() {
            if let Err(e) = framed.get_mut().shutdown().await {
                debug!(error = %e, "socket shutdown during close");
            }
            debug!("connection closed");
        }
    }

    /// Whether the socket has been released.
    pub fn is_closed(&self) -> bool {
        self.framed.is_none()
    }
}
