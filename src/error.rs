//! # Error Types
//!
//! Error handling for the RCON client core.
//!
//! This module defines all error variants that can occur during a session,
//! from connection establishment through command exchange.
//!
//! ## Error Categories
//! - **Connect Errors**: host unreachable, refused, or connect deadline hit
//! - **Protocol Errors**: malformed frames, oversized reassembly
//! - **Transport Errors**: peer closed the stream, read/exchange timeouts
//! - **Contract Errors**: operations invoked in the wrong session state
//!
//! Authentication rejection is deliberately *not* an error: the handshake
//! reports it as [`AuthOutcome::Failure`](crate::protocol::auth::AuthOutcome),
//! so callers can tell a rejected credential apart from a broken connection
//! without inspecting error internals.

use std::io;
use std::time::Duration;
use thiserror::Error;

/// Primary error type for all client operations.
#[derive(Error, Debug)]
pub enum RconError {
    /// The TCP connection could not be established.
    #[error("connect failed: {0}")]
    Connect(#[source] io::Error),

    /// The connect attempt did not complete within the configured bound.
    #[error("connect timed out after {0:?}")]
    ConnectTimeout(Duration),

    /// A frame on the wire violated the packet format. The connection is
    /// not recoverable once this is observed.
    #[error("malformed packet: {0}")]
    MalformedPacket(String),

    /// The peer closed or reset the stream mid-exchange.
    #[error("connection lost")]
    ConnectionLost,

    /// No data arrived within the configured bound. Partial frames may
    /// remain in the stream, so the connection must not be reused.
    #[error("timed out after {0:?}")]
    Timeout(Duration),

    /// Reassembly exceeded the configured fragment or byte ceiling.
    #[error("response too large: {fragments} fragments, {bytes} bytes")]
    ResponseTooLarge {
        /// Fragments accumulated when the ceiling was hit.
        fragments: usize,
        /// Payload bytes accumulated when the ceiling was hit.
        bytes: usize,
    },

    /// `execute` was called on a session that is not authenticated.
    /// No I/O is attempted.
    #[error("session is not authenticated")]
    NotAuthenticated,

    /// Raw I/O failure surfaced by the codec layer. The transport
    /// normalizes this to [`RconError::ConnectionLost`] before it
    /// reaches callers.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration could not be loaded or failed validation.
    #[error("configuration error: {0}")]
    Config(String),
}

impl RconError {
    /// Whether this error occurred while establishing the connection
    /// (host unreachable, refused, or connect timeout).
    pub fn is_connect_error(&self) -> bool {
        matches!(self, Self::Connect(_) | Self::ConnectTimeout(_))
    }

    /// Normalize raw I/O failures observed mid-exchange: once the session
    /// is up, any I/O error means the peer is gone.
    pub(crate) fn into_transport(self) -> Self {
        match self {
            Self::Io(_) => Self::ConnectionLost,
            other => other,
        }
    }
}

/// Type alias for Results using RconError
pub type Result<T> = std::result::Result<T, RconError>;
