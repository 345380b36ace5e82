//! Client facade.
//!
//! Composes the transport session, handshake, and command exchange into
//! the connect → authenticate → execute → close lifecycle:
//!
//! ```text
//! Connected ──authenticate: Success──▶ Authenticated ──execute*──▶ ...
//!     │                                      │
//!     └──authenticate: Failure / any error───┴──────────────────▶ Closed
//! ```
//!
//! The facade never leaves a failed session open: a rejected login and
//! every transport error release the socket before returning. Dropping
//! the client releases the socket as well, so no exit path leaks a file
//! descriptor.

use rand::Rng;
use tracing::{info, instrument, warn};

use crate::config::ClientConfig;
use crate::error::{RconError, Result};
use crate::protocol::auth::{self, AuthOutcome};
use crate::protocol::exchange;
use crate::transport::Connection;

/// Lifecycle state of a session. `Disconnected` has no representation;
/// it is simply the absence of a client value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// TCP connection is up, login has not succeeded yet.
    Connected,
    /// Login succeeded; commands may be executed.
    Authenticated,
    /// Socket released. Terminal.
    Closed,
}

/// One RCON session over one exclusively-owned TCP connection.
///
/// The protocol is strictly request/response: a session has at most one
/// exchange in flight, and request ids exist purely for echo
/// correlation.
#[derive(Debug)]
pub struct RconClient {
    conn: Connection,
    state: SessionState,
    next_id: i32,
    config: ClientConfig,
}

impl RconClient {
    /// Connect with the default configuration.
    pub async fn connect(host: &str, port: u16) -> Result<Self> {
        Self::connect_with_config(host, port, ClientConfig::default()).await
    }

    /// Connect with an explicit configuration. The configuration is
    /// validated first; the connect attempt is bounded by its connect
    /// timeout.
    #[instrument(skip(config))]
    pub async fn connect_with_config(
        host: &str,
        port: u16,
        config: ClientConfig,
    ) -> Result<Self> {
        config.validate_strict()?;
        let conn = Connection::open(host, port, &config).await?;
        info!(host, port, "session connected");

        // Ids only correlate echoes; randomizing the starting point keeps
        // ids from colliding across sessions sharing a server-side log.
        let next_id = rand::rng().random_range(1..0x4000_0000);

        Ok(Self {
            conn,
            state: SessionState::Connected,
            next_id,
            config,
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Perform the login exchange.
    ///
    /// [`AuthOutcome::Failure`] closes the session before returning; so
    /// does every transport error. Only [`AuthOutcome::Success`] leaves
    /// the connection open.
    pub async fn authenticate(&mut self, passphrase: &str) -> Result<AuthOutcome> {
        if self.state == SessionState::Closed {
            return Err(RconError::ConnectionLost);
        }

        let request_id = self.next_request_id();
        match auth::authenticate(&mut self.conn, request_id, passphrase).await {
            Ok(AuthOutcome::Success) => {
                self.state = SessionState::Authenticated;
                info!("session authenticated");
                Ok(AuthOutcome::Success)
            }
            Ok(AuthOutcome::Failure) => {
                warn!("authentication rejected, closing session");
                self.close().await;
                Ok(AuthOutcome::Failure)
            }
            Err(e) => {
                self.close().await;
                Err(e)
            }
        }
    }

    /// Execute one command and return its fully reassembled output.
    ///
    /// Requires an authenticated session; calling this in any other state
    /// is a contract violation reported as
    /// [`RconError::NotAuthenticated`] with no I/O attempted. Every
    /// transport error closes the session.
    pub async fn execute(&mut self, command: &str) -> Result<String> {
        if self.state != SessionState::Authenticated {
            return Err(RconError::NotAuthenticated);
        }

        let command_id = self.next_request_id();
        let probe_id = self.next_request_id();
        match exchange::execute(&mut self.conn, command, command_id, probe_id, &self.config).await
        {
            Ok(text) => Ok(text),
            Err(e) => {
                self.close().await;
                Err(e)
            }
        }
    }

    /// Release the socket. Idempotent; safe on every exit path.
    pub async fn close(&mut self) {
        self.conn.close().await;
        self.state = SessionState::Closed;
    }

    /// Hand out the next request id. Ids stay positive; the counter wraps
    /// back to 1 long before approaching `-1`, which servers reserve for
    /// the rejection verdict.
    fn next_request_id(&mut self) -> i32 {
        let id = self.next_id;
        self.next_id = if self.next_id == i32::MAX {
            1
        } else {
            self.next_id + 1
        };
        id
    }
}
