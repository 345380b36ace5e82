//! # rcon-client
//!
//! Client core for the Source RCON protocol, the length-prefixed binary
//! TCP protocol game servers (Source engine, Minecraft, and others) use
//! to accept authenticated remote administrative commands.
//!
//! ## Layers
//! - [`core`]: packet model and the length-prefixed wire codec
//! - [`transport`]: one exclusively-owned TCP connection per session
//! - [`protocol`]: authentication handshake, command exchange, and
//!   reassembly of fragmented responses
//! - [`service`]: the [`RconClient`] facade external callers drive
//!
//! ## Wire Format
//! ```text
//! [Length(4)] [RequestId(4)] [Type(4)] [Body(N)] [0x00] [0x00]
//! ```
//! All integers little-endian; type 3 = AUTH, 2 = EXECCOMMAND /
//! AUTH_RESPONSE, 0 = RESPONSE_VALUE.
//!
//! ## Example
//! ```no_run
//! use rcon_client::{AuthOutcome, RconClient};
//!
//! # async fn run() -> rcon_client::Result<()> {
//! let mut client = RconClient::connect("localhost", 25575).await?;
//! match client.authenticate("changeme").await? {
//!     AuthOutcome::Success => {
//!         let players = client.execute("list").await?;
//!         println!("{players}");
//!         client.close().await;
//!     }
//!     AuthOutcome::Failure => eprintln!("authentication rejected"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Outcome Contract
//! The three terminal outcomes an external caller must distinguish are
//! carried in the facade's return types alone: command output (`Ok`),
//! transport/protocol failure ([`RconError`]), and credential rejection
//! ([`AuthOutcome::Failure`]).

#![forbid(unsafe_code)]

pub mod config;
pub mod core;
pub mod error;
pub mod protocol;
pub mod service;
pub mod transport;
pub mod utils;

pub use config::ClientConfig;
pub use core::packet::{Packet, PacketKind};
pub use error::{RconError, Result};
pub use protocol::auth::AuthOutcome;
pub use service::client::{RconClient, SessionState};
