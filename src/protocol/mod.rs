//! # Protocol Layer
//!
//! The RCON exchanges themselves: the authentication handshake, the
//! command exchange, and reassembly of fragmented responses.
//!
//! The protocol is strictly request/response with no pipelining. A
//! session has at most one exchange in flight, and every exchange is
//! driven to completion (or failure) before the next may start.

pub mod auth;
pub mod exchange;
pub mod reassembly;
