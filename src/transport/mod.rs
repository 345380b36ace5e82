//! # Transport Layer
//!
//! Socket ownership and framed I/O for a single RCON session.
//!
//! Each [`Connection`](tcp::Connection) owns exactly one TCP socket and
//! sequences all reads and writes on it; sockets are never shared between
//! tasks. Closing the connection is idempotent and is the only
//! cancellation primitive: it unblocks any pending read with a
//! connection-lost error.

pub mod tcp;

pub use tcp::Connection;
