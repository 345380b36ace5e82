//! # Core Wire Format
//!
//! Low-level packet handling and framing for the Source RCON protocol.
//!
//! This module provides the foundation for the client, handling packet
//! framing, encoding/decoding, and the wire format.
//!
//! ## Components
//! - **Packet**: request-id tagged frame with a null-terminated text body
//! - **Codec**: Tokio codec for framing over byte streams
//!
//! ## Wire Format
//! ```text
//! [Length(4)] [RequestId(4)] [Type(4)] [Body(N)] [0x00] [0x00]
//! ```
//! All integers are little-endian. The length field counts every byte
//! after itself and is always computed, never trusted from the caller.
//!
//! ## Robustness
//! - Outbound bodies are capped at the 4096-byte protocol limit
//! - Inbound frames are accepted up to a 64 KiB hard ceiling (fragmented
//!   responses legally exceed the nominal cap); anything beyond is
//!   treated as corruption
//! - Length validation happens before allocation

pub mod codec;
pub mod packet;
