//! # Service Layer
//!
//! The client facade composed from the transport and protocol layers.
//! This is the only interface an external caller needs.

pub mod client;

pub use client::{RconClient, SessionState};
