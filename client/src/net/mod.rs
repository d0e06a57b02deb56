//! Networking modules for the booking server's JSON endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls and `types` defines the wire schema plus the
//! decoding rules for loosely typed reply payloads.

pub mod api;
pub mod types;
