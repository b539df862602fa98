//! Infrastructure adapters. Implement ports.
//!
//! Email provider (outbound), HTTP server (inbound). Map errors to domain errors.

pub mod email;
pub mod http;
