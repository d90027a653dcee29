//! Tracing setup for the gallery.
//!
//! The library itself only emits `tracing` events and spans; hosts that want
//! output call [`init_tracing`] once at startup.

mod init;

pub use init::init_tracing;
