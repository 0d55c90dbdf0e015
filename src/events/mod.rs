//! Event types and observers.
//!
//! Submodules:
//! - [`audio`] – audio IDs and commands/messages for the background audio thread
//! - [`emitter`] – helpers that stamp and queue gameplay events
//! - [`gameevent`] – the gameplay event sum type carried by the event queue
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod audio;
pub mod emitter;
pub mod gameevent;
pub mod switchdebug;
