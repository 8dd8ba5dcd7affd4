//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers write (donations, flashcards, profiles); query handlers
//! read. Inference handlers call the hosted models through the gateway.

pub mod handlers;

pub use handlers::*;
