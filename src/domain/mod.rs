//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `inference` - Hosted model requests, failure taxonomy, model registry
//! - `study` - Text post-processing and flashcards
//! - `donation` - Donation requests, records and provider payload rules
//! - `user` - Public user profiles

pub mod donation;
pub mod foundation;
pub mod inference;
pub mod study;
pub mod user;
