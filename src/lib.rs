//! QubitLearn - study-aid backend
//!
//! Paraphrasing and question generation over a hosted inference API,
//! flashcard and profile storage in Supabase, and donations through
//! IntaSend.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
