//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Hosted text generation (Hugging Face Inference API)
//! - `credentials` - Layered credential lookup
//! - `http` - REST API
//! - `intasend` - Payment aggregator
//! - `supabase` - Table storage over PostgREST

pub mod ai;
pub mod credentials;
pub mod http;
pub mod intasend;
pub mod supabase;

pub use credentials::CredentialResolver;
pub use http::{api_router, ApiState};
