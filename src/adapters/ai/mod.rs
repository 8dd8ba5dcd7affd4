//! Text-generation adapters.
//!
//! - `HuggingFaceProvider` - hosted Inference API over HTTP
//! - `MockTextGenerationProvider` - queued responses with call tracking

mod huggingface_provider;
mod mock_provider;

pub use huggingface_provider::{HuggingFaceConfig, HuggingFaceProvider};
pub use mock_provider::{MockResponse, MockTextGenerationProvider};
