//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## External Service Ports
//!
//! - `CredentialSource` - One place API credentials can be read from
//! - `TextGenerationProvider` - Hosted model inference
//! - `PaymentProvider` - Payment aggregator (STK push, hosted checkout)
//!
//! ## Storage Ports
//!
//! - `TableStore` - Row-level access to the backing store
//! - `DonationRepository`, `FlashcardRepository`, `UserRepository`

mod credential_source;
mod donation_repository;
mod flashcard_repository;
mod payment_provider;
mod table_store;
mod text_generation;
mod user_repository;

pub use credential_source::{
    CredentialSource, INFERENCE_TOKEN_NAMES, PAYMENT_PUBLISHABLE_KEY_NAMES,
    PAYMENT_TEST_MODE_NAMES, PAYMENT_TOKEN_NAMES, STORE_KEY_NAMES, STORE_URL_NAMES,
};
pub use donation_repository::DonationRepository;
pub use flashcard_repository::FlashcardRepository;
pub use payment_provider::{
    CheckoutRequest, PaymentError, PaymentErrorCode, PaymentProvider, StkPushRequest,
};
pub use table_store::{
    Filter, Order, Row, SelectQuery, StoreError, TableStore, UNDEFINED_COLUMN_SQLSTATE,
};
pub use text_generation::TextGenerationProvider;
pub use user_repository::UserRepository;
