//! IntaSend payment provider adapter.
//!
//! Implements the `PaymentProvider` port for the donation flows:
//! - M-Pesa STK push
//! - Hosted checkout
//!
//! # Security
//!
//! - Tokens are held in `secrecy::SecretString` and never logged
//! - Test mode targets the sandbox host
//!
//! # Configuration
//!
//! Resolved at startup through the credential resolver:
//! - `INTASEND_SECRET_TOKEN`
//! - `INTASEND_PUBLISHABLE_KEY`
//! - `INTASEND_TEST_MODE` (optional, defaults to true)

mod intasend_adapter;
mod mock_payment_provider;

pub use intasend_adapter::{IntaSendConfig, IntaSendPaymentAdapter};
pub use mock_payment_provider::{MethodCall, MockPaymentProvider};
