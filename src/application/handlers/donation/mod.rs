//! Donation handlers.
//!
//! ## Commands
//! - Initiating an M-Pesa STK push
//! - Creating a hosted checkout
//! - Processing provider webhooks
//!
//! ## Queries
//! - Get a donation by id
//! - List a donor's donations

mod donation_queries;
mod handle_donation_webhook;
mod initiate_checkout;
mod initiate_stk_push;

// Commands
pub use handle_donation_webhook::{
    DonationWebhookOutcome, HandleDonationWebhookCommand, HandleDonationWebhookHandler,
};
pub use initiate_checkout::{
    InitiateCheckoutCommand, InitiateCheckoutHandler, InitiateCheckoutResult,
};
pub use initiate_stk_push::{
    InitiateStkPushCommand, InitiateStkPushHandler, InitiateStkPushResult, STK_PUSH_SENT_MESSAGE,
};

// Queries
pub use donation_queries::{
    GetDonationHandler, GetDonationQuery, ListDonationsHandler, ListDonationsQuery,
};
