//! Donation domain module.
//!
//! Donations are initiated through the payment provider (STK push or hosted
//! checkout) and settled asynchronously by provider webhooks.
//!
//! # Module Structure
//!
//! - `request` - DonationRequest and its validation rules
//! - `record` - DonationRecord as persisted
//! - `status` - DonationStatus and DonationMethod
//! - `api_ref` - transaction reference construction
//! - `extractors` - ordered field lookups over provider payloads

mod api_ref;
pub mod extractors;
mod record;
mod request;
mod status;

pub use api_ref::{
    amount_in_cents, checkout_api_ref, sanitize_api_ref, stk_push_api_ref, MAX_API_REF_LEN,
};
pub use record::DonationRecord;
pub use request::{DonationRequest, Msisdn, ValidatedDonation};
pub use status::{DonationMethod, DonationStatus};
