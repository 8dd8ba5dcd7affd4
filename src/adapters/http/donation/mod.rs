//! HTTP adapter for donation endpoints.
//!
//! - `POST /donate/mpesa-stk` - M-Pesa STK push
//! - `POST /donate/checkout` - Hosted checkout
//! - `GET /donations/:id`, `GET /donations?email=` - Donation lookups
//! - `POST /webhook/intasend` - Provider callbacks

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::DonationAppState;
pub use routes::donation_router;
