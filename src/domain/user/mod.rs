//! User domain - public profile rows keyed by auth user id.

mod profile;

pub use profile::{UserLookup, UserProfile};
