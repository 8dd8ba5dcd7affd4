//! User profile handlers.

mod get_user_profile;
mod register_user_profile;

pub use get_user_profile::{GetUserProfileHandler, GetUserProfileQuery};
pub use register_user_profile::{
    RegisterUserProfileCommand, RegisterUserProfileHandler, RegisterUserProfileResult,
};
