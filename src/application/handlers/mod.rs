//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod donation;
pub mod flashcard;
pub mod inference;
pub mod user;

pub use donation::{
    DonationWebhookOutcome, GetDonationHandler, GetDonationQuery, HandleDonationWebhookCommand,
    HandleDonationWebhookHandler, InitiateCheckoutCommand, InitiateCheckoutHandler,
    InitiateCheckoutResult, InitiateStkPushCommand, InitiateStkPushHandler, InitiateStkPushResult,
    ListDonationsHandler, ListDonationsQuery,
};
pub use flashcard::{
    InsertFlashcardsCommand, InsertFlashcardsHandler, ListFlashcardsHandler, ListFlashcardsQuery,
};
pub use inference::{
    GenerateQuestionsCommand, GenerateQuestionsHandler, GenerateQuestionsResult, InferenceGateway,
    ParaphraseCommand, ParaphraseHandler, ParaphraseResult,
};
pub use user::{
    GetUserProfileHandler, GetUserProfileQuery, RegisterUserProfileCommand,
    RegisterUserProfileHandler, RegisterUserProfileResult,
};
