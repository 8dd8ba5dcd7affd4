//! HTTP adapters - REST API implementations.
//!
//! Each area has its own HTTP adapter; [`api_router`] merges them into the
//! service's single router.

pub mod donation;
pub mod error;
pub mod flashcard;
pub mod health;
pub mod study;
pub mod user;

use axum::Router;

// Re-export key types for convenience
pub use donation::{donation_router, DonationAppState};
pub use error::{ApiError, ErrorResponse};
pub use flashcard::{flashcard_router, FlashcardAppState};
pub use health::{health_router, HealthState};
pub use study::{study_router, StudyAppState};
pub use user::{user_router, UserAppState};

/// State for every area of the API.
#[derive(Clone)]
pub struct ApiState {
    pub study: StudyAppState,
    pub donation: DonationAppState,
    pub flashcard: FlashcardAppState,
    pub user: UserAppState,
}

impl ApiState {
    fn health(&self) -> HealthState {
        HealthState {
            payment_provider: self.donation.payment_provider.clone(),
        }
    }
}

/// The full API, without middleware layers.
pub fn api_router(state: ApiState) -> Router {
    Router::new()
        .merge(health_router().with_state(state.health()))
        .merge(study_router().with_state(state.study))
        .merge(donation_router().with_state(state.donation))
        .merge(flashcard_router().with_state(state.flashcard))
        .merge(user_router().with_state(state.user))
}
