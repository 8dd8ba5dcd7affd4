//! HTTP adapter for flashcard endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::FlashcardAppState;
pub use routes::flashcard_router;
