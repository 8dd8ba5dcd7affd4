//! Supabase persistence adapters.
//!
//! - `SupabaseTableStore` - PostgREST over HTTP
//! - `InMemoryTableStore` - process-local store for development and tests
//! - `Store*Repository` - repositories layered on any `TableStore`

mod donation_repository;
mod flashcard_repository;
mod in_memory_store;
mod postgrest_store;
mod user_repository;

pub use donation_repository::{StoreDonationRepository, DONATIONS_TABLE};
pub use flashcard_repository::{StoreFlashcardRepository, FLASHCARDS_TABLE};
pub use in_memory_store::InMemoryTableStore;
pub use postgrest_store::{SupabaseConfig, SupabaseTableStore};
pub use user_repository::{StoreUserRepository, USERS_TABLE};
