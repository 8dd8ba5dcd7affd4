//! Flashcard handlers.

mod insert_flashcards;
mod list_flashcards;

pub use insert_flashcards::{InsertFlashcardsCommand, InsertFlashcardsHandler};
pub use list_flashcards::{ListFlashcardsHandler, ListFlashcardsQuery};
