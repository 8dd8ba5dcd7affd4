//! Study domain - paraphrases, generated questions and flashcards.

mod errors;
mod flashcard;
mod post_processing;

pub use errors::StudyError;
pub use flashcard::{complete_rows, FlashcardRow, StoredFlashcard, CREATED_BY_COLUMN};
pub use post_processing::{clean_sequences, extract_questions};
