pub mod flashcards;
pub mod processing_status;
pub mod toast;
pub mod upload;
pub mod youtube;
