pub mod flashcard;
pub mod summary;
pub mod upload;
pub mod youtube;
