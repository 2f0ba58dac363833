use crate::jobs::JobStatus;
use serde::{Deserialize, Serialize};

/// A single question/answer pair produced for a completed job.
///
/// `card_number` is the ordering key. The backend numbers cards from 1 in
/// generation order and every consumer must keep that order.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Flashcard {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub card_number: u32,
}

/// Body of `GET /flashcards/{job_id}`.
///
/// While the job is not `completed` the backend answers with the current
/// status and an empty card list.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct FlashcardSet {
    #[serde(rename = "pdf_id", alias = "job_id")]
    pub job_id: String,
    pub status: JobStatus,
    #[serde(default)]
    pub flashcards: Vec<Flashcard>,
}

impl FlashcardSet {
    /// Cards sorted by `card_number`. The sort is stable, so cards sharing a
    /// number keep the order the backend sent them in.
    pub fn ordered_cards(&self) -> Vec<Flashcard> {
        let mut cards = self.flashcards.clone();
        cards.sort_by_key(|c| c.card_number);
        cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: i64, n: u32) -> Flashcard {
        Flashcard {
            id,
            question: format!("Q{id}"),
            answer: format!("A{id}"),
            card_number: n,
        }
    }

    #[test]
    fn ordered_cards_sort_by_card_number() {
        let set = FlashcardSet {
            job_id: "abc".into(),
            status: JobStatus::Completed,
            flashcards: vec![card(30, 3), card(10, 1), card(20, 2)],
        };
        let ids: Vec<_> = set.ordered_cards().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![10, 20, 30]);
    }

    #[test]
    fn duplicate_numbers_keep_arrival_order() {
        let set = FlashcardSet {
            job_id: "abc".into(),
            status: JobStatus::Completed,
            flashcards: vec![card(7, 2), card(5, 1), card(6, 2)],
        };
        let ids: Vec<_> = set.ordered_cards().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![5, 7, 6]);
    }

    #[test]
    fn processing_set_has_no_cards() {
        let set: FlashcardSet =
            serde_json::from_str(r#"{"pdf_id":"abc","status":"processing","flashcards":[]}"#)
                .unwrap();
        assert_eq!(set.status, JobStatus::Processing);
        assert!(set.ordered_cards().is_empty());
    }
}
