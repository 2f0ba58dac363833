//! Study session behind the flashcard viewer.
//!
//! Holds the deck in presentation order, the current position, whether the
//! answer is revealed, and the grades given so far. Grades use the usual
//! four-button spaced-repetition scale and are only accepted while the answer
//! is showing.

use crate::model::flashcard::Flashcard;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Grade {
    Again = 1,
    Hard = 2,
    Good = 3,
    Easy = 4,
}

impl Grade {
    pub const ALL: [Grade; 4] = [Grade::Again, Grade::Hard, Grade::Good, Grade::Easy];

    pub fn from_key(key: &str) -> Option<Grade> {
        match key {
            "1" => Some(Grade::Again),
            "2" => Some(Grade::Hard),
            "3" => Some(Grade::Good),
            "4" => Some(Grade::Easy),
            _ => None,
        }
    }

    pub fn score(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Grade::Again => "Again (1)",
            Grade::Hard => "Hard (2)",
            Grade::Good => "Good (3)",
            Grade::Easy => "Easy (4)",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GradeRecord {
    pub card_id: i64,
    pub index: usize,
    pub grade: Grade,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StudySession {
    cards: Vec<Flashcard>,
    index: usize,
    revealed: bool,
    auto_advance: bool,
    grades: Vec<GradeRecord>,
}

impl StudySession {
    /// `cards` must already be in presentation order; the session never reorders.
    pub fn new(cards: Vec<Flashcard>) -> Self {
        Self {
            cards,
            index: 0,
            revealed: false,
            auto_advance: true,
            grades: Vec::new(),
        }
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn current(&self) -> Option<&Flashcard> {
        self.cards.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// 1-based position for "Card N of M".
    pub fn position(&self) -> usize {
        if self.cards.is_empty() { 0 } else { self.index + 1 }
    }

    pub fn total(&self) -> usize {
        self.cards.len()
    }

    /// Fraction of the deck reached, in `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        if self.cards.is_empty() {
            0.0
        } else {
            self.position() as f32 / self.total() as f32
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    pub fn set_auto_advance(&mut self, on: bool) {
        self.auto_advance = on;
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.cards.len()
    }

    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    pub fn hide(&mut self) {
        self.revealed = false;
    }

    pub fn toggle_reveal(&mut self) {
        self.revealed = !self.revealed;
    }

    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.index += 1;
        self.revealed = false;
        true
    }

    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.index -= 1;
        self.revealed = false;
        true
    }

    pub fn restart(&mut self) {
        self.index = 0;
        self.revealed = false;
    }

    /// Records a grade for the current card. Ignored while the answer is hidden.
    pub fn grade(&mut self, grade: Grade) -> bool {
        let Some(card) = self.current() else {
            return false;
        };
        if !self.revealed {
            return false;
        }
        self.grades.push(GradeRecord {
            card_id: card.id,
            index: self.index,
            grade,
        });
        if self.auto_advance && self.has_next() {
            self.next();
        }
        true
    }

    pub fn grades(&self) -> &[GradeRecord] {
        &self.grades
    }

    /// Keyboard shortcuts: space toggles the answer, arrows move while the
    /// answer is hidden, 1-4 grade while it is shown. Returns `true` when the
    /// key was handled.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == " " || key == "Spacebar" {
            self.toggle_reveal();
            return true;
        }
        if self.revealed {
            return match Grade::from_key(key) {
                Some(grade) => self.grade(grade),
                None => false,
            };
        }
        match key {
            "ArrowLeft" => self.previous(),
            "ArrowRight" => self.next(),
            _ => false,
        }
    }
}
