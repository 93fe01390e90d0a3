use std::sync::Arc;

use crate::model::{Answer, Catalog, Category, Question, QuizStatus, Session};
use crate::policy::QuizPolicy;
use crate::scoring::score;

/// Read-only view of a session, published after every transition.
///
/// Everything a renderer needs is resolved here, so views never touch the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub status: QuizStatus,
    pub category: Option<Arc<Category>>,
    pub question_index: usize,
    pub question_count: usize,
    pub answers: Vec<Answer>,
    pub selected_option: Option<usize>,
    pub is_confirmed: bool,
    pub time_left: Option<u32>,
    pub cheating_detected: bool,
    pub score: usize,
    pub pass_threshold: usize,
    pub generation: u64,
}

impl SessionSnapshot {
    #[must_use]
    pub fn capture(session: &Session, catalog: &Catalog, policy: &QuizPolicy) -> Self {
        let category = session
            .category_id()
            .and_then(|id| catalog.get(id))
            .cloned();
        let score = category
            .as_ref()
            .map_or(0, |c| score(session.answers(), c.questions()));

        Self {
            status: session.status(),
            question_count: category.as_ref().map_or(0, |c| c.question_count()),
            category,
            question_index: session.question_index(),
            answers: session.answers().to_vec(),
            selected_option: session.selected_option(),
            is_confirmed: session.is_confirmed(),
            time_left: session.time_left(),
            cheating_detected: session.cheating_detected(),
            score,
            pass_threshold: policy.pass_threshold(),
            generation: session.generation(),
        }
    }

    /// The question being answered; `None` outside an attempt.
    #[must_use]
    pub fn question(&self) -> Option<&Question> {
        if self.status != QuizStatus::InProgress {
            return None;
        }
        self.category
            .as_ref()
            .and_then(|c| c.question(self.question_index))
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == QuizStatus::Completed
    }

    /// Meaningful once completed; a partial score can never pass early.
    #[must_use]
    pub fn is_passed(&self) -> bool {
        self.is_completed() && self.score >= self.pass_threshold
    }

    /// The reward, exposed only for a completed and passed attempt.
    #[must_use]
    pub fn secret_word(&self) -> Option<&str> {
        if !self.is_passed() {
            return None;
        }
        self.category.as_ref().map(|c| c.secret_word())
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.question_index + 1 >= self.question_count
    }

    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.status == QuizStatus::InProgress && self.cheating_detected
    }
}
