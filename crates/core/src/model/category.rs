use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{CategoryId, QuestionId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CategoryError {
    #[error("category title cannot be empty")]
    EmptyTitle,

    #[error("category {0} has no questions")]
    NoQuestions(CategoryId),

    #[error("question {0} text cannot be empty")]
    EmptyQuestionText(QuestionId),

    #[error("question {id} needs at least 2 options, got {len}")]
    TooFewOptions { id: QuestionId, len: usize },

    #[error("question {id} correct answer {index} is out of range for {len} options")]
    CorrectAnswerOutOfRange {
        id: QuestionId,
        index: usize,
        len: usize,
    },

    #[error("question id {0} appears more than once")]
    DuplicateQuestion(QuestionId),

    #[error("category {id} has {got} questions, expected {expected}")]
    WrongQuestionCount {
        id: CategoryId,
        expected: usize,
        got: usize,
    },

    #[error("category id {0} appears more than once")]
    DuplicateCategory(CategoryId),
}

//
// ─── WIRE RECORDS ──────────────────────────────────────────────────────────────
//

/// Question as it appears in the catalog JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    pub id: QuestionId,
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer_index: usize,
}

/// Category as it appears in the catalog JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    pub id: CategoryId,
    pub title: String,
    pub description: String,
    pub questions: Vec<QuestionRecord>,
    pub secret_word: String,
    #[serde(default)]
    pub briefing: Vec<String>,
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A multiple-choice question with exactly one correct option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    text: String,
    options: Vec<String>,
    correct_answer_index: usize,
}

impl Question {
    /// # Errors
    ///
    /// Returns `CategoryError` if the text is blank, fewer than two options are given,
    /// or the correct answer does not index into the options.
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        options: Vec<String>,
        correct_answer_index: usize,
    ) -> Result<Self, CategoryError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(CategoryError::EmptyQuestionText(id));
        }
        if options.len() < 2 {
            let len = options.len();
            return Err(CategoryError::TooFewOptions { id, len });
        }
        if correct_answer_index >= options.len() {
            let len = options.len();
            return Err(CategoryError::CorrectAnswerOutOfRange {
                id,
                index: correct_answer_index,
                len,
            });
        }

        Ok(Self {
            id,
            text,
            options,
            correct_answer_index,
        })
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer_index(&self) -> usize {
        self.correct_answer_index
    }

    /// True when `index` points at one of this question's options.
    #[must_use]
    pub fn has_option(&self, index: usize) -> bool {
        index < self.options.len()
    }
}

impl TryFrom<QuestionRecord> for Question {
    type Error = CategoryError;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        Self::new(
            record.id,
            record.text,
            record.options,
            record.correct_answer_index,
        )
    }
}

//
// ─── CATEGORY ──────────────────────────────────────────────────────────────────
//

/// A subject area: an ordered question set plus the reward revealed on pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: CategoryId,
    title: String,
    description: String,
    questions: Vec<Question>,
    secret_word: String,
    briefing: Vec<String>,
}

impl Category {
    /// # Errors
    ///
    /// Returns `CategoryError::EmptyTitle` for a blank title,
    /// `CategoryError::NoQuestions` for an empty question list and
    /// `CategoryError::DuplicateQuestion` when two questions share an id.
    pub fn new(
        id: CategoryId,
        title: impl Into<String>,
        description: impl Into<String>,
        questions: Vec<Question>,
        secret_word: impl Into<String>,
    ) -> Result<Self, CategoryError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(CategoryError::EmptyTitle);
        }
        if questions.is_empty() {
            return Err(CategoryError::NoQuestions(id));
        }
        for (idx, question) in questions.iter().enumerate() {
            if questions[..idx].iter().any(|q| q.id() == question.id()) {
                return Err(CategoryError::DuplicateQuestion(question.id().clone()));
            }
        }

        Ok(Self {
            id,
            title,
            description: description.into(),
            questions,
            secret_word: secret_word.into(),
            briefing: Vec::new(),
        })
    }

    /// Attach briefing paragraphs shown before the attempt starts.
    #[must_use]
    pub fn with_briefing(mut self, briefing: Vec<String>) -> Self {
        self.briefing = briefing;
        self
    }

    #[must_use]
    pub fn id(&self) -> &CategoryId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    #[must_use]
    pub fn briefing(&self) -> &[String] {
        &self.briefing
    }

    #[must_use]
    pub fn has_briefing(&self) -> bool {
        !self.briefing.is_empty()
    }
}

impl TryFrom<CategoryRecord> for Category {
    type Error = CategoryError;

    fn try_from(record: CategoryRecord) -> Result<Self, Self::Error> {
        let questions = record
            .questions
            .into_iter()
            .map(Question::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(
            record.id,
            record.title,
            record.description,
            questions,
            record.secret_word,
        )?
        .with_briefing(record.briefing))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
