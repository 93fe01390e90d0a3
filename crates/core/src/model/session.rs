use std::fmt;

use crate::model::ids::CategoryId;
use crate::policy::QuizPolicy;

/// Lifecycle of an attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum QuizStatus {
    #[default]
    Idle,
    /// Reading the category briefing before starting.
    Briefing,
    InProgress,
    Completed,
}

impl QuizStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            QuizStatus::Idle => "idle",
            QuizStatus::Briefing => "briefing",
            QuizStatus::InProgress => "in-progress",
            QuizStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for QuizStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded answer for one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Answer {
    Chosen(usize),
    /// Nothing was selected before the question was locked (timeout).
    Unanswered,
}

impl Answer {
    /// Wire value for `Unanswered`; never a valid option index.
    pub const SENTINEL: i64 = -1;

    #[must_use]
    pub fn from_selection(selected: Option<usize>) -> Self {
        selected.map_or(Answer::Unanswered, Answer::Chosen)
    }

    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            Answer::Chosen(index) => Some(index),
            Answer::Unanswered => None,
        }
    }

    /// Integer form used by the data format: the option index, or `-1`.
    #[must_use]
    pub fn raw(self) -> i64 {
        match self {
            Answer::Chosen(index) => i64::try_from(index).unwrap_or(i64::MAX),
            Answer::Unanswered => Self::SENTINEL,
        }
    }

    #[must_use]
    pub fn matches(self, correct_answer_index: usize) -> bool {
        self.index() == Some(correct_answer_index)
    }
}

/// Identifies the question context a timer tick belongs to.
///
/// A tick only applies when its epoch equals the session's current epoch, so ticks
/// armed for an earlier question or an earlier attempt are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerEpoch {
    pub generation: u64,
    pub question_index: usize,
}

/// Mutable state of one attempt. Replaced wholesale by the reducer on each intent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub(crate) status: QuizStatus,
    pub(crate) category_id: Option<CategoryId>,
    pub(crate) question_index: usize,
    pub(crate) answers: Vec<Answer>,
    pub(crate) selected_option: Option<usize>,
    pub(crate) is_confirmed: bool,
    pub(crate) time_left: Option<u32>,
    pub(crate) cheating_detected: bool,
    pub(crate) generation: u64,
}

impl Session {
    /// An idle session with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn status(&self) -> QuizStatus {
        self.status
    }

    #[must_use]
    pub fn category_id(&self) -> Option<&CategoryId> {
        self.category_id.as_ref()
    }

    #[must_use]
    pub fn question_index(&self) -> usize {
        self.question_index
    }

    #[must_use]
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    #[must_use]
    pub fn selected_option(&self) -> Option<usize> {
        self.selected_option
    }

    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        self.is_confirmed
    }

    /// Seconds remaining on the current question; `None` when untimed or not running.
    #[must_use]
    pub fn time_left(&self) -> Option<u32> {
        self.time_left
    }

    #[must_use]
    pub fn cheating_detected(&self) -> bool {
        self.cheating_detected
    }

    /// Bumped on every start and reset.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        self.status == QuizStatus::InProgress
    }

    /// True while the cheat lock holds; only a reset leaves this state.
    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.is_in_progress() && self.cheating_detected
    }

    /// The epoch a countdown should run for, or `None` when no countdown may run.
    ///
    /// A countdown runs iff the policy is timed, the attempt is in progress, the
    /// current answer is not locked and the cheat lock is not set.
    #[must_use]
    pub fn timer_epoch(&self, policy: &QuizPolicy) -> Option<TimerEpoch> {
        let running = policy.is_timed()
            && self.is_in_progress()
            && !self.is_confirmed
            && !self.cheating_detected;
        running.then_some(TimerEpoch {
            generation: self.generation,
            question_index: self.question_index,
        })
    }
}
