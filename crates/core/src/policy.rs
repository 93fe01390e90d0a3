//! Fixed rules of an attempt: question count, pass mark and the timed variant.

/// Number of questions every category must carry.
pub const QUESTION_COUNT: usize = 5;

/// Minimum number of correct answers needed to pass.
pub const PASS_THRESHOLD: usize = 3;

/// Seconds allowed per question in the timed variant.
pub const QUESTION_TIMEOUT_SECS: u32 = 25;

/// Rules applied by the session reducer.
///
/// `classic()` is the untimed flow. `timed()` adds the per-question countdown and
/// freezes the attempt when the host reports focus loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizPolicy {
    question_count: usize,
    pass_threshold: usize,
    timeout_secs: Option<u32>,
    focus_lock: bool,
}

impl QuizPolicy {
    #[must_use]
    pub const fn classic() -> Self {
        Self {
            question_count: QUESTION_COUNT,
            pass_threshold: PASS_THRESHOLD,
            timeout_secs: None,
            focus_lock: false,
        }
    }

    #[must_use]
    pub const fn timed() -> Self {
        Self {
            question_count: QUESTION_COUNT,
            pass_threshold: PASS_THRESHOLD,
            timeout_secs: Some(QUESTION_TIMEOUT_SECS),
            focus_lock: true,
        }
    }

    #[must_use]
    pub const fn question_count(&self) -> usize {
        self.question_count
    }

    #[must_use]
    pub const fn pass_threshold(&self) -> usize {
        self.pass_threshold
    }

    /// Countdown per question, `None` when untimed.
    #[must_use]
    pub const fn timeout_secs(&self) -> Option<u32> {
        self.timeout_secs
    }

    #[must_use]
    pub const fn is_timed(&self) -> bool {
        self.timeout_secs.is_some()
    }

    #[must_use]
    pub const fn focus_lock(&self) -> bool {
        self.focus_lock
    }

    #[must_use]
    pub const fn passes(&self, score: usize) -> bool {
        score >= self.pass_threshold
    }
}

impl Default for QuizPolicy {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_mark_is_three_of_five() {
        let policy = QuizPolicy::classic();
        assert!(!policy.passes(2));
        assert!(policy.passes(3));
        assert!(policy.passes(5));
    }

    #[test]
    fn timed_policy_enables_countdown_and_focus_lock() {
        let policy = QuizPolicy::timed();
        assert_eq!(policy.timeout_secs(), Some(25));
        assert!(policy.focus_lock());
        assert!(!QuizPolicy::classic().is_timed());
    }
}
