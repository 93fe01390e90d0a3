//! The session reducer: `(Session, Intent) -> Session`.
//!
//! Every intent that is not valid in the current state returns an unchanged copy of
//! the session. Callers detect no-ops by comparing the result with the input.

use crate::model::{Answer, Catalog, CategoryId, QuizStatus, Session, TimerEpoch};
use crate::policy::QuizPolicy;

/// Everything that can drive a session forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Open the briefing for a category from the hub.
    Brief(CategoryId),
    /// Begin a fresh attempt. Also used for restart after completion.
    Start(CategoryId),
    Select(usize),
    Confirm,
    /// Record the locked answer and move to the next question (or finish).
    Advance,
    /// One countdown second elapsed for the given question context.
    Tick(TimerEpoch),
    /// The host lost foreground focus.
    FocusLost,
    /// Abort or return to the hub.
    Reset,
}

impl Intent {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Intent::Brief(_) => "brief",
            Intent::Start(_) => "start",
            Intent::Select(_) => "select",
            Intent::Confirm => "confirm",
            Intent::Advance => "advance",
            Intent::Tick(_) => "tick",
            Intent::FocusLost => "focus-lost",
            Intent::Reset => "reset",
        }
    }
}

/// Apply `intent` to `session` under `policy`, resolving categories through `catalog`.
#[must_use]
pub fn reduce(
    session: &Session,
    intent: &Intent,
    catalog: &Catalog,
    policy: &QuizPolicy,
) -> Session {
    match intent {
        Intent::Brief(id) => brief(session, id, catalog),
        Intent::Start(id) => start(session, id, catalog, policy),
        Intent::Select(index) => select(session, *index, catalog),
        Intent::Confirm => confirm(session),
        Intent::Advance => advance(session, catalog, policy),
        Intent::Tick(epoch) => tick(session, *epoch, policy),
        Intent::FocusLost => focus_lost(session, policy),
        Intent::Reset => reset(session),
    }
}

fn brief(session: &Session, id: &CategoryId, catalog: &Catalog) -> Session {
    if session.status != QuizStatus::Idle || !catalog.contains(id) {
        return session.clone();
    }
    Session {
        status: QuizStatus::Briefing,
        category_id: Some(id.clone()),
        ..Session::new_generation(session.generation)
    }
}

fn start(session: &Session, id: &CategoryId, catalog: &Catalog, policy: &QuizPolicy) -> Session {
    // An attempt that is running (or frozen) must be reset before another can begin.
    if session.is_in_progress() || !catalog.contains(id) {
        return session.clone();
    }
    Session {
        status: QuizStatus::InProgress,
        category_id: Some(id.clone()),
        time_left: policy.timeout_secs(),
        ..Session::new_generation(session.generation.wrapping_add(1))
    }
}

fn select(session: &Session, index: usize, catalog: &Catalog) -> Session {
    if !accepts_input(session) || session.is_confirmed {
        return session.clone();
    }
    let in_range = current_question_has_option(session, catalog, index);
    if !in_range {
        return session.clone();
    }
    Session {
        selected_option: Some(index),
        ..session.clone()
    }
}

fn confirm(session: &Session) -> Session {
    if !accepts_input(session) || session.is_confirmed || session.selected_option.is_none() {
        return session.clone();
    }
    Session {
        is_confirmed: true,
        ..session.clone()
    }
}

fn advance(session: &Session, catalog: &Catalog, policy: &QuizPolicy) -> Session {
    if !accepts_input(session) || !session.is_confirmed {
        return session.clone();
    }
    let Some(question_count) = session
        .category_id
        .as_ref()
        .and_then(|id| catalog.get(id))
        .map(|category| category.question_count())
    else {
        return session.clone();
    };

    let mut answers = session.answers.clone();
    answers.push(Answer::from_selection(session.selected_option));

    let is_last = session.question_index + 1 >= question_count;
    Session {
        status: if is_last {
            QuizStatus::Completed
        } else {
            QuizStatus::InProgress
        },
        question_index: if is_last {
            session.question_index
        } else {
            session.question_index + 1
        },
        answers,
        selected_option: None,
        is_confirmed: false,
        time_left: policy.timeout_secs(),
        ..session.clone()
    }
}

fn tick(session: &Session, epoch: TimerEpoch, policy: &QuizPolicy) -> Session {
    if session.timer_epoch(policy) != Some(epoch) {
        return session.clone();
    }
    let remaining = session.time_left.unwrap_or(0).saturating_sub(1);
    Session {
        time_left: Some(remaining),
        // Out of time: lock whatever is selected, possibly nothing.
        is_confirmed: remaining == 0,
        ..session.clone()
    }
}

fn focus_lost(session: &Session, policy: &QuizPolicy) -> Session {
    if !policy.focus_lock() || !session.is_in_progress() || session.cheating_detected {
        return session.clone();
    }
    Session {
        cheating_detected: true,
        ..session.clone()
    }
}

fn reset(session: &Session) -> Session {
    if session.status == QuizStatus::Idle {
        return session.clone();
    }
    Session::new_generation(session.generation.wrapping_add(1))
}

fn accepts_input(session: &Session) -> bool {
    session.is_in_progress() && !session.cheating_detected
}

fn current_question_has_option(session: &Session, catalog: &Catalog, index: usize) -> bool {
    session
        .category_id
        .as_ref()
        .and_then(|id| catalog.get(id))
        .and_then(|category| category.question(session.question_index))
        .is_some_and(|question| question.has_option(index))
}

impl Session {
    fn new_generation(generation: u64) -> Self {
        Self {
            generation,
            ..Self::default()
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
