use std::sync::Arc;

use quiz_core::model::{Catalog, QuizStatus, Session, SessionSnapshot};
use quiz_core::{Intent, QuizPolicy, reduce};

/// Applies intents to sessions against a loaded catalog and logs every transition.
#[derive(Clone, Debug)]
pub struct QuizService {
    catalog: Arc<Catalog>,
    policy: QuizPolicy,
}

impl QuizService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, policy: QuizPolicy) -> Self {
        Self { catalog, policy }
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    #[must_use]
    pub fn policy(&self) -> QuizPolicy {
        self.policy
    }

    /// Run one intent through the reducer. Invalid intents return an equal session.
    #[must_use]
    pub fn apply(&self, session: &Session, intent: &Intent) -> Session {
        let next = reduce(session, intent, &self.catalog, &self.policy);

        if next == *session {
            match intent {
                Intent::Tick(_) => tracing::trace!(?intent, "stale tick dropped"),
                Intent::Start(id) | Intent::Brief(id) if !self.catalog.contains(id) => {
                    tracing::warn!(category = %id, intent = intent.name(), "unknown category");
                }
                _ => tracing::debug!(
                    intent = intent.name(),
                    status = %session.status(),
                    "intent ignored"
                ),
            }
            return next;
        }

        match intent {
            Intent::Tick(_) => tracing::trace!(time_left = ?next.time_left(), "tick"),
            Intent::FocusLost => tracing::warn!(
                category = ?next.category_id(),
                question = next.question_index(),
                "focus lost, attempt locked"
            ),
            _ => tracing::debug!(
                intent = intent.name(),
                from = %session.status(),
                to = %next.status(),
                question = next.question_index(),
                "session transition"
            ),
        }
        if next.is_confirmed() && !session.is_confirmed() && next.selected_option().is_none() {
            tracing::info!(question = next.question_index(), "question timed out");
        }
        if next.status() != session.status() && next.status() == QuizStatus::Completed {
            let snapshot = self.snapshot(&next);
            tracing::info!(
                category = ?next.category_id(),
                score = snapshot.score,
                passed = snapshot.is_passed(),
                "attempt completed"
            );
        }
        next
    }

    #[must_use]
    pub fn snapshot(&self, session: &Session) -> SessionSnapshot {
        SessionSnapshot::capture(session, &self.catalog, &self.policy)
    }
}
