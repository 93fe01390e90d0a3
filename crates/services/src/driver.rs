//! Single-writer session loop.
//!
//! One task owns the `Session`. User intents arrive over an mpsc channel, timer
//! ticks over a second one; each event is reduced to completion, the countdown is
//! re-synced, and only then is the next event taken. Every resulting snapshot is
//! published on a `watch` channel for renderers.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot, watch};

use quiz_core::Intent;
use quiz_core::model::{Catalog, Session, SessionSnapshot};

use crate::error::DriverError;
use crate::quiz_service::QuizService;
use crate::timer::{QuestionTimer, TICK_PERIOD};

struct Command {
    intent: Intent,
    reply: Option<oneshot::Sender<SessionSnapshot>>,
}

/// Cloneable front door to a running session driver.
#[derive(Clone)]
pub struct SessionHandle {
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<SessionSnapshot>,
    service: QuizService,
}

impl SessionHandle {
    /// Queue an intent without waiting for it to be applied.
    ///
    /// # Errors
    ///
    /// Returns `DriverError::Closed` if the driver task has stopped.
    pub fn send(&self, intent: Intent) -> Result<(), DriverError> {
        self.commands
            .send(Command {
                intent,
                reply: None,
            })
            .map_err(|_| DriverError::Closed)
    }

    /// Apply an intent and wait for the snapshot it produced.
    ///
    /// # Errors
    ///
    /// Returns `DriverError::Closed` if the driver task has stopped.
    pub async fn dispatch(&self, intent: Intent) -> Result<SessionSnapshot, DriverError> {
        let (reply, rx) = oneshot::channel();
        self.commands
            .send(Command {
                intent,
                reply: Some(reply),
            })
            .map_err(|_| DriverError::Closed)?;
        rx.await.map_err(|_| DriverError::Closed)
    }

    /// Latest published snapshot.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshots.borrow().clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshots.clone()
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        self.service.catalog()
    }

    #[must_use]
    pub fn service(&self) -> &QuizService {
        &self.service
    }
}

/// Spawns and runs the session loop.
pub struct SessionDriver;

impl SessionDriver {
    /// Start a driver on the current tokio runtime with a one-second tick.
    #[must_use]
    pub fn spawn(service: QuizService) -> SessionHandle {
        Self::spawn_with_tick(service, TICK_PERIOD)
    }

    /// Start a driver with a custom tick period.
    #[must_use]
    pub fn spawn_with_tick(service: QuizService, tick: Duration) -> SessionHandle {
        let session = Session::new();
        let (commands_tx, commands_rx) = mpsc::unbounded_channel();
        let (snapshots_tx, snapshots_rx) = watch::channel(service.snapshot(&session));

        tokio::spawn(run(
            service.clone(),
            session,
            commands_rx,
            snapshots_tx,
            tick,
        ));

        SessionHandle {
            commands: commands_tx,
            snapshots: snapshots_rx,
            service,
        }
    }
}

async fn run(
    service: QuizService,
    mut session: Session,
    mut commands: mpsc::UnboundedReceiver<Command>,
    snapshots: watch::Sender<SessionSnapshot>,
    tick: Duration,
) {
    let (ticks_tx, mut ticks) = mpsc::unbounded_channel();
    let mut timer = QuestionTimer::with_period(ticks_tx, tick);
    let policy = service.policy();
    tracing::debug!(timed = policy.is_timed(), "session driver started");

    loop {
        let (intent, reply) = tokio::select! {
            command = commands.recv() => match command {
                Some(Command { intent, reply }) => (intent, reply),
                None => break,
            },
            Some(epoch) = ticks.recv() => (Intent::Tick(epoch), None),
        };

        let next = service.apply(&session, &intent);
        timer.sync(next.timer_epoch(&policy));

        let changed = next != session;
        session = next;
        let snapshot = service.snapshot(&session);
        if changed {
            snapshots.send_replace(snapshot.clone());
        }
        if let Some(reply) = reply {
            let _ = reply.send(snapshot);
        }
    }

    timer.disarm();
    tracing::debug!("session driver stopped");
}
