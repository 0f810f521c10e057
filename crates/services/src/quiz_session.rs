use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use quiz_core::QuizSettings;
use quiz_core::QuizError;
use quiz_core::model::{OptionIndex, RoundId, SessionSnapshot, SessionState, TickOutcome};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::error::SessionError;

const TICK_PERIOD: Duration = Duration::from_secs(1);

struct Driver {
    state: SessionState,
    countdown: Option<JoinHandle<()>>,
    reveal: Option<JoinHandle<()>>,
}

impl Driver {
    fn cancel_countdown(&mut self) {
        if let Some(handle) = self.countdown.take() {
            handle.abort();
        }
    }

    fn cancel_reveal(&mut self) {
        if let Some(handle) = self.reveal.take() {
            handle.abort();
        }
    }

    fn cancel_all(&mut self) {
        self.cancel_countdown();
        self.cancel_reveal();
    }
}

impl Drop for Driver {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

struct Shared {
    driver: Mutex<Driver>,
    snapshots: watch::Sender<SessionSnapshot>,
    runtime: Handle,
    settings: QuizSettings,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Driver> {
        self.driver.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, driver: &Driver) {
        self.snapshots.send_replace(driver.state.snapshot());
    }

    fn spawn_countdown(self: &Arc<Self>, driver: &mut Driver) {
        driver.cancel_countdown();
        let round = driver.state.round();
        let shared = Arc::downgrade(self);
        let handle = self.runtime.spawn(async move {
            let mut interval = time::interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if !Self::deliver_tick(&shared, round) {
                    return;
                }
            }
        });
        driver.countdown = Some(handle);
    }

    fn spawn_reveal(self: &Arc<Self>, driver: &mut Driver) {
        driver.cancel_reveal();
        let round = driver.state.round();
        let delay = self.settings.reveal_delay();
        let shared = Arc::downgrade(self);
        let handle = self.runtime.spawn(async move {
            time::sleep(delay).await;
            Self::deliver_reveal(&shared, round);
        });
        driver.reveal = Some(handle);
    }

    /// Returns true while the countdown for `round` should keep going.
    fn deliver_tick(shared: &Weak<Self>, round: RoundId) -> bool {
        let Some(shared) = shared.upgrade() else {
            return false;
        };
        let mut driver = shared.lock();
        let outcome = driver.state.tick(round);
        match outcome {
            TickOutcome::Ignored => {
                debug!(?round, "countdown tick for a finished round");
                return false;
            }
            TickOutcome::Running => {}
            TickOutcome::TimedOut => {
                let snapshot = driver.state.snapshot();
                info!(
                    question = snapshot.question_index.number(),
                    score = snapshot.score,
                    "time ran out"
                );
                driver.cancel_reveal();
            }
            TickOutcome::Expired => {
                debug!(?round, "countdown expired while an answer is being revealed");
            }
        }
        shared.publish(&driver);
        outcome.keeps_running()
    }

    fn deliver_reveal(shared: &Weak<Self>, round: RoundId) {
        let Some(shared) = shared.upgrade() else {
            return;
        };
        let mut driver = shared.lock();
        let Some(verdict) = driver.state.evaluate(round) else {
            debug!(?round, "reveal for a finished round");
            return;
        };
        // This task is the one finishing; detach rather than abort it.
        drop(driver.reveal.take());
        driver.cancel_countdown();

        let snapshot = driver.state.snapshot();
        info!(
            question = snapshot.question_index.number(),
            ?verdict,
            score = snapshot.score,
            phase = ?snapshot.phase,
            "answer evaluated"
        );
        shared.publish(&driver);
    }
}

/// Drives one quiz play-through in real time.
///
/// Owns the session state machine, runs the per-second countdown and the
/// reveal pause as tokio tasks, and publishes a fresh [`SessionSnapshot`]
/// after every change. Any pending timer is aborted as soon as the phase it
/// belongs to is left. Clones share the same session.
#[derive(Clone)]
pub struct QuizSession {
    shared: Arc<Shared>,
}

impl QuizSession {
    /// Creates a session driven by the current tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoRuntime` when called outside a tokio runtime.
    pub fn new(settings: QuizSettings) -> Result<Self, SessionError> {
        let runtime = Handle::try_current()?;
        Ok(Self::with_handle(settings, runtime))
    }

    /// Creates a session whose timers run on `runtime`.
    #[must_use]
    pub fn with_handle(settings: QuizSettings, runtime: Handle) -> Self {
        let state = SessionState::new(settings);
        let (snapshots, _) = watch::channel(state.snapshot());
        Self {
            shared: Arc::new(Shared {
                driver: Mutex::new(Driver {
                    state,
                    countdown: None,
                    reveal: None,
                }),
                snapshots,
                runtime,
                settings,
            }),
        }
    }

    #[must_use]
    pub fn settings(&self) -> QuizSettings {
        self.shared.settings
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.shared.lock().state.snapshot()
    }

    /// Subscribe to snapshot updates. The receiver starts at the current snapshot.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.shared.snapshots.subscribe()
    }

    /// Starts a new play-through at the first question.
    pub fn start_game(&self) {
        let mut driver = self.shared.lock();
        driver.cancel_all();
        driver.state.start_game();
        info!("game started");
        self.shared.spawn_countdown(&mut driver);
        self.shared.publish(&driver);
    }

    /// Locks in an answer; it is evaluated once the reveal delay has passed.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` when input is locked or no question is being played.
    /// The session is left unchanged in that case.
    pub fn select_answer(&self, answer: OptionIndex) -> Result<(), QuizError> {
        let mut driver = self.shared.lock();
        if let Err(err) = driver.state.select_answer(answer) {
            debug!(%err, %answer, "answer ignored");
            return Err(err);
        }
        debug!(%answer, "answer locked in");
        self.shared.spawn_reveal(&mut driver);
        self.shared.publish(&driver);
        Ok(())
    }

    /// Advances from the correct-answer screen to the following question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::WrongPhase` unless the last answer was correct.
    pub fn next_question(&self) -> Result<(), QuizError> {
        let mut driver = self.shared.lock();
        if let Err(err) = driver.state.next_question() {
            debug!(%err, "next question ignored");
            return Err(err);
        }
        driver.cancel_all();
        let snapshot = driver.state.snapshot();
        info!(question = snapshot.question_index.number(), "next question");
        self.shared.spawn_countdown(&mut driver);
        self.shared.publish(&driver);
        Ok(())
    }

    /// Returns to the title screen, dropping any pending countdown or reveal.
    pub fn restart_game(&self) {
        let mut driver = self.shared.lock();
        driver.cancel_all();
        driver.state.restart_game();
        info!("game restarted");
        self.shared.publish(&driver);
    }
}
