//! Tick driver: a cancellable periodic tick source for the timers.
//!
//! The timers are plain state machines with no clock of their own. The driver
//! spawns one task that owns the timer and at most one active
//! [`Interval`]. Commands and ticks are serialized through a single
//! `select!` loop, so a tick can never interleave with a start or stop.
//!
//! ## Interval ownership
//!
//! ```text
//! command returned Some(event), target running  -> fresh interval (first tick one period out)
//! command returned Some(event), target stopped  -> interval dropped
//! command returned None                         -> interval untouched
//! tick left the target stopped                  -> interval dropped
//! driver dropped / shutdown                     -> task exits, interval dropped
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let driver = TickDriver::spawn(BreathingTimer::new(), TICK_PERIOD);
//! driver.apply(BreathingTimer::toggle).await?;
//! let mut snapshots = driver.watch();
//! snapshots.changed().await?;
//! ```

use std::time::Duration;

use tokio::sync::{broadcast, mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, Interval, MissedTickBehavior};
use tracing::{debug, trace};

use crate::error::{CoreError, Result};
use crate::events::Event;

/// One-second tick used by both timers.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

const EVENT_CAPACITY: usize = 64;

/// A state machine that advances one unit per tick.
pub trait Tickable: Send + 'static {
    fn is_running(&self) -> bool;

    /// Advance by one period. Must be a no-op while not running.
    fn tick(&mut self) -> Option<Event>;

    fn snapshot(&self) -> Event;
}

type ApplyFn<T> = Box<dyn FnOnce(&mut T) -> Option<Event> + Send>;
type InspectFn<T> = Box<dyn FnOnce(&T) + Send>;

enum Command<T> {
    Apply(ApplyFn<T>, oneshot::Sender<Option<Event>>),
    Inspect(InspectFn<T>),
    Shutdown,
}

/// Handle to a running driver task.
///
/// Dropping the handle tears the task down and releases its interval.
pub struct TickDriver<T: Tickable> {
    commands: mpsc::UnboundedSender<Command<T>>,
    snapshots: watch::Receiver<Event>,
    events: broadcast::Sender<Event>,
    task: JoinHandle<T>,
}

impl<T: Tickable> TickDriver<T> {
    /// Spawn the driver task on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn spawn(target: T, period: Duration) -> Self {
        let period = period.max(Duration::from_millis(1));
        let (commands, commands_rx) = mpsc::unbounded_channel();
        let (snapshots_tx, snapshots) = watch::channel(target.snapshot());
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        let task = tokio::spawn(run(target, period, commands_rx, snapshots_tx, events.clone()));
        Self {
            commands,
            snapshots,
            events,
            task,
        }
    }

    /// Run a command against the owned target and return the event it produced.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DriverClosed` if the task has already exited.
    pub async fn apply<F>(&self, f: F) -> Result<Option<Event>>
    where
        F: FnOnce(&mut T) -> Option<Event> + Send + 'static,
    {
        let (reply, reply_rx) = oneshot::channel();
        self.commands
            .send(Command::Apply(Box::new(f), reply))
            .map_err(|_| CoreError::DriverClosed)?;
        reply_rx.await.map_err(|_| CoreError::DriverClosed)
    }

    /// Read from the owned target. Ticks already due are applied first.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DriverClosed` if the task has already exited.
    pub async fn inspect<R, F>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&T) -> R + Send + 'static,
        R: Send + 'static,
    {
        let (reply, reply_rx) = oneshot::channel();
        let read: InspectFn<T> = Box::new(move |target| {
            let _ = reply.send(f(target));
        });
        self.commands
            .send(Command::Inspect(read))
            .map_err(|_| CoreError::DriverClosed)?;
        reply_rx.await.map_err(|_| CoreError::DriverClosed)
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> Event {
        self.snapshots.borrow().clone()
    }

    /// Receiver notified after every tick and command.
    pub fn watch(&self) -> watch::Receiver<Event> {
        self.snapshots.clone()
    }

    /// Stream of the events produced by ticks and commands.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.events.subscribe()
    }

    /// Stop the task and hand back the target as it was left.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver task panicked.
    pub async fn shutdown(self) -> Result<T> {
        let Self { commands, task, .. } = self;
        let _ = commands.send(Command::Shutdown);
        Ok(task.await?)
    }
}

async fn run<T: Tickable>(
    mut target: T,
    period: Duration,
    mut commands: mpsc::UnboundedReceiver<Command<T>>,
    snapshots: watch::Sender<Event>,
    events: broadcast::Sender<Event>,
) -> T {
    let mut ticker = target.is_running().then(|| fresh_interval(period));
    debug!(period_ms = period.as_millis() as u64, "tick driver started");

    loop {
        tokio::select! {
            biased;

            _ = next_tick(&mut ticker) => {
                let event = target.tick();
                if !target.is_running() {
                    trace!("target stopped itself, releasing interval");
                    ticker = None;
                }
                publish(&events, event.as_ref());
                snapshots.send_replace(target.snapshot());
            }

            command = commands.recv() => match command {
                Some(Command::Apply(f, reply)) => {
                    let event = f(&mut target);
                    if event.is_some() {
                        ticker = if target.is_running() {
                            trace!("arming fresh interval");
                            Some(fresh_interval(period))
                        } else {
                            trace!("releasing interval");
                            None
                        };
                    }
                    publish(&events, event.as_ref());
                    snapshots.send_replace(target.snapshot());
                    let _ = reply.send(event);
                }
                Some(Command::Inspect(read)) => read(&target),
                Some(Command::Shutdown) | None => break,
            },
        }
    }

    debug!("tick driver stopped");
    target
}

/// Resolves on the next interval tick, or never when no interval is armed.
async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}

// Burst so a late wakeup still yields one tick per elapsed period.
fn fresh_interval(period: Duration) -> Interval {
    let mut interval = tokio::time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Burst);
    interval
}

fn publish(events: &broadcast::Sender<Event>, event: Option<&Event>) {
    if let Some(event) = event {
        trace!(kind = event.kind(), "event");
        // No subscribers is fine.
        let _ = events.send(event.clone());
    }
}
