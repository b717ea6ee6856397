//! Cancellable one-second countdown engine.
//!
//! The countdown is a Bubble Tea component: it owns no thread and never
//! blocks. Each accepted [`TickMsg`] decrements the remaining time and
//! returns the command that schedules the next tick one interval later, so
//! ticks arrive strictly one per second in decreasing order. When the
//! countdown reaches zero it emits a [`CompletedMsg`] through a
//! near-immediate tick, leaving the `00:00` frame on screen for the moment
//! before the application starts the next interval.
//!
//! # Cancellation
//!
//! A scheduled tick cannot be unscheduled once its command has been handed
//! to the runtime. Cancellation is therefore by generation: every
//! [`Model::start`] and [`Model::cancel`] bumps an internal tag, and a tick
//! minted under an older tag is silently rejected on arrival. Cancelling
//! when nothing is pending is a no-op.
//!
//! # Basic Usage
//!
//! ```rust
//! use tomatea::countdown;
//!
//! let mut countdown = countdown::new(90);
//! assert_eq!(countdown.view(), "01:30");
//! let _first_tick = countdown.start(90);
//! assert!(countdown.running());
//! ```

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

// Internal ID management for countdown instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Generates unique identifiers for countdown instances so several can
/// coexist without processing each other's messages.
fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Message delivered once per interval while a countdown is live.
///
/// Ticks carry the instance `id` and the generation tag they were minted
/// under; [`Model::update`] rejects any tick whose pair does not match the
/// live generation.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// The countdown instance this tick belongs to.
    pub id: i64,
    /// Generation the tick was scheduled under. Stale generations are
    /// rejected, which is what cancellation means here.
    tag: i64,
}

/// Message delivered when a countdown reaches zero.
///
/// Sent via a near-immediate tick rather than synchronously, so the final
/// `00:00` frame renders before the application reacts. Check it against
/// the countdown with [`Model::completes`] before acting on it.
#[derive(Debug, Clone)]
pub struct CompletedMsg {
    /// The countdown instance that finished.
    pub id: i64,
    tag: i64,
}

/// A one-second countdown with generation-based cancellation.
#[derive(Debug, Clone)]
pub struct Model {
    remaining: u64,
    /// Time between ticks. One second by default; tests and demos may
    /// shorten it.
    pub interval: Duration,
    id: i64,
    tag: i64,
    running: bool,
}

/// Creates an idle countdown displaying the given number of seconds.
///
/// The countdown does not tick until [`Model::start`] is called.
pub fn new(secs: u64) -> Model {
    new_with_interval(secs, Duration::from_secs(1))
}

/// Creates an idle countdown with a custom tick interval.
pub fn new_with_interval(secs: u64, interval: Duration) -> Model {
    Model {
        remaining: secs,
        interval,
        id: next_id(),
        tag: 0,
        running: false,
    }
}

impl Model {
    /// The unique identifier of this countdown instance.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Seconds left on the clock.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Whether the countdown is live and expecting ticks.
    pub fn running(&self) -> bool {
        self.running && !self.finished()
    }

    /// Whether the clock has run down to zero.
    pub fn finished(&self) -> bool {
        self.remaining == 0
    }

    /// Begins a fresh countdown from `secs`, invalidating any tick still
    /// in flight from a previous run.
    ///
    /// Returns the command that schedules the first tick. A zero-second
    /// countdown is already finished and returns the completion command
    /// instead, so the `00:00` frame still renders before completion is
    /// observed.
    pub fn start(&mut self, secs: u64) -> Cmd {
        self.tag += 1;
        self.remaining = secs;
        if secs == 0 {
            self.running = false;
            return self.completed();
        }
        self.running = true;
        self.tick()
    }

    /// Cancels the countdown: stops the clock, zeroes the display, and
    /// bumps the generation so a pending tick that still arrives is
    /// ignored. Safe to call when nothing is running.
    pub fn cancel(&mut self) {
        self.tag += 1;
        self.running = false;
        self.remaining = 0;
    }

    /// Whether `msg` is the completion of this countdown's live generation.
    ///
    /// A completion left over from before a [`Model::cancel`] or a restart
    /// fails this check and must be dropped by the caller.
    pub fn completes(&self, msg: &CompletedMsg) -> bool {
        msg.id == self.id && msg.tag == self.tag && self.finished()
    }

    /// Mints a tick for the current generation.
    ///
    /// The runtime normally delivers ticks through the commands returned by
    /// [`Model::start`] and [`Model::update`]; this exists so tests can
    /// drive the countdown without a runtime.
    pub fn tick_msg(&self) -> TickMsg {
        TickMsg {
            id: self.id,
            tag: self.tag,
        }
    }

    /// Mints the completion message for the current generation, for the
    /// same testing purpose as [`Model::tick_msg`].
    pub fn completed_msg(&self) -> CompletedMsg {
        CompletedMsg {
            id: self.id,
            tag: self.tag,
        }
    }

    fn tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        let interval = self.interval;

        bubbletea_tick(interval, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }

    fn completed(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;

        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(CompletedMsg { id, tag }) as Msg
        })
    }

    /// Processes a tick and schedules its successor.
    ///
    /// Ticks for another instance, for a stale generation, or arriving
    /// while the countdown is not running are rejected without touching
    /// state. An accepted tick decrements the clock and returns either the
    /// next tick command or, at zero, the completion command.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(tick_msg) = msg.downcast_ref::<TickMsg>() {
            if !self.running() || tick_msg.id != self.id {
                return None;
            }

            // A tag mismatch means the tick belongs to a generation that
            // has since been cancelled or restarted; reject it.
            if tick_msg.tag != self.tag {
                return None;
            }

            self.remaining -= 1;
            self.tag += 1;

            if self.finished() {
                self.running = false;
                return Some(self.completed());
            }
            return Some(self.tick());
        }

        None
    }

    /// Renders the remaining time as zero-padded `MM:SS`.
    ///
    /// Minutes are not wrapped at the hour: an hour-long countdown starts
    /// at `60:00`.
    pub fn view(&self) -> String {
        format!("{:02}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}
