//! Interval selection and session tallying for the Pomodoro cycle.
//!
//! A [`Schedule`] counts how many intervals have been started and derives
//! everything else from that single number: which interval comes next, how
//! many work sessions have been completed, and the `✔` tally shown under the
//! countdown.
//!
//! # Basic Usage
//!
//! ```rust
//! use tomatea::schedule::{Durations, Interval, Schedule};
//!
//! let mut schedule = Schedule::new(Durations::default());
//! assert_eq!(schedule.advance(), Interval::Work);
//! assert_eq!(schedule.advance(), Interval::ShortBreak);
//! assert_eq!(schedule.completed_sessions(), 1);
//! assert_eq!(schedule.marks(), "✔");
//! ```

/// Work interval length, in minutes, unless configured otherwise.
pub const DEFAULT_WORK_MINUTES: u64 = 25;

/// Short break length, in minutes, unless configured otherwise.
pub const DEFAULT_SHORT_BREAK_MINUTES: u64 = 5;

/// Long break length, in minutes, unless configured otherwise.
pub const DEFAULT_LONG_BREAK_MINUTES: u64 = 20;

/// Every `LONG_BREAK_EVERY`th interval is the long break. With work and
/// break intervals alternating, that is one long break per four completed
/// work sessions.
pub const LONG_BREAK_EVERY: u64 = 8;

/// The glyph appended to the tally for each completed work session.
pub const MARK: &str = "✔";

/// The kind of interval currently (or next) on the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interval {
    /// A focused work session.
    Work,
    /// The short break between work sessions.
    ShortBreak,
    /// The long break closing out a full cycle.
    LongBreak,
}

impl Interval {
    /// The label displayed above the countdown for this interval.
    pub fn label(&self) -> &'static str {
        match self {
            Interval::Work => "Work",
            Interval::ShortBreak => "Break",
            Interval::LongBreak => "Long Break",
        }
    }
}

/// Interval lengths in minutes.
///
/// These are fixed at construction time; there is no runtime override
/// surface. `Default` is the standard 25/5/20 Pomodoro split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Durations {
    /// Minutes per work session.
    pub work_minutes: u64,
    /// Minutes per short break.
    pub short_break_minutes: u64,
    /// Minutes per long break.
    pub long_break_minutes: u64,
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            work_minutes: DEFAULT_WORK_MINUTES,
            short_break_minutes: DEFAULT_SHORT_BREAK_MINUTES,
            long_break_minutes: DEFAULT_LONG_BREAK_MINUTES,
        }
    }
}

impl Durations {
    /// Length of the given interval in seconds.
    pub fn seconds_for(&self, interval: Interval) -> u64 {
        let minutes = match interval {
            Interval::Work => self.work_minutes,
            Interval::ShortBreak => self.short_break_minutes,
            Interval::LongBreak => self.long_break_minutes,
        };
        minutes * 60
    }
}

/// Tracks how many intervals have started and selects the next one.
///
/// The count is the single piece of persistent timer state: odd counts are
/// work sessions, every [`LONG_BREAK_EVERY`]th interval is the long break,
/// and the remaining even counts are short breaks. The check order matters:
/// the odd test runs first, then the long-break test, so count 8 is a long
/// break even though it is also even.
#[derive(Debug, Clone)]
pub struct Schedule {
    durations: Durations,
    started: u64,
}

impl Schedule {
    /// Creates a schedule with the given interval lengths and nothing
    /// started yet.
    pub fn new(durations: Durations) -> Self {
        Self {
            durations,
            started: 0,
        }
    }

    /// Starts the next interval: bumps the count and returns the interval
    /// kind selected for it.
    pub fn advance(&mut self) -> Interval {
        self.started += 1;
        Self::interval_for(self.started)
    }

    fn interval_for(count: u64) -> Interval {
        if count % 2 == 1 {
            Interval::Work
        } else if count % LONG_BREAK_EVERY == 0 {
            Interval::LongBreak
        } else {
            Interval::ShortBreak
        }
    }

    /// Number of intervals started so far (work and break alike).
    pub fn started(&self) -> u64 {
        self.started
    }

    /// Number of completed work sessions: one per work+break pair, i.e.
    /// the interval count halved.
    pub fn completed_sessions(&self) -> u64 {
        self.started / 2
    }

    /// The `✔` tally for the completed work sessions, rebuilt in full on
    /// every call rather than appended to.
    pub fn marks(&self) -> String {
        MARK.repeat(self.completed_sessions() as usize)
    }

    /// The configured interval lengths.
    pub fn durations(&self) -> &Durations {
        &self.durations
    }

    /// Forgets all progress, returning the count to zero.
    pub fn reset(&mut self) {
        self.started = 0;
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self::new(Durations::default())
    }
}
