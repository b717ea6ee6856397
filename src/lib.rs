#![warn(missing_docs)]

//! # tomatea
//!
//! A Pomodoro timer for the terminal, built on
//! [bubbletea-rs](https://github.com/whit3rabbit/bubbletea-rs).
//!
//! The timer alternates fixed-length work and break intervals, renders a
//! zero-padded `MM:SS` countdown, and tallies completed work sessions with
//! `✔` glyphs. Every fourth completed work session is followed by a long
//! break instead of a short one.
//!
//! ## Architecture
//!
//! Everything follows the Elm Architecture: one model, messages, an
//! `update` that returns commands, and a string-rendering `view`.
//!
//! - [`schedule`] decides which interval comes next and keeps the session
//!   tally; pure state, no commands.
//! - [`countdown`] is the tick engine: a self-rescheduling one-second
//!   command chain with generation-tag cancellation.
//! - [`app`] wires the two to the Start/Reset/Quit key commands and
//!   composes the display.
//! - [`keys`], [`style`], and [`banner`] cover key bindings, the color
//!   palette, and the decorative art loaded at startup.
//!
//! ## Controls
//!
//! | Key | Command |
//! |-----|---------|
//! | `s` / `space` | Start the next interval |
//! | `r` | Reset: cancel the countdown, clear all progress |
//! | `q` / `esc` | Quit |
//! | `ctrl+c` | Force quit |
//!
//! ## Driving the model without a runtime
//!
//! The model is plain state driven by messages, so the whole timer can be
//! exercised in tests:
//!
//! ```rust
//! use bubbletea_rs::{KeyMsg, Msg};
//! use crossterm::event::{KeyCode, KeyModifiers};
//! use tomatea::app::Model;
//! use tomatea::schedule::Durations;
//!
//! let mut timer = Model::with_banner(Durations::default(), String::new());
//! let start = Box::new(KeyMsg {
//!     key: KeyCode::Char('s'),
//!     modifiers: KeyModifiers::NONE,
//! }) as Msg;
//! timer.update(start);
//! assert_eq!(timer.label(), "Work");
//! assert_eq!(timer.time(), "25:00");
//! ```

pub mod app;
pub mod banner;
pub mod countdown;
pub mod keys;
pub mod schedule;
pub mod style;

pub use app::{Model as App, Phase};
pub use countdown::{
    new as countdown_new, new_with_interval as countdown_new_with_interval,
    CompletedMsg as CountdownCompletedMsg, Model as Countdown, TickMsg as CountdownTickMsg,
};
pub use keys::{Binding, KeyMap, KeyPress};
pub use schedule::{Durations, Interval, Schedule};
pub use style::Styles;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::app::{Model as App, Phase};
    pub use crate::countdown::{
        new as countdown_new, new_with_interval as countdown_new_with_interval,
        CompletedMsg as CountdownCompletedMsg, Model as Countdown, TickMsg as CountdownTickMsg,
    };
    pub use crate::keys::{Binding, KeyMap, KeyPress};
    pub use crate::schedule::{Durations, Interval, Schedule};
    pub use crate::style::Styles;
}
