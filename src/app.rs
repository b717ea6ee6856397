//! The timer application: command handling, phase machine, and the
//! composed view.
//!
//! The model owns all mutable timer state (the [`Schedule`], the
//! [`countdown`] engine, the current phase, and the rendered `✔` tally)
//! and is driven entirely by messages: key events for the Start/Reset/Quit
//! commands, tick messages forwarded to the countdown, and the countdown's
//! completion message, which rolls the schedule forward and starts the next
//! interval's clock.
//!
//! # Integration
//!
//! ```rust,no_run
//! use bubbletea_rs::Program;
//! use tomatea::app::Model;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let program = Program::<Model>::builder().alt_screen(true).build()?;
//! program.run().await?;
//! # Ok(())
//! # }
//! ```

use crate::banner;
use crate::countdown;
use crate::keys::KeyMap;
use crate::schedule::{Durations, Interval, Schedule};
use crate::style::Styles;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};

/// Label shown while no interval is on the clock.
pub const IDLE_LABEL: &str = "TIMER";

/// What the controller is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for Start; the display shows `TIMER` over `00:00`.
    Idle,
    /// An interval's countdown is on the clock.
    Running(Interval),
}

/// The application model.
#[derive(Debug, Clone)]
pub struct Model {
    schedule: Schedule,
    countdown: countdown::Model,
    phase: Phase,
    marks: String,
    styles: Styles,
    keymap: KeyMap,
    banner: String,
}

impl Model {
    /// Creates an idle timer with the given interval lengths and whatever
    /// banner art has been installed for the process.
    pub fn new(durations: Durations) -> Self {
        Self::with_banner(durations, banner::get().unwrap_or_default().to_string())
    }

    /// Creates an idle timer with explicit banner art.
    pub fn with_banner(durations: Durations, banner: String) -> Self {
        Self {
            schedule: Schedule::new(durations),
            countdown: countdown::new(0),
            phase: Phase::Idle,
            marks: String::new(),
            styles: Styles::default(),
            keymap: KeyMap::default(),
            banner,
        }
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The label currently shown above the countdown.
    pub fn label(&self) -> &'static str {
        match self.phase {
            Phase::Idle => IDLE_LABEL,
            Phase::Running(interval) => interval.label(),
        }
    }

    /// The `MM:SS` readout currently shown.
    pub fn time(&self) -> String {
        self.countdown.view()
    }

    /// The `✔` tally currently shown.
    pub fn marks(&self) -> &str {
        &self.marks
    }

    /// Handles the Start command. Ignored while a countdown is running:
    /// exactly one tick chain is live at a time.
    fn start_pressed(&mut self) -> Option<Cmd> {
        if matches!(self.phase, Phase::Running(_)) {
            return None;
        }
        Some(self.next_interval())
    }

    /// Handles the Reset command: cancels any pending tick, clears the
    /// schedule and tally, and returns the display to `TIMER` / `00:00`.
    /// Valid in any phase, including twice in a row.
    fn reset_pressed(&mut self) {
        self.countdown.cancel();
        self.schedule.reset();
        self.marks.clear();
        self.phase = Phase::Idle;
    }

    /// Rolls the schedule to its next interval, refreshes the tally from
    /// the new count, and starts the countdown for the selected duration.
    fn next_interval(&mut self) -> Cmd {
        let interval = self.schedule.advance();
        self.phase = Phase::Running(interval);
        self.marks = self.schedule.marks();
        self.countdown
            .start(self.schedule.durations().seconds_for(interval))
    }

    /// Processes one message; see the module docs for the message flow.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.keymap.force_quit.matches(key_msg) || self.keymap.quit.matches(key_msg) {
                return Some(bubbletea_rs::quit());
            }
            if self.keymap.start.matches(key_msg) {
                return self.start_pressed();
            }
            if self.keymap.reset.matches(key_msg) {
                self.reset_pressed();
            }
            return None;
        }

        if let Some(done) = msg.downcast_ref::<countdown::CompletedMsg>() {
            // A completion left over from a cancelled or restarted
            // countdown fails the generation check and is dropped.
            if matches!(self.phase, Phase::Running(_)) && self.countdown.completes(done) {
                return Some(self.next_interval());
            }
            return None;
        }

        self.countdown.update(msg)
    }

    /// Renders banner, interval label, `MM:SS` readout, tally, and the
    /// help footer.
    pub fn view(&self) -> String {
        let mut sections = Vec::new();
        if !self.banner.is_empty() {
            sections.push(self.styles.banner.render(&self.banner));
        }

        let label = match self.phase {
            Phase::Idle => self.styles.idle_label.render(IDLE_LABEL),
            Phase::Running(interval) => {
                self.styles.label_for(interval).render(interval.label())
            }
        };
        sections.push(label);
        sections.push(self.styles.time.render(&self.countdown.view()));
        sections.push(self.styles.marks.render(&self.marks));
        sections.push(String::new());
        sections.push(self.help_view());

        sections.join("\n")
    }

    fn help_view(&self) -> String {
        let separator = self.styles.help_separator.render(" • ");
        let entries: Vec<String> = self
            .keymap
            .short_help()
            .iter()
            .map(|binding| {
                format!(
                    "{} {}",
                    self.styles.help_key.render(binding.help_key()),
                    self.styles.help_desc.render(binding.help_desc()),
                )
            })
            .collect();
        entries.join(&separator)
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        // The timer waits in Idle for the Start command; nothing is
        // scheduled up front.
        (Self::new(Durations::default()), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    const MINUTE_EACH: Durations = Durations {
        work_minutes: 1,
        short_break_minutes: 1,
        long_break_minutes: 1,
    };

    fn model() -> Model {
        Model::with_banner(MINUTE_EACH, String::new())
    }

    fn press(model: &mut Model, code: KeyCode) -> Option<Cmd> {
        model.update(Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }) as Msg)
    }

    fn run_ticks(model: &mut Model, n: u64) {
        for _ in 0..n {
            let msg = Box::new(model.countdown.tick_msg()) as Msg;
            assert!(model.update(msg).is_some(), "tick was rejected");
        }
    }

    fn deliver_completion(model: &mut Model) -> Option<Cmd> {
        let msg = Box::new(model.countdown.completed_msg()) as Msg;
        model.update(msg)
    }

    /// Runs one full interval: every countdown tick plus the completion
    /// message that hands control to the next interval.
    fn finish_interval(model: &mut Model) {
        let remaining = model.countdown.remaining();
        run_ticks(model, remaining);
        assert!(deliver_completion(model).is_some());
    }

    #[test]
    fn test_initial_state_is_idle() {
        let model = model();
        assert_eq!(model.phase(), Phase::Idle);
        assert_eq!(model.label(), "TIMER");
        assert_eq!(model.time(), "00:00");
        assert_eq!(model.marks(), "");
    }

    #[test]
    fn test_start_begins_a_work_interval() {
        let mut model = model();
        assert!(press(&mut model, KeyCode::Char('s')).is_some());
        assert_eq!(model.phase(), Phase::Running(Interval::Work));
        assert_eq!(model.label(), "Work");
        assert_eq!(model.time(), "01:00");
        assert_eq!(model.marks(), "");
    }

    #[test]
    fn test_work_interval_rolls_into_break_with_one_mark() {
        // With one-minute intervals, 60 ticks land on 00:00 and the 61st
        // message is the completion that starts the break.
        let mut model = model();
        press(&mut model, KeyCode::Char('s'));

        run_ticks(&mut model, 60);
        assert_eq!(model.time(), "00:00");
        assert_eq!(model.label(), "Work");

        assert!(deliver_completion(&mut model).is_some());
        assert_eq!(model.label(), "Break");
        assert_eq!(model.phase(), Phase::Running(Interval::ShortBreak));
        assert_eq!(model.marks(), "✔");
        assert_eq!(model.time(), "01:00");
    }

    #[test]
    fn test_eighth_interval_is_the_long_break() {
        let mut model = model();
        press(&mut model, KeyCode::Char('s'));
        for _ in 0..7 {
            finish_interval(&mut model);
        }

        assert_eq!(model.phase(), Phase::Running(Interval::LongBreak));
        assert_eq!(model.label(), "Long Break");
        assert_eq!(model.marks(), "✔✔✔✔");

        // The cycle continues past the long break with the tally intact.
        finish_interval(&mut model);
        assert_eq!(model.label(), "Work");
        assert_eq!(model.marks(), "✔✔✔✔");
    }

    #[test]
    fn test_start_is_ignored_while_running() {
        let mut model = model();
        press(&mut model, KeyCode::Char('s'));
        run_ticks(&mut model, 5);

        assert!(press(&mut model, KeyCode::Char('s')).is_none());
        assert_eq!(model.time(), "00:55");
        assert_eq!(model.phase(), Phase::Running(Interval::Work));

        // Only one chain exists: finishing it yields the first break, not
        // some interleaving of two counters.
        run_ticks(&mut model, 55);
        assert!(deliver_completion(&mut model).is_some());
        assert_eq!(model.label(), "Break");
        assert_eq!(model.marks(), "✔");
    }

    #[test]
    fn test_reset_mid_countdown_restores_idle_and_kills_the_chain() {
        let mut model = model();
        press(&mut model, KeyCode::Char('s'));
        run_ticks(&mut model, 30);
        assert_eq!(model.time(), "00:30");

        // This tick is already "scheduled" when Reset arrives.
        let stale = Box::new(model.countdown.tick_msg()) as Msg;

        press(&mut model, KeyCode::Char('r'));
        assert_eq!(model.phase(), Phase::Idle);
        assert_eq!(model.label(), "TIMER");
        assert_eq!(model.time(), "00:00");
        assert_eq!(model.marks(), "");

        // The stale tick arrives anyway and must change nothing.
        assert!(model.update(stale).is_none());
        assert_eq!(model.time(), "00:00");
        assert_eq!(model.phase(), Phase::Idle);
    }

    #[test]
    fn test_stale_completion_after_reset_is_dropped() {
        let mut model = model();
        press(&mut model, KeyCode::Char('s'));
        run_ticks(&mut model, 60);

        // The completion is pending; Reset beats it to the model.
        let stale = Box::new(model.countdown.completed_msg()) as Msg;
        press(&mut model, KeyCode::Char('r'));

        assert!(model.update(stale).is_none());
        assert_eq!(model.phase(), Phase::Idle);
        assert_eq!(model.marks(), "");
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut model = model();
        press(&mut model, KeyCode::Char('s'));
        run_ticks(&mut model, 10);

        press(&mut model, KeyCode::Char('r'));
        let after_once = (model.phase(), model.time(), model.marks().to_string());
        press(&mut model, KeyCode::Char('r'));
        let after_twice = (model.phase(), model.time(), model.marks().to_string());
        assert_eq!(after_once, after_twice);
    }

    #[test]
    fn test_reset_then_start_begins_a_fresh_cycle() {
        let mut model = model();
        press(&mut model, KeyCode::Char('s'));
        finish_interval(&mut model);
        finish_interval(&mut model);
        assert_eq!(model.label(), "Work");
        assert_eq!(model.marks(), "✔");

        press(&mut model, KeyCode::Char('r'));
        assert!(press(&mut model, KeyCode::Char('s')).is_some());
        assert_eq!(model.phase(), Phase::Running(Interval::Work));
        assert_eq!(model.time(), "01:00");
        assert_eq!(model.marks(), "");
    }

    #[test]
    fn test_quit_keys_produce_a_command() {
        let mut model = model();
        assert!(press(&mut model, KeyCode::Char('q')).is_some());
        assert!(press(&mut model, KeyCode::Esc).is_some());

        let ctrl_c = Box::new(KeyMsg {
            key: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        }) as Msg;
        assert!(model.update(ctrl_c).is_some());
    }

    #[test]
    fn test_unbound_keys_do_nothing() {
        let mut model = model();
        press(&mut model, KeyCode::Char('s'));
        assert!(press(&mut model, KeyCode::Char('x')).is_none());
        assert_eq!(model.time(), "01:00");
        assert_eq!(model.phase(), Phase::Running(Interval::Work));
    }

    #[test]
    fn test_view_contains_all_display_rows() {
        let mut model = Model::with_banner(MINUTE_EACH, "(tomato)".to_string());
        let view = model.view();
        assert!(view.contains("(tomato)"));
        assert!(view.contains("TIMER"));
        assert!(view.contains("00:00"));
        assert!(view.contains("start"));
        assert!(view.contains("reset"));
        assert!(view.contains("quit"));

        press(&mut model, KeyCode::Char('s'));
        finish_interval(&mut model);
        let view = model.view();
        assert!(view.contains("Break"));
        assert!(view.contains("✔"));
        assert!(view.contains("01:00"));
    }
}
