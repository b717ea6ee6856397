//! Styling for the timer display.
//!
//! The palette carries the tomato theme: green for work and the session
//! tally, pink for short breaks, red for long breaks and the banner.

use crate::schedule::Interval;
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Short-break label color.
pub const PINK: &str = "#e2979c";
/// Long-break label and banner color.
pub const RED: &str = "#e7305b";
/// Idle/work label and tally color.
pub const GREEN: &str = "#9bdeac";

/// The set of styles used by the timer view.
#[derive(Debug, Clone)]
pub struct Styles {
    /// The decorative banner art.
    pub banner: Style,
    /// The idle `TIMER` label.
    pub idle_label: Style,
    /// The `Work` label.
    pub work_label: Style,
    /// The `Break` label.
    pub short_break_label: Style,
    /// The `Long Break` label.
    pub long_break_label: Style,
    /// The `MM:SS` countdown readout.
    pub time: Style,
    /// The `✔` session tally.
    pub marks: Style,
    /// Help-line key column.
    pub help_key: Style,
    /// Help-line description column.
    pub help_desc: Style,
    /// Help-line separator between entries.
    pub help_separator: Style,
}

impl Default for Styles {
    fn default() -> Self {
        use lipgloss::AdaptiveColor;

        let help_key = Style::new().foreground(AdaptiveColor {
            Light: "#909090",
            Dark: "#626262",
        });
        let help_desc = Style::new().foreground(AdaptiveColor {
            Light: "#B2B2B2",
            Dark: "#4A4A4A",
        });
        let help_separator = Style::new().foreground(AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        });

        Self {
            banner: Style::new().foreground(lipgloss::Color::from(RED)),
            idle_label: Style::new()
                .foreground(lipgloss::Color::from(GREEN))
                .bold(true),
            work_label: Style::new()
                .foreground(lipgloss::Color::from(GREEN))
                .bold(true),
            short_break_label: Style::new()
                .foreground(lipgloss::Color::from(PINK))
                .bold(true),
            long_break_label: Style::new()
                .foreground(lipgloss::Color::from(RED))
                .bold(true),
            time: Style::new().bold(true),
            marks: Style::new().foreground(lipgloss::Color::from(GREEN)),
            help_key,
            help_desc,
            help_separator,
        }
    }
}

impl Styles {
    /// The label style for a running interval.
    pub fn label_for(&self, interval: Interval) -> &Style {
        match interval {
            Interval::Work => &self.work_label,
            Interval::ShortBreak => &self.short_break_label,
            Interval::LongBreak => &self.long_break_label,
        }
    }
}
