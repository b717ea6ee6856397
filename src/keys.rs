//! Key bindings for the timer commands.

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key chord: a key code plus the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code to match.
    pub code: KeyCode,
    /// Modifiers that must be active for the chord to match.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

/// A command binding: the chords that trigger it and its help text.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help_key: String,
    help_desc: String,
}

impl Binding {
    /// Creates a binding for the given chords.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help_key: String::new(),
            help_desc: String::new(),
        }
    }

    /// Attaches the `key`/`description` pair shown in the help line.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help_key = key.into();
        self.help_desc = desc.into();
        self
    }

    /// Whether the incoming key event triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.keys
            .iter()
            .any(|press| press.code == msg.key && press.modifiers == msg.modifiers)
    }

    /// The help-line key column, e.g. `"s"`.
    pub fn help_key(&self) -> &str {
        &self.help_key
    }

    /// The help-line description column, e.g. `"start"`.
    pub fn help_desc(&self) -> &str {
        &self.help_desc
    }
}

/// The application's key map.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Begin the next interval.
    pub start: Binding,
    /// Cancel the countdown and clear all progress.
    pub reset: Binding,
    /// Quit.
    pub quit: Binding,
    /// Force quit.
    pub force_quit: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            start: Binding::new(vec![KeyCode::Char('s'), KeyCode::Char(' ')])
                .with_help("s", "start"),
            reset: Binding::new(vec![KeyCode::Char('r')]).with_help("r", "reset"),
            quit: Binding::new(vec![KeyCode::Char('q'), KeyCode::Esc]).with_help("q", "quit"),
            force_quit: Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)])
                .with_help("ctrl+c", "force quit"),
        }
    }
}

impl KeyMap {
    /// Bindings shown in the one-line help footer, in display order.
    pub fn short_help(&self) -> Vec<&Binding> {
        vec![&self.start, &self.reset, &self.quit]
    }
}
