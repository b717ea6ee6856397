//! The decorative banner art shown above the countdown.
//!
//! The art lives in a file next to the binary rather than in the source;
//! a missing or unreadable file is a startup error, surfaced by `main`
//! before the terminal enters the alternate screen. The loaded art is
//! installed into a process-wide cell so the runtime-constructed model can
//! pick it up in `init`.

use once_cell::sync::OnceCell;
use std::fs;
use std::io;
use std::path::Path;

/// Where the banner art is looked up, relative to the working directory.
pub const DEFAULT_PATH: &str = "assets/tomato.txt";

static ART: OnceCell<String> = OnceCell::new();

/// Reads banner art from `path`.
///
/// Trailing whitespace is trimmed so the art composes cleanly with the
/// rows rendered beneath it.
pub fn load(path: impl AsRef<Path>) -> io::Result<String> {
    let art = fs::read_to_string(path)?;
    Ok(art.trim_end().to_string())
}

/// Installs the loaded art for the lifetime of the process. A second
/// install is ignored.
pub fn install(art: String) {
    let _ = ART.set(art);
}

/// The installed art, if any.
pub fn get() -> Option<&'static str> {
    ART.get().map(String::as_str)
}
