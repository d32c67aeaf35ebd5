//! Core trait definitions for the console and station launchers.
//!
//! The console is the only way the engine and the shell talk to the player.
//! Launchers are implemented by the `arcade-stations` crate.

use crate::results::StationResult;

// ---------------------------------------------------------------------------
// Console trait
// ---------------------------------------------------------------------------

/// Line-oriented player I/O.
pub trait Console {
    /// Read one line with its line terminator removed.
    ///
    /// `None` means input is closed (EOF or a read error) and will stay
    /// closed; callers treat it as an abort.
    fn read_line(&mut self) -> Option<String>;

    /// Write `text` followed by a newline.
    fn say(&mut self, text: &str);

    /// Write `text` without a newline and flush, for input prompts.
    fn prompt(&mut self, text: &str);

    /// Write an empty line.
    fn blank(&mut self) {
        self.say("");
    }
}

// ---------------------------------------------------------------------------
// Launcher trait
// ---------------------------------------------------------------------------

/// Options the shell hands to a launcher for one `play`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    /// Skip interactive waits (narrative stations only).
    pub test_mode: bool,
}

/// Something the shell can `play`.
pub trait Launcher {
    /// Run the station to completion or abort and report what happened.
    fn launch(
        &self,
        station_id: u8,
        console: &mut dyn Console,
        options: &LaunchOptions,
    ) -> StationResult;

    /// Number of runnable units (tasks or scenes); zero means no content.
    fn unit_count(&self) -> usize;
}
