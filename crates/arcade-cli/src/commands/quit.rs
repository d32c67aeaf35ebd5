//! The `quit` command.

use crate::shell::Shell;

pub fn execute(shell: &mut Shell<'_>) {
    shell.console.say("Goodbye!");
    shell.request_quit();
}
