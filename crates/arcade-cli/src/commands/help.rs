//! The `help` command.

use arcade_stations::{FIRST_STATION, LAST_STATION};

use crate::shell::{Shell, COMMANDS};

pub fn execute(shell: &mut Shell<'_>) {
    shell.console.say("Commands:");
    for command in COMMANDS {
        shell
            .console
            .say(&format!("  {:<6} {}", command.name, command.description));
    }
    shell.console.say(&format!(
        "Stations: {FIRST_STATION:02}..{LAST_STATION:02} (try: play 09  or  play pointers)"
    ));
}
