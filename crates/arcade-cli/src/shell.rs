//! The interactive command shell.
//!
//! Reads a line, splits it into a command and an optional argument, and
//! dispatches through a fixed command table. The shell owns the session
//! state and hands it to each handler explicitly.

use arcade_core::traits::Console;
use arcade_stations::StationRegistry;

use crate::commands;
use crate::config::ArcadeConfig;
use crate::session::GameState;

/// The closed set of shell commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Help,
    Map,
    Play,
    Score,
    Quit,
}

/// A row of the command table.
#[derive(Debug, Clone, Copy)]
pub struct Command {
    pub name: &'static str,
    pub kind: CommandKind,
    pub description: &'static str,
}

/// Commands in the order `help` lists them.
pub const COMMANDS: &[Command] = &[
    Command {
        name: "help",
        kind: CommandKind::Help,
        description: "List commands and usage",
    },
    Command {
        name: "map",
        kind: CommandKind::Map,
        description: "Show stations 02..15 with progress",
    },
    Command {
        name: "play",
        kind: CommandKind::Play,
        description: "Start a station: play <02..15|keyword>",
    },
    Command {
        name: "score",
        kind: CommandKind::Score,
        description: "Show totals",
    },
    Command {
        name: "quit",
        kind: CommandKind::Quit,
        description: "Exit program",
    },
];

/// Look up a command by its (already lowercased) name.
pub fn find_command(name: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|c| c.name == name)
}

/// Split a line on the first whitespace run into a lowercased command and
/// an optional trimmed argument. Blank lines yield `None`.
pub fn split_command(line: &str) -> Option<(String, Option<&str>)> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (command, rest) = match line.find(char::is_whitespace) {
        Some(at) => (&line[..at], Some(line[at..].trim_start())),
        None => (line, None),
    };
    Some((command.to_lowercase(), rest.filter(|r| !r.is_empty())))
}

/// Process-wide shell: console, registry, session, and the quit flag.
pub struct Shell<'c> {
    pub(crate) console: &'c mut dyn Console,
    pub(crate) registry: StationRegistry,
    pub(crate) state: GameState,
    pub(crate) config: ArcadeConfig,
    should_quit: bool,
}

impl<'c> Shell<'c> {
    pub fn new(
        console: &'c mut dyn Console,
        registry: StationRegistry,
        config: ArcadeConfig,
    ) -> Self {
        tracing::debug!("shell init complete");
        Self {
            console,
            registry,
            state: GameState::new(),
            config,
            should_quit: false,
        }
    }

    /// Read and dispatch lines until `quit` or end of input.
    pub fn run(&mut self) {
        self.console.say("Welcome to C Arcade — type 'help' to begin.");

        while !self.should_quit() {
            self.prompt();
            let Some(line) = self.console.read_line() else {
                self.console.blank();
                self.console.say("EOF");
                break;
            };
            self.handle_line(&line);
        }

        tracing::debug!(
            total = self.state.recompute_total(),
            attempted = self.state.stations_attempted(),
            "shell teardown complete"
        );
    }

    /// Dispatch one input line.
    pub fn handle_line(&mut self, line: &str) {
        let Some((name, arg)) = split_command(line) else {
            return;
        };

        let Some(command) = find_command(&name) else {
            tracing::debug!(command = %name, "unknown command");
            self.console.say("unknown command. try 'help'");
            return;
        };

        tracing::debug!(command = command.name, ?arg, "dispatching");
        match command.kind {
            CommandKind::Help => commands::help::execute(self),
            CommandKind::Map => commands::map::execute(self),
            CommandKind::Play => commands::play::execute(self, arg),
            CommandKind::Score => commands::score::execute(self),
            CommandKind::Quit => commands::quit::execute(self),
        }
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[cfg(test)]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    fn prompt(&mut self) {
        let total = self.state.recompute_total();
        let text = format!("{} ({total} pts) > ", self.config.prompt_label);
        self.console.prompt(&text);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use arcade_core::console::IoConsole;
    use arcade_core::model::Task;
    use arcade_stations::catalog::CATALOG;
    use arcade_stations::{StationEntry, TaskLauncher};

    /// Every station empty except 09, which has a quiz and a free answer.
    pub(crate) fn test_registry() -> StationRegistry {
        let entries = CATALOG
            .iter()
            .map(|row| {
                let tasks = if row.id == 9 {
                    vec![
                        Task::quiz("What does *p yield?", &["Address", "Value"], 1)
                            .with_why("Dereference reads the pointee."),
                        Task::free_answer("Address-of operator?", &["&"])
                            .with_hint("Also bitwise AND."),
                    ]
                } else {
                    vec![]
                };
                StationEntry::new(
                    row.id,
                    row.keyword,
                    row.title,
                    Box::new(TaskLauncher::new(tasks)),
                )
            })
            .collect();
        StationRegistry::new(entries).unwrap()
    }

    /// Run a whole shell session over `script`; return final state and output.
    pub(crate) fn session(script: &str) -> (GameState, bool, String) {
        let mut console = IoConsole::scripted(script);
        let (state, quit) = {
            let mut shell = Shell::new(&mut console, test_registry(), ArcadeConfig::default());
            shell.run();
            (shell.state().clone(), shell.should_quit())
        };
        (state, quit, console.output())
    }

    #[test]
    fn split_command_forms() {
        assert_eq!(split_command(""), None);
        assert_eq!(split_command("   \t "), None);
        assert_eq!(split_command("HELP"), Some(("help".into(), None)));
        assert_eq!(
            split_command("  play   PoInTeRs  "),
            Some(("play".into(), Some("PoInTeRs")))
        );
        assert_eq!(
            split_command("play\t02 --test"),
            Some(("play".into(), Some("02 --test")))
        );
    }

    #[test]
    fn command_table_names_are_unique_and_lowercase() {
        for (i, command) in COMMANDS.iter().enumerate() {
            assert_eq!(command.name, command.name.to_lowercase());
            assert!(COMMANDS[i + 1..].iter().all(|c| c.name != command.name));
        }
        assert_eq!(find_command("score").unwrap().kind, CommandKind::Score);
        assert!(find_command("Score").is_none());
    }

    #[test]
    fn blank_and_unknown_lines_keep_the_loop_alive() {
        let (_, quit, output) = session("\n   \nfly\nquit\n");
        assert!(quit);
        assert_eq!(output.matches("unknown command. try 'help'").count(), 1);
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn commands_are_case_insensitive() {
        let (_, _, output) = session("HeLp\nQUIT\n");
        assert!(output.contains("Commands:"));
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn quit_stops_reading() {
        let (_, _, output) = session("quit\nscore\n");
        assert!(!output.contains("Score:"));
        assert!(!output.contains("EOF"));
    }

    #[test]
    fn eof_ends_the_session() {
        let (_, quit, output) = session("help\n");
        assert!(!quit);
        assert!(output.ends_with("EOF\n"));
    }

    #[test]
    fn prompt_shows_recomputed_total() {
        let (_, _, output) = session("play 9\n2\nhint\n&\nquit\n");
        assert!(output.contains("c-arcade (0 pts) > "));
        assert!(output.contains("c-arcade (3 pts) > "));
    }
}
