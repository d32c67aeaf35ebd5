//! Task engine.
//!
//! Runs a station's ordered task list through the per-task attempt loop and
//! returns a [`StationResult`]. The engine knows nothing about the registry
//! or session state: it receives tasks and a console, and hands back a
//! summary. Aborts travel back up as return values.

use crate::model::{Task, TaskKind};
use crate::results::{AbortReason, Credit, StationResult, TaskOutcome};
use crate::traits::Console;

const USAGE_REMINDER: &str = "Please enter a response or type 'hint', 'skip', or 'exit'.";
const INVALID_CHOICE: &str = "Please choose one of the listed options or enter a command.";
const TRY_AGAIN: &str = "Not quite. Try again, or type 'hint', 'skip', or 'exit'.";

/// Commands recognized inside a task before answer evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaCommand {
    Hint,
    Why,
    Skip,
    Exit,
}

impl MetaCommand {
    /// Recognize a meta-command in normalized input.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "hint" => Some(MetaCommand::Hint),
            "why" => Some(MetaCommand::Why),
            "skip" => Some(MetaCommand::Skip),
            "exit" => Some(MetaCommand::Exit),
            _ => None,
        }
    }
}

/// What an answer attempt amounts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
    /// Not a recognizable quiz response. Never consumes an attempt.
    Invalid,
}

/// How a single task ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskExit {
    Answered(Credit),
    Skipped,
    Aborted(AbortReason),
}

/// Strip the line terminator, trim whitespace, and lowercase.
pub fn normalize_input(raw: &str) -> String {
    raw.trim_end_matches(['\n', '\r']).trim().to_lowercase()
}

fn equals_ignore_case(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// Judge an answer against a task.
///
/// Quiz responses are a 1-based option number or the exact text of an
/// option; anything else is [`Verdict::Invalid`]. Free answers are matched
/// exactly, ignoring case, against every acceptable answer.
pub fn evaluate(task: &Task, input: &str) -> Verdict {
    let input = input.trim();
    match &task.kind {
        TaskKind::Quiz { options, correct } => {
            let count = task.option_count();
            if count == 0 {
                return Verdict::Invalid;
            }
            let selected = if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
                match input.parse::<usize>() {
                    Ok(n) if (1..=count).contains(&n) => Some(n - 1),
                    _ => None,
                }
            } else {
                options.iter().position(|o| equals_ignore_case(o, input))
            };
            match selected {
                Some(index) if index == *correct => Verdict::Correct,
                Some(_) => Verdict::Incorrect,
                None => Verdict::Invalid,
            }
        }
        TaskKind::FreeAnswer { answers } => {
            if answers.iter().any(|a| equals_ignore_case(a, input)) {
                Verdict::Correct
            } else {
                Verdict::Incorrect
            }
        }
    }
}

/// Run every task of a station in order.
///
/// An empty task list yields a zeroed result and a notice. A task counts
/// toward `total_tasks` unless the station was aborted during it; once
/// aborted, no further task starts.
pub fn run_station(console: &mut dyn Console, station_id: u8, tasks: &[Task]) -> StationResult {
    let mut result = StationResult::new(station_id);

    if tasks.is_empty() {
        console.say("No tasks configured for this station yet.");
        return result;
    }

    tracing::debug!(station_id, tasks = tasks.len(), "station run started");

    for (i, task) in tasks.iter().enumerate() {
        console.blank();
        console.say(&format!("Task {}/{}", i + 1, tasks.len()));

        match run_task(console, task, &mut result).0 {
            TaskExit::Aborted(reason) => {
                result.aborted = Some(reason);
                break;
            }
            TaskExit::Answered(_) | TaskExit::Skipped => result.total_tasks += 1,
        }
    }

    print_summary(console, &result);
    tracing::debug!(
        station_id,
        handled = result.total_tasks,
        points = result.total_points,
        aborted = ?result.aborted,
        "station run finished"
    );
    result
}

fn print_summary(console: &mut dyn Console, result: &StationResult) {
    console.blank();
    console.say(&format!("Station {:02} Summary:", result.station_id));
    console.say(&format!(
        "Tasks: {} | Correct: {} | With Hint: {} | Points: {}/{}",
        result.total_tasks,
        result.total_correct(),
        result.correct_with_hint,
        result.total_points,
        result.max_points(),
    ));
    if result.aborted.is_some() {
        console.say("Station exited early; progress saved.");
    }
}

/// Run one task's attempt loop, crediting `result` on a correct answer.
///
/// Returns how the task ended together with its finished bookkeeping.
pub fn run_task(
    console: &mut dyn Console,
    task: &Task,
    result: &mut StationResult,
) -> (TaskExit, TaskOutcome) {
    let mut outcome = TaskOutcome::default();
    let exit = attempt_loop(console, task, result, &mut outcome);
    tracing::trace!(kind = %task.kind, ?outcome, ?exit, "task finished");
    (exit, outcome)
}

fn finish(outcome: &mut TaskOutcome, exit: TaskExit) -> TaskExit {
    outcome.finished = true;
    exit
}

fn attempt_loop(
    console: &mut dyn Console,
    task: &Task,
    result: &mut StationResult,
    outcome: &mut TaskOutcome,
) -> TaskExit {
    let mut needs_redisplay = true;

    loop {
        if needs_redisplay {
            show_task(console, task);
            needs_redisplay = false;
        }

        console.prompt("> ");
        let Some(raw) = console.read_line() else {
            console.say("Input closed. Exiting station...");
            return finish(outcome, TaskExit::Aborted(AbortReason::InputClosed));
        };
        let input = normalize_input(&raw);

        if input.is_empty() {
            console.say(USAGE_REMINDER);
            continue;
        }

        if let Some(command) = MetaCommand::parse(&input) {
            match command {
                MetaCommand::Hint => match task.hint() {
                    Some(hint) => {
                        console.say(hint);
                        outcome.hint_used = true;
                    }
                    None => console.say("No hint available for this task."),
                },
                MetaCommand::Why => console.say("Answer or skip first, then I'll explain why."),
                MetaCommand::Skip => {
                    console.say("Task skipped.");
                    console.say(task.why_or_placeholder());
                    return finish(outcome, TaskExit::Skipped);
                }
                MetaCommand::Exit => {
                    console.say("Exiting station...");
                    return finish(outcome, TaskExit::Aborted(AbortReason::Exit));
                }
            }
            continue;
        }

        let verdict = evaluate(task, &input);
        if verdict == Verdict::Invalid {
            console.say(INVALID_CHOICE);
            continue;
        }

        outcome.attempts += 1;

        if verdict == Verdict::Correct {
            let credit = outcome.credit();
            result.record(credit);
            match credit {
                Credit::FirstTry => console.say("Correct!"),
                Credit::Assisted => console.say("Correct (partial credit)."),
            }
            console.say(task.why_or_placeholder());
            return finish(outcome, TaskExit::Answered(credit));
        }

        console.say(TRY_AGAIN);

        if let TaskKind::FreeAnswer { answers } = &task.kind {
            if outcome.attempts >= 2 && !outcome.answers_revealed {
                if !answers.is_empty() {
                    console.say(&format!("Expected answers include: {}", answers.join(", ")));
                }
                outcome.answers_revealed = true;
                outcome.hint_used = true;
            }
        }
    }
}

fn show_task(console: &mut dyn Console, task: &Task) {
    console.say(&task.prompt);
    if let TaskKind::Quiz { options, .. } = &task.kind {
        for (i, option) in options.iter().enumerate() {
            console.say(&format!("  {}) {option}", i + 1));
        }
    }
}
