//! Result types produced by a station run.

use std::fmt;

/// Points for a correct answer on the first attempt without a hint.
pub const FIRST_TRY_POINTS: u32 = 2;

/// Points for a correct answer after a hint or a wrong attempt.
pub const ASSISTED_POINTS: u32 = 1;

/// Why a station run stopped before its last task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    /// The player typed `exit`.
    Exit,
    /// Input reached EOF or failed. The whole session should end.
    InputClosed,
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbortReason::Exit => write!(f, "exit"),
            AbortReason::InputClosed => write!(f, "input closed"),
        }
    }
}

/// How a correct answer was earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credit {
    FirstTry,
    Assisted,
}

impl Credit {
    pub fn points(self) -> u32 {
        match self {
            Credit::FirstTry => FIRST_TRY_POINTS,
            Credit::Assisted => ASSISTED_POINTS,
        }
    }
}

/// Per-task bookkeeping for one attempt loop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskOutcome {
    /// Countable answer attempts so far.
    pub attempts: u32,
    /// A hint was shown (or answers were revealed) before the answer.
    pub hint_used: bool,
    /// The free-answer reveal has been printed.
    pub answers_revealed: bool,
    /// The task ended (answered, skipped, or aborted).
    pub finished: bool,
}

impl TaskOutcome {
    /// Credit a correct answer given the attempts and hints so far.
    pub fn credit(&self) -> Credit {
        if self.attempts == 1 && !self.hint_used {
            Credit::FirstTry
        } else {
            Credit::Assisted
        }
    }
}

/// Accumulated result of one station run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationResult {
    pub station_id: u8,
    /// Tasks handled without an abort, skipped ones included.
    pub total_tasks: u32,
    pub correct_first_try: u32,
    pub correct_with_hint: u32,
    pub total_points: u32,
    /// Set when the run stopped early.
    pub aborted: Option<AbortReason>,
}

impl StationResult {
    /// A zeroed result for `station_id`.
    pub fn new(station_id: u8) -> Self {
        Self {
            station_id,
            total_tasks: 0,
            correct_first_try: 0,
            correct_with_hint: 0,
            total_points: 0,
            aborted: None,
        }
    }

    pub fn record(&mut self, credit: Credit) {
        match credit {
            Credit::FirstTry => self.correct_first_try += 1,
            Credit::Assisted => self.correct_with_hint += 1,
        }
        self.total_points += credit.points();
    }

    pub fn total_correct(&self) -> u32 {
        self.correct_first_try + self.correct_with_hint
    }

    /// Points available for the tasks that were handled.
    pub fn max_points(&self) -> u32 {
        self.total_tasks * FIRST_TRY_POINTS
    }

    /// Input closed during the run; the session cannot continue.
    pub fn input_closed(&self) -> bool {
        self.aborted == Some(AbortReason::InputClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credit_requires_first_attempt_without_hint() {
        let mut outcome = TaskOutcome {
            attempts: 1,
            ..Default::default()
        };
        assert_eq!(outcome.credit(), Credit::FirstTry);

        outcome.hint_used = true;
        assert_eq!(outcome.credit(), Credit::Assisted);

        outcome.hint_used = false;
        outcome.attempts = 2;
        assert_eq!(outcome.credit(), Credit::Assisted);
    }

    #[test]
    fn record_tallies_points() {
        let mut result = StationResult::new(9);
        result.record(Credit::FirstTry);
        result.record(Credit::Assisted);
        result.total_tasks = 2;
        assert_eq!(result.total_points, 3);
        assert_eq!(result.total_correct(), 2);
        assert_eq!(result.max_points(), 4);
        assert!(!result.input_closed());
    }

    #[test]
    fn abort_reason_display() {
        assert_eq!(AbortReason::Exit.to_string(), "exit");
        assert_eq!(AbortReason::InputClosed.to_string(), "input closed");
    }
}
