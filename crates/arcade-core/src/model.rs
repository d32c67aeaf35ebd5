//! Core data model types for c-arcade.
//!
//! Tasks and scenes are immutable content. The engine only reads them; the
//! station registry owns them for the lifetime of the process.

use std::fmt;

/// Maximum number of options a quiz task may list.
pub const MAX_OPTIONS: usize = 5;

/// Maximum number of acceptable answers a free-answer task may list.
pub const MAX_ANSWERS: usize = 5;

/// Explanation printed when a task has none configured.
pub const PLACEHOLDER_WHY: &str = "WHY: We'll add an explanation soon.";

/// One question unit of a station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Question text shown once when the task starts.
    pub prompt: String,
    /// How answers are checked.
    pub kind: TaskKind,
    /// Shown on `hint`.
    pub hint: Option<String>,
    /// Shown after a correct answer or a skip.
    pub why: Option<String>,
}

/// The two ways a task checks answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    /// Multiple choice. `correct` is a zero-based index into `options`.
    Quiz {
        options: Vec<String>,
        correct: usize,
    },
    /// Free text, matched case-insensitively against any of `answers`.
    FreeAnswer { answers: Vec<String> },
}

impl TaskKind {
    pub fn label(&self) -> &'static str {
        match self {
            TaskKind::Quiz { .. } => "quiz",
            TaskKind::FreeAnswer { .. } => "free_answer",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Task {
    /// A multiple-choice task. `correct` is zero-based.
    pub fn quiz<S: Into<String>>(prompt: S, options: &[&str], correct: usize) -> Self {
        Self {
            prompt: prompt.into(),
            kind: TaskKind::Quiz {
                options: options.iter().map(|o| (*o).to_string()).collect(),
                correct,
            },
            hint: None,
            why: None,
        }
    }

    /// A free-text task accepting any of `answers`.
    pub fn free_answer<S: Into<String>>(prompt: S, answers: &[&str]) -> Self {
        Self {
            prompt: prompt.into(),
            kind: TaskKind::FreeAnswer {
                answers: answers.iter().map(|a| (*a).to_string()).collect(),
            },
            hint: None,
            why: None,
        }
    }

    pub fn with_hint<S: Into<String>>(mut self, hint: S) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_why<S: Into<String>>(mut self, why: S) -> Self {
        self.why = Some(why.into());
        self
    }

    /// The hint, if one is configured and non-empty.
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref().filter(|h| !h.is_empty())
    }

    /// The explanation, falling back to a placeholder.
    pub fn why_or_placeholder(&self) -> &str {
        self.why
            .as_deref()
            .filter(|w| !w.is_empty())
            .unwrap_or(PLACEHOLDER_WHY)
    }

    /// Number of quiz options (zero for free-answer tasks).
    pub fn option_count(&self) -> usize {
        match &self.kind {
            TaskKind::Quiz { options, .. } => options.len(),
            TaskKind::FreeAnswer { .. } => 0,
        }
    }
}

/// One narrative unit of a story station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    pub title: String,
    pub narrative: Vec<String>,
    pub prompt: String,
    pub explain: String,
}

/// Everything a station can run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StationContent {
    /// An ordered list of question tasks run by the task engine.
    Tasks(Vec<Task>),
    /// An ordered list of narrative scenes.
    Story(Vec<Scene>),
}

impl StationContent {
    pub fn is_empty(&self) -> bool {
        match self {
            StationContent::Tasks(tasks) => tasks.is_empty(),
            StationContent::Story(scenes) => scenes.is_empty(),
        }
    }

    /// Number of tasks or scenes.
    pub fn len(&self) -> usize {
        match self {
            StationContent::Tasks(tasks) => tasks.len(),
            StationContent::Story(scenes) => scenes.len(),
        }
    }
}
