//! Content error types.
//!
//! These errors describe station content that violates the task model's
//! hard limits. They are raised while loading content, never while a
//! station is running.

use thiserror::Error;

use crate::model::{MAX_ANSWERS, MAX_OPTIONS};

/// Errors that make a piece of station content unusable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    /// A quiz task lists more options than the model allows.
    #[error("task {task}: {count} options given, at most {MAX_OPTIONS} allowed")]
    TooManyOptions { task: usize, count: usize },

    /// A quiz task has no options at all.
    #[error("task {task}: quiz has no options")]
    NoOptions { task: usize },

    /// The correct option of a quiz points outside its option list.
    #[error("task {task}: correct option {correct} is outside 1..={count}")]
    CorrectOutOfRange {
        task: usize,
        correct: usize,
        count: usize,
    },

    /// A free-answer task lists more acceptable answers than allowed.
    #[error("task {task}: {count} answers given, at most {MAX_ANSWERS} allowed")]
    TooManyAnswers { task: usize, count: usize },

    /// A free-answer task has nothing that could ever be accepted.
    #[error("task {task}: free answer has no acceptable answers")]
    NoAnswers { task: usize },

    /// A task carries fields of the other task kind.
    #[error("task {task}: {field} is not valid for a {kind} task")]
    MisplacedField {
        task: usize,
        field: &'static str,
        kind: &'static str,
    },

    /// A content file defines both tasks and narrative scenes.
    #[error("station {station}: content defines both tasks and scenes")]
    MixedContent { station: u8 },
}
