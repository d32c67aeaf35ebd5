//! arcade-core — Task engine, content model, and scoring.
//!
//! This crate defines the task and scene model, the TOML content parser,
//! the console abstraction, and the engine that runs a station's tasks
//! through the attempt loop.

pub mod console;
pub mod engine;
pub mod error;
pub mod model;
pub mod parser;
pub mod results;
pub mod scene;
pub mod traits;
