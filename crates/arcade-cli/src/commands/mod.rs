//! Shell command handlers, one module per command.

pub mod help;
pub mod map;
pub mod play;
pub mod quit;
pub mod score;
