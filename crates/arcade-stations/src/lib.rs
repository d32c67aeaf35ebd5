//! arcade-stations — the station catalog and its launchers.
//!
//! Implements the `Launcher` trait for task and story stations, embeds the
//! built-in content, and builds the immutable registry the shell plays from.

pub mod catalog;
pub mod error;
pub mod launcher;
pub mod registry;

pub use catalog::{FIRST_STATION, LAST_STATION, STATION_COUNT};
pub use error::RegistryError;
pub use launcher::{create_launcher, StoryLauncher, TaskLauncher};
pub use registry::{StationEntry, StationRegistry};
