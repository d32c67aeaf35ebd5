//! Launcher implementations and factory.

use arcade_core::engine::run_station;
use arcade_core::model::{Scene, StationContent, Task};
use arcade_core::results::StationResult;
use arcade_core::scene::run_story;
use arcade_core::traits::{Console, LaunchOptions, Launcher};

/// Environment variable that turns on test mode when set to anything not
/// starting with `0`.
pub const TEST_ENV: &str = "TEST";

/// Environment variable holding extra `play` flags, e.g. `02 --test`.
pub const PLAY_ARGS_ENV: &str = "C_ARCADE_PLAY_ARGS";

/// Runs an ordered task list through the task engine.
#[derive(Debug, Clone)]
pub struct TaskLauncher {
    tasks: Vec<Task>,
}

impl TaskLauncher {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

impl Launcher for TaskLauncher {
    fn launch(
        &self,
        station_id: u8,
        console: &mut dyn Console,
        _options: &LaunchOptions,
    ) -> StationResult {
        run_station(console, station_id, &self.tasks)
    }

    fn unit_count(&self) -> usize {
        self.tasks.len()
    }
}

/// Walks the player through narrative scenes.
///
/// Test mode comes from the launch options or the environment, so scripted
/// runs can skip every interactive wait.
#[derive(Debug, Clone)]
pub struct StoryLauncher {
    scenes: Vec<Scene>,
}

impl StoryLauncher {
    pub fn new(scenes: Vec<Scene>) -> Self {
        Self { scenes }
    }
}

impl Launcher for StoryLauncher {
    fn launch(
        &self,
        station_id: u8,
        console: &mut dyn Console,
        options: &LaunchOptions,
    ) -> StationResult {
        let test_mode = options.test_mode || env_test_mode();
        run_story(console, station_id, &self.scenes, test_mode)
    }

    fn unit_count(&self) -> usize {
        self.scenes.len()
    }
}

/// Create the launcher that can run `content`.
pub fn create_launcher(content: StationContent) -> Box<dyn Launcher> {
    match content {
        StationContent::Tasks(tasks) => Box::new(TaskLauncher::new(tasks)),
        StationContent::Story(scenes) => Box::new(StoryLauncher::new(scenes)),
    }
}

/// Whether a flag string carries a standalone `--test` token.
pub fn has_test_flag(args: &str) -> bool {
    args.split_whitespace().any(|token| token == "--test")
}

/// Decide test mode from the values of [`TEST_ENV`] and [`PLAY_ARGS_ENV`].
pub fn test_mode_from(test_env: Option<&str>, play_args: Option<&str>) -> bool {
    if test_env.is_some_and(|v| !v.is_empty() && !v.starts_with('0')) {
        return true;
    }
    play_args.is_some_and(has_test_flag)
}

fn env_test_mode() -> bool {
    let test_env = std::env::var(TEST_ENV).ok();
    let play_args = std::env::var(PLAY_ARGS_ENV).ok();
    let on = test_mode_from(test_env.as_deref(), play_args.as_deref());
    if on {
        tracing::debug!("story test mode enabled from environment");
    }
    on
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_core::console::IoConsole;

    #[test]
    fn test_flag_must_be_a_whole_token() {
        assert!(has_test_flag("--test"));
        assert!(has_test_flag("02 --test"));
        assert!(has_test_flag("compilation\t--test --fast"));
        assert!(!has_test_flag("--testing"));
        assert!(!has_test_flag("02"));
        assert!(!has_test_flag(""));
    }

    #[test]
    fn test_env_values() {
        assert!(test_mode_from(Some("1"), None));
        assert!(test_mode_from(Some("yes"), None));
        assert!(!test_mode_from(Some("0"), None));
        assert!(!test_mode_from(Some(""), None));
        assert!(!test_mode_from(None, None));
        assert!(test_mode_from(Some("0"), Some("02 --test")));
    }

    #[test]
    fn factory_picks_launcher_by_content() {
        let tasks = create_launcher(StationContent::Tasks(vec![Task::free_answer(
            "q",
            &["a"],
        )]));
        assert_eq!(tasks.unit_count(), 1);

        let story = create_launcher(StationContent::Story(vec![]));
        assert_eq!(story.unit_count(), 0);
    }

    #[test]
    fn task_launcher_runs_the_engine() {
        let launcher = TaskLauncher::new(vec![Task::free_answer("Say a", &["a"])]);
        let mut console = IoConsole::scripted("A\n");
        let result = launcher.launch(7, &mut console, &LaunchOptions::default());
        assert_eq!(result.station_id, 7);
        assert_eq!(result.total_points, 2);
    }

    #[test]
    fn story_launcher_honors_test_mode_option() {
        let launcher = StoryLauncher::new(vec![Scene {
            title: "Boot".into(),
            narrative: vec![],
            prompt: "Why?".into(),
            explain: "Because.".into(),
        }]);
        let mut console = IoConsole::scripted("");
        let options = LaunchOptions { test_mode: true };
        let result = launcher.launch(2, &mut console, &options);
        assert_eq!(result.total_tasks, 1);
        assert_eq!(result.aborted, None);
    }
}
